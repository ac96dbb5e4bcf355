// src/data.rs

use crate::model::{Roadmap, SeedError};

const ROADMAP_SEED: &str = include_str!("data/roadmap_seed.yaml");

/// Parsea y valida un roadmap en YAML
pub fn parse_roadmap(source: &str) -> Result<Roadmap, SeedError> {
    let roadmap: Roadmap =
        serde_yaml::from_str(source).map_err(|e| SeedError::Yaml(e.to_string()))?;
    roadmap.validate()?;
    Ok(roadmap)
}

/// Roadmap semilla embebido en el binario
pub fn read_roadmap_embedded() -> Result<Roadmap, SeedError> {
    parse_roadmap(ROADMAP_SEED)
}
