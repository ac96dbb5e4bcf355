use crate::config::Settings;
use crate::data::read_roadmap_embedded;
use crate::model::{Roadmap, SeedError, UserProgress};
use log::{error, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied on {path:?}: {source}")]
    Permission { path: PathBuf, source: io::Error },
    #[error("I/O error on {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize data for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StoreError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::PermissionDenied {
            StoreError::Permission { path, source }
        } else {
            StoreError::Io { path, source }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Permission { .. } => "permission",
            StoreError::Io { .. } => "io",
            StoreError::Parse { .. } => "parse",
            StoreError::Serialize { .. } => "serialize",
        }
    }
}

/// Lee un JSON; `Ok(None)` si el fichero no existe
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::from_io(path, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Sobrescribe el fichero entero con JSON indentado
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::from_io(parent, e))?;
    }
    std::fs::write(path, json).map_err(|e| StoreError::from_io(path, e))
}

/// Carga el progreso del usuario; cualquier fallo degrada a valores por defecto
pub fn load_user_progress(path: &Path) -> UserProgress {
    match read_json::<UserProgress>(path) {
        Ok(Some(user)) => {
            info!("Progreso cargado desde {}", path.display());
            user
        }
        Ok(None) => {
            info!("Sin progreso guardado en {}, creando datos por defecto", path.display());
            UserProgress::default()
        }
        Err(e) => {
            warn!("Fallo de carga ({}): {e}. Usando datos por defecto", e.kind());
            UserProgress::default()
        }
    }
}

/// Siempre devuelve la semilla; el fichero del roadmap solo se escribe
pub fn load_roadmap() -> Result<Roadmap, SeedError> {
    read_roadmap_embedded()
}

pub struct ProgressStore {
    user_path: PathBuf,
    roadmap_path: PathBuf,
    pub user: UserProgress,
    pub roadmap: Roadmap,
}

impl ProgressStore {
    pub fn open(settings: &Settings) -> Result<Self, SeedError> {
        Self::open_at(settings.user_data_path(), settings.roadmap_path())
    }

    pub fn open_at(
        user_path: impl Into<PathBuf>,
        roadmap_path: impl Into<PathBuf>,
    ) -> Result<Self, SeedError> {
        let user_path = user_path.into();
        let user = load_user_progress(&user_path);
        let roadmap = load_roadmap()?;
        Ok(Self {
            user_path,
            roadmap_path: roadmap_path.into(),
            user,
            roadmap,
        })
    }

    pub fn user_path(&self) -> &Path {
        &self.user_path
    }

    pub fn roadmap_path(&self) -> &Path {
        &self.roadmap_path
    }

    pub fn save_user_progress(&self) -> bool {
        match write_json(&self.user_path, &self.user) {
            Ok(()) => {
                info!("💾 Progreso guardado en {}", self.user_path.display());
                true
            }
            Err(e) => {
                error!("Error al guardar progreso ({}): {e}", e.kind());
                false
            }
        }
    }

    pub fn save_roadmap(&self) -> bool {
        match write_json(&self.roadmap_path, &self.roadmap) {
            Ok(()) => {
                info!("💾 Roadmap guardado en {}", self.roadmap_path.display());
                true
            }
            Err(e) => {
                error!("Error al guardar roadmap ({}): {e}", e.kind());
                false
            }
        }
    }
}
