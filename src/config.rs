// src/config.rs

use std::path::PathBuf;

pub const APP_NAME: &str = "Stuttz";

// Gamificación
pub const XP_PER_LEVEL: u32 = 100;
pub const XP_PER_CORRECT_ANSWER: u32 = 25;
pub const DEFAULT_USER_NAME: &str = "Estudante";

pub const LEVEL_TITLES: [(u32, &str); 5] = [
    (1, "Aprendiz Curioso"),
    (2, "Estudante Dedicado"),
    (3, "Explorador do Saber"),
    (4, "Conhecedor Experiente"),
    (5, "Mestre do Aprendizado"),
];
pub const FALLBACK_LEVEL_TITLE: &str = "Aprendiz";

// IA
pub const AI_MODEL: &str = "models/gemini-2.0-flash";
pub const AI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const AI_TEMPERATURE: f32 = 0.7;
pub const STUDY_TIP_MAX_TOKENS: u32 = 150;
pub const EXPLANATION_MAX_TOKENS: u32 = 300;
pub const NEXT_STEPS_MAX_TOKENS: u32 = 200;

// Ficheros
pub const USER_DATA_FILE: &str = "user_data.json";
pub const DEFAULT_ROADMAP_FILE: &str = "roadmap_data.json";

pub fn level_title(level: u32) -> &'static str {
    LEVEL_TITLES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, title)| *title)
        .unwrap_or(FALLBACK_LEVEL_TITLE)
}

/// Ajustes de ejecución leídos del entorno
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub api_key: Option<String>,
    pub ai_model: String,
    pub ai_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            api_key: None,
            ai_model: AI_MODEL.to_string(),
            ai_endpoint: AI_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Las variables vacías cuentan como no definidas
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let defaults = Self::default();
        Self {
            data_dir: get("STUTTZ_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            api_key: get("GEMINI_API_KEY").map(|k| k.trim().to_string()),
            ai_model: get("STUTTZ_AI_MODEL").unwrap_or(defaults.ai_model),
            ai_endpoint: get("STUTTZ_AI_ENDPOINT").unwrap_or(defaults.ai_endpoint),
        }
    }

    pub fn user_data_path(&self) -> PathBuf {
        self.data_dir.join(USER_DATA_FILE)
    }

    pub fn roadmap_path(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_ROADMAP_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn level_titles_fall_back_past_the_table() {
        assert_eq!(level_title(1), "Aprendiz Curioso");
        assert_eq!(level_title(5), "Mestre do Aprendizado");
        assert_eq!(level_title(9), "Aprendiz");
    }

    #[test]
    fn settings_ignore_blank_values() {
        let env: HashMap<&str, &str> = [
            ("GEMINI_API_KEY", "   "),
            ("STUTTZ_DATA_DIR", "/tmp/stuttz"),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.api_key, None);
        assert_eq!(settings.user_data_path(), PathBuf::from("/tmp/stuttz/user_data.json"));
        assert_eq!(settings.ai_model, AI_MODEL);
    }
}
