use crate::config::{DEFAULT_USER_NAME, XP_PER_LEVEL};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Número fijo de opciones por quiz
pub const QUIZ_OPTIONS: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProgress {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default = "default_xp_to_next")]
    pub xp_to_next: u32,
    #[serde(default)]
    pub streak: u32,
    // Fechas mal formadas se tratan como ausentes, nunca rompen la carga
    #[serde(default, deserialize_with = "lenient_date")]
    pub last_activity: Option<NaiveDate>,
    #[serde(default, rename = "completed_phases")]
    pub completed_phase_ids: BTreeSet<u32>,
}

fn default_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

fn default_level() -> u32 {
    1
}

fn default_xp_to_next() -> u32 {
    XP_PER_LEVEL
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_activity_date))
}

/// Acepta `YYYY-MM-DD` o una fecha-hora ISO completa (se queda con el día)
pub fn parse_activity_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            name: default_name(),
            level: default_level(),
            xp: 0,
            xp_to_next: default_xp_to_next(),
            streak: 0,
            last_activity: None,
            completed_phase_ids: BTreeSet::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    Locked,
    Unlocked,
    // Existe en la tabla de iconos pero ninguna regla lo asigna
    Current,
    Completed,
}

impl PhaseStatus {
    pub fn icon(self) -> &'static str {
        match self {
            PhaseStatus::Locked => "🔒",
            PhaseStatus::Unlocked => "📖",
            PhaseStatus::Current => "▶️",
            PhaseStatus::Completed => "✅",
        }
    }

    pub fn is_locked(self) -> bool {
        self == PhaseStatus::Locked
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl Quiz {
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.question.trim().is_empty() {
            return Err(SeedError::EmptyQuestion);
        }
        if self.options.len() != QUIZ_OPTIONS {
            return Err(SeedError::OptionCount(self.options.len()));
        }
        if self.correct_answer_index >= QUIZ_OPTIONS {
            return Err(SeedError::AnswerIndex(self.correct_answer_index));
        }
        Ok(())
    }

    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_answer_index]
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer_index
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: PhaseStatus,
    #[serde(default)]
    pub tasks: Vec<String>,
    pub quiz: Quiz,
    #[serde(default)]
    pub quiz_completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    pub course_name: String,
    pub total_phases: usize,
    pub phases: Vec<Phase>,
}

impl Roadmap {
    /// Rechaza datos inválidos en la frontera de carga, no en el punto de uso
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.phases.is_empty() {
            return Err(SeedError::NoPhases);
        }
        let mut seen = BTreeSet::new();
        for phase in &self.phases {
            if phase.id == 0 {
                return Err(SeedError::InvalidId(phase.id));
            }
            if !seen.insert(phase.id) {
                return Err(SeedError::DuplicateId(phase.id));
            }
            phase
                .quiz
                .validate()
                .map_err(|e| SeedError::Phase(phase.id, Box::new(e)))?;
        }
        Ok(())
    }

    pub fn phase(&self, id: u32) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    pub fn phase_mut(&mut self, id: u32) -> Option<&mut Phase> {
        self.phases.iter_mut().find(|p| p.id == id)
    }

    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.phases.iter().position(|p| p.id == id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("roadmap has no phases")]
    NoPhases,
    #[error("phase id {0} must be positive")]
    InvalidId(u32),
    #[error("duplicate phase id {0}")]
    DuplicateId(u32),
    #[error("quiz question is empty")]
    EmptyQuestion,
    #[error("quiz must have exactly 4 options, found {0}")]
    OptionCount(usize),
    #[error("correct answer index {0} is out of range")]
    AnswerIndex(usize),
    #[error("phase {0}: {1}")]
    Phase(u32, Box<SeedError>),
    #[error("malformed roadmap document: {0}")]
    Yaml(String),
}

/// Pantalla activa
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Roadmap,
    PhaseDetail(u32),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Roadmap
    }
}

/// Estado transitorio del quiz, se reinicia en cada navegación
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizAnswerState {
    pub selected_option: Option<usize>,
    pub answered: bool,
    pub last_outcome: Option<bool>,
}

impl QuizAnswerState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
