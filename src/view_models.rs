// src/view_models.rs

use crate::model::PhaseStatus;

#[derive(Clone, Debug)]
pub struct PhaseInfo {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: PhaseStatus,
    pub clickable: bool,
}

#[derive(Clone, Debug)]
pub struct UserCard {
    pub name: String,
    pub level: u32,
    pub level_title: &'static str,
    pub xp: u32,
    pub xp_to_next: u32,
    pub streak: u32,
    pub progress: f32, // 0.0..=1.0 dentro del nivel
}

impl PhaseInfo {
    pub fn icon(&self) -> &'static str {
        self.status.icon()
    }

    pub fn label(&self) -> String {
        format!("{} Fase {}: {}", self.icon(), self.id, self.title)
    }
}

impl UserCard {
    pub fn level_label(&self) -> String {
        format!("Nível {} ✨ {}", self.level, self.level_title)
    }

    pub fn xp_label(&self) -> String {
        format!("{}/{} XP", self.xp, self.xp_to_next)
    }

    pub fn streak_label(&self) -> String {
        format!("🔥 {} dias", self.streak)
    }
}
