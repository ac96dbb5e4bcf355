use super::*;
use crate::config::level_title;

impl StuttzApp {
    pub fn phase_infos(&self) -> Vec<PhaseInfo> {
        self.store
            .roadmap
            .phases
            .iter()
            .map(|p| PhaseInfo {
                id: p.id,
                title: p.title.clone(),
                description: p.description.clone(),
                status: p.status,
                clickable: !p.status.is_locked(),
            })
            .collect()
    }

    pub fn user_card(&self) -> UserCard {
        let user = &self.store.user;
        let progress = if user.xp_to_next > 0 {
            user.xp as f32 / user.xp_to_next as f32
        } else {
            0.0
        };
        UserCard {
            name: user.name.clone(),
            level: user.level,
            level_title: level_title(user.level),
            xp: user.xp,
            xp_to_next: user.xp_to_next,
            streak: user.streak,
            progress,
        }
    }
}
