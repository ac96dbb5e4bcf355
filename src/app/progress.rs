use super::*;
use crate::messages;
use crate::progression::{self, XpAward};
use chrono::{Local, NaiveDate};

impl StuttzApp {
    /// Concede XP por el quiz de la fase y guarda el progreso.
    ///
    /// No hace nada si la fase no existe o su quiz ya estaba completado.
    pub fn award_xp_for_correct_answer(&mut self, phase_id: u32) -> Option<XpAward> {
        let store = &mut self.store;
        let phase = store.roadmap.phase_mut(phase_id)?;
        let Some(award) = progression::award_xp_for_correct_answer(&mut store.user, phase) else {
            info!("El quiz de la fase {phase_id} ya estaba completado. No se concede XP");
            return None;
        };

        if let Some(level) = award.new_level {
            self.notify(messages::level_up(level));
        }
        self.store.save_user_progress();
        info!("✅ {} XP concedidos", award.xp_gained);
        Some(award)
    }

    /// Completa la fase, desbloquea la siguiente si procede y guarda el roadmap
    pub fn check_and_unlock_next_phase(&mut self, phase_id: u32) -> Option<u32> {
        let unlocked = progression::check_and_unlock_next_phase(&mut self.store.roadmap, phase_id);
        if let Some((id, title)) = &unlocked {
            info!("✅ Fase {id} desbloqueada");
            self.notify(messages::phase_unlocked(title));
        }
        self.store.save_roadmap();
        unlocked.map(|(id, _)| id)
    }

    /// Actualiza la racha con la fecha local de hoy
    pub fn update_streak(&mut self) -> bool {
        self.update_streak_on(Local::now().date_naive())
    }

    pub fn update_streak_on(&mut self, today: NaiveDate) -> bool {
        let increased = progression::update_streak(&mut self.store.user, today);
        self.store.save_user_progress();
        increased
    }

    /// Arranque de sesión: racha del día y aviso si continúa
    pub fn start_session_on(&mut self, today: NaiveDate) {
        let increased = self.update_streak_on(today);
        let streak = self.store.user.streak;
        if increased && streak > 1 {
            self.notify(messages::streak_continued(streak));
        }
        if !self.has_generator() {
            self.notify(messages::API_KEY_MISSING);
        }
    }

    pub fn start_session(&mut self) {
        self.start_session_on(Local::now().date_naive());
    }
}
