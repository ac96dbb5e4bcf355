use super::*;
use crate::model::{Phase, Roadmap, UserProgress};

impl StuttzApp {
    pub fn user(&self) -> &UserProgress {
        &self.store.user
    }

    pub fn roadmap(&self) -> &Roadmap {
        &self.store.roadmap
    }

    /// Busca la fase por id (nunca por posición)
    pub fn phase(&self, id: u32) -> Option<&Phase> {
        if id == 0 {
            return None;
        }
        self.store.roadmap.phase(id)
    }

    pub fn active_phase(&self) -> Option<&Phase> {
        self.active_phase_id().and_then(|id| self.phase(id))
    }

    pub fn unlocked_phases(&self) -> Vec<&Phase> {
        self.store
            .roadmap
            .phases
            .iter()
            .filter(|p| !p.status.is_locked())
            .collect()
    }

    /// Porcentaje de fases completadas sobre el total declarado del curso
    pub fn course_progress(&self) -> f32 {
        let roadmap = &self.store.roadmap;
        if roadmap.total_phases == 0 {
            return 0.0;
        }
        let completed = roadmap
            .phases
            .iter()
            .filter(|p| p.status == PhaseStatus::Completed)
            .count();
        completed as f32 / roadmap.total_phases as f32 * 100.0
    }
}
