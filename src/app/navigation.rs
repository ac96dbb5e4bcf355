use super::*;
use crate::messages::{PHASE_LOCKED, PHASE_NOT_FOUND};
use log::warn;

impl StuttzApp {
    /// Entra en el detalle de una fase si existe y no está bloqueada.
    ///
    /// Devuelve `true` si hubo transición; si no, el estado no cambia y se
    /// deja un aviso para el usuario.
    pub fn select_phase(&mut self, phase_id: u32) -> bool {
        info!("🖱️ Clic en la fase {phase_id}");

        let status = match self.phase(phase_id) {
            Some(phase) => phase.status,
            None => {
                warn!("Fase {phase_id} no encontrada");
                self.notify(PHASE_NOT_FOUND);
                return false;
            }
        };

        if status.is_locked() {
            warn!("🔒 Fase {phase_id} bloqueada");
            self.notify(PHASE_LOCKED);
            return false;
        }

        self.state = AppState::PhaseDetail(phase_id);
        self.reset_quiz_state();
        true
    }

    /// Vuelve al mapa; siempre permitido
    pub fn go_back(&mut self) {
        info!("⬅️ Volviendo al mapa");
        self.state = AppState::Roadmap;
        self.reset_quiz_state();
    }

    pub fn reset_quiz_state(&mut self) {
        self.quiz_state.reset();
    }

    pub fn active_phase_id(&self) -> Option<u32> {
        match self.state {
            AppState::PhaseDetail(id) => Some(id),
            AppState::Roadmap => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::queries::tests::app_in;
    use crate::model::AppState;

    #[test]
    fn locked_phase_keeps_roadmap_and_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        assert!(!app.select_phase(2));
        assert_eq!(app.state, AppState::Roadmap);
        assert_eq!(
            app.take_messages(),
            vec!["Esta fase ainda está bloqueada. Complete as fases anteriores primeiro."]
        );
    }

    #[test]
    fn unknown_phase_keeps_roadmap_and_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        assert!(!app.select_phase(0));
        assert!(!app.select_phase(99));
        assert_eq!(app.state, AppState::Roadmap);
        assert_eq!(app.take_messages().len(), 2);
    }

    #[test]
    fn unlocked_phase_opens_with_fresh_quiz_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.quiz_state.selected_option = Some(3);
        app.quiz_state.answered = true;

        assert!(app.select_phase(1));
        assert_eq!(app.state, AppState::PhaseDetail(1));
        assert_eq!(app.quiz_state, Default::default());
        assert_eq!(app.active_phase_id(), Some(1));
    }

    #[test]
    fn going_back_resets_quiz_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.select_phase(1);
        app.select_option(2);

        app.go_back();
        assert_eq!(app.state, AppState::Roadmap);
        assert_eq!(app.quiz_state.selected_option, None);
        assert_eq!(app.active_phase_id(), None);
    }
}
