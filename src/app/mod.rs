use crate::advice::{AdviceCache, TextGenerator};
use crate::model::{AppState, PhaseStatus, QuizAnswerState};
use crate::store::ProgressStore;
use log::info;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{PhaseInfo, UserCard};

/// Raíz de la aplicación: dueña del almacén, la navegación y la caché.
pub struct StuttzApp {
    pub store: ProgressStore,
    pub state: AppState,
    pub quiz_state: QuizAnswerState,
    pub advice: AdviceCache,
    generator: Option<Box<dyn TextGenerator>>,
    messages: Vec<String>,
}

impl StuttzApp {
    pub fn new(store: ProgressStore, generator: Option<Box<dyn TextGenerator>>) -> Self {
        let mut app = Self {
            store,
            state: AppState::default(),
            quiz_state: QuizAnswerState::default(),
            advice: AdviceCache::new(),
            generator,
            messages: Vec::new(),
        };
        app.restore_awarded_quizzes();
        info!("✅ Aplicación inicializada");
        app
    }

    /// Las fases ya premiadas en sesiones anteriores no vuelven a dar XP.
    ///
    /// Solo se restaura la marca del quiz; el estado de las fases sigue
    /// siendo el de la semilla.
    fn restore_awarded_quizzes(&mut self) {
        let awarded = &self.store.user.completed_phase_ids;
        for phase in &mut self.store.roadmap.phases {
            if awarded.contains(&phase.id) {
                phase.quiz_completed = true;
            }
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub(crate) fn generator(&self) -> Option<&dyn TextGenerator> {
        self.generator.as_deref()
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("💬 {message}");
        self.messages.push(message);
    }

    /// Mensajes pendientes para la interfaz, en orden de emisión
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
