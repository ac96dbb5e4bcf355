use super::*;
use crate::advice::{self, is_unavailable, next_steps_prompt};
use crate::config::NEXT_STEPS_MAX_TOKENS;
use crate::messages;

// Tema por defecto si la fase no tiene tareas
const DEFAULT_TOPIC: &str = "Python";

impl StuttzApp {
    /// Marca la opción elegida; el rango solo se limita en la interfaz
    pub fn select_option(&mut self, option_index: usize) {
        self.quiz_state.selected_option = Some(option_index);
    }

    /// Confirma la respuesta del quiz de la fase activa.
    ///
    /// Devuelve `Some(correcta)` cuando se pudo evaluar. Sin opción elegida
    /// avisa al usuario y sigue sin responder; fuera de una fase no hace nada.
    pub fn submit_answer(&mut self) -> Option<bool> {
        let phase_id = self.active_phase_id()?;
        let Some(selected) = self.quiz_state.selected_option else {
            self.notify(messages::NO_ANSWER_SELECTED);
            return None;
        };

        let (correct, correct_text) = {
            let quiz = &self.phase(phase_id)?.quiz;
            (quiz.is_correct(selected), quiz.correct_answer().to_string())
        };

        self.quiz_state.answered = true;
        self.quiz_state.last_outcome = Some(correct);

        if correct {
            // El aviso de acierto va antes que los de nivel y desbloqueo
            let already_awarded = self.phase(phase_id).is_some_and(|p| p.quiz_completed);
            if already_awarded {
                self.notify(messages::quiz_correct_again());
            } else {
                self.notify(messages::quiz_correct(crate::config::XP_PER_CORRECT_ANSWER));
            }
            self.award_xp_for_correct_answer(phase_id);
            self.check_and_unlock_next_phase(phase_id);
        } else {
            self.notify(messages::quiz_incorrect(&correct_text));
        }
        Some(correct)
    }

    /// Consejo de estudio para la fase activa; texto estático si la IA no está disponible
    pub fn request_study_tip(&mut self) -> Option<String> {
        let (title, topic) = {
            let phase = self.active_phase()?;
            let topic = phase
                .tasks
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string());
            (phase.title.clone(), topic)
        };

        let generator = self.generator.as_deref();
        let tip = self.advice.get_study_tip(generator, &title, &topic);
        if is_unavailable(&tip) {
            return Some(messages::static_study_tip(&title).to_string());
        }
        Some(tip)
    }

    /// Explicación de la respuesta correcta del quiz activo
    pub fn request_explanation(&mut self) -> Option<String> {
        let (question, answer, fallback) = {
            let quiz = &self.active_phase()?.quiz;
            (
                quiz.question.clone(),
                quiz.correct_answer().to_string(),
                quiz.explanation.clone(),
            )
        };

        let generator = self.generator.as_deref();
        let explanation = self.advice.get_explanation(generator, &question, &answer);
        if is_unavailable(&explanation) {
            return Some(fallback);
        }
        Some(explanation)
    }

    /// Sugerencia de próximos pasos según las fases completadas y en curso (sin caché)
    pub fn suggest_next_steps(&self) -> String {
        let completed_ids = &self.store.user.completed_phase_ids;
        let phases = &self.store.roadmap.phases;
        let completed: Vec<&str> = phases
            .iter()
            .filter(|p| completed_ids.contains(&p.id))
            .map(|p| p.title.as_str())
            .collect();
        let current: Vec<&str> = phases
            .iter()
            .filter(|p| p.status == PhaseStatus::Unlocked && !completed_ids.contains(&p.id))
            .map(|p| p.title.as_str())
            .collect();

        let prompt = next_steps_prompt(&completed, &current);
        let text = advice::respond(self.generator(), &prompt, NEXT_STEPS_MAX_TOKENS);
        if is_unavailable(&text) {
            return messages::NEXT_STEPS_FALLBACK.to_string();
        }
        text
    }
}
