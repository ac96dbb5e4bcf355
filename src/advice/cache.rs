use super::{TextGenerator, explanation_prompt, respond, study_tip_prompt};
use crate::config::{EXPLANATION_MAX_TOKENS, STUDY_TIP_MAX_TOKENS};
use log::debug;
use std::collections::HashMap;

/// Memoriza dicas y explicaciones durante la vida del proceso.
///
/// Sin límite ni invalidación: también guarda los textos degradados.
#[derive(Debug, Default, Clone)]
pub struct AdviceCache {
    study_tips: HashMap<String, String>,
    explanations: HashMap<String, String>,
}

impl AdviceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_study_tip(
        &mut self,
        generator: Option<&dyn TextGenerator>,
        phase_title: &str,
        topic: &str,
    ) -> String {
        let key = format!("{phase_title}:{topic}");
        if let Some(tip) = self.study_tips.get(&key) {
            debug!("Usando consejo en caché para '{key}'");
            return tip.clone();
        }
        let tip = respond(
            generator,
            &study_tip_prompt(phase_title, topic),
            STUDY_TIP_MAX_TOKENS,
        );
        self.study_tips.insert(key, tip.clone());
        tip
    }

    pub fn get_explanation(
        &mut self,
        generator: Option<&dyn TextGenerator>,
        question: &str,
        correct_answer: &str,
    ) -> String {
        let key = format!("{question}:{correct_answer}");
        if let Some(explanation) = self.explanations.get(&key) {
            debug!("Usando explicación en caché para '{question}'");
            return explanation.clone();
        }
        let explanation = respond(
            generator,
            &explanation_prompt(question, correct_answer),
            EXPLANATION_MAX_TOKENS,
        );
        self.explanations.insert(key, explanation.clone());
        explanation
    }

    pub fn len(&self) -> usize {
        self.study_tips.len() + self.explanations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
