pub mod cache;
pub mod gemini;

pub use cache::AdviceCache;
pub use gemini::GeminiClient;

use crate::messages::{AI_NOT_CONFIGURED, UNAVAILABLE_MARKER, ai_error};
use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service answered HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Other(String),
}

/// Servicio externo de generación de texto
pub trait TextGenerator {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, AdviceError>;
}

/// Llama al generador y convierte cualquier fallo en un texto degradado.
///
/// Sin generador configurado devuelve el aviso de "no configurada"; un error
/// del servicio se registra y se devuelve como mensaje de disculpa.
pub fn respond(generator: Option<&dyn TextGenerator>, prompt: &str, max_tokens: u32) -> String {
    let Some(generator) = generator else {
        warn!("Servicio de IA no configurado");
        return AI_NOT_CONFIGURED.to_string();
    };
    match generator.generate(prompt, max_tokens) {
        Ok(text) => text,
        Err(e) => {
            error!("❌ Error al generar respuesta: {e}");
            ai_error(e)
        }
    }
}

/// Única comprobación del marcador de "servicio no configurado"
pub fn is_unavailable(text: &str) -> bool {
    text.to_lowercase().contains(UNAVAILABLE_MARKER)
}

pub fn study_tip_prompt(phase_title: &str, topic: &str) -> String {
    format!(
        "Por favor, forneça uma dica de estudo prática e curta para alguém \
         estudando '{phase_title}', especificamente sobre '{topic}'.\n\n\
         A dica deve ter no máximo 2 frases e fornecer uma sugestão \
         concreta e útil para melhorar o aprendizado."
    )
}

pub fn explanation_prompt(question: &str, correct_answer: &str) -> String {
    format!(
        "Explique a seguinte pergunta e resposta de forma didática para um estudante:\n\n\
         Pergunta: {question}\n\
         Resposta correta: {correct_answer}\n\n\
         Explicação (máximo 3 parágrafos, linguagem acessível):"
    )
}

pub fn next_steps_prompt(completed: &[&str], current: &[&str]) -> String {
    let completed = if completed.is_empty() {
        "Nenhum".to_string()
    } else {
        completed.join(", ")
    };
    let current = if current.is_empty() {
        "Introdução ao Python".to_string()
    } else {
        current.join(", ")
    };
    format!(
        "Um estudante de programação está aprendendo Python.\n\n\
         Tópicos já concluídos: {completed}\n\
         Tópicos atuais: {current}\n\n\
         Forneça uma sugestão breve (máximo 3 frases) de que recurso adicional o estudante \
         pode consultar para melhorar seu aprendizado nos tópicos atuais."
    )
}


#[cfg(test)]
mod tests {
    use super::testing::FakeGenerator;
    use super::*;

    #[test]
    fn missing_generator_yields_not_configured_text() {
        let text = respond(None, "qualquer coisa", 10);
        assert_eq!(text, AI_NOT_CONFIGURED);
        assert!(is_unavailable(&text));
    }

    #[test]
    fn generator_error_becomes_apology_text() {
        let generator = FakeGenerator::failing("timeout");
        let text = respond(Some(&generator), "p", 10);
        assert_eq!(text, "Desculpe, não consegui gerar uma resposta. Erro: timeout");
        assert!(!is_unavailable(&text));
    }

    #[test]
    fn classifier_is_case_insensitive() {
        assert!(is_unavailable("A CHAVE NÃO ESTÁ CONFIGURADA."));
        assert!(!is_unavailable("Use print() para exibir texto."));
    }

    #[test]
    fn next_steps_prompt_names_defaults_when_empty() {
        let prompt = next_steps_prompt(&[], &[]);
        assert!(prompt.contains("Tópicos já concluídos: Nenhum"));
        assert!(prompt.contains("Tópicos atuais: Introdução ao Python"));

        let prompt = next_steps_prompt(&["Fundamentos"], &["Estruturas de Dados"]);
        assert!(prompt.contains("concluídos: Fundamentos"));
    }
}
