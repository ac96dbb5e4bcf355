use super::{AdviceError, TextGenerator};
use crate::config::{AI_TEMPERATURE, Settings};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

fn build_request(prompt: &str, max_tokens: u32) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            max_output_tokens: max_tokens,
            temperature: AI_TEMPERATURE,
        },
    }
}

fn endpoint_url(base: &str, model: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let model = model.trim().trim_start_matches('/');
    let model = if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    };
    format!("{base}/{model}:generateContent")
}

// Texto del primer candidato; cadena vacía si no hay
fn extract_text(resp: GenerateResponse) -> String {
    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Cliente bloqueante del endpoint `generateContent` de Gemini
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, endpoint: &str, model: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: endpoint_url(endpoint, model),
            api_key: api_key.into(),
        }
    }

    /// `None` si no hay clave de API configurada
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let key = settings.api_key.as_deref()?;
        Some(Self::new(key, &settings.ai_endpoint, &settings.ai_model))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, AdviceError> {
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(prompt, max_tokens))
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(AdviceError::Status {
                status,
                body: body.trim().to_string(),
            });
        }

        let body: GenerateResponse = response.json()?;
        Ok(extract_text(body))
    }
}
