use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::horoscope::error::HoroscopeError;

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant who translates astrology texts into Turkish.";

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate horoscope text into Turkish.
    async fn translate(&self, text: &str) -> Result<String, HoroscopeError>;
}

/// Translator backed by an OpenAI-compatible chat completions endpoint.
pub struct OpenAiTranslator {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiTranslator {
    pub fn new(client: Client, base_url: String, model: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str) -> Result<String, HoroscopeError> {
        let request = ChatCompletionsRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Translate this horoscope to Turkish:\n\n{}", text),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| HoroscopeError::Translation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HoroscopeError::Translation(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        let body: ChatCompletionsResponse = response
            .json()
            .await
            .map_err(|e| HoroscopeError::Translation(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| HoroscopeError::Translation("No choices in response".to_string()))
    }
}
