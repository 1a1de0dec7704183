use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures from the hosted chat-completions collaborator.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("model response contained no choices")]
    EmptyResponse,
}

/// Client for a Groq-style OpenAI-compatible chat-completions endpoint.
///
/// One client is bound to one model; the service runs two instances, one for
/// extraction and one for story generation.
#[derive(Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GroqClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    /// Send one user prompt and return the raw completion text.
    ///
    /// Blocks (awaits) until the collaborator answers or fails; no retries.
    pub async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let url = format!("{}/openai/v1/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OracleError::Status(response.status()));
        }

        let chat: ChatResponse = response.json().await?;

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(OracleError::EmptyResponse)
    }
}
