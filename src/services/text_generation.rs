use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::{Config, SamplingPolicy},
    errors::{AppError, AppResult},
};

/// Turns a prompt into generated text.
///
/// The returned string is the prompt followed by the continuation, so callers
/// that scan the reply also see the instruction they sent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_new_tokens: u32) -> AppResult<String>;

    fn model_name(&self) -> String;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Generator backed by a locally hosted, OpenAI-compatible inference server
/// (vLLM, llama.cpp server, Ollama, text-generation-inference).
pub struct OpenAiTextGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    sampling: SamplingPolicy,
}

impl OpenAiTextGenerator {
    pub fn new(api_base: &str, api_key: &str, model: &str, sampling: SamplingPolicy) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(api_base.trim_end_matches('/'))
            .with_api_key(api_key);

        Self {
            client: Client::with_config(openai_config),
            model: model.to_string(),
            sampling,
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let sampling = config.sampling_policy()?;
        Ok(Self::new(
            &config.generation_api_base,
            config.generation_api_key.expose_secret(),
            &config.generation_model,
            sampling,
        ))
    }

    pub fn sampling(&self) -> SamplingPolicy {
        self.sampling
    }

    fn request_body(&self, prompt: &str, max_new_tokens: u32) -> serde_json::Value {
        let mut body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": max_new_tokens,
            "temperature": self.sampling.temperature(),
        });
        if let Some(seed) = self.sampling.seed() {
            body["seed"] = json!(seed);
        }
        body
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, prompt: &str, max_new_tokens: u32) -> AppResult<String> {
        log::debug!(
            "Requesting up to {} tokens from model {} ({} prompt bytes)",
            max_new_tokens,
            self.model,
            prompt.len()
        );

        let response: ChatCompletionBody = self
            .client
            .chat()
            .create_byot(self.request_body(prompt, max_new_tokens))
            .await?;

        let completion = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::GenerationError(format!(
                    "model {} returned no completion choices",
                    self.model
                ))
            })?;

        Ok(format!("{}{}", prompt, completion))
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}
