#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use ai_search_evaluator::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    services::{DigitConcatenation, TextGenerator},
};
use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

/// Replays canned replies and records every prompt it receives.
pub struct ScriptedGenerator {
    replies: Vec<String>,
    fail_on_call: Option<usize>,
    calls: AtomicUsize,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl ScriptedGenerator {
    /// Answers `reply` to every prompt.
    pub fn always(reply: &str) -> Self {
        Self {
            replies: vec![reply.to_string()],
            fail_on_call: None,
            calls: AtomicUsize::new(0),
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Answers with `replies` in turn, repeating the last one.
    pub fn sequence(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            ..Self::always("")
        }
    }

    /// Fails the `n`th call (1-based) with a generation error.
    pub fn failing_on(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.read().await.clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _max_new_tokens: u32) -> AppResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.write().await.push(prompt.to_string());

        if self.fail_on_call == Some(call) {
            return Err(AppError::GenerationError(format!(
                "scripted failure on call {}",
                call
            )));
        }

        let index = (call - 1).min(self.replies.len().saturating_sub(1));
        Ok(self.replies.get(index).cloned().unwrap_or_default())
    }

    fn model_name(&self) -> String {
        "scripted".to_string()
    }
}

pub fn test_config() -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        generation_api_base: "http://127.0.0.1:1/v1".to_string(),
        generation_model: "scripted".to_string(),
        generation_api_key: SecretString::from("test-key".to_string()),
        sampling_mode: "greedy".to_string(),
        generation_temperature: 0.0,
        generation_seed: None,
        score_extraction: "digits".to_string(),
    }
}

pub fn app_state(generator: Arc<ScriptedGenerator>) -> AppState {
    AppState::with_generator(test_config(), generator, Arc::new(DigitConcatenation))
        .expect("app state should build")
}
