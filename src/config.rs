use std::{env, str::FromStr};

use secrecy::SecretString;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// How the inference server is asked to pick tokens.
///
/// `Greedy` pins temperature to zero so identical content yields identical
/// scores on servers that honour it. `Sampled` keeps the model's stochastic
/// behaviour; repeated runs may disagree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SamplingPolicy {
    Greedy { seed: Option<u64> },
    Sampled { temperature: f32, seed: Option<u64> },
}

impl SamplingPolicy {
    pub fn temperature(&self) -> f32 {
        match self {
            SamplingPolicy::Greedy { .. } => 0.0,
            SamplingPolicy::Sampled { temperature, .. } => *temperature,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            SamplingPolicy::Greedy { seed } | SamplingPolicy::Sampled { seed, .. } => *seed,
        }
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, SamplingPolicy::Greedy { .. })
    }
}

/// Which rule turns a model reply into a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreExtractionMode {
    /// Concatenate every digit of the first line that mentions one.
    Digits,
    /// Take the first `N/10` or `N out of 10` in the generated continuation.
    OutOfTen,
}

impl FromStr for ScoreExtractionMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digits" => Ok(ScoreExtractionMode::Digits),
            "out_of_ten" => Ok(ScoreExtractionMode::OutOfTen),
            other => Err(AppError::ConfigError(format!(
                "unknown SCORE_EXTRACTION '{}', expected 'digits' or 'out_of_ten'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub generation_api_base: String,
    pub generation_model: String,
    pub generation_api_key: SecretString,
    pub sampling_mode: String,
    pub generation_temperature: f32,
    pub generation_seed: Option<u64>,
    pub score_extraction: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            generation_api_base: env::var("GENERATION_API_BASE")
                .unwrap_or_else(|_| "http://localhost:8000/v1".to_string()),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "tiiuae/falcon-7b-instruct".to_string()),
            generation_api_key: SecretString::from(
                env::var("GENERATION_API_KEY").unwrap_or_else(|_| "local".to_string()),
            ),
            sampling_mode: env::var("GENERATION_SAMPLING")
                .unwrap_or_else(|_| "sampled".to_string()),
            generation_temperature: env::var("GENERATION_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(1.0),
            generation_seed: env::var("GENERATION_SEED")
                .ok()
                .and_then(|s| s.parse().ok()),
            score_extraction: env::var("SCORE_EXTRACTION")
                .unwrap_or_else(|_| "digits".to_string()),
        }
    }

    /// Checks the settings that would otherwise only fail on the first
    /// evaluation request.
    pub fn validate(&self) -> AppResult<()> {
        let base = self.generation_api_base.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::ConfigError(format!(
                "GENERATION_API_BASE must be an http(s) URL, got '{}'",
                self.generation_api_base
            )));
        }

        if self.generation_model.trim().is_empty() {
            return Err(AppError::ConfigError(
                "GENERATION_MODEL cannot be empty".to_string(),
            ));
        }

        self.sampling_policy()?;
        self.score_extraction_mode()?;

        Ok(())
    }

    pub fn sampling_policy(&self) -> AppResult<SamplingPolicy> {
        match self.sampling_mode.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(SamplingPolicy::Greedy {
                seed: self.generation_seed,
            }),
            "sampled" => {
                if !(0.0..=2.0).contains(&self.generation_temperature) {
                    return Err(AppError::ConfigError(format!(
                        "GENERATION_TEMPERATURE must be within 0.0..=2.0, got {}",
                        self.generation_temperature
                    )));
                }
                Ok(SamplingPolicy::Sampled {
                    temperature: self.generation_temperature,
                    seed: self.generation_seed,
                })
            }
            other => Err(AppError::ConfigError(format!(
                "unknown GENERATION_SAMPLING '{}', expected 'greedy' or 'sampled'",
                other
            ))),
        }
    }

    pub fn score_extraction_mode(&self) -> AppResult<ScoreExtractionMode> {
        self.score_extraction.parse()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            generation_api_base: "http://localhost:8000/v1".to_string(),
            generation_model: "test-model".to_string(),
            generation_api_key: SecretString::from("test-key".to_string()),
            sampling_mode: "greedy".to_string(),
            generation_temperature: 1.0,
            generation_seed: Some(7),
            score_extraction: "digits".to_string(),
        }
    }
}
