#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        errors::{AppError, AppResult},
        services::{DigitConcatenation, TextGenerator},
    };

    /// Returns the same reply for every prompt.
    pub struct FixedReplyGenerator {
        pub reply: String,
    }

    #[async_trait]
    impl TextGenerator for FixedReplyGenerator {
        async fn generate(&self, _prompt: &str, _max_new_tokens: u32) -> AppResult<String> {
            Ok(self.reply.clone())
        }

        fn model_name(&self) -> String {
            "fixed-reply".to_string()
        }
    }

    /// Fails every generation call.
    pub struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _max_new_tokens: u32) -> AppResult<String> {
            Err(AppError::GenerationError("model unavailable".to_string()))
        }

        fn model_name(&self) -> String {
            "failing".to_string()
        }
    }

    pub fn app_state_with_generator(generator: Arc<dyn TextGenerator>) -> AppState {
        AppState::with_generator(Config::test_config(), generator, Arc::new(DigitConcatenation))
            .expect("test app state should build")
    }

    /// App state whose generator always answers `reply`.
    pub fn app_state_with_reply(reply: &str) -> AppState {
        app_state_with_generator(Arc::new(FixedReplyGenerator {
            reply: reply.to_string(),
        }))
    }

    pub fn app_state_with_failing_generator() -> AppState {
        app_state_with_generator(Arc::new(FailingGenerator))
    }

    pub fn sample_html() -> &'static str {
        "<html><head><title>Composting 101</title><style>h1{color:green}</style></head>\
<body><h1>Composting basics</h1><script>track()</script><p>Mix greens &amp; browns.</p></body></html>"
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::services::html_text::extract_visible_text;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_fixed_reply_fixture() {
        let state = app_state_with_reply("Score: 3");
        let run = state.evaluation_service.evaluate("text").await.unwrap();
        assert!(run.results.iter().all(|r| r.score == 3));
    }

    #[actix_web::test]
    async fn test_failing_fixture() {
        let state = app_state_with_failing_generator();
        assert!(state.evaluation_service.evaluate("text").await.is_err());
    }

    #[test]
    fn test_sample_html_fixture() {
        assert_eq!(
            extract_visible_text(sample_html()),
            "Composting 101\nComposting basics\nMix greens & browns."
        );
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::BAD_GATEWAY);
        assert_success_status(StatusCode::OK);
    }
}
