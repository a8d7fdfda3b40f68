use std::sync::Arc;

use crate::{
    config::Config,
    constants::PRINCIPLES,
    errors::AppResult,
    services::{
        score_extraction::{extractor_for, ScoreExtractor},
        ContentService, EvaluationService, OpenAiTextGenerator, TextGenerator,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub evaluation_service: Arc<EvaluationService>,
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the process-wide services. The text generator is created here
    /// once and shared by every request.
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let generator: Arc<dyn TextGenerator> = Arc::new(OpenAiTextGenerator::from_config(&config)?);
        let extractor: Arc<dyn ScoreExtractor> =
            Arc::from(extractor_for(config.score_extraction_mode()?));

        log::info!(
            "Using model {} at {} ({} score extraction)",
            config.generation_model,
            config.generation_api_base,
            extractor.name()
        );

        Self::with_generator(config, generator, extractor)
    }

    /// Wires the services around an already constructed generator.
    pub fn with_generator(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        extractor: Arc<dyn ScoreExtractor>,
    ) -> AppResult<Self> {
        let evaluation_service = Arc::new(EvaluationService::new(generator, extractor, PRINCIPLES));
        let content_service = Arc::new(ContentService::new()?);

        Ok(Self {
            evaluation_service,
            content_service,
            config: Arc::new(config),
        })
    }
}
