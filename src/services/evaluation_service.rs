use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    constants::prompts::{build_prompt, GENERATION_TOKEN_BUDGET},
    errors::AppResult,
    models::domain::{EvaluationResult, EvaluationRun, Principle},
    services::{score_extraction::ScoreExtractor, text_generation::TextGenerator},
};

/// Scores content against every principle of a catalog, one model call per
/// principle, in catalog order.
pub struct EvaluationService {
    generator: Arc<dyn TextGenerator>,
    extractor: Arc<dyn ScoreExtractor>,
    principles: &'static [Principle],
    // The generator is shared by every request; whole runs take turns.
    run_gate: Mutex<()>,
}

impl EvaluationService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        extractor: Arc<dyn ScoreExtractor>,
        principles: &'static [Principle],
    ) -> Self {
        Self {
            generator,
            extractor,
            principles,
            run_gate: Mutex::new(()),
        }
    }

    pub fn principles(&self) -> &'static [Principle] {
        self.principles
    }

    pub fn model_name(&self) -> String {
        self.generator.model_name()
    }

    pub fn extractor_name(&self) -> &'static str {
        self.extractor.name()
    }

    /// Runs one evaluation. A generation failure for any principle aborts the
    /// whole run and no partial results are returned.
    pub async fn evaluate(&self, content: &str) -> AppResult<EvaluationRun> {
        let _turn = self.run_gate.lock().await;
        let started_at = Utc::now();

        log::info!(
            "Evaluating {} bytes of content against {} principles with {}",
            content.len(),
            self.principles.len(),
            self.generator.model_name()
        );

        let mut results = Vec::with_capacity(self.principles.len());
        for principle in self.principles {
            let prompt = build_prompt(content, principle.prompt);
            let reply = self
                .generator
                .generate(&prompt, GENERATION_TOKEN_BUDGET)
                .await
                .map_err(|e| {
                    log::error!("Generation failed for '{}': {}", principle.title, e);
                    e
                })?;

            let score = self.extractor.extract(&prompt, &reply);
            log::debug!("Principle '{}' scored {}", principle.title, score);

            results.push(EvaluationResult::new(principle.title, score, &reply));
        }

        let run = EvaluationRun::new(results, content.len(), started_at);
        log::info!(
            "Evaluation {} finished in {} ms, average score {}",
            run.id,
            run.duration_ms(),
            run.average_score_display()
        );

        Ok(run)
    }
}
