use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{EvaluationResult, EvaluationRun, Principle};

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResultDto {
    pub principle: String,
    pub score: u64,
    pub explanation: String,
}

impl From<EvaluationResult> for EvaluationResultDto {
    fn from(result: EvaluationResult) -> Self {
        EvaluationResultDto {
            principle: result.principle_title,
            score: result.score,
            explanation: result.explanation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRunDto {
    pub id: Uuid,
    pub results: Vec<EvaluationResultDto>,
    pub average_score: Option<f64>,
    pub average_score_display: String,
    pub content_length: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl From<EvaluationRun> for EvaluationRunDto {
    fn from(run: EvaluationRun) -> Self {
        let average_score = run.average_score();
        let average_score_display = run.average_score_display();
        let duration_ms = run.duration_ms();

        EvaluationRunDto {
            id: run.id,
            results: run.results.into_iter().map(Into::into).collect(),
            average_score,
            average_score_display,
            content_length: run.content_length,
            started_at: run.started_at,
            completed_at: run.completed_at,
            duration_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentDto {
    pub content: String,
    pub scrape_failed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrincipleDto {
    pub position: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

impl PrincipleDto {
    pub fn from_catalog(principles: &[Principle]) -> Vec<PrincipleDto> {
        principles
            .iter()
            .enumerate()
            .map(|(i, p)| PrincipleDto {
                position: i + 1,
                title: p.title,
                description: p.description,
                prompt: p.prompt,
            })
            .collect()
    }
}
