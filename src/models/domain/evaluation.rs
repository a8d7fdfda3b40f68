use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Score and raw model reply for a single principle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub principle_title: String,
    /// Not clamped: the extraction rule can produce values above 10.
    pub score: u64,
    pub explanation: String,
}

impl EvaluationResult {
    pub fn new(principle_title: &str, score: u64, explanation: &str) -> Self {
        EvaluationResult {
            principle_title: principle_title.to_string(),
            score,
            explanation: explanation.trim().to_string(),
        }
    }
}

/// Results of one pass over the principle catalog, in catalog order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationRun {
    pub id: Uuid,
    pub results: Vec<EvaluationResult>,
    pub content_length: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl EvaluationRun {
    pub fn new(
        results: Vec<EvaluationResult>,
        content_length: usize,
        started_at: DateTime<Utc>,
    ) -> Self {
        EvaluationRun {
            id: Uuid::new_v4(),
            results,
            content_length,
            started_at,
            completed_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn total_score(&self) -> f64 {
        self.results.iter().map(|r| r.score as f64).sum()
    }

    /// Arithmetic mean of all scores, `None` for a run without results.
    pub fn average_score(&self) -> Option<f64> {
        if self.results.is_empty() {
            return None;
        }
        Some(self.total_score() / self.results.len() as f64)
    }

    /// The average formatted to one decimal place, as shown to users.
    pub fn average_score_display(&self) -> String {
        match self.average_score() {
            Some(avg) => format!("{:.1}", avg),
            None => "n/a".to_string(),
        }
    }

    pub fn duration_ms(&self) -> i64 {
        (self.completed_at - self.started_at).num_milliseconds()
    }
}
