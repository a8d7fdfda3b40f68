pub mod evaluation;
pub mod principle;

pub use evaluation::{EvaluationResult, EvaluationRun};
pub use principle::Principle;
