pub mod content_service;
pub mod evaluation_service;
pub mod html_text;
pub mod score_extraction;
pub mod text_generation;

pub use content_service::{AcquiredContent, ContentService};
pub use evaluation_service::EvaluationService;
pub use score_extraction::{DigitConcatenation, OutOfTenExtractor, ScoreExtractor};
pub use text_generation::{OpenAiTextGenerator, TextGenerator};
