pub mod principles;
pub mod prompts;

pub use principles::PRINCIPLES;
