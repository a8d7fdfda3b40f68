/// Label placed before the evaluated content in every prompt.
pub const CONTENT_LABEL: &str = "Content:";

/// Label placed before the principle's instruction in every prompt.
pub const INSTRUCTION_LABEL: &str = "Instruction:";

/// New tokens requested from the model for each principle.
pub const GENERATION_TOKEN_BUDGET: u32 = 256;

/// Line scored when no line of a reply mentions a digit.
pub const SCORE_FALLBACK_LINE: &str = "Score: 0";

pub const SCRAPE_USER_AGENT: &str = "Mozilla/5.0";

pub const SCRAPE_TIMEOUT_SECS: u64 = 10;

/// Prefix of the text substituted for content when a URL cannot be fetched.
pub const SCRAPE_ERROR_PREFIX: &str = "Error scraping URL:";

/// Builds the prompt sent to the model for one principle.
pub fn build_prompt(content: &str, instruction: &str) -> String {
    format!(
        "{}\n{}\n\n{}\n{}",
        CONTENT_LABEL, content, INSTRUCTION_LABEL, instruction
    )
}
