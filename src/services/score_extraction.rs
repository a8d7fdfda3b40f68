use once_cell::sync::Lazy;
use regex::Regex;

use crate::{config::ScoreExtractionMode, constants::prompts::SCORE_FALLBACK_LINE};

static OUT_OF_TEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(10|[0-9])\s*(?:/|out\s+of)\s*10\b")
        .expect("OUT_OF_TEN_REGEX is a valid regex pattern")
});

/// Turns a model reply into a score.
pub trait ScoreExtractor: Send + Sync {
    /// `prompt` is the text the reply starts with; `reply` is the full generated text.
    fn extract(&self, prompt: &str, reply: &str) -> u64;

    fn name(&self) -> &'static str;
}

/// Concatenates every digit of the first line mentioning one. A reply of
/// "Rated 7/10 based on 2024 data" scores 7102024.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigitConcatenation;

impl ScoreExtractor for DigitConcatenation {
    fn extract(&self, _prompt: &str, reply: &str) -> u64 {
        extract_score_digits(reply)
    }

    fn name(&self) -> &'static str {
        "digits"
    }
}

/// Reads the first `N/10` or `N out of 10` (N in 0..=10) from the generated
/// continuation, ignoring the echoed prompt. Anything else scores 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutOfTenExtractor;

impl ScoreExtractor for OutOfTenExtractor {
    fn extract(&self, prompt: &str, reply: &str) -> u64 {
        let continuation = reply.strip_prefix(prompt).unwrap_or(reply);
        OUT_OF_TEN_REGEX
            .captures(continuation)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }

    fn name(&self) -> &'static str {
        "out_of_ten"
    }
}

pub fn extractor_for(mode: ScoreExtractionMode) -> Box<dyn ScoreExtractor> {
    match mode {
        ScoreExtractionMode::Digits => Box::new(DigitConcatenation),
        ScoreExtractionMode::OutOfTen => Box::new(OutOfTenExtractor),
    }
}

/// Line boundaries recognised when scanning a reply.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Returns the first line containing any of "0" through "10", or the
/// fallback line when none does.
pub fn select_score_line(reply: &str) -> &str {
    reply
        .split(is_line_break)
        .find(|line| (0..=10).any(|n| line.contains(n.to_string().as_str())))
        .unwrap_or(SCORE_FALLBACK_LINE)
}

/// Joins every ASCII digit of `line`, left to right, into one integer.
/// Saturates at `u64::MAX`; a line without digits yields 0.
///
/// Only `0`-`9` count. Other Unicode decimal digits (Arabic-Indic,
/// Devanagari, ...) are skipped, so "Score: 7 ٣" yields 7.
pub fn concatenate_digits(line: &str) -> u64 {
    line.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| {
            acc.checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(d)))
                .unwrap_or(u64::MAX)
        })
}

pub fn extract_score_digits(reply: &str) -> u64 {
    let line = select_score_line(reply);
    let score = concatenate_digits(line);
    if line == SCORE_FALLBACK_LINE {
        log::debug!("No digit found in model reply, defaulting score to {}", score);
    }
    score
}
