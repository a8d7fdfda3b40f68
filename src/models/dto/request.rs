use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Where the content to evaluate comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    Url,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Text => "Paste Text",
            InputMode::Url => "Scrape from URL",
        }
    }
}

/// Resolved content source, produced from a validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Text(String),
    Url(String),
}

/// Body of the JSON API and of the HTML form; both share field names.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct EvaluateRequestDto {
    #[serde(default)]
    pub mode: InputMode,

    #[validate(length(max = 2000000))]
    pub content: Option<String>,

    /// Not syntax-checked: a malformed URL surfaces as scrape error text.
    #[validate(length(min = 1, max = 2048))]
    pub url: Option<String>,
}

impl EvaluateRequestDto {
    pub fn from_text(content: &str) -> Self {
        EvaluateRequestDto {
            mode: InputMode::Text,
            content: Some(content.to_string()),
            url: None,
        }
    }

    pub fn from_url(url: &str) -> Self {
        EvaluateRequestDto {
            mode: InputMode::Url,
            content: None,
            url: Some(url.to_string()),
        }
    }

    /// HTML forms submit every field; an empty URL box means "no URL".
    pub fn normalized(mut self) -> Self {
        self.url = self
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        self
    }

    /// Validates the request and picks the content source for its mode.
    pub fn source(&self) -> AppResult<ContentSource> {
        self.validate()?;

        match self.mode {
            InputMode::Text => Ok(ContentSource::Text(
                self.content.clone().unwrap_or_default(),
            )),
            InputMode::Url => self
                .url
                .clone()
                .map(ContentSource::Url)
                .ok_or_else(|| {
                    AppError::ValidationError("A URL is required in url mode".to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_resolves_to_text_source() {
        let request = EvaluateRequestDto::from_text("Some page copy");
        assert_eq!(
            request.source().unwrap(),
            ContentSource::Text("Some page copy".to_string())
        );
    }

    #[test]
    fn test_text_request_without_content_is_empty_text() {
        let request = EvaluateRequestDto::default();
        assert_eq!(request.source().unwrap(), ContentSource::Text(String::new()));
    }

    #[test]
    fn test_url_request_resolves_to_url_source() {
        let request = EvaluateRequestDto::from_url("https://example.com/page");
        assert_eq!(
            request.source().unwrap(),
            ContentSource::Url("https://example.com/page".to_string())
        );
    }

    #[test]
    fn test_malformed_url_is_left_to_the_scraper() {
        let request = EvaluateRequestDto::from_url("not a url");
        assert_eq!(
            request.source().unwrap(),
            ContentSource::Url("not a url".to_string())
        );
    }

    #[test]
    fn test_oversized_url_fails_validation() {
        let request = EvaluateRequestDto::from_url(&format!("https://example.com/{}", "a".repeat(3000)));
        assert!(matches!(
            request.source(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_url_mode_requires_url() {
        let request = EvaluateRequestDto {
            mode: InputMode::Url,
            content: Some("ignored".to_string()),
            url: Some("   ".to_string()),
        }
        .normalized();

        assert_eq!(request.url, None);
        assert!(matches!(
            request.source(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let request: EvaluateRequestDto =
            serde_json::from_str(r#"{"mode":"url","url":"https://example.com"}"#).unwrap();
        assert_eq!(request.mode, InputMode::Url);

        let request: EvaluateRequestDto = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(request.mode, InputMode::Text);
    }
}
