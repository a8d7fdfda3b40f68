use std::time::Duration;

use crate::{
    constants::prompts::{SCRAPE_ERROR_PREFIX, SCRAPE_TIMEOUT_SECS, SCRAPE_USER_AGENT},
    errors::{AppError, AppResult},
    models::dto::request::ContentSource,
    services::html_text::extract_visible_text,
};

/// Text obtained for one evaluation, plus whether it is a scrape error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredContent {
    pub content: String,
    pub scrape_failed: bool,
}

/// Supplies the text to evaluate, either as given or scraped from a URL.
///
/// Scraping never fails from the caller's point of view: any error becomes
/// the content itself, prefixed with "Error scraping URL:".
pub struct ContentService {
    client: reqwest::Client,
}

impl ContentService {
    pub fn new() -> AppResult<Self> {
        Self::with_timeout(Duration::from_secs(SCRAPE_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(SCRAPE_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn get_content_from_text(&self, raw: &str) -> String {
        raw.to_string()
    }

    pub async fn get_content_from_url(&self, url: &str) -> String {
        self.scrape_url(url).await.content
    }

    pub async fn acquire(&self, source: &ContentSource) -> AcquiredContent {
        match source {
            ContentSource::Text(raw) => AcquiredContent {
                content: self.get_content_from_text(raw),
                scrape_failed: false,
            },
            ContentSource::Url(url) => self.scrape_url(url).await,
        }
    }

    async fn scrape_url(&self, url: &str) -> AcquiredContent {
        match self.fetch(url).await {
            Ok(html) => {
                let content = extract_visible_text(&html);
                log::info!(
                    "Scraped {} ({} bytes of html, {} bytes of text)",
                    url,
                    html.len(),
                    content.len()
                );
                AcquiredContent {
                    content,
                    scrape_failed: false,
                }
            }
            Err(e) => {
                log::warn!("Failed to scrape {}: {}", url, e);
                AcquiredContent {
                    content: format!("{} {}", SCRAPE_ERROR_PREFIX, e),
                    scrape_failed: true,
                }
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
