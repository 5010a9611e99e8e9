use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::linkedin::parser::{parse_listing, parse_posting};
use crate::linkedin::rate_limiter::RateLimiter;
use crate::models::Posting;
use crate::source::JobSource;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct LinkedInClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
}

impl LinkedInClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_settings(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
            config.requests_per_minute,
        )
    }

    pub fn with_settings(
        base_url: &str,
        timeout: Duration,
        requests_per_minute: u32,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US,en;q=0.9"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(requests_per_minute),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn listing_url(&self) -> String {
        format!("{}/seeMoreJobPostings/search", self.base_url)
    }

    pub fn posting_url(&self, posting_id: &str) -> String {
        format!("{}/jobPosting/{}", self.base_url, posting_id)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for LinkedInClient {
    fn default() -> Self {
        Self {
            client: Client::new(),
            rate_limiter: RateLimiter::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl JobSource for LinkedInClient {
    async fn fetch_listing(&self, title: &str, location: &str, offset: u32) -> Result<Vec<String>> {
        self.rate_limiter.wait().await;
        let offset = offset.to_string();
        tracing::debug!("Fetching listing: {} in {} from {}", title, location, offset);

        let response = self
            .client
            .get(self.listing_url())
            .query(&[
                ("keywords", title),
                ("location", location),
                ("start", offset.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::ListingFetch(response.status().as_u16()));
        }

        let html = response.text().await?;
        Ok(parse_listing(&html))
    }

    async fn fetch_detail(&self, posting_id: &str) -> Result<Posting> {
        self.rate_limiter.wait().await;
        tracing::debug!("Fetching posting: {}", posting_id);

        let response = self.client.get(self.posting_url(posting_id)).send().await?;

        if !response.status().is_success() {
            return Err(Error::DetailFetch {
                id: posting_id.to_string(),
                status: response.status().as_u16(),
            });
        }

        let html = response.text().await?;
        Ok(parse_posting(posting_id, &html))
    }

    fn name(&self) -> &str {
        "LinkedIn"
    }
}
