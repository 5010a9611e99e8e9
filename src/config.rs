use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://www.linkedin.com/jobs-guest/jobs/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub requests_per_minute: u32,
    pub listing_page_size: u32,
    pub max_listing_pages: u32,
    pub concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("JOBSKILLS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| Error::Config(format!("PORT must be a valid port number, got {}", v)))?,
            Err(_) => 3000,
        };

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let requests_per_minute = env::var("REQUESTS_PER_MINUTE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let listing_page_size = env::var("LISTING_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(25);

        let max_listing_pages = env::var("MAX_LISTING_PAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        if concurrency_limit == 0 {
            return Err(Error::Config("CONCURRENCY_LIMIT must be at least 1".to_string()));
        }

        Ok(Self {
            base_url,
            port,
            request_timeout_secs,
            requests_per_minute,
            listing_page_size,
            max_listing_pages,
            concurrency_limit,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub listing_page_size: u32,
    pub max_listing_pages: u32,
    pub concurrency_limit: usize,
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            listing_page_size: 25,
            max_listing_pages: 1,
            concurrency_limit: 1,
            show_progress: false,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            listing_page_size: config.listing_page_size,
            max_listing_pages: config.max_listing_pages,
            concurrency_limit: config.concurrency_limit,
            show_progress: false,
        }
    }
}
