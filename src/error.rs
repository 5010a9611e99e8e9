use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required query parameters: {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),

    #[error("Failed to fetch jobs list: {0}")]
    ListingFetch(u16),

    #[error("Failed to fetch job posting {id}: {status}")]
    DetailFetch { id: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid skill pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
