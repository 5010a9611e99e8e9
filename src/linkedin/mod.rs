pub mod client;
pub mod parser;
pub mod rate_limiter;

pub use client::LinkedInClient;
pub use rate_limiter::RateLimiter;
