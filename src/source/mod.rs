pub mod paginator;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Posting;

pub use paginator::ListingPaginator;

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_listing(&self, title: &str, location: &str, offset: u32) -> Result<Vec<String>>;

    async fn fetch_detail(&self, posting_id: &str) -> Result<Posting>;

    fn name(&self) -> &str;
}
