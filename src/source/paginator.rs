use crate::error::Result;
use crate::source::JobSource;

pub struct ListingPaginator<'a> {
    source: &'a dyn JobSource,
    page_size: u32,
    max_pages: u32,
}

impl<'a> ListingPaginator<'a> {
    pub fn new(source: &'a dyn JobSource, page_size: u32, max_pages: u32) -> Self {
        Self {
            source,
            page_size,
            max_pages,
        }
    }

    pub async fn fetch_ids(&self, title: &str, location: &str) -> Result<Vec<String>> {
        let mut all_ids = Vec::new();

        for page in 0..self.max_pages {
            let Some(offset) = page.checked_mul(self.page_size) else {
                tracing::warn!("Listing offset overflowed after {} pages", page);
                break;
            };
            tracing::debug!("Fetching listing page {} (offset {})", page + 1, offset);

            let ids = self.source.fetch_listing(title, location, offset).await?;
            if ids.is_empty() {
                tracing::debug!("Listing exhausted at offset {}", offset);
                break;
            }

            all_ids.extend(ids);

            // A single page size of 0 would repeat offset 0 forever.
            if self.page_size == 0 {
                break;
            }
        }

        Ok(all_ids)
    }
}
