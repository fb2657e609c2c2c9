//! Trait seam over the papers API for the feed driver and daily digest.

use chrono::NaiveDate;

use super::PapersClient;
use crate::error::ClientResult;
use crate::models::DailyPapers;

/// The subset of the papers API the home feed depends on.
#[async_trait::async_trait]
pub trait PapersApi: Send + Sync {
    /// Fetch the daily listing for `date` (or the API's default day).
    async fn daily_papers(&self, date: Option<NaiveDate>, limit: u32) -> ClientResult<DailyPapers>;
}

#[async_trait::async_trait]
impl PapersApi for PapersClient {
    async fn daily_papers(&self, date: Option<NaiveDate>, limit: u32) -> ClientResult<DailyPapers> {
        self.get_daily_papers(date, limit).await
    }
}
