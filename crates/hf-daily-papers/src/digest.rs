//! Daily "new papers" check, meant for a best-effort scheduled run.

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::PapersApi;
use crate::error::ClientResult;

/// Notification announcing today's papers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// View to open when tapped.
    pub screen: String,
}

impl Notification {
    fn for_count(count: usize) -> Self {
        Self {
            title: "New Papers Published".to_string(),
            body: format!("{count} new papers today. Tap to check them out."),
            screen: "trending".to_string(),
        }
    }
}

/// Fetch `today`'s listing and build a notification if it has papers.
///
/// # Errors
///
/// Propagates API failures; scheduling and delivery are the caller's concern.
pub async fn check_today<A>(
    api: &A,
    today: NaiveDate,
    limit: u32,
) -> ClientResult<Option<Notification>>
where
    A: PapersApi + ?Sized,
{
    let daily = api.daily_papers(Some(today), limit).await?;
    tracing::info!(%today, count = daily.papers.len(), "Daily paper check");

    Ok((!daily.is_empty()).then(|| Notification::for_count(daily.papers.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyPapers, Paper};

    struct FixedApi(usize);

    #[async_trait::async_trait]
    impl PapersApi for FixedApi {
        async fn daily_papers(
            &self,
            _date: Option<NaiveDate>,
            _limit: u32,
        ) -> ClientResult<DailyPapers> {
            Ok(DailyPapers::new(vec![Paper::default(); self.0]))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[tokio::test]
    async fn test_notification_when_papers_exist() {
        let note = check_today(&FixedApi(3), today(), 50).await.unwrap().unwrap();
        assert_eq!(note.title, "New Papers Published");
        assert_eq!(note.body, "3 new papers today. Tap to check them out.");
        assert_eq!(note.screen, "trending");
    }

    #[tokio::test]
    async fn test_no_notification_for_empty_day() {
        assert!(check_today(&FixedApi(0), today(), 50).await.unwrap().is_none());
    }
}
