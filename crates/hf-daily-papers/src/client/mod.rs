//! Daily papers API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - A fixed per-request timeout (no retries, no backoff)
//! - Tolerant normalization of every response shape

mod api;

pub use api::PapersApi;

use chrono::NaiveDate;
use reqwest::Client;
use url::Url;

use crate::arxiv;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{DailyPapers, ListingPayload, Paper, PaperDetails, RawDetails, SearchResults};
use crate::views;

/// Daily papers API client.
#[derive(Clone)]
pub struct PapersClient {
    /// HTTP client.
    client: Client,

    /// API base URL.
    base_url: String,

    /// Host for root-relative avatar URLs.
    asset_base_url: String,

    /// Request timeout, reported on expiry.
    request_timeout: std::time::Duration,

    /// Limit used by the convenience views.
    default_limit: u32,
}

impl PapersClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "application/json".parse().expect("valid accept header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            asset_base_url: config.asset_base_url,
            request_timeout: config.request_timeout,
            default_limit: config.default_limit,
        })
    }

    /// API base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Limit used when callers don't pick one.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Get up to `limit` papers for `date`, or for the API's default day.
    ///
    /// `num_total_items` is the returned list length, not an upstream total.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, timeout or non-2xx status. An empty
    /// day is not an error.
    pub async fn get_daily_papers(
        &self,
        date: Option<NaiveDate>,
        limit: u32,
    ) -> ClientResult<DailyPapers> {
        let mut params = vec![("limit", limit.to_string())];
        if let Some(date) = date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }

        let payload: ListingPayload = self.get("/api/daily_papers", &params).await?;
        let papers = payload.normalize(&self.asset_base_url);

        tracing::debug!(?date, limit, count = papers.len(), "Fetched daily papers");
        Ok(DailyPapers::new(papers))
    }

    /// Search papers by keyword.
    ///
    /// The query is passed through verbatim; empty queries should be
    /// short-circuited by the caller.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(&self, query: &str) -> ClientResult<SearchResults> {
        let params = [("q", query.to_string())];

        let payload: ListingPayload = self.get("/api/papers/search", &params).await?;
        let papers = payload.normalize(&self.asset_base_url);

        tracing::debug!(query, count = papers.len(), "Searched papers");
        Ok(SearchResults { papers })
    }

    /// Get details for a single paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper_details(&self, arxiv_id: &str) -> ClientResult<PaperDetails> {
        let path = format!("/api/papers/{arxiv_id}");

        let value: serde_json::Value = self.get(&path, &[]).await?;
        let details = RawDetails::from_value(value)?.normalize(&self.asset_base_url);

        Ok(details)
    }

    /// Daily listing for the API's default day, sorted by upvotes.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_trending_papers(&self, limit: u32) -> ClientResult<Vec<Paper>> {
        let daily = self.get_daily_papers(None, limit).await?;
        Ok(views::trending(daily.papers))
    }

    /// Daily listing for the API's default day, newest first.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_recent_papers(&self, limit: u32) -> ClientResult<Vec<Paper>> {
        let daily = self.get_daily_papers(None, limit).await?;
        Ok(views::recent(daily.papers))
    }

    /// arXiv abstract page for `id`.
    #[must_use]
    pub fn arxiv_url(id: &str) -> String {
        arxiv::abs_url(id)
    }

    /// arXiv PDF for `id`.
    #[must_use]
    pub fn pdf_url(id: &str) -> String {
        arxiv::pdf_url(id)
    }

    /// Build a request URL from a path and query parameters.
    fn url(&self, path: &str, params: &[(&str, String)]) -> ClientResult<Url> {
        let base = format!("{}{}", self.base_url, path);
        if params.is_empty() {
            Ok(Url::parse(&base)?)
        } else {
            Ok(Url::parse_with_params(&base, params)?)
        }
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path, params)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| self.transport_error(e))?;
        let response = self.handle_response(response).await?;

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Papers API returned an error status");
        Err(ClientError::http(status.as_u16(), body))
    }

    /// Map a reqwest failure, surfacing timeouts with the configured duration.
    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            tracing::warn!(timeout = ?self.request_timeout, "Request timed out");
            ClientError::Timeout(self.request_timeout)
        } else {
            tracing::warn!(error = %err, "Request failed");
            ClientError::Network(err)
        }
    }
}

impl std::fmt::Debug for PapersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PapersClient")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
