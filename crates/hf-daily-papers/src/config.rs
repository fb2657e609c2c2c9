//! Configuration for the daily papers client.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the papers API.
    pub const BASE_URL: &str = "https://huggingface.co";

    /// Host prepended to root-relative avatar URLs.
    pub const ASSET_BASE_URL: &str = "https://huggingface.co";

    /// Request timeout. Expiry aborts the in-flight request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default number of papers requested from the daily listing.
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Earliest date the home feed will request (first daily papers issue).
    pub const FLOOR_DATE: (i32, u32, u32) = (2023, 5, 4);

    /// Directory under the user config dir holding client state.
    pub const CONFIG_DIR_NAME: &str = "hf-papers";

    /// File name of the persisted theme flag.
    pub const THEME_FILE: &str = "theme";

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("hf-daily-papers/", env!("CARGO_PKG_VERSION"));
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the papers API (overridden for mock servers).
    pub base_url: String,

    /// Host used to absolutize root-relative avatar URLs.
    pub asset_base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Default daily listing limit.
    pub default_limit: u32,

    /// Floor date for date navigation.
    pub floor_date: NaiveDate,

    /// Path of the theme preference file.
    pub theme_file: PathBuf,

    /// User agent header.
    pub user_agent: String,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            asset_base_url: api::ASSET_BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            default_limit: api::DEFAULT_LIMIT,
            floor_date: default_floor_date(),
            theme_file: default_theme_file(),
            user_agent: api::USER_AGENT.to_string(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            asset_base_url: api::ASSET_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            ..Self::new()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `HF_PAPERS_BASE_URL`, `HF_PAPERS_TIMEOUT_SECS` and
    /// `HF_PAPERS_THEME_FILE`, loading a `.env` file first if present.
    ///
    /// # Errors
    ///
    /// Returns error if `HF_PAPERS_TIMEOUT_SECS` is not a whole number of seconds.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::new();

        if let Ok(base_url) = std::env::var("HF_PAPERS_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(secs) = std::env::var("HF_PAPERS_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid HF_PAPERS_TIMEOUT_SECS '{secs}': {e}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(path) = std::env::var("HF_PAPERS_THEME_FILE") {
            config.theme_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme flag location under `config_dir`: `<config_dir>/hf-papers/theme`.
#[must_use]
pub fn theme_file_under(config_dir: &Path) -> PathBuf {
    config_dir.join(api::CONFIG_DIR_NAME).join(api::THEME_FILE)
}

/// Default theme flag location: `~/.config/hf-papers/theme` on Linux.
///
/// Falls back to the current directory only when the platform reports no
/// config directory.
#[must_use]
pub fn default_theme_file() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => theme_file_under(&dir),
        None => {
            tracing::warn!("No user config directory; using the working directory");
            theme_file_under(Path::new("."))
        }
    }
}

/// The fixed floor date as a calendar date.
#[must_use]
pub fn default_floor_date() -> NaiveDate {
    let (y, m, d) = api::FLOOR_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}
