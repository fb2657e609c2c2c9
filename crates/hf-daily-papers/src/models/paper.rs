//! Normalized paper model and response wrappers.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Author;
use crate::arxiv;

/// A research paper from the daily papers feed.
///
/// Built fresh from every response; never merged with earlier copies except
/// through [`super::PaperDetails::merged_under`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Internal paper ID.
    #[serde(rename = "_id", default)]
    pub id: String,

    /// arXiv identifier (may differ from `id`).
    #[serde(default)]
    pub arxiv_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: String,

    /// Publication timestamp as an ISO string.
    #[serde(default)]
    pub published_at: String,

    /// Paper summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Upvote count.
    #[serde(default)]
    pub upvotes: u64,

    /// Comment count.
    #[serde(default)]
    pub num_comments: u64,

    /// Thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Authors in upstream order.
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Media attached to the paper page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,

    /// Linked GitHub repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Who submitted the paper to the daily listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<SubmittedBy>,
}

/// Submitter of a paper to the daily listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedBy {
    /// Absolute avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Full name.
    #[serde(default)]
    pub fullname: String,

    /// Account handle.
    #[serde(default)]
    pub name: String,
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Paper {
    /// Parse `published_at` as a timestamp.
    ///
    /// RFC 3339 first; timestamps without an offset and bare dates are read as UTC.
    #[must_use]
    pub fn published(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.published_at.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at);
        }
        NAIVE_TIMESTAMP_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
            .map(|at| at.and_utc().fixed_offset())
    }

    /// Identifier to use for arXiv links and detail lookups.
    #[must_use]
    pub fn lookup_id(&self) -> &str {
        if self.arxiv_id.is_empty() {
            &self.id
        } else {
            &self.arxiv_id
        }
    }

    /// arXiv abstract page.
    #[must_use]
    pub fn arxiv_url(&self) -> String {
        arxiv::abs_url(self.lookup_id())
    }

    /// arXiv PDF.
    #[must_use]
    pub fn pdf_url(&self) -> String {
        arxiv::pdf_url(self.lookup_id())
    }

    /// Title, or a placeholder when upstream sent none.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Daily papers listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPapers {
    /// Normalized papers.
    pub papers: Vec<Paper>,

    /// Length of `papers` after the limit, not an upstream total.
    pub num_total_items: usize,
}

impl DailyPapers {
    /// Wrap a list, deriving the item count from its length.
    #[must_use]
    pub fn new(papers: Vec<Paper>) -> Self {
        let num_total_items = papers.len();
        Self {
            papers,
            num_total_items,
        }
    }

    /// Whether the day had no papers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

/// Keyword search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Normalized papers in upstream order.
    pub papers: Vec<Paper>,
}
