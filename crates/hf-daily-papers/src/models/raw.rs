//! Upstream payload shapes and their normalization.
//!
//! The papers API is loose about types: listings wrap the paper under a
//! `paper` key, detail lookups return it bare, search may return a bare array
//! or `{ "papers": [...] }`, and scalar fields are sometimes missing or of the
//! wrong type. Each shape is an explicit variant here and every entity has a
//! single `normalize` function. Nothing in this module fails on a decodable
//! JSON value of the right outer shape; odd fields fall back to defaults.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::author::{UNKNOWN_AUTHOR, UNKNOWN_HANDLE, normalize_avatar_url};
use super::{Author, AuthorUser, Paper, PaperDetails, SubmittedBy};

/// A daily/search listing record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawListing {
    /// `{ "paper": {...}, "numComments": n, "thumbnail": "..." }`
    Wrapped {
        /// The nested paper.
        #[serde(deserialize_with = "object_only")]
        paper: RawPaper,

        /// Listing-level comment count.
        #[serde(rename = "numComments", default, deserialize_with = "lenient_count")]
        num_comments: Option<u64>,

        /// Listing-level thumbnail.
        #[serde(default, deserialize_with = "lenient_string")]
        thumbnail: Option<String>,
    },

    /// The paper itself.
    Bare(RawPaper),
}

/// A search or listing response body.
///
/// Elements stay undecoded until [`ListingPayload::normalize`] so one odd
/// element cannot fail the whole response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingPayload {
    /// Bare array of records.
    List(Vec<Value>),

    /// Object wrapping the records under `papers`.
    Wrapped {
        /// Records; absent, `null` or not an array means none.
        #[serde(default, deserialize_with = "lenient_array")]
        papers: Option<Vec<Value>>,
    },
}

/// Raw paper fields as sent upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaper {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    internal_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,

    #[serde(rename = "arxivId", default, deserialize_with = "lenient_string")]
    arxiv_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,

    #[serde(rename = "publishedAt", default, deserialize_with = "lenient_string")]
    published_at: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    summary: Option<String>,

    #[serde(default, deserialize_with = "lenient_count")]
    upvotes: Option<u64>,

    #[serde(rename = "numComments", default, deserialize_with = "lenient_count")]
    num_comments: Option<u64>,

    #[serde(default, deserialize_with = "lenient_string")]
    thumbnail: Option<String>,

    #[serde(default, deserialize_with = "lenient_authors")]
    authors: Vec<RawAuthor>,

    #[serde(rename = "mediaUrls", default, deserialize_with = "lenient_strings")]
    media_urls: Option<Vec<String>>,

    #[serde(rename = "githubRepo", default, deserialize_with = "lenient_string")]
    github_repo: Option<String>,

    #[serde(rename = "submittedOnDailyBy", default, deserialize_with = "lenient_object")]
    submitted_on_daily_by: Option<RawSubmitter>,
}

/// Raw author record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,

    #[serde(default, deserialize_with = "lenient_object")]
    user: Option<RawUser>,
}

/// Raw linked user record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    #[serde(rename = "avatarUrl", default, deserialize_with = "lenient_string")]
    avatar_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    fullname: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,

    #[serde(rename = "isPro", default, deserialize_with = "truthy")]
    is_pro: bool,
}

/// Raw `submittedOnDailyBy` record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmitter {
    #[serde(rename = "avatarUrl", default, deserialize_with = "lenient_string")]
    avatar_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    fullname: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    user: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
}

/// Detail-only fields passed through untransformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDetailExtras {
    #[serde(rename = "abstract", default, deserialize_with = "lenient_string")]
    abstract_text: Option<String>,

    #[serde(default, deserialize_with = "lenient_array")]
    comments: Option<Vec<Value>>,

    #[serde(rename = "relatedModels", default, deserialize_with = "lenient_array")]
    related_models: Option<Vec<Value>>,

    #[serde(rename = "relatedDatasets", default, deserialize_with = "lenient_array")]
    related_datasets: Option<Vec<Value>>,

    #[serde(rename = "relatedSpaces", default, deserialize_with = "lenient_array")]
    related_spaces: Option<Vec<Value>>,
}

/// A single-paper detail response.
#[derive(Debug, Clone)]
pub struct RawDetails {
    listing: RawListing,
    extras: RawDetailExtras,
}

impl RawAuthor {
    /// Resolve names through author → user fallbacks.
    #[must_use]
    pub fn normalize(self, host: &str) -> Author {
        let user = self.user.unwrap_or_default();

        let name = self
            .name
            .clone()
            .or_else(|| user.fullname.clone())
            .or_else(|| user.name.clone())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        Author {
            id: self.id.unwrap_or_default(),
            name,
            user: AuthorUser {
                avatar_url: normalize_avatar_url(user.avatar_url.as_deref(), host),
                fullname: user
                    .fullname
                    .or_else(|| self.name.clone())
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                name: user
                    .name
                    .or(self.name)
                    .unwrap_or_else(|| UNKNOWN_HANDLE.to_string()),
                is_pro: user.is_pro,
            },
        }
    }
}

impl RawSubmitter {
    fn normalize(self, host: &str) -> SubmittedBy {
        SubmittedBy {
            avatar_url: normalize_avatar_url(self.avatar_url.as_deref(), host),
            fullname: self.fullname.unwrap_or_default(),
            name: self.user.or(self.name).unwrap_or_default(),
        }
    }
}

impl RawPaper {
    /// Normalize a bare paper record.
    #[must_use]
    pub fn normalize(self, host: &str) -> Paper {
        Paper {
            id: self.internal_id.or_else(|| self.id.clone()).unwrap_or_default(),
            arxiv_id: self.id.or(self.arxiv_id).unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            published_at: self.published_at.unwrap_or_default(),
            summary: self.summary,
            upvotes: self.upvotes.unwrap_or(0),
            num_comments: self.num_comments.unwrap_or(0),
            thumbnail: self.thumbnail,
            authors: self.authors.into_iter().map(|a| a.normalize(host)).collect(),
            media_urls: self.media_urls,
            github_url: self.github_repo,
            submitted_by: self.submitted_on_daily_by.map(|s| s.normalize(host)),
        }
    }
}

impl RawListing {
    /// Resolve one list element. Elements that are not objects are skipped.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            tracing::debug!(element = %value, "Skipping non-object listing element");
            return None;
        }
        Self::deserialize(value).ok()
    }

    /// Normalize a listing record.
    ///
    /// Listing-level `numComments` and `thumbnail` win over the nested paper's.
    #[must_use]
    pub fn normalize(self, host: &str) -> Paper {
        match self {
            Self::Wrapped { paper, num_comments, thumbnail } => {
                let mut normalized = paper.normalize(host);
                if let Some(count) = num_comments {
                    normalized.num_comments = count;
                }
                if thumbnail.is_some() {
                    normalized.thumbnail = thumbnail;
                }
                normalized
            }
            Self::Bare(paper) => paper.normalize(host),
        }
    }
}

impl ListingPayload {
    /// Normalize every object record, preserving upstream order.
    #[must_use]
    pub fn normalize(self, host: &str) -> Vec<Paper> {
        let records = match self {
            Self::List(records) => records,
            Self::Wrapped { papers } => papers.unwrap_or_default(),
        };
        records
            .into_iter()
            .filter_map(RawListing::from_value)
            .map(|r| r.normalize(host))
            .collect()
    }
}

impl RawDetails {
    /// Resolve a detail response value into its listing shape and extras.
    ///
    /// Extras are read from the top-level record, falling back to the nested
    /// `paper` object of a wrapped record.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let extras_source = match value.get("paper") {
            Some(inner) if inner.is_object() && value.get("abstract").is_none() => inner,
            _ => &value,
        };
        let extras = RawDetailExtras::deserialize(extras_source)?;
        let listing = RawListing::deserialize(value)?;
        Ok(Self { listing, extras })
    }

    /// Normalize into [`PaperDetails`].
    #[must_use]
    pub fn normalize(self, host: &str) -> PaperDetails {
        PaperDetails {
            paper: self.listing.normalize(host),
            r#abstract: self.extras.abstract_text,
            comments: self.extras.comments,
            related_models: self.extras.related_models,
            related_datasets: self.extras.related_datasets,
            related_spaces: self.extras.related_spaces,
        }
    }
}

fn object_only<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => T::deserialize(value).map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected an object")),
    }
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => T::deserialize(value).ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_array<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items),
        _ => None,
    })
}

/// Non-negative integer, or `None` for anything else.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.trunc() as u64)
        }),
        _ => None,
    })
}

fn lenient_authors<'de, D>(deserializer: D) -> Result<Vec<RawAuthor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => RawAuthor::deserialize(item).unwrap_or_default(),
                _ => RawAuthor::default(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const HOST: &str = "https://huggingface.co";

    fn normalize_listing(value: Value) -> Paper {
        serde_json::from_value::<RawListing>(value).unwrap().normalize(HOST)
    }

    #[test]
    fn test_bare_paper_ids() {
        let paper = normalize_listing(json!({"id": "2401.00001", "title": "T"}));
        assert_eq!(paper.id, "2401.00001");
        assert_eq!(paper.arxiv_id, "2401.00001");

        let paper = normalize_listing(json!({"_id": "x1", "arxivId": "2401.00002"}));
        assert_eq!(paper.id, "x1");
        assert_eq!(paper.arxiv_id, "2401.00002");
    }

    #[test]
    fn test_wrapper_fields_take_precedence() {
        let paper = normalize_listing(json!({
            "paper": {"id": "1", "numComments": 2, "thumbnail": "inner.png"},
            "numComments": 7,
            "thumbnail": "outer.png"
        }));
        assert_eq!(paper.num_comments, 7);
        assert_eq!(paper.thumbnail.as_deref(), Some("outer.png"));
    }

    #[test]
    fn test_wrapper_falls_back_to_inner_fields() {
        let paper = normalize_listing(json!({
            "paper": {"id": "1", "numComments": 2, "thumbnail": "inner.png"}
        }));
        assert_eq!(paper.num_comments, 2);
        assert_eq!(paper.thumbnail.as_deref(), Some("inner.png"));
    }

    #[test]
    fn test_null_paper_key_is_treated_as_bare() {
        let paper = normalize_listing(json!({"paper": null, "id": "9", "upvotes": 3}));
        assert_eq!(paper.arxiv_id, "9");
        assert_eq!(paper.upvotes, 3);
    }

    #[test]
    fn test_counts_default_to_zero() {
        let paper = normalize_listing(json!({"id": "1", "upvotes": "many", "numComments": -4}));
        assert_eq!(paper.upvotes, 0);
        assert_eq!(paper.num_comments, 0);

        let paper = normalize_listing(json!({"id": "1", "upvotes": null}));
        assert_eq!(paper.upvotes, 0);
    }

    #[test]
    fn test_missing_or_bad_authors_yield_empty_list() {
        assert!(normalize_listing(json!({"id": "1"})).authors.is_empty());
        assert!(normalize_listing(json!({"id": "1", "authors": null})).authors.is_empty());
        assert!(normalize_listing(json!({"id": "1", "authors": "anon"})).authors.is_empty());
    }

    #[test]
    fn test_author_name_fallbacks() {
        let author = |raw: Value| {
            serde_json::from_value::<RawAuthor>(raw).unwrap().normalize(HOST)
        };

        assert_eq!(author(json!({"name": "Ada", "user": {"fullname": "A. L."}})).name, "Ada");
        assert_eq!(author(json!({"user": {"fullname": "A. L.", "name": "ada"}})).name, "A. L.");
        assert_eq!(author(json!({"user": {"name": "ada"}})).name, "ada");

        let unknown = author(json!({}));
        assert_eq!(unknown.name, UNKNOWN_AUTHOR);
        assert_eq!(unknown.user.fullname, UNKNOWN_AUTHOR);
        assert_eq!(unknown.user.name, UNKNOWN_HANDLE);
        assert!(!unknown.user.is_pro);
    }

    #[test]
    fn test_author_user_fields() {
        let author = serde_json::from_value::<RawAuthor>(json!({
            "_id": "a1",
            "name": "Ada",
            "user": {"avatarUrl": "/avatars/a.png", "isPro": 1}
        }))
        .unwrap()
        .normalize(HOST);

        assert_eq!(author.id, "a1");
        assert_eq!(author.user.fullname, "Ada");
        assert_eq!(author.user.name, "Ada");
        assert_eq!(author.user.avatar_url.as_deref(), Some("https://huggingface.co/avatars/a.png"));
        assert!(author.user.is_pro);
    }

    #[test]
    fn test_submitter_and_repo() {
        let paper = normalize_listing(json!({
            "id": "1",
            "githubRepo": "https://github.com/org/repo",
            "mediaUrls": ["a.png", 4, "b.mp4"],
            "submittedOnDailyBy": {"avatarUrl": "https://x/a.png", "fullname": "Sub", "user": "sub"}
        }));

        assert_eq!(paper.github_url.as_deref(), Some("https://github.com/org/repo"));
        assert_eq!(paper.media_urls, Some(vec!["a.png".to_string(), "b.mp4".to_string()]));
        let submitter = paper.submitted_by.unwrap();
        assert_eq!(submitter.name, "sub");
        assert_eq!(submitter.fullname, "Sub");
    }

    #[test]
    fn test_payload_shapes_normalize_identically() {
        let records = json!([{"paper": {"id": "1"}}, {"id": "2"}]);
        let bare: ListingPayload = serde_json::from_value(records.clone()).unwrap();
        let wrapped: ListingPayload =
            serde_json::from_value(json!({"papers": records})).unwrap();

        assert_eq!(bare.normalize(HOST), wrapped.normalize(HOST));
    }

    #[test]
    fn test_payload_without_papers_is_empty() {
        let payload: ListingPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.normalize(HOST).is_empty());

        let payload: ListingPayload = serde_json::from_value(json!({"papers": null})).unwrap();
        assert!(payload.normalize(HOST).is_empty());
    }

    #[test]
    fn test_non_object_elements_are_skipped() {
        let payload: ListingPayload =
            serde_json::from_value(json!([{"paper": {"id": "1"}}, 7, null, "x", {"id": "2"}]))
                .unwrap();
        let papers = payload.normalize(HOST);

        let ids: Vec<_> = papers.iter().map(|p| p.arxiv_id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_wrapped_papers_of_wrong_type_is_empty() {
        let payload: ListingPayload = serde_json::from_value(json!({"papers": 5})).unwrap();
        assert!(payload.normalize(HOST).is_empty());
    }

    #[test]
    fn test_details_extras_pass_through() {
        let details = RawDetails::from_value(json!({
            "id": "2401.00001",
            "abstract": "Long form.",
            "relatedModels": [{"id": "org/model"}],
            "comments": "not-a-list"
        }))
        .unwrap()
        .normalize(HOST);

        assert_eq!(details.paper.arxiv_id, "2401.00001");
        assert_eq!(details.r#abstract.as_deref(), Some("Long form."));
        assert_eq!(details.related_models, Some(vec![json!({"id": "org/model"})]));
        assert!(details.comments.is_none());
    }

    #[test]
    fn test_wrapped_details_read_extras_from_inner_paper() {
        let details = RawDetails::from_value(json!({
            "paper": {"id": "1", "abstract": "Inner."},
            "numComments": 5
        }))
        .unwrap()
        .normalize(HOST);

        assert_eq!(details.r#abstract.as_deref(), Some("Inner."));
        assert_eq!(details.paper.num_comments, 5);
    }
}
