//! Paper detail model and the navigation-time merge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Paper;

/// A paper with the richer fields of a detail lookup.
///
/// The extra lists are opaque upstream JSON; no normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDetails {
    /// Normalized paper fields.
    #[serde(flatten)]
    pub paper: Paper,

    /// Long-form abstract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,

    /// Discussion comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Value>>,

    /// Models citing this paper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_models: Option<Vec<Value>>,

    /// Datasets citing this paper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_datasets: Option<Vec<Value>>,

    /// Spaces citing this paper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_spaces: Option<Vec<Value>>,
}

impl From<Paper> for PaperDetails {
    fn from(paper: Paper) -> Self {
        Self {
            paper,
            ..Default::default()
        }
    }
}

impl PaperDetails {
    /// Parse a serialized paper handed over by navigation.
    pub fn from_route_param(param: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(param)
    }

    /// Text to show as the abstract: the long form if present, else the summary.
    #[must_use]
    pub fn abstract_or_summary(&self) -> Option<&str> {
        self.r#abstract.as_deref().or(self.paper.summary.as_deref())
    }

    /// Merge freshly fetched details under a record held since navigation.
    ///
    /// Every field present in `held` wins, except `null` and empty strings,
    /// which a serialized [`Paper`] uses for fields it never had. `arxivId` is the held
    /// value when non-empty, else the fetched `arxivId`, else the fetched `_id`.
    /// A `held` value that is not a JSON object leaves the fetched record as is.
    pub fn merged_under(self, held: &Value) -> Result<Self, serde_json::Error> {
        let Value::Object(held) = held else {
            return Ok(self);
        };

        let fetched_arxiv_id = if self.paper.arxiv_id.is_empty() {
            self.paper.id.clone()
        } else {
            self.paper.arxiv_id.clone()
        };

        let mut merged = match serde_json::to_value(&self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        for (key, value) in held {
            let absent = match value {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                _ => false,
            };
            if !absent {
                merged.insert(key.clone(), value.clone());
            }
        }

        let arxiv_id = held
            .get("arxivId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map_or(fetched_arxiv_id, str::to_string);
        merged.insert("arxivId".to_string(), Value::String(arxiv_id));

        serde_json::from_value(Value::Object(merged))
    }
}

/// Identifier a detail view should fetch.
///
/// Held `arxivId`, else held `_id`, else the explicit parameter; empty strings
/// fall through to the next candidate.
#[must_use]
pub fn resolve_lookup_id(held: Option<&Paper>, param: Option<&str>) -> Option<String> {
    held.into_iter()
        .flat_map(|p| [p.arxiv_id.as_str(), p.id.as_str()])
        .chain(param)
        .find(|id| !id.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fetched() -> PaperDetails {
        PaperDetails {
            paper: Paper {
                id: "internal-1".into(),
                arxiv_id: "2401.00001".into(),
                title: "Fetched title".into(),
                upvotes: 40,
                summary: Some("Fetched summary".into()),
                ..Default::default()
            },
            r#abstract: Some("Fetched abstract".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_held_fields_take_precedence() {
        let held = json!({"title": "Held title", "upvotes": 12});
        let merged = fetched().merged_under(&held).unwrap();

        assert_eq!(merged.paper.title, "Held title");
        assert_eq!(merged.paper.upvotes, 12);
        assert_eq!(merged.paper.summary.as_deref(), Some("Fetched summary"));
        assert_eq!(merged.r#abstract.as_deref(), Some("Fetched abstract"));
    }

    #[test]
    fn test_empty_held_strings_do_not_override() {
        let held = serde_json::to_value(Paper {
            id: "internal-1".into(),
            upvotes: 3,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(held["title"], "");
        assert_eq!(held["publishedAt"], "");

        let mut details = fetched();
        details.paper.published_at = "2025-01-06T12:00:00.000Z".into();
        let merged = details.merged_under(&held).unwrap();
        assert_eq!(merged.paper.title, "Fetched title");
        assert_eq!(merged.paper.published_at, "2025-01-06T12:00:00.000Z");
        assert_eq!(merged.paper.upvotes, 3);
    }

    #[test]
    fn test_arxiv_id_prefers_held_then_fetched() {
        let merged = fetched().merged_under(&json!({"arxivId": "2312.99999"})).unwrap();
        assert_eq!(merged.paper.arxiv_id, "2312.99999");

        let merged = fetched().merged_under(&json!({"arxivId": ""})).unwrap();
        assert_eq!(merged.paper.arxiv_id, "2401.00001");

        let mut no_arxiv = fetched();
        no_arxiv.paper.arxiv_id.clear();
        let merged = no_arxiv.merged_under(&json!({})).unwrap();
        assert_eq!(merged.paper.arxiv_id, "internal-1");
    }

    #[test]
    fn test_non_object_held_is_ignored() {
        let merged = fetched().merged_under(&Value::Null).unwrap();
        assert_eq!(merged, fetched());
    }

    #[test]
    fn test_resolve_lookup_id_order() {
        let held = Paper {
            id: "internal".into(),
            ..Default::default()
        };
        assert_eq!(resolve_lookup_id(Some(&held), Some("param")).as_deref(), Some("internal"));

        let held = Paper {
            id: "internal".into(),
            arxiv_id: "2401.1".into(),
            ..Default::default()
        };
        assert_eq!(resolve_lookup_id(Some(&held), None).as_deref(), Some("2401.1"));

        assert_eq!(resolve_lookup_id(None, Some("param")).as_deref(), Some("param"));
        assert_eq!(resolve_lookup_id(Some(&Paper::default()), Some("")), None);
    }

    #[test]
    fn test_route_param_roundtrip() {
        let param = serde_json::to_string(&fetched()).unwrap();
        let parsed = PaperDetails::from_route_param(&param).unwrap();
        assert_eq!(parsed, fetched());
    }
}
