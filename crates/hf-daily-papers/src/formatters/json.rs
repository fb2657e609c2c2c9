//! Compact JSON output for scripting.

use serde_json::{Value, json};

use crate::models::Paper;

/// Create a compact paper representation for JSON output.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.lookup_id(),
        "title": paper.title_or_default(),
        "publishedAt": paper.published_at,
        "upvotes": paper.upvotes,
        "comments": paper.num_comments,
        "arxiv": paper.arxiv_url(),
        "pdf": paper.pdf_url(),
    });

    if !paper.authors.is_empty() {
        obj["authors"] = json!(paper.authors.iter().map(|a| &a.name).collect::<Vec<_>>());
    }

    if let Some(github) = &paper.github_url {
        obj["github"] = json!(github);
    }

    if let Some(thumbnail) = &paper.thumbnail {
        obj["thumbnail"] = json!(thumbnail);
    }

    obj
}

/// Compact list output.
#[must_use]
pub fn compact_papers(papers: &[Paper]) -> Value {
    Value::Array(papers.iter().map(compact_paper).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    #[test]
    fn test_compact_paper() {
        let paper = Paper {
            id: "internal".into(),
            arxiv_id: "2401.00001".into(),
            title: "Test Paper".into(),
            upvotes: 42,
            authors: vec![Author {
                name: "Ada".into(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let compact = compact_paper(&paper);

        assert_eq!(compact["id"], "2401.00001");
        assert_eq!(compact["upvotes"], 42);
        assert_eq!(compact["authors"], json!(["Ada"]));
        assert_eq!(compact["pdf"], "https://arxiv.org/pdf/2401.00001.pdf");
        assert!(compact.get("github").is_none());
    }
}
