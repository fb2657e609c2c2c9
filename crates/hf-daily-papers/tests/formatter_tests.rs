//! Output formatter tests over normalized records.

use chrono::{TimeZone, Utc};
use serde_json::json;

use hf_daily_papers::formatters::{self, text};
use hf_daily_papers::models::{Author, Paper, PaperDetails};

fn sample_paper() -> Paper {
    Paper {
        id: "abc".into(),
        arxiv_id: "2501.00042".into(),
        title: "Sparse Mixtures Revisited".into(),
        published_at: "2025-01-08T12:00:00.000Z".into(),
        summary: Some("We revisit sparse mixtures.".into()),
        upvotes: 1_300,
        num_comments: 4,
        authors: (1..=7)
            .map(|i| Author {
                name: format!("Author {i}"),
                ..Default::default()
            })
            .collect(),
        github_url: Some("https://github.com/o/r".into()),
        media_urls: Some(vec!["https://cdn/demo.mp4".into(), "https://cdn/fig.PNG".into()]),
        ..Default::default()
    }
}

#[test]
fn test_list_markdown_collapses_authors() {
    let now = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
    let output = formatters::format_papers_markdown("Trending", &[sample_paper()], now);

    assert!(output.starts_with("# Trending (1 papers)"));
    assert!(output.contains("Author 5 and 2 more"));
    assert!(output.contains("**Upvotes**: 1.3K"));
    assert!(output.contains("2 days ago"));
    assert!(output.contains("[GitHub](https://github.com/o/r)"));
}

#[test]
fn test_details_markdown_lists_everything() {
    let details = PaperDetails {
        paper: sample_paper(),
        r#abstract: Some("Full abstract.".into()),
        related_models: Some(vec![json!({"id": "m1"}), json!({"id": "m2"})]),
        related_spaces: Some(vec![]),
        ..Default::default()
    };
    let output = formatters::format_details_markdown(&details);

    assert!(output.contains("**Published**: January 08, 2025"));
    assert!(output.contains("Author 7"));
    assert!(output.contains("![preview](https://cdn/fig.PNG)"));
    assert!(output.contains("Full abstract."));
    assert!(output.contains("**Related**: Models: 2"));
    assert!(!output.contains("Spaces"));
}

#[test]
fn test_compact_json_uses_lookup_id() {
    let mut paper = sample_paper();
    paper.arxiv_id.clear();
    let value = formatters::compact_paper(&paper);

    assert_eq!(value["id"], "abc");
    assert_eq!(value["arxiv"], "https://arxiv.org/abs/abc");
    assert_eq!(value["authors"].as_array().map(Vec::len), Some(7));
}

#[test]
fn test_share_message() {
    let message = text::share_message(&sample_paper());
    assert_eq!(
        message,
        "Check out this paper:\n\nSparse Mixtures Revisited\nhttps://arxiv.org/abs/2501.00042"
    );
}
