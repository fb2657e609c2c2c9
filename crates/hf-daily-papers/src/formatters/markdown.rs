//! Markdown output formatting.

use chrono::{DateTime, Utc};

use super::text::{display_date, format_count, image_media, time_ago, truncate};
use crate::models::{Paper, PaperDetails};

/// Summary length in list views.
const SUMMARY_PREVIEW_CHARS: usize = 300;

/// Authors shown before collapsing into "and N more".
const AUTHOR_PREVIEW: usize = 5;

/// Format a list of papers as Markdown.
#[must_use]
pub fn format_papers_markdown(heading: &str, papers: &[Paper], now: DateTime<Utc>) -> String {
    if papers.is_empty() {
        return "No papers available.".to_string();
    }

    let mut output = format!("# {} ({} papers)\n\n", heading, papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_card(paper, i + 1, now));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single list entry.
#[must_use]
pub fn format_paper_card(paper: &Paper, index: usize, now: DateTime<Utc>) -> String {
    let mut output = format!("## {}. {}\n\n", index, paper.title_or_default());

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", author_line(paper, AUTHOR_PREVIEW)));
    }

    let mut meta = vec![
        format!("**Upvotes**: {}", format_count(paper.upvotes)),
        format!("**Comments**: {}", format_count(paper.num_comments)),
    ];
    if let Some(published) = paper.published() {
        meta.push(format!("**Published**: {}", time_ago(&published, &now)));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    output.push_str(&format!("**Links**: {}\n\n", links(paper)));

    if let Some(summary) = &paper.summary {
        output.push_str(&format!("{}\n", truncate(summary, SUMMARY_PREVIEW_CHARS)));
    }

    output
}

/// Format a paper detail page.
#[must_use]
pub fn format_details_markdown(details: &PaperDetails) -> String {
    let paper = &details.paper;
    let mut output = format!("# {}\n\n", paper.title_or_default());

    if !paper.published_at.is_empty() {
        output.push_str(&format!("**Published**: {}\n\n", display_date(paper)));
    }

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", author_line(paper, usize::MAX)));
    }

    if let Some(submitter) = &paper.submitted_by {
        output.push_str(&format!(
            "**Submitted by**: {} (@{})\n\n",
            submitter.fullname, submitter.name
        ));
    }

    output.push_str(&format!(
        "**Upvotes**: {} | **Comments**: {}\n\n",
        format_count(paper.upvotes),
        format_count(paper.num_comments)
    ));

    output.push_str(&format!("**Links**: {}\n\n", links(paper)));

    let images = image_media(paper);
    if let Some(first) = images.first().copied().or(paper.thumbnail.as_deref()) {
        output.push_str(&format!("![preview]({first})\n\n"));
    }

    if let Some(text) = details.abstract_or_summary() {
        output.push_str(&format!("## Abstract\n\n{text}\n\n"));
    }

    let related = [
        ("Models", &details.related_models),
        ("Datasets", &details.related_datasets),
        ("Spaces", &details.related_spaces),
    ];
    let counts: Vec<String> = related
        .into_iter()
        .filter_map(|(label, items)| {
            items.as_ref().filter(|v| !v.is_empty()).map(|v| format!("{label}: {}", v.len()))
        })
        .collect();
    if !counts.is_empty() {
        output.push_str(&format!("**Related**: {}\n", counts.join(" | ")));
    }

    output
}

fn author_line(paper: &Paper, limit: usize) -> String {
    let shown: Vec<&str> = paper.authors.iter().take(limit).map(|a| a.name.as_str()).collect();
    let hidden = paper.authors.len().saturating_sub(shown.len());
    if hidden > 0 {
        format!("{} and {} more", shown.join(", "), hidden)
    } else {
        shown.join(", ")
    }
}

fn links(paper: &Paper) -> String {
    let mut links = vec![
        format!("[arXiv]({})", paper.arxiv_url()),
        format!("[PDF]({})", paper.pdf_url()),
    ];
    if let Some(github) = &paper.github_url {
        links.push(format!("[GitHub]({github})"));
    }
    links.join(" | ")
}
