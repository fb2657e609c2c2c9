//! Small display helpers shared by the formatters.

use chrono::{DateTime, TimeZone};

use crate::models::Paper;

const INTERVALS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".webp", ".gif"];

/// Truncate to at most `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Compact count: `999`, `1.5K`, `2.0M`.
#[must_use]
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Relative age such as `3 days ago`, or `just now` under a minute.
#[must_use]
pub fn time_ago<Tz1, Tz2>(then: &DateTime<Tz1>, now: &DateTime<Tz2>) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let seconds = now.timestamp() - then.timestamp();

    INTERVALS
        .iter()
        .find_map(|(unit, secs)| {
            let count = seconds / secs;
            (count >= 1).then(|| format!("{count} {unit}{} ago", if count > 1 { "s" } else { "" }))
        })
        .unwrap_or_else(|| "just now".to_string())
}

/// Long-form publish date (`January 05, 2025`), or the raw string if unparsable.
#[must_use]
pub fn display_date(paper: &Paper) -> String {
    paper
        .published()
        .map(|t| t.format("%B %d, %Y").to_string())
        .unwrap_or_else(|| paper.published_at.clone())
}

/// Media URLs that point at images.
#[must_use]
pub fn image_media(paper: &Paper) -> Vec<&str> {
    paper
        .media_urls
        .iter()
        .flatten()
        .map(String::as_str)
        .filter(|url| {
            let lower = url.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
        })
        .collect()
}

/// Text for sharing a paper.
#[must_use]
pub fn share_message(paper: &Paper) -> String {
    format!("Check out this paper:\n\n{}\n{}", paper.title_or_default(), paper.arxiv_url())
}
