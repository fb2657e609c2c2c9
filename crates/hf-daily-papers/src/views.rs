//! Client-derived views over the daily listing.
//!
//! "Trending" is the daily listing re-sorted by upvotes; there is no upstream
//! ranking behind it.

use std::cmp::Reverse;

use crate::models::Paper;

/// Sort by upvotes, highest first. Ties keep upstream order.
#[must_use]
pub fn trending(mut papers: Vec<Paper>) -> Vec<Paper> {
    papers.sort_by_key(|p| Reverse(p.upvotes));
    papers
}

/// Sort by publish timestamp, newest first.
///
/// Timestamps without an offset count as UTC. Unparsable timestamps sort after
/// every parsable one, keeping upstream order among themselves.
#[must_use]
pub fn recent(mut papers: Vec<Paper>) -> Vec<Paper> {
    papers.sort_by_cached_key(|p| Reverse(p.published().map(|t| t.timestamp_millis())));
    papers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, upvotes: u64, published_at: &str) -> Paper {
        Paper {
            id: id.to_string(),
            upvotes,
            published_at: published_at.to_string(),
            ..Default::default()
        }
    }

    fn ids(papers: &[Paper]) -> Vec<&str> {
        papers.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_trending_is_stable() {
        let sorted = trending(vec![
            paper("a", 5, ""),
            paper("b", 9, ""),
            paper("c", 5, ""),
            paper("d", 0, ""),
            paper("e", 9, ""),
        ]);
        assert_eq!(ids(&sorted), ["b", "e", "a", "c", "d"]);
    }

    #[test]
    fn test_recent_orders_by_timestamp() {
        let sorted = recent(vec![
            paper("old", 0, "2024-01-01T00:00:00.000Z"),
            paper("bad", 0, "not a date"),
            paper("new", 0, "2024-03-01T08:00:00+02:00"),
            paper("mid", 0, "2024-02-01T00:00:00Z"),
        ]);
        assert_eq!(ids(&sorted), ["new", "mid", "old", "bad"]);
    }

    #[test]
    fn test_recent_places_naive_timestamps_among_dated() {
        let sorted = recent(vec![
            paper("bad", 0, "yesterday"),
            paper("date-only", 0, "2024-02-15"),
            paper("offset", 0, "2024-03-01T00:00:00Z"),
            paper("naive", 0, "2024-01-20 09:30:00"),
        ]);
        assert_eq!(ids(&sorted), ["offset", "date-only", "naive", "bad"]);
    }
}
