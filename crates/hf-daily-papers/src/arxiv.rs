//! arXiv link builders and identifier helpers.

use std::sync::LazyLock;

use regex::Regex;

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}\.\d{4,5}$").expect("valid arXiv id pattern")
});

static URL_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [r"arxiv\.org/abs/(\d{4}\.\d{4,5})", r"arxiv\.org/pdf/(\d{4}\.\d{4,5})"]
        .map(|p| Regex::new(p).expect("valid arXiv url pattern"))
});

/// arXiv abstract page for `id`. No validation is performed.
#[must_use]
pub fn abs_url(id: &str) -> String {
    format!("https://arxiv.org/abs/{id}")
}

/// arXiv PDF for `id`. No validation is performed.
#[must_use]
pub fn pdf_url(id: &str) -> String {
    format!("https://arxiv.org/pdf/{id}.pdf")
}

/// Whether `id` looks like a modern arXiv identifier (`YYMM.NNNNN`).
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// Extract the identifier from an arXiv abstract or PDF URL.
#[must_use]
pub fn extract_id(url: &str) -> Option<String> {
    URL_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Accept either a bare identifier or an arXiv URL.
#[must_use]
pub fn lookup_id(input: &str) -> String {
    let input = input.trim();
    extract_id(input).unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builders() {
        assert_eq!(abs_url("2401.12345"), "https://arxiv.org/abs/2401.12345");
        assert_eq!(pdf_url("2401.12345"), "https://arxiv.org/pdf/2401.12345.pdf");
        assert_eq!(pdf_url("not an id"), "https://arxiv.org/pdf/not an id.pdf");
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id("2401.1234"));
        assert!(is_valid_id("2401.12345"));
        assert!(!is_valid_id("2401.123"));
        assert!(!is_valid_id("2401.12345v2"));
        assert!(!is_valid_id("hep-th/9901001"));
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(extract_id("https://arxiv.org/abs/2401.12345").as_deref(), Some("2401.12345"));
        assert_eq!(
            extract_id("https://arxiv.org/pdf/2401.12345.pdf").as_deref(),
            Some("2401.12345")
        );
        assert_eq!(extract_id("https://example.com/2401.12345"), None);
    }

    #[test]
    fn test_lookup_id() {
        assert_eq!(lookup_id(" https://arxiv.org/abs/2401.12345 "), "2401.12345");
        assert_eq!(lookup_id("2401.12345"), "2401.12345");
    }
}
