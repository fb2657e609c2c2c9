//! Output formatters (Markdown and JSON) and shared display helpers.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{compact_paper, compact_papers};
pub use markdown::{format_details_markdown, format_paper_card, format_papers_markdown};
