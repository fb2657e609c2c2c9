//! Data models for the daily papers feed.
//!
//! Normalized models serialize in the upstream camelCase shape so they can be
//! handed between views as JSON. Upstream payloads are decoded through the
//! explicit input shapes in [`raw`].

mod author;
mod details;
mod paper;
pub mod raw;

pub use author::{Author, AuthorUser, UNKNOWN_AUTHOR, UNKNOWN_HANDLE, normalize_avatar_url};
pub use details::{PaperDetails, resolve_lookup_id};
pub use paper::{DailyPapers, Paper, SearchResults, SubmittedBy};
pub use raw::{ListingPayload, RawDetails, RawListing};
