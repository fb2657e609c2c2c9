//! Normalized author model.

use serde::{Deserialize, Serialize};

/// Name used when neither the author nor the linked user carries one.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Handle used when no user handle can be resolved.
pub const UNKNOWN_HANDLE: &str = "unknown";

/// A paper author as displayed by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Upstream author record ID (may be empty).
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Resolved display name.
    #[serde(default)]
    pub name: String,

    /// Linked Hugging Face user.
    #[serde(default)]
    pub user: AuthorUser,
}

/// The Hugging Face account linked to an author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorUser {
    /// Absolute avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Full name.
    #[serde(default)]
    pub fullname: String,

    /// Account handle.
    #[serde(default)]
    pub name: String,

    /// Whether the account has a PRO subscription.
    #[serde(default)]
    pub is_pro: bool,
}

/// Normalize an avatar URL against the asset host.
///
/// Absolute URLs pass through, root-relative URLs are prefixed with `host`,
/// anything else yields no avatar.
#[must_use]
pub fn normalize_avatar_url(url: Option<&str>, host: &str) -> Option<String> {
    let url = url?;
    if url.starts_with("http") {
        Some(url.to_string())
    } else if url.starts_with('/') {
        Some(format!("{}{}", host.trim_end_matches('/'), url))
    } else {
        None
    }
}
