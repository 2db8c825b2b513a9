//! Installation-level filter records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A repository pattern that is blocked installation-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BlockedRepositoryRecord {
    /// Numeric row id.
    pub id: u32,

    /// Regular expression matched against context URLs.
    pub url_regexp: String,

    /// Whether users opening a matching repository get blocked themselves.
    pub block_user: bool,

    /// RFC3339 creation timestamp.
    pub created_at: String,

    /// RFC3339 last-update timestamp.
    pub updated_at: String,
}

/// An email domain filter entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmailDomainFilterEntry {
    pub domain: String,

    /// `true` blocks the domain, `false` allow-lists it.
    pub negative: bool,
}
