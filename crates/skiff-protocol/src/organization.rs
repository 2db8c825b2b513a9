//! Organizations and their memberships.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An organization record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Organization {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// RFC3339 creation timestamp.
    pub creation_time: String,
}

/// Membership of a user in an organization.
///
/// `role` is the storage token (`"owner"` or `"member"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrgMemberInfo {
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    pub role: String,

    /// RFC3339 timestamp of when the user joined.
    pub member_since: String,

    /// Whether the organization is the user's single-member home org.
    #[serde(default)]
    pub owned_by_organization: bool,
}
