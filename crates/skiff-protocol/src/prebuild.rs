//! Prebuild records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata of a prebuild run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrebuildInfo {
    pub id: String,

    /// Headless workspace that executed the prebuild.
    pub build_workspace_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// RFC3339 timestamp the prebuild started.
    pub started_at: String,

    pub branch: String,
    pub clone_url: String,

    /// Author of the commit that triggered the prebuild.
    #[serde(default)]
    pub change_author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_author_avatar: Option<String>,

    /// RFC3339 commit date.
    #[serde(default)]
    pub change_date: String,

    /// Commit hash.
    #[serde(default)]
    pub change_hash: String,

    /// Commit title (first line of the message).
    #[serde(default)]
    pub change_title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_url: Option<String>,
}

/// A prebuild with its current state.
///
/// `status` is a phase token: `"queued"`, `"building"`, `"aborted"`,
/// `"timeout"`, `"available"`, or `"failed"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrebuildWithStatus {
    pub info: PrebuildInfo,
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
