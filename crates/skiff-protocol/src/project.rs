//! Project records. The public API calls these configurations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project: a repository registered with an organization.
///
/// `team_id` is the owning organization; the name predates the team-to-
/// organization rename and is kept for storage compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Project {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub clone_url: String,

    /// RFC3339 creation timestamp.
    pub creation_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProjectSettings>,
}

/// Settings attached to a project. All fields optional; absent means
/// "inherit the default".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProjectSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_classes: Option<WorkspaceClasses>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuilds: Option<PrebuildSettingsRecord>,
}

/// Per-use workspace class selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceClasses {
    /// Class for regular workspaces started from this project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<String>,
}

/// Prebuild settings as stored.
///
/// `branch_strategy` is a token: `"default-branch"`, `"all-branches"`, or
/// `"matched-branches"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PrebuildSettingsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_matching_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_strategy: Option<String>,

    /// Start a fresh prebuild every N commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuild_interval: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_class: Option<String>,
}

/// Partial update of a project, produced from a partial public
/// configuration. Only the fields that were explicitly present in the
/// request are set; the persistence layer merges it over the stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PartialProject {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProjectSettings>,
}
