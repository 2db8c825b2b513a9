//! Workspace instance records: one row per (attempted) start of a workspace.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single run of a workspace.
///
/// Timestamps are RFC3339 text and only `creation_time` is guaranteed; the
/// started/stopping/stopped triple fills in as the instance moves through its
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceInstance {
    pub id: String,
    pub workspace_id: String,

    #[serde(default)]
    pub region: String,

    pub creation_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopping_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped_time: Option<String>,

    /// URL the IDE is served on while the instance runs.
    #[serde(default)]
    pub ide_url: String,

    /// Workspace class the instance was scheduled on.
    #[serde(default)]
    pub workspace_class: String,

    #[serde(default)]
    pub status: WorkspaceInstanceStatus,

    /// Git working-copy state persisted when the instance stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_status: Option<InstanceGitStatus>,

    /// Last phase written to storage (survives the live status).
    #[serde(default)]
    pub phase_persisted: String,

    #[serde(default)]
    pub configuration: WorkspaceInstanceConfiguration,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_attribution_id: Option<String>,
}

/// Live status reported by the workspace manager.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceInstanceStatus {
    /// Phase token, e.g. `"creating"`, `"running"`, `"stopped"`.
    #[serde(default)]
    pub phase: String,

    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Monotonic status version from the workspace manager.
    #[serde(default)]
    pub version: u64,

    #[serde(default)]
    pub conditions: InstanceConditions,

    #[serde(default)]
    pub exposed_ports: Vec<InstancePort>,

    /// Live git working-copy state, when the supervisor reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<InstanceGitStatus>,
}

/// Condition flags on an instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct InstanceConditions {
    /// Failure message, empty when the instance is healthy.
    #[serde(default)]
    pub failed: String,

    /// Timeout message, empty unless the instance timed out.
    #[serde(default)]
    pub timeout: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped_by_request: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_user_activity: Option<String>,
}

/// A port the instance exposes.
///
/// `visibility` and `protocol` are free-form tokens from the workspace
/// manager; the converter normalizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InstancePort {
    pub port: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Git working-copy state of an instance.
///
/// Every field is optional: a report only carries what changed, and the
/// converter overlays it onto the previous public value. `None` means "no
/// statement", which is different from an explicitly empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct InstanceGitStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_commit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncommited_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpushed_commits: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untracked_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_uncommited_files: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_unpushed_commits: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_untracked_files: Option<u32>,
}

/// Configuration the instance was started with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceInstanceConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ide_config: Option<IdeConfig>,

    #[serde(default)]
    pub from_backup: bool,

    #[serde(default)]
    pub feature_flags: Vec<String>,
}

/// Editor selection for an instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct IdeConfig {
    /// Editor name token, e.g. `"code"`.
    #[serde(default)]
    pub ide: String,

    /// Whether the latest (as opposed to stable) editor build was requested.
    #[serde(default)]
    pub use_latest: bool,
}
