//! Workspace records and the context they were created from.

use crate::envvar::EnvVarWithValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A workspace as stored by the data layer.
///
/// `kind` is the raw storage token (`"regular"` or `"prebuild"`); phases and
/// other lifecycle state live on the [`WorkspaceInstance`](crate::instance::WorkspaceInstance)
/// records, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Workspace {
    pub id: String,
    pub owner_id: String,
    pub organization_id: String,

    /// Project this workspace was started from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Human-readable description, e.g. `"owner/repo - branch"`.
    pub description: String,

    /// Context URL exactly as the user entered it.
    pub context_url: String,

    /// Resolved creation context.
    pub context: WorkspaceContext,

    /// Repository clone URL the workspace content came from.
    pub clone_url: String,

    /// RFC3339 creation timestamp.
    pub creation_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,

    /// Storage token: `"regular"` or `"prebuild"`.
    #[serde(default)]
    pub kind: String,

    /// Resolved `skiff.yml` configuration.
    #[serde(default)]
    pub config: WorkspaceConfig,
}

/// Resolved workspace configuration (the parts the API layer cares about).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,

    /// Base image reference, if the config pins one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One task entry from `skiff.yml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaskConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_mode: Option<String>,
}

/// What a workspace was created from, keyed by context kind.
///
/// The tag is part of the internal wire format. New kinds extend this enum;
/// consumers must treat the set as open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkspaceContext {
    /// A git repository, optionally at a specific ref/revision.
    Git(GitWorkspaceContext),
    /// A content snapshot of an earlier workspace.
    Snapshot(SnapshotWorkspaceContext),
    /// A finished prebuild, which wraps the git context it was built from.
    Prebuild(PrebuildWorkspaceContext),
}

impl WorkspaceContext {
    /// Display title of the context.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            WorkspaceContext::Git(c) => &c.title,
            WorkspaceContext::Snapshot(c) => &c.title,
            WorkspaceContext::Prebuild(c) => &c.git.title,
        }
    }

    /// Ephemeral environment variables attached to the context.
    #[must_use]
    pub fn env_vars(&self) -> &[EnvVarWithValue] {
        match self {
            WorkspaceContext::Git(c) => &c.env_vars,
            WorkspaceContext::Snapshot(c) => &c.env_vars,
            WorkspaceContext::Prebuild(c) => &c.git.env_vars,
        }
    }
}

/// Git creation context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct GitWorkspaceContext {
    pub title: String,

    /// Canonical form of the context URL (no trailing `.git`, no query).
    pub normalized_context_url: String,

    /// Ref the workspace was opened on, e.g. a branch name.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,

    /// What `ref` points at: `"branch"`, `"tag"`, or `"revision"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,

    /// Commit the context resolved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    pub repository: RepositoryInfo,

    /// Checkout directory relative to the workspace root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_location: Option<String>,

    #[serde(default)]
    pub env_vars: Vec<EnvVarWithValue>,
}

/// Snapshot creation context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotWorkspaceContext {
    pub title: String,

    /// Storage bucket holding the snapshot content.
    pub snapshot_bucket_id: String,

    #[serde(default)]
    pub env_vars: Vec<EnvVarWithValue>,
}

/// Prebuild creation context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PrebuildWorkspaceContext {
    /// Workspace that produced the prebuild.
    pub prebuild_workspace_id: String,

    /// Git context the prebuild was built from.
    pub git: GitWorkspaceContext,
}

/// Repository metadata resolved by the SCM integration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RepositoryInfo {
    pub clone_url: String,
    pub host: String,
    pub owner: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub private: bool,
}
