// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workspace messages: metadata, desired spec, and observed status.
//!
//! `Workspace` is the largest message of the schema. Its three sub-structures
//! have different update cadences: `metadata` is written once at creation,
//! `spec` changes only through explicit user action, and `status` is rebuilt
//! from the latest instance on every conversion.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::envvar::EnvironmentVariable;

/// A dev workspace as published to clients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<WorkspaceMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<WorkspaceSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkspaceStatus>,
}

/// Creation-time facts about a workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMetadata {
    pub owner_id: String,
    pub organization_id: String,
    /// Configuration the workspace was launched from; empty when none.
    pub configuration_id: String,
    /// Display name, e.g. `"owner/repo - branch"`.
    pub name: String,
    pub pinned: bool,
    /// Context URL exactly as the user entered it.
    pub original_context_url: String,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

/// Desired configuration of a workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSpec {
    #[serde(rename = "type")]
    pub kind: WorkspaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<WorkspaceInitializer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitIdentity>,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub environment_variables: Vec<EnvironmentVariable>,
    pub admission: AdmissionLevel,
    /// Resource class the instances of this workspace run on.
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorReference>,
}

/// Git author identity configured inside the workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitIdentity {
    pub username: String,
    pub email: String,
}

/// Editor/IDE selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditorReference {
    pub name: String,
    /// `"latest"` or `"stable"`.
    pub version: String,
}

/// How workspace content is produced before the editor attaches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceInitializer {
    #[serde(default)]
    pub specs: Vec<InitializerSpec>,
}

/// One initializer step, keyed by content source kind.
///
/// The `case`/`value` pair is the published wire shape; the set of cases is
/// open-ended and grows with new context kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "case", content = "value", rename_all = "camelCase")]
pub enum InitializerSpec {
    /// Clone a git repository.
    Git(GitInitializer),
    /// Restore a content snapshot of an earlier workspace.
    Snapshot(SnapshotInitializer),
    /// Reuse the content a finished prebuild produced.
    Prebuild(PrebuildInitializer),
}

/// Git clone step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitInitializer {
    pub remote_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_remote_uri: Option<String>,
    /// Checkout directory relative to the workspace root.
    pub checkout_location: String,
    /// Extra git config applied after clone.
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// Snapshot restore step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInitializer {
    pub snapshot_id: String,
}

/// Prebuild reuse step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrebuildInitializer {
    pub prebuild_id: String,
    /// Git step to fall back to when the prebuild content is gone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitInitializer>,
}

/// Observed state of a workspace, derived from its latest instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStatus {
    /// Seconds component of the phase transition timestamp. Clients compare
    /// these values to detect stale reads; they carry no other meaning.
    pub status_version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<WorkspacePhase>,
    /// URL the editor is reachable at while the instance runs.
    pub workspace_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_status: Option<GitStatus>,
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<WorkspaceConditions>,
}

/// Lifecycle phase plus the moment it was entered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePhase {
    pub name: WorkspacePhaseName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
}

/// Auxiliary condition flags; empty strings mean the condition is clear.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConditions {
    pub failed: String,
    pub timeout: String,
}

/// Working-tree snapshot reported by the instance.
///
/// Field spelling (`uncommited`) is part of the published schema and must not
/// be corrected here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitStatus {
    pub clone_url: String,
    pub branch: String,
    pub latest_commit: String,
    #[serde(default)]
    pub uncommited_files: Vec<String>,
    #[serde(default)]
    pub total_uncommited_files: i32,
    #[serde(default)]
    pub unpushed_commits: Vec<String>,
    #[serde(default)]
    pub total_unpushed_commits: i32,
    #[serde(default)]
    pub untracked_files: Vec<String>,
    #[serde(default)]
    pub total_untracked_files: i32,
}

/// A declared or observed network port.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub port: u64,
    pub admission: AdmissionLevel,
    /// Externally reachable URL; empty until the instance serves the port.
    pub url: String,
    pub protocol: PortProtocol,
}

/// Workspace lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum WorkspacePhaseName {
    #[default]
    #[serde(rename = "PHASE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "PHASE_PREPARING")]
    Preparing,
    #[serde(rename = "PHASE_IMAGEBUILD")]
    ImageBuild,
    #[serde(rename = "PHASE_PENDING")]
    Pending,
    #[serde(rename = "PHASE_CREATING")]
    Creating,
    #[serde(rename = "PHASE_INITIALIZING")]
    Initializing,
    #[serde(rename = "PHASE_RUNNING")]
    Running,
    #[serde(rename = "PHASE_INTERRUPTED")]
    Interrupted,
    #[serde(rename = "PHASE_STOPPING")]
    Stopping,
    #[serde(rename = "PHASE_STOPPED")]
    Stopped,
}

/// Regular interactive workspace or headless prebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum WorkspaceType {
    #[default]
    #[serde(rename = "WORKSPACE_TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "WORKSPACE_TYPE_REGULAR")]
    Regular,
    #[serde(rename = "WORKSPACE_TYPE_PREBUILD")]
    Prebuild,
}

/// Who may access a workspace or port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum AdmissionLevel {
    #[default]
    #[serde(rename = "ADMISSION_LEVEL_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "ADMISSION_LEVEL_OWNER_ONLY")]
    OwnerOnly,
    #[serde(rename = "ADMISSION_LEVEL_EVERYONE")]
    Everyone,
}

/// Protocol a port is served over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum PortProtocol {
    #[default]
    #[serde(rename = "PROTOCOL_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "PROTOCOL_HTTP")]
    Http,
    #[serde(rename = "PROTOCOL_HTTPS")]
    Https,
}
