// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prebuild messages.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A prebuild run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prebuild {
    pub id: String,
    /// Headless workspace that executed the prebuild.
    pub workspace_id: String,
    pub configuration_id: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
    pub context_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PrebuildStatus>,
}

/// Current state of a prebuild run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrebuildStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<PrebuildPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Failure message; absent unless the run failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Phase wrapper, mirroring the nested message of the published schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrebuildPhase {
    pub name: PrebuildPhaseName,
}

/// Prebuild lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum PrebuildPhaseName {
    #[default]
    #[serde(rename = "PHASE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "PHASE_QUEUED")]
    Queued,
    #[serde(rename = "PHASE_BUILDING")]
    Building,
    #[serde(rename = "PHASE_ABORTED")]
    Aborted,
    #[serde(rename = "PHASE_TIMEOUT")]
    Timeout,
    #[serde(rename = "PHASE_AVAILABLE")]
    Available,
    #[serde(rename = "PHASE_FAILED")]
    Failed,
}

/// The commit a prebuild was triggered for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_date: Option<DateTime<Utc>>,
    pub sha: String,
}

/// Commit author display data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub avatar_url: String,
}
