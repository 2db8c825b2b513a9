// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration (project) messages, including the partial-update shape.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A repository configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub clone_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_settings: Option<WorkspaceSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuild_settings: Option<PrebuildSettings>,
}

/// Workspace defaults a configuration applies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    pub workspace_class: String,
}

/// Prebuild behavior of a configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrebuildSettings {
    pub enabled: bool,
    pub branch_matching_pattern: String,
    pub branch_strategy: BranchMatchingStrategy,
    /// Run a prebuild every n-th commit on the matched branches.
    pub prebuild_interval: u32,
    pub workspace_class: String,
}

/// Which branches prebuilds run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum BranchMatchingStrategy {
    #[default]
    #[serde(rename = "BRANCH_MATCHING_STRATEGY_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "BRANCH_MATCHING_STRATEGY_DEFAULT_BRANCH")]
    DefaultBranch,
    #[serde(rename = "BRANCH_MATCHING_STRATEGY_ALL_BRANCHES")]
    AllBranches,
    #[serde(rename = "BRANCH_MATCHING_STRATEGY_MATCHED_BRANCHES")]
    MatchedBranches,
}

/// Partial-update request shape: `id` addresses the configuration, every
/// other field is applied only when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfiguration {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_settings: Option<PartialWorkspaceSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuild_settings: Option<PartialPrebuildSettings>,
}

/// Partial form of [`WorkspaceSettings`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartialWorkspaceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_class: Option<String>,
}

/// Partial form of [`PrebuildSettings`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartialPrebuildSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_matching_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_strategy: Option<BranchMatchingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuild_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_class: Option<String>,
}
