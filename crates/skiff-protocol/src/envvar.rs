//! Environment variable records in their three flavors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An ephemeral name/value pair attached to a workspace context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct EnvVarWithValue {
    pub name: String,
    pub value: String,
}

/// A user-scoped environment variable, applied to repositories matching
/// `repository_pattern` (e.g. `"acme/*"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserEnvVarValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub value: String,
    pub repository_pattern: String,
}

/// A project-scoped environment variable. The value itself never leaves the
/// data layer; `censored` controls whether workspaces may read it or only
/// prebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectEnvVar {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub censored: bool,
}
