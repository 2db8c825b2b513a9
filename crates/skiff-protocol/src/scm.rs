//! SCM artifacts: tokens, repository suggestions, SSH keys.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An SCM access token held for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub scopes: Vec<String>,

    /// RFC3339 timestamp of the last refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<String>,

    /// RFC3339 expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// A repository suggested to the user (recently used, or registered as a
/// project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestedRepositoryRecord {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
}

/// An SSH public key registered by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserSshPublicKey {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub key: String,
    pub fingerprint: String,

    /// RFC3339 creation timestamp.
    pub creation_time: String,

    /// RFC3339 timestamp of last use, empty when never used.
    #[serde(default)]
    pub last_used_time: String,
}
