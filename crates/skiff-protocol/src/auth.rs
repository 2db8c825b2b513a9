//! Auth provider records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A configured auth provider (installation-wide, user-owned, or
/// organization-owned).
///
/// `kind` is the canonical provider token: `"GitHub"`, `"GitLab"`,
/// `"Bitbucket"`, or `"BitbucketServer"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuthProviderEntry {
    pub id: String,
    pub kind: String,
    pub host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    pub owner_id: String,

    /// Set when the provider belongs to an organization rather than a user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    #[serde(default)]
    pub oauth: OAuth2ConfigRecord,
}

/// OAuth2 client configuration of a provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct OAuth2ConfigRecord {
    #[serde(default)]
    pub client_id: String,

    #[serde(default)]
    pub client_secret: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
}

/// Descriptive view of an auth provider, as shown on login screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuthProviderInfo {
    pub auth_provider_id: String,

    /// Provider token, same vocabulary as [`AuthProviderEntry::kind`].
    pub auth_provider_type: String,

    pub host: String,

    #[serde(default)]
    pub verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}
