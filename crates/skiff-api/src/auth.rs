// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auth provider messages.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A configured SCM auth provider, as visible to its owner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AuthProviderType,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2_config: Option<OAuth2Config>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AuthProviderOwner>,
}

/// Public description of a provider, safe for any authenticated user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthProviderDescription {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AuthProviderType,
    pub host: String,
    pub icon: String,
    pub description: String,
}

/// OAuth2 client credentials of a provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
}

/// Who owns a provider entry: an organization or a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "case", content = "value", rename_all = "camelCase")]
pub enum AuthProviderOwner {
    OrganizationId(String),
    OwnerId(String),
}

/// Kind of SCM system behind a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum AuthProviderType {
    #[default]
    #[serde(rename = "AUTH_PROVIDER_TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "AUTH_PROVIDER_TYPE_GITHUB")]
    Github,
    #[serde(rename = "AUTH_PROVIDER_TYPE_GITLAB")]
    Gitlab,
    #[serde(rename = "AUTH_PROVIDER_TYPE_BITBUCKET")]
    Bitbucket,
    #[serde(rename = "AUTH_PROVIDER_TYPE_BITBUCKET_SERVER")]
    BitbucketServer,
}
