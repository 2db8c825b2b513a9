// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auth provider conversions.

use skiff_api::{
    AuthProvider, AuthProviderDescription, AuthProviderOwner, AuthProviderType, OAuth2Config,
};
use skiff_protocol::{AuthProviderEntry, AuthProviderInfo};

use crate::ApiConverter;

impl ApiConverter {
    /// An auth provider entry as published on the admin surface.
    #[must_use]
    pub fn to_auth_provider(&self, entry: &AuthProviderEntry) -> AuthProvider {
        AuthProvider {
            id: entry.id.clone(),
            kind: self.to_auth_provider_type(&entry.kind),
            host: entry.host.clone(),
            oauth2_config: Some(OAuth2Config {
                client_id: entry.oauth.client_id.clone(),
                client_secret: entry.oauth.client_secret.clone(),
            }),
            owner: Some(match &entry.organization_id {
                Some(org) if !org.is_empty() => AuthProviderOwner::OrganizationId(org.clone()),
                _ => AuthProviderOwner::OwnerId(entry.owner_id.clone()),
            }),
        }
    }

    /// The descriptive view of a provider shown on login screens.
    #[must_use]
    pub fn to_auth_provider_description(&self, info: &AuthProviderInfo) -> AuthProviderDescription {
        AuthProviderDescription {
            id: info.auth_provider_id.clone(),
            kind: self.to_auth_provider_type(&info.auth_provider_type),
            host: info.host.clone(),
            icon: info.icon.clone().unwrap_or_default(),
            description: info.description.clone().unwrap_or_default(),
        }
    }

    /// Maps a canonical provider token onto the public enum.
    ///
    /// Matching is exact; the tokens are canonical spellings, not free
    /// text. Anything else (including `"Other"`) is unspecified.
    #[must_use]
    pub fn to_auth_provider_type(&self, raw: &str) -> AuthProviderType {
        match raw {
            "GitHub" => AuthProviderType::Github,
            "GitLab" => AuthProviderType::Gitlab,
            "Bitbucket" => AuthProviderType::Bitbucket,
            "BitbucketServer" => AuthProviderType::BitbucketServer,
            _ => AuthProviderType::Unspecified,
        }
    }
}
