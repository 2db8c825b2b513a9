// SPDX-License-Identifier: MIT OR Apache-2.0

//! SCM artifact conversions: tokens, suggestions, SSH keys.

use skiff_api::{ScmToken, SshPublicKey, SuggestedRepository};
use skiff_protocol::{SuggestedRepositoryRecord, Token, UserSshPublicKey};

use crate::{parse_timestamp, ApiConverter};

impl ApiConverter {
    /// An SCM access token.
    ///
    /// Dates stay textual here: clients treat them as opaque refresh
    /// markers, not timestamps to compute with.
    #[must_use]
    pub fn to_scm_token(&self, token: &Token) -> ScmToken {
        ScmToken {
            value: token.value.clone(),
            username: token.username.clone(),
            id_token: token.id_token.clone(),
            refresh_token: token.refresh_token.clone(),
            scopes: token.scopes.clone(),
            update_date: token.update_date.clone(),
            expiry_date: token.expiry_date.clone(),
        }
    }

    /// A repository suggestion.
    #[must_use]
    pub fn to_suggested_repository(&self, record: &SuggestedRepositoryRecord) -> SuggestedRepository {
        SuggestedRepository {
            url: record.url.clone(),
            configuration_id: record.project_id.clone().unwrap_or_default(),
            configuration_name: record.project_name.clone().unwrap_or_default(),
            repo_name: record.repository_name.clone().unwrap_or_default(),
        }
    }

    /// A registered SSH public key. The owning user is implied by the
    /// request context and stripped from the public shape.
    #[must_use]
    pub fn to_ssh_public_key(&self, key: &UserSshPublicKey) -> SshPublicKey {
        SshPublicKey {
            id: key.id.clone(),
            name: key.name.clone(),
            key: key.key.clone(),
            fingerprint: key.fingerprint.clone(),
            creation_time: parse_timestamp(&key.creation_time),
            last_used_time: parse_timestamp(&key.last_used_time),
        }
    }
}
