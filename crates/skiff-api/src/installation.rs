// SPDX-License-Identifier: MIT OR Apache-2.0

//! Installation-wide admin messages: abuse filter rules.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A repository URL pattern blocked across the installation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockedRepository {
    pub id: u32,
    pub url_regexp: String,
    /// Also block the user who tries to open the repository.
    pub block_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// An email domain filter rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockedEmailDomain {
    pub id: String,
    pub domain: String,
    /// Negated rules allow a domain an earlier rule would block.
    pub negative: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_repository_field_names() {
        let rule = BlockedRepository {
            id: 2023,
            url_regexp: "*/*".into(),
            block_user: false,
            ..Default::default()
        };
        let v = serde_json::to_value(&rule).unwrap();
        assert_eq!(v["urlRegexp"], "*/*");
        assert_eq!(v["blockUser"], false);
        assert!(v.get("creationTime").is_none());
    }
}
