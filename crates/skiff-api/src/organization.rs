// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organization and membership messages.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An organization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
}

/// One member of an organization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    pub user_id: String,
    pub role: OrganizationRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<DateTime<Utc>>,
    pub avatar_url: String,
    pub full_name: String,
    pub email: String,
    /// True when the user account is owned by this organization.
    pub owned_by_organization: bool,
}

/// Role of a member within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum OrganizationRole {
    #[default]
    #[serde(rename = "ORGANIZATION_ROLE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "ORGANIZATION_ROLE_OWNER")]
    Owner,
    #[serde(rename = "ORGANIZATION_ROLE_MEMBER")]
    Member,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tokens() {
        let v = serde_json::to_value(OrganizationRole::Owner).unwrap();
        assert_eq!(v, "ORGANIZATION_ROLE_OWNER");
        let v = serde_json::to_value(OrganizationRole::Unspecified).unwrap();
        assert_eq!(v, "ORGANIZATION_ROLE_UNSPECIFIED");
    }

    #[test]
    fn member_omits_unset_member_since() {
        let member = OrganizationMember {
            user_id: "u-1".into(),
            role: OrganizationRole::Member,
            ..Default::default()
        };
        let v = serde_json::to_value(&member).unwrap();
        assert!(v.get("memberSince").is_none());
        assert_eq!(v["ownedByOrganization"], false);
    }
}
