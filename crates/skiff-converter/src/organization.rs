// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organization and membership conversions.

use skiff_api::{Organization, OrganizationMember, OrganizationRole};
use skiff_protocol::{Organization as OrganizationRecord, OrgMemberInfo};

use crate::{parse_timestamp, ApiConverter, ConversionError};

impl ApiConverter {
    /// An organization as published to clients.
    #[must_use]
    pub fn to_organization(&self, org: &OrganizationRecord) -> Organization {
        Organization {
            id: org.id.clone(),
            name: org.name.clone(),
            slug: org.slug.clone().unwrap_or_default(),
            creation_time: parse_timestamp(&org.creation_time),
        }
    }

    /// A member of an organization.
    #[must_use]
    pub fn to_organization_member(&self, member: &OrgMemberInfo) -> OrganizationMember {
        OrganizationMember {
            user_id: member.user_id.clone(),
            role: self.to_org_member_role(&member.role),
            member_since: parse_timestamp(&member.member_since),
            avatar_url: member.avatar_url.clone().unwrap_or_default(),
            full_name: member.full_name.clone().unwrap_or_default(),
            email: member.primary_email.clone().unwrap_or_default(),
            owned_by_organization: member.owned_by_organization,
        }
    }

    /// Maps a stored role token onto the public enum.
    #[must_use]
    pub fn to_org_member_role(&self, role: &str) -> OrganizationRole {
        match role {
            "owner" => OrganizationRole::Owner,
            "member" => OrganizationRole::Member,
            _ => OrganizationRole::Unspecified,
        }
    }

    /// Maps a public role back onto its storage token.
    ///
    /// The unspecified member carries no information, so it cannot cross
    /// back into the domain.
    pub fn from_org_member_role(&self, role: OrganizationRole) -> Result<String, ConversionError> {
        match role {
            OrganizationRole::Owner => Ok("owner".to_string()),
            OrganizationRole::Member => Ok("member".to_string()),
            OrganizationRole::Unspecified => Err(ConversionError::UnspecifiedRole),
        }
    }
}
