// SPDX-License-Identifier: MIT OR Apache-2.0

//! Installation-level filter conversions.

use skiff_api::{BlockedEmailDomain, BlockedRepository};
use skiff_protocol::{BlockedRepositoryRecord, EmailDomainFilterEntry};

use crate::{parse_timestamp, ApiConverter};

impl ApiConverter {
    /// A blocked repository pattern.
    #[must_use]
    pub fn to_blocked_repository(&self, record: &BlockedRepositoryRecord) -> BlockedRepository {
        BlockedRepository {
            id: record.id,
            url_regexp: record.url_regexp.clone(),
            block_user: record.block_user,
            creation_time: parse_timestamp(&record.created_at),
            update_time: parse_timestamp(&record.updated_at),
        }
    }

    /// An email domain filter entry.
    ///
    /// The storage row has no id of its own; the public field stays empty.
    #[must_use]
    pub fn to_blocked_email_domain(&self, entry: &EmailDomainFilterEntry) -> BlockedEmailDomain {
        BlockedEmailDomain {
            id: String::new(),
            domain: entry.domain.clone(),
            negative: entry.negative,
        }
    }
}
