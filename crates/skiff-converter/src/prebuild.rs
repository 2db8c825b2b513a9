// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prebuild conversions.

use skiff_api::{Author, Commit, Prebuild, PrebuildPhase, PrebuildPhaseName, PrebuildStatus};
use skiff_protocol::PrebuildWithStatus;

use crate::{parse_timestamp, ApiConverter};

impl ApiConverter {
    /// A prebuild run as published to clients.
    #[must_use]
    pub fn to_prebuild(&self, prebuild: &PrebuildWithStatus) -> Prebuild {
        let info = &prebuild.info;
        Prebuild {
            id: info.id.clone(),
            workspace_id: info.build_workspace_id.clone(),
            configuration_id: info.project_id.clone().unwrap_or_default(),
            ref_name: info.branch.clone(),
            commit: Some(Commit {
                message: info.change_title.clone(),
                author: Some(Author {
                    name: info.change_author.clone(),
                    avatar_url: info.change_author_avatar.clone().unwrap_or_default(),
                }),
                author_date: parse_timestamp(&info.change_date),
                sha: info.change_hash.clone(),
            }),
            context_url: info.change_url.clone().unwrap_or_default(),
            status: Some(PrebuildStatus {
                phase: Some(PrebuildPhase {
                    name: self.to_prebuild_phase(&prebuild.status),
                }),
                start_time: parse_timestamp(&info.started_at),
                message: prebuild.error.clone(),
            }),
        }
    }

    /// Maps a stored prebuild state token onto the public phase enum.
    #[must_use]
    pub fn to_prebuild_phase(&self, status: &str) -> PrebuildPhaseName {
        match status {
            "queued" => PrebuildPhaseName::Queued,
            "building" => PrebuildPhaseName::Building,
            "aborted" => PrebuildPhaseName::Aborted,
            "timeout" => PrebuildPhaseName::Timeout,
            "available" => PrebuildPhaseName::Available,
            "failed" => PrebuildPhaseName::Failed,
            _ => PrebuildPhaseName::Unspecified,
        }
    }
}
