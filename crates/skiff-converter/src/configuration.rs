// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration (project) conversions, both directions.
//!
//! The forward direction fills defaults so clients always see a complete
//! settings object. The reverse direction is the partial-update path and
//! does the opposite: only fields explicitly present in the request cross,
//! so the persistence layer can distinguish "unset" from "set to default".

use skiff_api::{
    BranchMatchingStrategy, Configuration, PartialConfiguration, PrebuildSettings,
    WorkspaceSettings,
};
use skiff_protocol::{
    PartialProject, PrebuildSettingsRecord, Project, ProjectSettings, WorkspaceClasses,
};

use crate::{parse_timestamp, ApiConverter};

/// Interval applied when a configuration enables prebuilds without
/// choosing one.
const DEFAULT_PREBUILD_INTERVAL: u32 = 20;

impl ApiConverter {
    /// A project as published to clients, under its public name.
    #[must_use]
    pub fn to_configuration(&self, project: &Project) -> Configuration {
        let settings = project.settings.as_ref();
        Configuration {
            id: project.id.clone(),
            organization_id: project.team_id.clone(),
            name: project.name.clone(),
            clone_url: project.clone_url.clone(),
            creation_time: parse_timestamp(&project.creation_time),
            workspace_settings: Some(self.to_workspace_settings(
                settings
                    .and_then(|s| s.workspace_classes.as_ref())
                    .and_then(|c| c.regular.as_deref()),
            )),
            prebuild_settings: Some(self.to_prebuild_settings(settings.and_then(|s| s.prebuilds.as_ref()))),
        }
    }

    /// Workspace defaults of a configuration.
    #[must_use]
    pub fn to_workspace_settings(&self, workspace_class: Option<&str>) -> WorkspaceSettings {
        WorkspaceSettings {
            workspace_class: workspace_class.unwrap_or_default().to_string(),
        }
    }

    /// Prebuild settings of a configuration.
    ///
    /// An absent record means prebuilds were never configured and maps to
    /// the (disabled) default. A present record is completed field by
    /// field.
    #[must_use]
    pub fn to_prebuild_settings(
        &self,
        prebuilds: Option<&PrebuildSettingsRecord>,
    ) -> PrebuildSettings {
        let Some(prebuilds) = prebuilds else {
            return PrebuildSettings::default();
        };
        PrebuildSettings {
            enabled: prebuilds.enable.unwrap_or(false),
            branch_matching_pattern: prebuilds.branch_matching_pattern.clone().unwrap_or_default(),
            branch_strategy: self.to_branch_matching_strategy(prebuilds.branch_strategy.as_deref()),
            prebuild_interval: prebuilds.prebuild_interval.unwrap_or(DEFAULT_PREBUILD_INTERVAL),
            workspace_class: prebuilds.workspace_class.clone().unwrap_or_default(),
        }
    }

    /// Maps a stored branch strategy token onto the public enum.
    ///
    /// Absent and unrecognized tokens both mean the default branch: that is
    /// what the platform prebuilds when nothing else is configured.
    #[must_use]
    pub fn to_branch_matching_strategy(&self, strategy: Option<&str>) -> BranchMatchingStrategy {
        match strategy {
            Some("all-branches") => BranchMatchingStrategy::AllBranches,
            Some("matched-branches") => BranchMatchingStrategy::MatchedBranches,
            Some(_) | None => BranchMatchingStrategy::DefaultBranch,
        }
    }

    /// Turns a partial public configuration into a partial domain update.
    ///
    /// Only fields explicitly present in the input appear in the output;
    /// the name is persisted elsewhere and never crosses here.
    #[must_use]
    pub fn from_partial_configuration(&self, configuration: &PartialConfiguration) -> PartialProject {
        let workspace_classes = configuration
            .workspace_settings
            .as_ref()
            .and_then(|s| s.workspace_class.clone())
            .map(|regular| WorkspaceClasses {
                regular: Some(regular),
            });

        let prebuilds = configuration
            .prebuild_settings
            .as_ref()
            .map(|p| PrebuildSettingsRecord {
                enable: p.enabled,
                branch_matching_pattern: p.branch_matching_pattern.clone(),
                branch_strategy: p
                    .branch_strategy
                    .and_then(from_branch_matching_strategy)
                    .map(str::to_string),
                prebuild_interval: p.prebuild_interval,
                workspace_class: p.workspace_class.clone(),
            });

        let settings = if workspace_classes.is_some() || prebuilds.is_some() {
            Some(ProjectSettings {
                workspace_classes,
                prebuilds,
            })
        } else {
            None
        };

        PartialProject {
            id: configuration.id.clone(),
            settings,
        }
    }
}

/// Public strategy back to its storage token; the unspecified member stays
/// unset.
fn from_branch_matching_strategy(strategy: BranchMatchingStrategy) -> Option<&'static str> {
    match strategy {
        BranchMatchingStrategy::DefaultBranch => Some("default-branch"),
        BranchMatchingStrategy::AllBranches => Some("all-branches"),
        BranchMatchingStrategy::MatchedBranches => Some("matched-branches"),
        BranchMatchingStrategy::Unspecified => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_api::{PartialPrebuildSettings, PartialWorkspaceSettings};

    fn project() -> Project {
        Project {
            id: "cfg-123".into(),
            team_id: "o-4c94".into(),
            name: "parcel-demo".into(),
            clone_url: "https://github.com/akosyakov/parcel-demo.git".into(),
            creation_time: "2022-11-21T09:26:37.000Z".into(),
            settings: None,
        }
    }

    #[test]
    fn configuration_renames_team_to_organization() {
        let mut record = project();
        record.settings = Some(ProjectSettings {
            workspace_classes: Some(WorkspaceClasses {
                regular: Some("dev".into()),
            }),
            prebuilds: None,
        });

        let configuration = ApiConverter::new().to_configuration(&record);
        assert_eq!(configuration.organization_id, "o-4c94");
        assert_eq!(
            configuration.workspace_settings.unwrap().workspace_class,
            "dev"
        );
        // Prebuilds were never configured: the empty settings object.
        let prebuilds = configuration.prebuild_settings.unwrap();
        assert_eq!(prebuilds, PrebuildSettings::default());
        assert!(configuration.creation_time.is_some());
    }

    #[test]
    fn absent_prebuild_record_yields_empty_settings() {
        let settings = ApiConverter::new().to_prebuild_settings(None);
        assert_eq!(settings, PrebuildSettings::default());
        assert_eq!(settings.branch_strategy, BranchMatchingStrategy::Unspecified);
        assert_eq!(settings.prebuild_interval, 0);
    }

    #[test]
    fn prebuild_settings_complete_a_sparse_record() {
        let settings = ApiConverter::new().to_prebuild_settings(Some(&PrebuildSettingsRecord {
            enable: Some(true),
            branch_matching_pattern: None,
            branch_strategy: Some("matched-branches".into()),
            prebuild_interval: None,
            workspace_class: None,
        }));
        assert!(settings.enabled);
        assert_eq!(settings.branch_matching_pattern, "");
        assert_eq!(settings.branch_strategy, BranchMatchingStrategy::MatchedBranches);
        assert_eq!(settings.prebuild_interval, DEFAULT_PREBUILD_INTERVAL);
        assert_eq!(settings.workspace_class, "");
    }

    #[test]
    fn branch_strategy_defaults_on_absent_and_unknown() {
        let converter = ApiConverter::new();
        assert_eq!(
            converter.to_branch_matching_strategy(None),
            BranchMatchingStrategy::DefaultBranch
        );
        assert_eq!(
            converter.to_branch_matching_strategy(Some("all-branches")),
            BranchMatchingStrategy::AllBranches
        );
        assert_eq!(
            converter.to_branch_matching_strategy(Some("every-second-tuesday")),
            BranchMatchingStrategy::DefaultBranch
        );
    }

    #[test]
    fn partial_with_only_name_produces_no_settings() {
        let partial = ApiConverter::new().from_partial_configuration(&PartialConfiguration {
            id: "cfg-123".into(),
            name: Some("renamed".into()),
            workspace_settings: None,
            prebuild_settings: None,
        });
        assert_eq!(partial.id, "cfg-123");
        assert!(partial.settings.is_none());
    }

    #[test]
    fn partial_update_carries_only_present_fields() {
        let partial = ApiConverter::new().from_partial_configuration(&PartialConfiguration {
            id: "cfg-123".into(),
            name: None,
            workspace_settings: Some(PartialWorkspaceSettings {
                workspace_class: Some("large".into()),
            }),
            prebuild_settings: Some(PartialPrebuildSettings {
                enabled: Some(true),
                branch_matching_pattern: None,
                branch_strategy: Some(BranchMatchingStrategy::AllBranches),
                prebuild_interval: None,
                workspace_class: None,
            }),
        });

        let settings = partial.settings.unwrap();
        assert_eq!(
            settings.workspace_classes.unwrap().regular.as_deref(),
            Some("large")
        );
        let prebuilds = settings.prebuilds.unwrap();
        assert_eq!(prebuilds.enable, Some(true));
        assert_eq!(prebuilds.branch_strategy.as_deref(), Some("all-branches"));
        assert!(prebuilds.branch_matching_pattern.is_none());
        assert!(prebuilds.prebuild_interval.is_none());
    }

    #[test]
    fn unspecified_strategy_stays_unset_in_partial_update() {
        let partial = ApiConverter::new().from_partial_configuration(&PartialConfiguration {
            id: "cfg-123".into(),
            name: None,
            workspace_settings: None,
            prebuild_settings: Some(PartialPrebuildSettings {
                branch_strategy: Some(BranchMatchingStrategy::Unspecified),
                ..Default::default()
            }),
        });
        let prebuilds = partial.settings.unwrap().prebuilds.unwrap();
        assert!(prebuilds.branch_strategy.is_none());
    }
}
