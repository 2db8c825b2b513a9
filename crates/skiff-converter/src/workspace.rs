// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workspace conversion: the full build from a domain record and the merge
//! path that folds a newer instance into a previously published value.
//!
//! The three sub-structures of the public workspace have different update
//! rules. `metadata` is written only by the full build. `spec` keeps its
//! identity fields (type, admission, initializer, git identity, environment
//! variables) and takes ports, class, and editor from the instance. `status`
//! is rebuilt from the instance every time, except for the git status, which
//! is overlaid field by field because instance reports are partial.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use skiff_api::{
    AdmissionLevel, EditorReference, GitIdentity, GitInitializer, GitStatus, InitializerSpec, Port,
    PortProtocol, PrebuildInitializer, SnapshotInitializer, Workspace, WorkspaceConditions,
    WorkspaceInitializer, WorkspaceMetadata, WorkspacePhase, WorkspacePhaseName, WorkspaceSpec,
    WorkspaceStatus, WorkspaceType,
};
use skiff_protocol::{
    GitWorkspaceContext, IdeConfig, InstanceGitStatus, InstancePort,
    Workspace as WorkspaceRecord, WorkspaceContext, WorkspaceInstance,
};

use crate::{parse_timestamp, ApiConverter, ConversionError};

impl ApiConverter {
    /// Builds the public workspace from a domain record, folding in the
    /// latest instance when one exists.
    ///
    /// Without an instance the result has no `status` and the spec carries
    /// no ports, class, or editor; those are instance-derived.
    pub fn to_workspace(
        &self,
        workspace: &WorkspaceRecord,
        latest: Option<&WorkspaceInstance>,
    ) -> Result<Workspace, ConversionError> {
        if workspace.id.is_empty() {
            return Err(ConversionError::MalformedRecord {
                entity: "workspace",
                field: "id",
            });
        }

        let mut spec = WorkspaceSpec {
            kind: self.to_workspace_type(&workspace.kind),
            initializer: Some(to_initializer(workspace)),
            git: Some(GitIdentity::default()),
            ports: Vec::new(),
            environment_variables: self.to_environment_variables(&workspace.context),
            admission: if workspace.shareable == Some(true) {
                AdmissionLevel::Everyone
            } else {
                AdmissionLevel::OwnerOnly
            },
            class: String::new(),
            editor: None,
        };

        let status = latest.map(|instance| {
            apply_instance(&mut spec, instance);
            self.build_status(instance, initial_git_status(workspace))
        });

        Ok(Workspace {
            id: workspace.id.clone(),
            metadata: Some(WorkspaceMetadata {
                owner_id: workspace.owner_id.clone(),
                organization_id: workspace.organization_id.clone(),
                configuration_id: workspace.project_id.clone().unwrap_or_default(),
                name: workspace.description.clone(),
                pinned: workspace.pinned.unwrap_or(false),
                original_context_url: workspace.context_url.clone(),
                annotations: BTreeMap::new(),
            }),
            spec: Some(spec),
            status,
        })
    }

    /// Folds a newer instance into a previously published workspace.
    ///
    /// Metadata and the spec identity fields persist from `current` because
    /// the instance payload does not repeat them. Ports are replaced, class
    /// and editor are refreshed when the instance states them, and the
    /// status is rebuilt with the previous git status as overlay base.
    #[must_use]
    pub fn update_workspace(&self, instance: &WorkspaceInstance, current: &Workspace) -> Workspace {
        let mut next = current.clone();

        let mut spec = next.spec.take().unwrap_or_default();
        apply_instance(&mut spec, instance);
        next.spec = Some(spec);

        let base_git = current.status.as_ref().and_then(|s| s.git_status.clone());
        next.status = Some(self.build_status(instance, base_git));
        next
    }

    /// Maps a lifecycle phase token onto the public enum.
    ///
    /// Total over arbitrary input: unknown tokens (and the empty string)
    /// surface as the unspecified phase rather than failing the conversion.
    #[must_use]
    pub fn to_phase_name(&self, phase: &str) -> WorkspacePhaseName {
        match phase {
            "preparing" => WorkspacePhaseName::Preparing,
            "building" => WorkspacePhaseName::ImageBuild,
            "pending" => WorkspacePhaseName::Pending,
            "creating" => WorkspacePhaseName::Creating,
            "initializing" => WorkspacePhaseName::Initializing,
            "running" => WorkspacePhaseName::Running,
            "interrupted" => WorkspacePhaseName::Interrupted,
            "stopping" => WorkspacePhaseName::Stopping,
            "stopped" => WorkspacePhaseName::Stopped,
            _ => WorkspacePhaseName::Unspecified,
        }
    }

    /// Maps the storage type token; anything that is not a prebuild is a
    /// regular workspace.
    #[must_use]
    pub fn to_workspace_type(&self, kind: &str) -> WorkspaceType {
        if kind == "prebuild" {
            WorkspaceType::Prebuild
        } else {
            WorkspaceType::Regular
        }
    }

    fn build_status(
        &self,
        instance: &WorkspaceInstance,
        base_git: Option<GitStatus>,
    ) -> WorkspaceStatus {
        let transition = transition_timestamp(instance);
        let report = instance.git_status.as_ref().or(instance.status.repo.as_ref());
        WorkspaceStatus {
            status_version: transition.map_or(0, |t| t.timestamp()),
            phase: Some(WorkspacePhase {
                name: self.to_phase_name(&instance.status.phase),
                last_transition_time: transition,
            }),
            workspace_url: instance.ide_url.clone(),
            git_status: merge_git_status(base_git, report),
            instance_id: instance.id.clone(),
            conditions: Some(WorkspaceConditions {
                failed: instance.status.conditions.failed.clone(),
                timeout: instance.status.conditions.timeout.clone(),
            }),
        }
    }
}

/// Applies the instance-derived parts of the spec: ports are replaced
/// wholesale, class and editor only when the instance states them.
fn apply_instance(spec: &mut WorkspaceSpec, instance: &WorkspaceInstance) {
    spec.ports = instance.status.exposed_ports.iter().map(to_port).collect();
    if !instance.workspace_class.is_empty() {
        spec.class = instance.workspace_class.clone();
    }
    if let Some(ide) = &instance.configuration.ide_config {
        spec.editor = Some(editor_reference(ide));
    }
}

/// The moment the current phase was entered.
///
/// Each phase has a preferred instance timestamp and falls back through the
/// lifecycle chain when that field is not set yet.
fn transition_timestamp(instance: &WorkspaceInstance) -> Option<DateTime<Utc>> {
    let stopped = instance.stopped_time.as_deref().and_then(parse_timestamp);
    let stopping = instance.stopping_time.as_deref().and_then(parse_timestamp);
    let started = instance.started_time.as_deref().and_then(parse_timestamp);
    let created = parse_timestamp(&instance.creation_time);
    match instance.status.phase.as_str() {
        "stopped" => stopped.or(stopping).or(started).or(created),
        "stopping" => stopping.or(started).or(created),
        "running" | "interrupted" => started.or(created),
        _ => created,
    }
}

fn to_initializer(workspace: &WorkspaceRecord) -> WorkspaceInitializer {
    let specs = match &workspace.context {
        WorkspaceContext::Git(context) => vec![InitializerSpec::Git(git_initializer(context))],
        WorkspaceContext::Snapshot(context) => {
            vec![InitializerSpec::Snapshot(SnapshotInitializer {
                snapshot_id: context.snapshot_bucket_id.clone(),
            })]
        }
        WorkspaceContext::Prebuild(context) => {
            vec![InitializerSpec::Prebuild(PrebuildInitializer {
                prebuild_id: context.prebuild_workspace_id.clone(),
                git: Some(git_initializer(&context.git)),
            })]
        }
    };
    WorkspaceInitializer { specs }
}

fn git_initializer(context: &GitWorkspaceContext) -> GitInitializer {
    GitInitializer {
        remote_uri: context.normalized_context_url.clone(),
        upstream_remote_uri: None,
        checkout_location: context.checkout_location.clone().unwrap_or_default(),
        config: BTreeMap::new(),
    }
}

/// Git status before any instance reported one, synthesized from the
/// creation context. Snapshot contexts carry no git state.
fn initial_git_status(workspace: &WorkspaceRecord) -> Option<GitStatus> {
    git_context(workspace).map(|context| GitStatus {
        clone_url: workspace.clone_url.clone(),
        branch: context.ref_name.clone().unwrap_or_default(),
        latest_commit: context.revision.clone().unwrap_or_default(),
        ..Default::default()
    })
}

fn git_context(workspace: &WorkspaceRecord) -> Option<&GitWorkspaceContext> {
    match &workspace.context {
        WorkspaceContext::Git(context) => Some(context),
        WorkspaceContext::Prebuild(context) => Some(&context.git),
        WorkspaceContext::Snapshot(_) => None,
    }
}

/// Overlays an instance report onto the previous public git status.
///
/// A report without a statement about a field leaves the previous value in
/// place; that is how the clone URL survives instances that never repeat it.
fn merge_git_status(
    base: Option<GitStatus>,
    report: Option<&InstanceGitStatus>,
) -> Option<GitStatus> {
    let Some(report) = report else {
        return base;
    };
    let mut merged = base.unwrap_or_default();
    if let Some(v) = &report.branch {
        merged.branch = v.clone();
    }
    if let Some(v) = &report.latest_commit {
        merged.latest_commit = v.clone();
    }
    if let Some(v) = &report.clone_url {
        merged.clone_url = v.clone();
    }
    if let Some(v) = &report.uncommited_files {
        merged.uncommited_files = v.clone();
    }
    if let Some(v) = report.total_uncommited_files {
        merged.total_uncommited_files = to_count(v);
    }
    if let Some(v) = &report.unpushed_commits {
        merged.unpushed_commits = v.clone();
    }
    if let Some(v) = report.total_unpushed_commits {
        merged.total_unpushed_commits = to_count(v);
    }
    if let Some(v) = &report.untracked_files {
        merged.untracked_files = v.clone();
    }
    if let Some(v) = report.total_untracked_files {
        merged.total_untracked_files = to_count(v);
    }
    Some(merged)
}

fn to_count(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn to_port(port: &InstancePort) -> Port {
    Port {
        port: u64::from(port.port),
        admission: port_admission(port.visibility.as_deref()),
        url: port.url.clone().unwrap_or_default(),
        protocol: port_protocol(port.protocol.as_deref()),
    }
}

/// Unmatched visibility tokens fall back to the most restrictive level.
fn port_admission(visibility: Option<&str>) -> AdmissionLevel {
    match visibility {
        Some(v) if v.eq_ignore_ascii_case("public") => AdmissionLevel::Everyone,
        _ => AdmissionLevel::OwnerOnly,
    }
}

/// Unmatched protocol tokens fall back to plain http.
fn port_protocol(protocol: Option<&str>) -> PortProtocol {
    match protocol {
        Some(p) if p.eq_ignore_ascii_case("https") => PortProtocol::Https,
        _ => PortProtocol::Http,
    }
}

fn editor_reference(ide: &IdeConfig) -> EditorReference {
    EditorReference {
        name: ide.ide.clone(),
        version: if ide.use_latest { "latest" } else { "stable" }.to_string(),
    }
}
