// SPDX-License-Identifier: MIT OR Apache-2.0
//! Benchmarks for the domain-to-API conversion hot paths: workspace
//! projection, live status updates, wire encoding, and error translation.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use skiff_converter::ApiConverter;
use skiff_error::{ApplicationError, ErrorCode, RepoContextDetails};
use skiff_protocol::{
    EnvVarWithValue, GitWorkspaceContext, IdeConfig, InstanceGitStatus, InstancePort,
    RepositoryInfo, Workspace as WorkspaceRecord, WorkspaceContext, WorkspaceInstance,
    WorkspaceInstanceConfiguration, WorkspaceInstanceStatus,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn workspace_record() -> WorkspaceRecord {
    WorkspaceRecord {
        id: "acme-site-x1y2z3q4w5e6".into(),
        owner_id: "7f8e9d0c-1b2a-4c3d-8e7f-6a5b4c3d2e1f".into(),
        organization_id: "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d".into(),
        project_id: Some("cfg-42".into()),
        description: "acme/site - main".into(),
        context_url: "https://github.com/acme/site/tree/main".into(),
        context: WorkspaceContext::Git(GitWorkspaceContext {
            title: "acme/site - main".into(),
            normalized_context_url: "https://github.com/acme/site".into(),
            ref_name: Some("main".into()),
            ref_type: Some("branch".into()),
            revision: Some("4f2e9a1c8b7d6e5f4a3b2c1d0e9f8a7b6c5d4e3f".into()),
            repository: RepositoryInfo {
                clone_url: "https://github.com/acme/site.git".into(),
                host: "github.com".into(),
                owner: "acme".into(),
                name: "site".into(),
                default_branch: Some("main".into()),
                private: true,
            },
            checkout_location: Some("site".into()),
            env_vars: vec![
                EnvVarWithValue {
                    name: "NODE_ENV".into(),
                    value: "development".into(),
                },
                EnvVarWithValue {
                    name: "API_BASE".into(),
                    value: "https://api.acme.dev".into(),
                },
            ],
        }),
        clone_url: "https://github.com/acme/site.git".into(),
        creation_time: "2024-03-01T09:00:00.000Z".into(),
        shareable: Some(false),
        pinned: Some(false),
        kind: "regular".into(),
        config: Default::default(),
    }
}

fn running_instance(port_count: u32) -> WorkspaceInstance {
    WorkspaceInstance {
        id: "5f0aa316-f318-4a76-9a32-e35a4a2adfd0".into(),
        workspace_id: "acme-site-x1y2z3q4w5e6".into(),
        region: "eu-west-1".into(),
        creation_time: "2024-03-01T09:00:00.000Z".into(),
        started_time: Some("2024-03-01T09:00:21.450Z".into()),
        stopping_time: None,
        stopped_time: None,
        ide_url: "https://acme-site-x1y2z3q4w5e6.ws-eu.skiff.dev".into(),
        workspace_class: "g1-standard".into(),
        status: WorkspaceInstanceStatus {
            phase: "running".into(),
            version: 311,
            exposed_ports: (0..port_count)
                .map(|i| {
                    let visibility = if i % 2 == 0 { "public" } else { "private" };
                    InstancePort {
                        port: 3000 + i,
                        visibility: Some(visibility.into()),
                        url: Some(format!(
                            "https://{}-acme-site-x1y2z3q4w5e6.ws-eu.skiff.dev",
                            3000 + i
                        )),
                        protocol: Some("https".into()),
                    }
                })
                .collect(),
            repo: Some(InstanceGitStatus {
                branch: Some("main".into()),
                latest_commit: Some("4f2e9a1c8b7d6e5f4a3b2c1d0e9f8a7b6c5d4e3f".into()),
                uncommited_files: Some(vec!["src/app.ts".into(), "src/router.ts".into()]),
                total_uncommited_files: Some(2),
                ..Default::default()
            }),
            ..Default::default()
        },
        git_status: None,
        phase_persisted: "running".into(),
        configuration: WorkspaceInstanceConfiguration {
            ide_config: Some(IdeConfig {
                ide: "code".into(),
                use_latest: false,
            }),
            from_backup: false,
            feature_flags: vec![],
        },
        usage_attribution_id: Some("team:0a1b2c3d".into()),
    }
}

// ── Workspace projection ────────────────────────────────────────────────

fn bench_to_workspace(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_workspace");
    let converter = ApiConverter::new();
    let record = workspace_record();

    group.bench_function("without_instance", |b| {
        b.iter(|| converter.to_workspace(black_box(&record), None).unwrap());
    });

    for port_count in [1u32, 8, 32] {
        let instance = running_instance(port_count);
        group.bench_with_input(
            BenchmarkId::new("with_instance_ports", port_count),
            &instance,
            |b, instance| {
                b.iter(|| {
                    converter
                        .to_workspace(black_box(&record), Some(black_box(instance)))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_update_workspace(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_workspace");
    let converter = ApiConverter::new();
    let record = workspace_record();

    for port_count in [1u32, 8, 32] {
        let instance = running_instance(port_count);
        let current = converter.to_workspace(&record, Some(&instance)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("ports", port_count),
            &(instance, current),
            |b, (instance, current)| {
                b.iter(|| converter.update_workspace(black_box(instance), black_box(current)));
            },
        );
    }

    group.finish();
}

// ── Wire encoding of the converted message ──────────────────────────────

fn bench_workspace_wire_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("workspace_wire_encode");
    let converter = ApiConverter::new();
    let record = workspace_record();

    for port_count in [1u32, 32] {
        let instance = running_instance(port_count);
        let workspace = converter.to_workspace(&record, Some(&instance)).unwrap();
        let encoded = serde_json::to_string(&workspace).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("ports", port_count),
            &workspace,
            |b, workspace| {
                b.iter(|| serde_json::to_string(black_box(workspace)).unwrap());
            },
        );
    }

    group.finish();
}

// ── Error translation ───────────────────────────────────────────────────

fn bench_error_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_translation");
    let converter = ApiConverter::new();

    let variants: Vec<(&str, ApplicationError)> = vec![
        (
            "status_only",
            ApplicationError::new(ErrorCode::Conflict, "workspace already exists"),
        ),
        (
            "marker_detail",
            ApplicationError::new(ErrorCode::UserBlocked, "user blocked"),
        ),
        (
            "payload_detail",
            ApplicationError::repository_not_found(RepoContextDetails {
                host: "github.com".into(),
                owner: "acme".into(),
                user_is_owner: false,
                user_scopes: vec!["repo".into(), "read:user".into()],
                last_update: Some("2024-02-12T08:30:00Z".into()),
            }),
        ),
    ];

    for (name, err) in &variants {
        group.bench_with_input(BenchmarkId::new("to_error", name), err, |b, err| {
            b.iter(|| converter.to_error(black_box(err)));
        });

        let rpc = converter.to_error(err);
        group.bench_with_input(BenchmarkId::new("from_error", name), &rpc, |b, rpc| {
            b.iter(|| converter.from_error(black_box(rpc)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_workspace,
    bench_update_workspace,
    bench_workspace_wire_encode,
    bench_error_translation,
);
criterion_main!(benches);
