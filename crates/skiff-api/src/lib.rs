// SPDX-License-Identifier: MIT OR Apache-2.0

//! skiff-api
//!
//! Message types of the public `skiff.v1` schema: what external clients send
//! and receive. JSON field names are lowerCamelCase, enums use stable
//! uppercase tokens, oneof-style unions serialize as explicit `case`/`value`
//! pairs, and timestamps are RFC3339 with a `Z` suffix.
//!
//! These shapes are a published contract. Renaming a field or re-tokenizing
//! an enum here is a breaking API change and belongs in a `skiff.v2`.
#![deny(unsafe_code)]

pub mod auth;
pub mod configuration;
pub mod envvar;
pub mod error;
pub mod installation;
pub mod organization;
pub mod prebuild;
pub mod scm;
pub mod workspace;

/// Schema package all message names are qualified under.
pub const SCHEMA_PACKAGE: &str = "skiff.v1";

pub use auth::{AuthProvider, AuthProviderDescription, AuthProviderOwner, AuthProviderType, OAuth2Config};
pub use configuration::{
    BranchMatchingStrategy, Configuration, PartialConfiguration, PartialPrebuildSettings,
    PartialWorkspaceSettings, PrebuildSettings, WorkspaceSettings,
};
pub use envvar::{
    ConfigurationEnvironmentVariable, EnvironmentVariable, EnvironmentVariableAdmission,
    UserEnvironmentVariable,
};
pub use error::{
    Code, DetailMessage, ErrorDetail, FailedPreconditionDetails, FailedPreconditionReason,
    ImageBuildLogsNotYetAvailableDetails, InvalidCostCenterDetails, InvalidSkiffYmlDetails,
    NeedsVerificationDetails, PaymentSpendingLimitReachedDetails, PermissionDeniedDetails,
    PermissionDeniedReason, RepositoryNotFoundDetails, RepositoryUnauthorizedDetails, RpcError,
    TooManyRunningWorkspacesDetails, UserBlockedDetails,
};
pub use installation::{BlockedEmailDomain, BlockedRepository};
pub use organization::{Organization, OrganizationMember, OrganizationRole};
pub use prebuild::{Author, Commit, Prebuild, PrebuildPhase, PrebuildPhaseName, PrebuildStatus};
pub use scm::{ScmToken, SshPublicKey, SuggestedRepository};
pub use workspace::{
    AdmissionLevel, EditorReference, GitIdentity, GitInitializer, GitStatus, InitializerSpec, Port,
    PortProtocol, PrebuildInitializer, SnapshotInitializer, Workspace, WorkspaceConditions,
    WorkspaceInitializer, WorkspaceMetadata, WorkspacePhase, WorkspacePhaseName, WorkspaceSpec,
    WorkspaceStatus, WorkspaceType,
};
