//! skiff-protocol
//!
//! Domain records of the Skiff control plane, shaped the way the internal
//! data layer stores them: string tokens where the public API has enums,
//! RFC3339 text where the public API has timestamps, and `Option` wherever
//! a field can be absent.
//!
//! Nothing in this crate knows about the public `skiff.v1` schema. The
//! translation lives in `skiff-converter`.
#![deny(unsafe_code)]

pub mod admin;
pub mod auth;
pub mod envvar;
pub mod instance;
pub mod organization;
pub mod prebuild;
pub mod project;
pub mod scm;
pub mod workspace;

pub use admin::{BlockedRepositoryRecord, EmailDomainFilterEntry};
pub use auth::{AuthProviderEntry, AuthProviderInfo, OAuth2ConfigRecord};
pub use envvar::{EnvVarWithValue, ProjectEnvVar, UserEnvVarValue};
pub use instance::{
    IdeConfig, InstanceConditions, InstanceGitStatus, InstancePort, WorkspaceInstance,
    WorkspaceInstanceConfiguration, WorkspaceInstanceStatus,
};
pub use organization::{OrgMemberInfo, Organization};
pub use prebuild::{PrebuildInfo, PrebuildWithStatus};
pub use project::{
    PartialProject, PrebuildSettingsRecord, Project, ProjectSettings, WorkspaceClasses,
};
pub use scm::{SuggestedRepositoryRecord, Token, UserSshPublicKey};
pub use workspace::{
    GitWorkspaceContext, PrebuildWorkspaceContext, RepositoryInfo, SnapshotWorkspaceContext,
    TaskConfig, Workspace, WorkspaceConfig, WorkspaceContext,
};
