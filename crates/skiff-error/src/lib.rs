//! Application error taxonomy for the Skiff control plane.
//!
//! Service-layer failures are reported as an [`ApplicationError`]: a stable
//! [`ErrorCode`] from a closed set, a human-readable message, and, for the
//! codes that ship structured context to clients, a typed [`ErrorPayload`].
//!
//! The taxonomy is deliberately small and append-only. Codes serialize as
//! SCREAMING_SNAKE_CASE tokens that are part of the wire contract; the tests
//! at the bottom of this file enumerate every code so a new variant cannot
//! land without a token and a category.
#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Coarse grouping of [`ErrorCode`]s, used for dashboards and alert routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Identity, verification, and access control failures.
    Auth,
    /// A referenced entity is missing, duplicated, or malformed.
    Resource,
    /// The request was fine but the system state does not allow it yet.
    Precondition,
    /// Rate, quota, and billing ceilings.
    Limits,
    /// Failures of the platform itself.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCategory::Auth => "auth",
            ErrorCategory::Resource => "resource",
            ErrorCategory::Precondition => "precondition",
            ErrorCategory::Limits => "limits",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Stable error codes produced by the Skiff service layer.
///
/// The serde token of every variant is its SCREAMING_SNAKE_CASE name and must
/// never change once released; clients match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The calling user is blocked from the installation.
    UserBlocked,
    /// The calling user must verify their account before proceeding.
    NeedsVerification,
    /// The caller lacks permission on the target resource.
    PermissionDenied,
    /// No authenticated identity was presented.
    NotAuthenticated,
    /// The referenced entity does not exist.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
    /// The repository's `skiff.yml` failed validation.
    InvalidSkiffYml,
    /// The organization's spending limit has been reached.
    PaymentSpendingLimitReached,
    /// Usage cannot be attributed to a valid cost center.
    InvalidCostCenter,
    /// Image build logs were requested before the build produced any.
    HeadlessLogNotYetAvailable,
    /// Starting one more workspace would exceed the concurrent cap.
    TooManyRunningWorkspaces,
    /// A precondition of the operation does not hold.
    PreconditionFailed,
    /// The caller is being rate limited.
    TooManyRequests,
    /// The operation was cancelled before completion.
    Cancelled,
    /// Unexpected failure inside the platform.
    InternalServerError,
    /// The request itself was malformed.
    BadRequest,
    /// The calling user's account has been deleted.
    UserDeleted,
    /// The installation has not finished initial setup.
    SetupRequired,
    /// A payment operation failed.
    PaymentError,
}

impl ErrorCode {
    /// Stable wire token for this code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UserBlocked => "USER_BLOCKED",
            ErrorCode::NeedsVerification => "NEEDS_VERIFICATION",
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ErrorCode::NotAuthenticated => "NOT_AUTHENTICATED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InvalidSkiffYml => "INVALID_SKIFF_YML",
            ErrorCode::PaymentSpendingLimitReached => "PAYMENT_SPENDING_LIMIT_REACHED",
            ErrorCode::InvalidCostCenter => "INVALID_COST_CENTER",
            ErrorCode::HeadlessLogNotYetAvailable => "HEADLESS_LOG_NOT_YET_AVAILABLE",
            ErrorCode::TooManyRunningWorkspaces => "TOO_MANY_RUNNING_WORKSPACES",
            ErrorCode::PreconditionFailed => "PRECONDITION_FAILED",
            ErrorCode::TooManyRequests => "TOO_MANY_REQUESTS",
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UserDeleted => "USER_DELETED",
            ErrorCode::SetupRequired => "SETUP_REQUIRED",
            ErrorCode::PaymentError => "PAYMENT_ERROR",
        }
    }

    /// Category this code belongs to.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::UserBlocked
            | ErrorCode::NeedsVerification
            | ErrorCode::PermissionDenied
            | ErrorCode::NotAuthenticated
            | ErrorCode::UserDeleted => ErrorCategory::Auth,
            ErrorCode::NotFound | ErrorCode::Conflict | ErrorCode::BadRequest => {
                ErrorCategory::Resource
            }
            ErrorCode::InvalidSkiffYml
            | ErrorCode::InvalidCostCenter
            | ErrorCode::HeadlessLogNotYetAvailable
            | ErrorCode::PreconditionFailed
            | ErrorCode::SetupRequired => ErrorCategory::Precondition,
            ErrorCode::PaymentSpendingLimitReached
            | ErrorCode::TooManyRunningWorkspaces
            | ErrorCode::TooManyRequests
            | ErrorCode::PaymentError => ErrorCategory::Limits,
            ErrorCode::Cancelled | ErrorCode::InternalServerError => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Typed payloads
// ---------------------------------------------------------------------------

/// Violations found while validating a repository's `skiff.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct InvalidConfigDetails {
    /// One entry per validation failure, in file order.
    #[serde(default)]
    pub violations: Vec<String>,
}

/// What the platform knew about a repository it failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RepoContextDetails {
    /// SCM host, e.g. `github.com`.
    pub host: String,
    /// Repository owner as reported by the SCM, if resolvable.
    #[serde(default)]
    pub owner: String,
    /// Whether the calling user owns the repository.
    #[serde(default)]
    pub user_is_owner: bool,
    /// OAuth scopes the calling user's SCM token currently grants.
    #[serde(default)]
    pub user_scopes: Vec<String>,
    /// When the user's SCM token was last refreshed, RFC3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// Scope information for a repository the caller may not access.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RepoAuthDetails {
    /// SCM host the authorization is missing for.
    pub host: String,
    /// Scopes that would be required to access the repository.
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Attribution target of a rejected usage record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct CostCenterDetails {
    /// Attribution id the usage was recorded against.
    pub attribution_id: String,
}

/// Structured context attached to the detail-carrying [`ErrorCode`]s.
///
/// The `kind` tag is part of the internal wire format and stays stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorPayload {
    /// Payload for [`ErrorCode::InvalidSkiffYml`].
    InvalidConfig(InvalidConfigDetails),
    /// Payload for repository-not-found failures (code `NOT_FOUND`).
    RepositoryNotFound(RepoContextDetails),
    /// Payload for unauthorized repository access (code `NOT_AUTHENTICATED`).
    RepositoryUnauthorized(RepoAuthDetails),
    /// Payload for [`ErrorCode::InvalidCostCenter`].
    CostCenter(CostCenterDetails),
}

// ---------------------------------------------------------------------------
// ApplicationError
// ---------------------------------------------------------------------------

/// A failure reported by the Skiff service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationError {
    /// Stable code identifying the failure class.
    pub code: ErrorCode,
    /// Human-readable description, safe to show to the caller.
    pub message: String,
    /// Typed context for the codes that carry one.
    pub data: Option<ErrorPayload>,
}

impl ApplicationError {
    /// Creates an error with the given code and message and no payload.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attaches a typed payload.
    #[must_use]
    pub fn with_payload(mut self, payload: ErrorPayload) -> Self {
        self.data = Some(payload);
        self
    }

    /// A `skiff.yml` validation failure.
    ///
    /// The message is derived from the violations so every producer reports
    /// the same shape: `Invalid config file: <violations joined by ','>`.
    pub fn invalid_skiff_yml(violations: Vec<String>) -> Self {
        let message = format!("Invalid config file: {}", violations.join(","));
        Self::new(ErrorCode::InvalidSkiffYml, message)
            .with_payload(ErrorPayload::InvalidConfig(InvalidConfigDetails { violations }))
    }

    /// A repository the platform could not resolve for the calling user.
    pub fn repository_not_found(details: RepoContextDetails) -> Self {
        Self::new(ErrorCode::NotFound, "Repository not found.")
            .with_payload(ErrorPayload::RepositoryNotFound(details))
    }

    /// A repository the calling user's SCM token cannot access.
    pub fn repository_unauthorized(details: RepoAuthDetails) -> Self {
        Self::new(ErrorCode::NotAuthenticated, "Repository unauthorized.")
            .with_payload(ErrorPayload::RepositoryUnauthorized(details))
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)?;
        if let Some(payload) = &self.data {
            if let Ok(json) = serde_json::to_string(payload) {
                write!(f, " {json}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApplicationError {}

// ---------------------------------------------------------------------------
// Wire DTO
// ---------------------------------------------------------------------------

/// JSON shape of an [`ApplicationError`] crossing a process boundary.
///
/// `data` stays untyped on the wire; converting back re-types it and drops
/// anything that no longer parses as a known payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationErrorDto {
    /// Stable code token.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
    /// Raw payload JSON, if the code carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl From<&ApplicationError> for ApplicationErrorDto {
    fn from(err: &ApplicationError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            data: err.data.as_ref().and_then(|p| serde_json::to_value(p).ok()),
        }
    }
}

impl From<ApplicationErrorDto> for ApplicationError {
    fn from(dto: ApplicationErrorDto) -> Self {
        let data = dto.data.and_then(|v| serde_json::from_value(v).ok());
        Self {
            code: dto.code,
            message: dto.message,
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
