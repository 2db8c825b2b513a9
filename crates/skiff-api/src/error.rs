// SPDX-License-Identifier: MIT OR Apache-2.0

//! RPC error surface: status codes, the error envelope, and typed details.
//!
//! Details ride along as a list of self-describing payloads. Clients that do
//! not understand a detail type still get a correct coarse status; clients
//! that do can reconstruct the exact failure via [`RpcError::find_details`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// RPC status codes, with their canonical wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    Canceled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl Code {
    /// Numeric wire value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Lowercase token used in the JSON error encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Code::Canceled => "canceled",
            Code::Unknown => "unknown",
            Code::InvalidArgument => "invalid_argument",
            Code::DeadlineExceeded => "deadline_exceeded",
            Code::NotFound => "not_found",
            Code::AlreadyExists => "already_exists",
            Code::PermissionDenied => "permission_denied",
            Code::ResourceExhausted => "resource_exhausted",
            Code::FailedPrecondition => "failed_precondition",
            Code::Aborted => "aborted",
            Code::OutOfRange => "out_of_range",
            Code::Unimplemented => "unimplemented",
            Code::Internal => "internal",
            Code::Unavailable => "unavailable",
            Code::DataLoss => "data_loss",
            Code::Unauthenticated => "unauthenticated",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error as it crosses the RPC boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RpcError {
    pub code: Code,
    /// Raw message, passed through verbatim in both directions.
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

impl RpcError {
    #[must_use]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Appends a detail payload.
    #[must_use]
    pub fn with_detail(mut self, detail: ErrorDetail) -> Self {
        self.details.push(detail);
        self
    }

    /// All details of payload type `T`, in list order.
    pub fn find_details<'a, T: DetailMessage + 'a>(&'a self) -> impl Iterator<Item = &'a T> {
        self.details.iter().filter_map(T::from_detail)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

/// One entry of the detail list, discriminated by its schema-qualified
/// message name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "value")]
pub enum ErrorDetail {
    #[serde(rename = "skiff.v1.PermissionDeniedDetails")]
    PermissionDenied(PermissionDeniedDetails),
    #[serde(rename = "skiff.v1.FailedPreconditionDetails")]
    FailedPrecondition(FailedPreconditionDetails),
}

/// Payload types extractable from an [`RpcError`] detail list.
pub trait DetailMessage: Sized {
    /// Returns the payload when `detail` carries this message type.
    fn from_detail(detail: &ErrorDetail) -> Option<&Self>;
}

impl DetailMessage for PermissionDeniedDetails {
    fn from_detail(detail: &ErrorDetail) -> Option<&Self> {
        match detail {
            ErrorDetail::PermissionDenied(d) => Some(d),
            _ => None,
        }
    }
}

impl DetailMessage for FailedPreconditionDetails {
    fn from_detail(detail: &ErrorDetail) -> Option<&Self> {
        match detail {
            ErrorDetail::FailedPrecondition(d) => Some(d),
            _ => None,
        }
    }
}

/// Why a request was denied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDeniedDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<PermissionDeniedReason>,
}

impl PermissionDeniedDetails {
    #[must_use]
    pub fn user_blocked() -> Self {
        PermissionDeniedReason::UserBlocked(UserBlockedDetails {}).into()
    }

    #[must_use]
    pub fn needs_verification() -> Self {
        PermissionDeniedReason::NeedsVerification(NeedsVerificationDetails {}).into()
    }
}

impl From<PermissionDeniedReason> for PermissionDeniedDetails {
    fn from(reason: PermissionDeniedReason) -> Self {
        Self {
            reason: Some(reason),
        }
    }
}

/// Tagged reason union of [`PermissionDeniedDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "case", content = "value", rename_all = "camelCase")]
pub enum PermissionDeniedReason {
    UserBlocked(UserBlockedDetails),
    NeedsVerification(NeedsVerificationDetails),
}

/// Why a precondition failed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FailedPreconditionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailedPreconditionReason>,
}

impl From<FailedPreconditionReason> for FailedPreconditionDetails {
    fn from(reason: FailedPreconditionReason) -> Self {
        Self {
            reason: Some(reason),
        }
    }
}

/// Tagged reason union of [`FailedPreconditionDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "case", content = "value", rename_all = "camelCase")]
pub enum FailedPreconditionReason {
    InvalidSkiffYml(InvalidSkiffYmlDetails),
    RepositoryNotFound(RepositoryNotFoundDetails),
    RepositoryUnauthorized(RepositoryUnauthorizedDetails),
    PaymentSpendingLimitReached(PaymentSpendingLimitReachedDetails),
    InvalidCostCenter(InvalidCostCenterDetails),
    ImageBuildLogsNotYetAvailable(ImageBuildLogsNotYetAvailableDetails),
    TooManyRunningWorkspaces(TooManyRunningWorkspacesDetails),
}

/// Marker payload: the requesting user is blocked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct UserBlockedDetails {}

/// Marker payload: the user must verify their account first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct NeedsVerificationDetails {}

/// The `skiff.yml` of the repository does not validate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvalidSkiffYmlDetails {
    #[serde(default)]
    pub violations: Vec<String>,
}

/// The context repository could not be resolved for the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNotFoundDetails {
    pub host: String,
    pub owner: String,
    pub user_is_owner: bool,
    #[serde(default)]
    pub user_scopes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// The user's token lacks access to the context repository.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryUnauthorizedDetails {
    pub host: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Marker payload: the organization hit its spending limit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PaymentSpendingLimitReachedDetails {}

/// The usage attribution target is unusable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvalidCostCenterDetails {
    pub attribution_id: String,
}

/// Marker payload: image build logs are not ready yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ImageBuildLogsNotYetAvailableDetails {}

/// Marker payload: the user exceeded their parallel-workspace limit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TooManyRunningWorkspacesDetails {}
