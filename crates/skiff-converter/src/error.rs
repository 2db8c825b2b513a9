// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two-way error translator between the internal taxonomy and the RPC
//! surface.
//!
//! Forward, every [`ErrorCode`] maps onto exactly one RPC status, with typed
//! details attached where the schema defines them. Reverse, details win over
//! the coarse status so a translated error keeps its precise internal code
//! after crossing the boundary twice. Messages pass through verbatim in both
//! directions; the translator never rewrites what a human will read.

use skiff_api::{
    Code, ErrorDetail, FailedPreconditionDetails, FailedPreconditionReason,
    ImageBuildLogsNotYetAvailableDetails, InvalidCostCenterDetails, InvalidSkiffYmlDetails,
    PaymentSpendingLimitReachedDetails, PermissionDeniedDetails, PermissionDeniedReason,
    RepositoryNotFoundDetails, RepositoryUnauthorizedDetails, RpcError,
    TooManyRunningWorkspacesDetails,
};
use skiff_error::{
    ApplicationError, CostCenterDetails, ErrorCode, ErrorPayload, InvalidConfigDetails,
    RepoAuthDetails, RepoContextDetails,
};
use tracing::warn;

use crate::ApiConverter;

impl ApiConverter {
    /// Maps any failure onto the RPC error surface.
    ///
    /// Errors that are already RPC-shaped pass through unchanged. Taxonomy
    /// errors go through the mapping table. Anything else becomes
    /// `internal` with the message preserved.
    #[must_use]
    pub fn to_error(&self, err: &(dyn std::error::Error + 'static)) -> RpcError {
        if let Some(rpc) = err.downcast_ref::<RpcError>() {
            return rpc.clone();
        }
        if let Some(app) = err.downcast_ref::<ApplicationError>() {
            return self.translate_application_error(app);
        }
        RpcError::new(Code::Internal, err.to_string())
    }

    /// Recovers the internal error from a received RPC error.
    ///
    /// Typed details decide the code when present; otherwise the coarse
    /// status does. The raw message is kept, never regenerated, so a
    /// server that phrased things differently is not second-guessed.
    #[must_use]
    pub fn from_error(&self, rpc: &RpcError) -> ApplicationError {
        if let Some(details) = rpc.find_details::<PermissionDeniedDetails>().next() {
            match &details.reason {
                Some(PermissionDeniedReason::UserBlocked(_)) => {
                    return ApplicationError::new(ErrorCode::UserBlocked, rpc.message.clone());
                }
                Some(PermissionDeniedReason::NeedsVerification(_)) => {
                    return ApplicationError::new(
                        ErrorCode::NeedsVerification,
                        rpc.message.clone(),
                    );
                }
                None => {}
            }
        }
        if let Some(details) = rpc.find_details::<FailedPreconditionDetails>().next() {
            if let Some(reason) = &details.reason {
                return from_precondition_reason(reason, &rpc.message);
            }
        }

        let code = match rpc.code {
            Code::PermissionDenied => ErrorCode::PermissionDenied,
            Code::Unauthenticated => ErrorCode::NotAuthenticated,
            Code::NotFound => ErrorCode::NotFound,
            Code::AlreadyExists => ErrorCode::Conflict,
            Code::FailedPrecondition => ErrorCode::PreconditionFailed,
            Code::ResourceExhausted => ErrorCode::TooManyRequests,
            Code::Canceled => ErrorCode::Cancelled,
            _ => ErrorCode::InternalServerError,
        };
        ApplicationError::new(code, rpc.message.clone())
    }

    /// Recovers the internal error from any failure a client surface may
    /// hold: taxonomy errors pass through, RPC errors go through
    /// [`from_error`](Self::from_error), the rest becomes internal.
    #[must_use]
    pub fn from_any(&self, err: &(dyn std::error::Error + 'static)) -> ApplicationError {
        if let Some(app) = err.downcast_ref::<ApplicationError>() {
            return app.clone();
        }
        if let Some(rpc) = err.downcast_ref::<RpcError>() {
            return self.from_error(rpc);
        }
        ApplicationError::new(ErrorCode::InternalServerError, err.to_string())
    }

    fn translate_application_error(&self, app: &ApplicationError) -> RpcError {
        let status = |code: Code| RpcError::new(code, app.message.clone());
        let denied = |details: PermissionDeniedDetails| {
            status(Code::PermissionDenied).with_detail(ErrorDetail::PermissionDenied(details))
        };
        let precondition = |reason: FailedPreconditionReason| {
            status(Code::FailedPrecondition)
                .with_detail(ErrorDetail::FailedPrecondition(reason.into()))
        };

        match app.code {
            ErrorCode::UserBlocked => denied(PermissionDeniedDetails::user_blocked()),
            ErrorCode::NeedsVerification => denied(PermissionDeniedDetails::needs_verification()),
            ErrorCode::PermissionDenied => status(Code::PermissionDenied),

            ErrorCode::NotAuthenticated => {
                if let Some(ErrorPayload::RepositoryUnauthorized(data)) = &app.data {
                    precondition(FailedPreconditionReason::RepositoryUnauthorized(
                        RepositoryUnauthorizedDetails {
                            host: data.host.clone(),
                            scopes: data.scopes.clone(),
                        },
                    ))
                } else {
                    status(Code::Unauthenticated)
                }
            }
            ErrorCode::NotFound => {
                if let Some(ErrorPayload::RepositoryNotFound(data)) = &app.data {
                    precondition(FailedPreconditionReason::RepositoryNotFound(
                        RepositoryNotFoundDetails {
                            host: data.host.clone(),
                            owner: data.owner.clone(),
                            user_is_owner: data.user_is_owner,
                            user_scopes: data.user_scopes.clone(),
                            last_update: data.last_update.clone(),
                        },
                    ))
                } else {
                    status(Code::NotFound)
                }
            }
            ErrorCode::Conflict => status(Code::AlreadyExists),

            ErrorCode::InvalidSkiffYml => {
                let violations = match &app.data {
                    Some(ErrorPayload::InvalidConfig(data)) => data.violations.clone(),
                    _ => Vec::new(),
                };
                precondition(FailedPreconditionReason::InvalidSkiffYml(
                    InvalidSkiffYmlDetails { violations },
                ))
            }
            ErrorCode::PaymentSpendingLimitReached => precondition(
                FailedPreconditionReason::PaymentSpendingLimitReached(
                    PaymentSpendingLimitReachedDetails {},
                ),
            ),
            ErrorCode::InvalidCostCenter => {
                let attribution_id = match &app.data {
                    Some(ErrorPayload::CostCenter(data)) => data.attribution_id.clone(),
                    _ => String::new(),
                };
                precondition(FailedPreconditionReason::InvalidCostCenter(
                    InvalidCostCenterDetails { attribution_id },
                ))
            }
            ErrorCode::HeadlessLogNotYetAvailable => precondition(
                FailedPreconditionReason::ImageBuildLogsNotYetAvailable(
                    ImageBuildLogsNotYetAvailableDetails {},
                ),
            ),
            ErrorCode::TooManyRunningWorkspaces => precondition(
                FailedPreconditionReason::TooManyRunningWorkspaces(
                    TooManyRunningWorkspacesDetails {},
                ),
            ),
            ErrorCode::PreconditionFailed => status(Code::FailedPrecondition),

            ErrorCode::TooManyRequests => status(Code::ResourceExhausted),
            ErrorCode::Cancelled => status(Code::Canceled),
            ErrorCode::InternalServerError => status(Code::Internal),

            code @ (ErrorCode::BadRequest
            | ErrorCode::UserDeleted
            | ErrorCode::SetupRequired
            | ErrorCode::PaymentError) => {
                warn!(target: "skiff.converter", code = code.as_str(), "no public mapping for internal error code");
                status(Code::Unknown)
            }
        }
    }
}

/// A typed precondition reason back to its internal code and payload. The
/// message comes from the raw RPC error, not from the payload constructors,
/// so nothing gets rephrased in transit.
fn from_precondition_reason(reason: &FailedPreconditionReason, message: &str) -> ApplicationError {
    let (code, payload) = match reason {
        FailedPreconditionReason::InvalidSkiffYml(data) => (
            ErrorCode::InvalidSkiffYml,
            Some(ErrorPayload::InvalidConfig(InvalidConfigDetails {
                violations: data.violations.clone(),
            })),
        ),
        FailedPreconditionReason::RepositoryNotFound(data) => (
            ErrorCode::NotFound,
            Some(ErrorPayload::RepositoryNotFound(RepoContextDetails {
                host: data.host.clone(),
                owner: data.owner.clone(),
                user_is_owner: data.user_is_owner,
                user_scopes: data.user_scopes.clone(),
                last_update: data.last_update.clone(),
            })),
        ),
        FailedPreconditionReason::RepositoryUnauthorized(data) => (
            ErrorCode::NotAuthenticated,
            Some(ErrorPayload::RepositoryUnauthorized(RepoAuthDetails {
                host: data.host.clone(),
                scopes: data.scopes.clone(),
            })),
        ),
        FailedPreconditionReason::PaymentSpendingLimitReached(_) => {
            (ErrorCode::PaymentSpendingLimitReached, None)
        }
        FailedPreconditionReason::InvalidCostCenter(data) => (
            ErrorCode::InvalidCostCenter,
            Some(ErrorPayload::CostCenter(CostCenterDetails {
                attribution_id: data.attribution_id.clone(),
            })),
        ),
        FailedPreconditionReason::ImageBuildLogsNotYetAvailable(_) => {
            (ErrorCode::HeadlessLogNotYetAvailable, None)
        }
        FailedPreconditionReason::TooManyRunningWorkspaces(_) => {
            (ErrorCode::TooManyRunningWorkspaces, None)
        }
    };

    let err = ApplicationError::new(code, message);
    match payload {
        Some(payload) => err.with_payload(payload),
        None => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> ApiConverter {
        ApiConverter::new()
    }

    fn first_precondition_reason(rpc: &RpcError) -> &FailedPreconditionReason {
        rpc.find_details::<FailedPreconditionDetails>()
            .next()
            .and_then(|d| d.reason.as_ref())
            .expect("expected a failed-precondition reason")
    }

    #[test]
    fn rpc_errors_pass_through_unchanged() {
        let rpc = RpcError::new(Code::AlreadyExists, "already exists");
        let out = converter().to_error(&rpc);
        assert_eq!(out, rpc);
    }

    #[test]
    fn arbitrary_errors_collapse_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "oh no!");
        let out = converter().to_error(&io);
        assert_eq!(out.code, Code::Internal);
        assert_eq!(out.message, "oh no!");
        assert!(out.details.is_empty());
    }

    #[test]
    fn user_blocked_and_verification_become_permission_denied_markers() {
        let blocked = converter().to_error(&ApplicationError::new(
            ErrorCode::UserBlocked,
            "user blocked",
        ));
        assert_eq!(blocked.code, Code::PermissionDenied);
        let details: Vec<&PermissionDeniedDetails> = blocked.find_details().collect();
        assert!(matches!(
            details[0].reason,
            Some(PermissionDeniedReason::UserBlocked(_))
        ));

        let verify = converter().to_error(&ApplicationError::new(
            ErrorCode::NeedsVerification,
            "needs verification",
        ));
        assert_eq!(verify.code, Code::PermissionDenied);
        let details: Vec<&PermissionDeniedDetails> = verify.find_details().collect();
        assert!(matches!(
            details[0].reason,
            Some(PermissionDeniedReason::NeedsVerification(_))
        ));
    }

    #[test]
    fn invalid_skiff_yml_carries_violations() {
        let err = ApplicationError::invalid_skiff_yml(vec!["x".into()]);
        let rpc = converter().to_error(&err);
        assert_eq!(rpc.code, Code::FailedPrecondition);
        assert_eq!(rpc.message, "Invalid config file: x");
        match first_precondition_reason(&rpc) {
            FailedPreconditionReason::InvalidSkiffYml(data) => {
                assert_eq!(data.violations, vec!["x".to_string()]);
            }
            other => panic!("unexpected reason {other:?}"),
        }
    }

    #[test]
    fn repository_payloads_turn_auth_codes_into_preconditions() {
        let not_found = ApplicationError::repository_not_found(RepoContextDetails {
            host: "github.com".into(),
            owner: "acme".into(),
            user_is_owner: false,
            user_scopes: vec!["repo".into()],
            last_update: None,
        });
        let rpc = converter().to_error(&not_found);
        assert_eq!(rpc.code, Code::FailedPrecondition);
        assert_eq!(rpc.message, "Repository not found.");
        match first_precondition_reason(&rpc) {
            FailedPreconditionReason::RepositoryNotFound(data) => {
                assert_eq!(data.host, "github.com");
                assert_eq!(data.owner, "acme");
                assert!(!data.user_is_owner);
            }
            other => panic!("unexpected reason {other:?}"),
        }

        let unauthorized = ApplicationError::repository_unauthorized(RepoAuthDetails {
            host: "gitlab.com".into(),
            scopes: vec!["api".into()],
        });
        let rpc = converter().to_error(&unauthorized);
        assert_eq!(rpc.code, Code::FailedPrecondition);
        assert_eq!(rpc.message, "Repository unauthorized.");
        match first_precondition_reason(&rpc) {
            FailedPreconditionReason::RepositoryUnauthorized(data) => {
                assert_eq!(data.host, "gitlab.com");
                assert_eq!(data.scopes, vec!["api".to_string()]);
            }
            other => panic!("unexpected reason {other:?}"),
        }
    }

    #[test]
    fn bare_auth_codes_keep_their_coarse_status() {
        let cases = [
            (ErrorCode::PermissionDenied, Code::PermissionDenied),
            (ErrorCode::NotAuthenticated, Code::Unauthenticated),
            (ErrorCode::NotFound, Code::NotFound),
            (ErrorCode::Conflict, Code::AlreadyExists),
            (ErrorCode::PreconditionFailed, Code::FailedPrecondition),
            (ErrorCode::TooManyRequests, Code::ResourceExhausted),
            (ErrorCode::Cancelled, Code::Canceled),
            (ErrorCode::InternalServerError, Code::Internal),
        ];
        for (internal, status) in cases {
            let rpc = converter().to_error(&ApplicationError::new(internal, "msg"));
            assert_eq!(rpc.code, status, "code {internal:?}");
            assert!(rpc.details.is_empty(), "code {internal:?}");
        }
    }

    #[test]
    fn marker_precondition_codes_attach_their_reason() {
        let spending = converter().to_error(&ApplicationError::new(
            ErrorCode::PaymentSpendingLimitReached,
            "spending limit reached",
        ));
        assert_eq!(spending.code, Code::FailedPrecondition);
        assert!(matches!(
            first_precondition_reason(&spending),
            FailedPreconditionReason::PaymentSpendingLimitReached(_)
        ));

        let logs = converter().to_error(&ApplicationError::new(
            ErrorCode::HeadlessLogNotYetAvailable,
            "image build logs not yet available",
        ));
        assert!(matches!(
            first_precondition_reason(&logs),
            FailedPreconditionReason::ImageBuildLogsNotYetAvailable(_)
        ));

        let many = converter().to_error(&ApplicationError::new(
            ErrorCode::TooManyRunningWorkspaces,
            "too many running workspaces",
        ));
        assert!(matches!(
            first_precondition_reason(&many),
            FailedPreconditionReason::TooManyRunningWorkspaces(_)
        ));
    }

    #[test]
    fn cost_center_payload_carries_attribution() {
        let err = ApplicationError::new(ErrorCode::InvalidCostCenter, "bad attribution")
            .with_payload(ErrorPayload::CostCenter(CostCenterDetails {
                attribution_id: "team:4c94".into(),
            }));
        let rpc = converter().to_error(&err);
        match first_precondition_reason(&rpc) {
            FailedPreconditionReason::InvalidCostCenter(data) => {
                assert_eq!(data.attribution_id, "team:4c94");
            }
            other => panic!("unexpected reason {other:?}"),
        }
    }

    #[test]
    fn codes_without_a_public_mapping_become_unknown() {
        for code in [
            ErrorCode::BadRequest,
            ErrorCode::UserDeleted,
            ErrorCode::SetupRequired,
            ErrorCode::PaymentError,
        ] {
            let rpc = converter().to_error(&ApplicationError::new(code, "unmapped"));
            assert_eq!(rpc.code, Code::Unknown, "code {code:?}");
            assert_eq!(rpc.message, "unmapped");
        }
    }

    #[test]
    fn reverse_prefers_details_over_status() {
        // A failed-precondition status whose detail names a repository
        // problem recovers the precise auth-flavored internal code.
        let rpc = RpcError::new(Code::FailedPrecondition, "Repository unauthorized.")
            .with_detail(ErrorDetail::FailedPrecondition(
                FailedPreconditionReason::RepositoryUnauthorized(RepositoryUnauthorizedDetails {
                    host: "github.com".into(),
                    scopes: vec!["repo".into()],
                })
                .into(),
            ));
        let err = converter().from_error(&rpc);
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
        assert_eq!(err.message, "Repository unauthorized.");
        match err.data {
            Some(ErrorPayload::RepositoryUnauthorized(data)) => {
                assert_eq!(data.host, "github.com");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn reverse_keeps_the_raw_message() {
        let rpc = RpcError::new(Code::FailedPrecondition, "server said something else")
            .with_detail(ErrorDetail::FailedPrecondition(
                FailedPreconditionReason::InvalidSkiffYml(InvalidSkiffYmlDetails {
                    violations: vec!["a".into(), "b".into()],
                })
                .into(),
            ));
        let err = converter().from_error(&rpc);
        assert_eq!(err.code, ErrorCode::InvalidSkiffYml);
        // Not regenerated from the violations.
        assert_eq!(err.message, "server said something else");
    }

    #[test]
    fn reverse_status_fallback_table() {
        let cases = [
            (Code::PermissionDenied, ErrorCode::PermissionDenied),
            (Code::Unauthenticated, ErrorCode::NotAuthenticated),
            (Code::NotFound, ErrorCode::NotFound),
            (Code::AlreadyExists, ErrorCode::Conflict),
            (Code::FailedPrecondition, ErrorCode::PreconditionFailed),
            (Code::ResourceExhausted, ErrorCode::TooManyRequests),
            (Code::Canceled, ErrorCode::Cancelled),
            (Code::Internal, ErrorCode::InternalServerError),
            (Code::Unknown, ErrorCode::InternalServerError),
            (Code::Unavailable, ErrorCode::InternalServerError),
        ];
        for (status, internal) in cases {
            let err = converter().from_error(&RpcError::new(status, "msg"));
            assert_eq!(err.code, internal, "status {status:?}");
            assert_eq!(err.message, "msg");
        }
    }

    #[test]
    fn empty_detail_reason_falls_back_to_status() {
        let rpc = RpcError::new(Code::PermissionDenied, "denied")
            .with_detail(ErrorDetail::PermissionDenied(PermissionDeniedDetails {
                reason: None,
            }));
        let err = converter().from_error(&rpc);
        assert_eq!(err.code, ErrorCode::PermissionDenied);
    }

    #[test]
    fn round_trip_preserves_code_message_and_payload() {
        let originals = vec![
            ApplicationError::new(ErrorCode::UserBlocked, "blocked"),
            ApplicationError::new(ErrorCode::NeedsVerification, "verify first"),
            ApplicationError::invalid_skiff_yml(vec!["tasks must not be empty".into()]),
            ApplicationError::repository_not_found(RepoContextDetails {
                host: "github.com".into(),
                owner: "acme".into(),
                user_is_owner: true,
                user_scopes: vec!["repo".into()],
                last_update: Some("2023-06-01T00:00:00Z".into()),
            }),
            ApplicationError::repository_unauthorized(RepoAuthDetails {
                host: "bitbucket.org".into(),
                scopes: vec!["account".into()],
            }),
            ApplicationError::new(ErrorCode::PaymentSpendingLimitReached, "limit"),
            ApplicationError::new(ErrorCode::InvalidCostCenter, "bad cost center").with_payload(
                ErrorPayload::CostCenter(CostCenterDetails {
                    attribution_id: "team:4c94".into(),
                }),
            ),
            ApplicationError::new(ErrorCode::HeadlessLogNotYetAvailable, "logs pending"),
            ApplicationError::new(ErrorCode::TooManyRunningWorkspaces, "too many"),
            ApplicationError::new(ErrorCode::Conflict, "exists"),
            ApplicationError::new(ErrorCode::TooManyRequests, "slow down"),
            ApplicationError::new(ErrorCode::Cancelled, "cancelled"),
            ApplicationError::new(ErrorCode::InternalServerError, "boom"),
        ];
        let converter = converter();
        for original in originals {
            let rpc = converter.to_error(&original);
            let restored = converter.from_error(&rpc);
            assert_eq!(restored, original, "via {:?}", rpc.code);
        }
    }

    #[test]
    fn from_any_passes_taxonomy_errors_through() {
        let converter = converter();

        let app = ApplicationError::new(ErrorCode::Conflict, "exists");
        assert_eq!(converter.from_any(&app), app);

        let rpc = RpcError::new(Code::NotFound, "gone");
        let err = converter.from_any(&rpc);
        assert_eq!(err.code, ErrorCode::NotFound);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = converter.from_any(&io);
        assert_eq!(err.code, ErrorCode::InternalServerError);
        assert_eq!(err.message, "disk on fire");
    }
}
