// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converters between Skiff domain records and the `skiff.v1` public API.
//!
//! Everything hangs off [`ApiConverter`], one method per published entity.
//! Conversions are pure and synchronous: they read the domain record, build a
//! fresh public value, and never touch storage or the network. The handle
//! carries no state, so a single instance can be shared freely across
//! request handlers.
//!
//! Domain records are treated as untrusted input. Unknown enum tokens map to
//! the schema's `*_UNSPECIFIED` member (or a documented default) rather than
//! failing the conversion; only a missing identity on the primary record is
//! an error, surfaced as [`ConversionError`].
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod configuration;
mod envvar;
mod error;
mod installation;
mod organization;
mod prebuild;
mod scm;
mod workspace;

use chrono::{DateTime, Utc};

/// Stateless converter between domain records and `skiff.v1` messages.
///
/// The unit struct exists so call sites read as `converter.to_workspace(..)`
/// and the conversion surface stays one coherent API instead of a bag of
/// free functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiConverter;

impl ApiConverter {
    /// Creates a converter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Contract violations raised by the forward converters.
///
/// These mark records that should never have reached the API layer; callers
/// report them, they do not recover from them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A required identity field of the primary record is missing or empty.
    #[error("malformed {entity} record: missing {field}")]
    MalformedRecord {
        /// Entity kind, e.g. `"workspace"`.
        entity: &'static str,
        /// The absent field.
        field: &'static str,
    },

    /// `ORGANIZATION_ROLE_UNSPECIFIED` has no domain token to map back to.
    #[error("organization role is unspecified")]
    UnspecifiedRole,
}

/// Parses an internal RFC3339 timestamp string.
///
/// Unset or unparseable input yields `None` and the public field is simply
/// omitted; timestamps are never synthesized.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    raw.parse::<DateTime<Utc>>().ok()
}
