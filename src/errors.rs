use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a submission was rejected.
///
/// Every kind maps to the same host-facing rejection; the kind keeps the
/// causes distinguishable for callers, logs, and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The link does not point at a dataset page.
    MalformedUrl,
    /// The catalog could not be reached at the transport level.
    ServiceUnavailable,
    /// The catalog answered 404 for the dataset.
    DatasetNotFound,
    /// The provider's credential cannot read the dataset.
    NotAuthorized,
    /// The dataset creator is not the provider.
    NotOwner,
    /// The catalog answered 200 with a body missing the expected fields.
    MalformedResponse,
}

impl RejectionKind {
    /// Stable code for this kind (e.g., `"R001"`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            RejectionKind::MalformedUrl => "R001",
            RejectionKind::ServiceUnavailable => "R002",
            RejectionKind::DatasetNotFound => "R003",
            RejectionKind::NotAuthorized => "R004",
            RejectionKind::NotOwner => "R005",
            RejectionKind::MalformedResponse => "R006",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectionKind::MalformedUrl => "malformed URL",
            RejectionKind::ServiceUnavailable => "service unavailable",
            RejectionKind::DatasetNotFound => "dataset not found",
            RejectionKind::NotAuthorized => "not authorized",
            RejectionKind::NotOwner => "not owner",
            RejectionKind::MalformedResponse => "malformed response",
        };
        f.write_str(label)
    }
}

/// A submission rejected by the ownership check.
///
/// The host maps this to an access-denial response for the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid resource: {message}")]
pub struct RejectionError {
    kind: RejectionKind,
    message: String,
}

impl RejectionError {
    /// Create a rejection of the given kind with a human-readable reason.
    #[must_use]
    pub fn new(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn malformed_url() -> Self {
        Self::new(
            RejectionKind::MalformedUrl,
            "The provided URL does not point to a valid CKAN dataset",
        )
    }

    pub(crate) fn service_unavailable() -> Self {
        Self::new(
            RejectionKind::ServiceUnavailable,
            "The CKAN server is not responding",
        )
    }

    pub(crate) fn not_owner() -> Self {
        Self::new(
            RejectionKind::NotOwner,
            "The user is not the owner of the dataset",
        )
    }

    /// The rejection kind.
    #[must_use]
    pub fn kind(&self) -> RejectionKind {
        self.kind
    }

    /// The reason, without the `Invalid resource:` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience alias for `Result<T, RejectionError>`.
pub type Result<T> = std::result::Result<T, RejectionError>;
