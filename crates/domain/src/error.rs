//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CloudTrackError`] via `#[from]`.

use crate::id::ServiceId;

/// Top-level error for every fallible domain and application operation.
#[derive(Debug, thiserror::Error)]
pub enum CloudTrackError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// A domain invariant was violated by caller input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("service name must not be empty")]
    EmptyName,

    #[error("hourly cost must be a finite non-negative amount, got {0}")]
    InvalidHourlyCost(f64),

    #[error("usage hours must be a finite non-negative amount, got {0}")]
    InvalidUsageHours(f64),
}

/// The referenced service does not exist in the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Service ID not found: {id}")]
pub struct NotFoundError {
    pub id: ServiceId,
}

/// The backing store could not serve the request.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("service registry lock poisoned")]
    Poisoned,

    #[error("service {0} already stored")]
    Duplicate(ServiceId),
}
