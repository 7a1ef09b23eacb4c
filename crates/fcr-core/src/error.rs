//! Store error types for fcr-core.
//!
//! [`StoreError`] is the single error type that crosses the store-client
//! boundary. Backends classify their failures into these variants; the
//! effect algebra treats them as opaque except for [`StoreError::NotFound`],
//! which [`is_not_found`] identifies.

use std::sync::Arc;

use thiserror::Error;

use crate::meta::ObjectKey;

/// Errors reported by store clients (and by the evaluation boundary).
///
/// The type is `Clone` so a failure can be injected into a reusable
/// pipeline; serde errors are shared behind an `Arc` for that reason.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No object of the given kind exists under the key.
    #[error("{kind} \"{key}\" not found")]
    NotFound { kind: String, key: ObjectKey },

    /// An object of the given kind already exists under the key.
    #[error("{kind} \"{key}\" already exists")]
    AlreadyExists { kind: String, key: ObjectKey },

    /// A write raced with another write or failed a precondition.
    #[error("operation cannot be fulfilled on {kind} \"{key}\": {reason}")]
    Conflict {
        kind: String,
        key: ObjectKey,
        reason: String,
    },

    /// The request itself was malformed.
    #[error("bad request: {reason}")]
    BadRequest { reason: String },

    /// The object failed validation.
    #[error("{kind} \"{key}\" is invalid: {reason}")]
    Invalid {
        kind: String,
        key: ObjectKey,
        reason: String,
    },

    /// The kind is not registered with the store's scheme.
    #[error("no kind is registered for {kind}")]
    NoKindMatch { kind: String },

    /// The request context was cancelled.
    #[error("context canceled")]
    Cancelled,

    /// The request context's deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// Object (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// A store operation panicked while being evaluated.
    #[error("operation panicked: {message}")]
    Panicked { message: String },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(Arc::new(err))
    }
}

impl StoreError {
    /// Returns true if this is the store's not-found class.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Returns true if the failure came from the request context.
    pub fn is_context_error(&self) -> bool {
        matches!(self, StoreError::Cancelled | StoreError::DeadlineExceeded)
    }
}

/// Returns true if `err` is a not-found error.
pub fn is_not_found(err: &StoreError) -> bool {
    err.is_not_found()
}

/// Returns true if `err` is an already-exists error.
pub fn is_already_exists(err: &StoreError) -> bool {
    matches!(err, StoreError::AlreadyExists { .. })
}

/// Returns true if `err` is a conflict error.
pub fn is_conflict(err: &StoreError) -> bool {
    matches!(err, StoreError::Conflict { .. })
}

/// Maps a not-found failure to success; every other outcome is unchanged.
pub fn ignore_not_found(result: Result<(), StoreError>) -> Result<(), StoreError> {
    match result {
        Err(err) if err.is_not_found() => Ok(()),
        other => other,
    }
}

/// Maps an already-exists failure to success; every other outcome is unchanged.
pub fn ignore_already_exists(result: Result<(), StoreError>) -> Result<(), StoreError> {
    match result {
        Err(err) if is_already_exists(&err) => Ok(()),
        other => other,
    }
}
