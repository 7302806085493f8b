use std::fmt;

use alertsync_core::ActionError;
use thiserror::Error;

/// Errors from action store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No action with the given name exists in the repository.
    #[error("action not found: {0}")]
    NotFound(String),

    /// An action with the given name already exists in the repository.
    #[error("action already exists: {0}")]
    AlreadyExists(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A resource lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a lifecycle operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceFailure {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A failed lifecycle operation, tagged with the operation that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not {op} action: {cause}")]
pub struct ResourceError {
    pub op: Operation,
    #[source]
    pub cause: ResourceFailure,
}

impl ResourceError {
    pub fn new(op: Operation, cause: impl Into<ResourceFailure>) -> Self {
        Self {
            op,
            cause: cause.into(),
        }
    }

    /// Returns `true` if the action does not exist remotely.
    pub fn is_not_found(&self) -> bool {
        matches!(self.cause, ResourceFailure::Store(StoreError::NotFound(_)))
    }
}
