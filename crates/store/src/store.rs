use alertsync_core::{Action, RemoteAction};
use async_trait::async_trait;

use crate::error::StoreError;

/// CRUD interface of the remote alerting service, scoped by repository.
///
/// Reads return the service's wire representation so that action types this
/// version does not know reach the caller instead of being dropped.
/// Implementations must be `Send + Sync` and safe for concurrent access.
#[async_trait]
pub trait ActionStore: Send + Sync {
    /// Fetch the action named `name`.
    async fn get(&self, repository: &str, name: &str) -> Result<RemoteAction, StoreError>;

    /// Create a new action. Returns the stored action, including its
    /// service-assigned id.
    async fn add(&self, repository: &str, action: &Action) -> Result<RemoteAction, StoreError>;

    /// Replace an existing action with the same name.
    async fn update(&self, repository: &str, action: &Action)
    -> Result<RemoteAction, StoreError>;

    /// Delete the action named `name`.
    async fn delete(&self, repository: &str, name: &str) -> Result<(), StoreError>;
}
