use alertsync_core::{Action, RemoteAction, identifier};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::error::StoreError;
use crate::store::ActionStore;

/// In-memory [`ActionStore`] backed by a [`DashMap`].
///
/// Actions are keyed by their composite identifier and stored in wire form.
/// New actions are given a random UUID as their service id.
#[derive(Debug, Default)]
pub struct MemoryActionStore {
    actions: DashMap<String, RemoteAction>,
}

impl MemoryActionStore {
    /// Create a new, empty in-memory action store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a wire action as-is, replacing any action with the same name.
    ///
    /// Used to seed the store with actions the service created on its own,
    /// including types this version cannot decode.
    pub fn insert_remote(&self, repository: &str, action: RemoteAction) {
        let key = identifier::encode(repository, &action.name);
        self.actions.insert(key, action);
    }

    /// Number of stored actions across all repositories.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[async_trait]
impl ActionStore for MemoryActionStore {
    async fn get(&self, repository: &str, name: &str) -> Result<RemoteAction, StoreError> {
        let key = identifier::encode(repository, name);
        self.actions
            .get(&key)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(key))
    }

    async fn add(&self, repository: &str, action: &Action) -> Result<RemoteAction, StoreError> {
        let key = identifier::encode(repository, &action.name);
        match self.actions.entry(key) {
            Entry::Occupied(occupied) => Err(StoreError::AlreadyExists(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                let mut remote = RemoteAction::from(action);
                remote.id = uuid::Uuid::new_v4().to_string();
                debug!(key = %vacant.key(), id = %remote.id, "action added");
                vacant.insert(remote.clone());
                Ok(remote)
            }
        }
    }

    async fn update(
        &self,
        repository: &str,
        action: &Action,
    ) -> Result<RemoteAction, StoreError> {
        let key = identifier::encode(repository, &action.name);
        let Some(mut entry) = self.actions.get_mut(&key) else {
            return Err(StoreError::NotFound(key));
        };

        // The service id survives updates that do not carry one.
        let mut remote = RemoteAction::from(action);
        if remote.id.is_empty() {
            remote.id.clone_from(&entry.id);
        }
        debug!(key = %key, id = %remote.id, "action updated");
        *entry = remote.clone();
        Ok(remote)
    }

    async fn delete(&self, repository: &str, name: &str) -> Result<(), StoreError> {
        let key = identifier::encode(repository, name);
        match self.actions.remove(&key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alertsync_core::{ActionPayload, HumioRepoAction, OpsGenieAction};

    use super::*;

    fn opsgenie(name: &str) -> Action {
        Action::new(name, ActionPayload::OpsGenie(OpsGenieAction::new("key")))
    }

    #[tokio::test]
    async fn add_then_get() {
        let store = MemoryActionStore::new();
        let added = store.add("sandbox", &opsgenie("og")).await.unwrap();
        assert!(!added.id.is_empty());
        assert_eq!(added.action_type, "OpsGenieAction");

        let fetched = store.get("sandbox", "og").await.unwrap();
        assert_eq!(fetched, added);
    }

    #[tokio::test]
    async fn add_rejects_duplicates() {
        let store = MemoryActionStore::new();
        store.add("sandbox", &opsgenie("og")).await.unwrap();
        let err = store.add("sandbox", &opsgenie("og")).await.unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists("sandbox+og".into()));
    }

    #[tokio::test]
    async fn repositories_are_separate() {
        let store = MemoryActionStore::new();
        store.add("sandbox", &opsgenie("og")).await.unwrap();
        store.add("prod", &opsgenie("og")).await.unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get("staging", "og").await.is_err());
    }

    #[tokio::test]
    async fn update_keeps_service_id() {
        let store = MemoryActionStore::new();
        let added = store.add("sandbox", &opsgenie("og")).await.unwrap();

        let changed = Action::new(
            "og",
            ActionPayload::HumioRepo(HumioRepoAction {
                ingest_token: "token".into(),
            }),
        );
        let updated = store.update("sandbox", &changed).await.unwrap();
        assert_eq!(updated.id, added.id);
        assert_eq!(updated.action_type, "HumioRepoAction");
        assert!(updated.ops_genie_action.is_none());
    }

    #[tokio::test]
    async fn update_of_missing_action_fails() {
        let store = MemoryActionStore::new();
        let err = store.update("sandbox", &opsgenie("og")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("sandbox+og".into()));
    }

    #[tokio::test]
    async fn delete_removes_the_action() {
        let store = MemoryActionStore::new();
        store.add("sandbox", &opsgenie("og")).await.unwrap();
        store.delete("sandbox", "og").await.unwrap();
        assert!(store.is_empty());
        assert!(store.delete("sandbox", "og").await.is_err());
    }
}
