use std::sync::Arc;

use alertsync_core::{Action, identifier};
use alertsync_resolver::{ResourceData, decode_declared, encode_into};
use tracing::{debug, info, instrument};

use crate::error::{Operation, ResourceError, ResourceFailure, StoreError};
use crate::store::ActionStore;

/// Lifecycle of one action resource against an [`ActionStore`].
///
/// Every operation takes the resource data by mutable reference. Create,
/// read and update leave it holding the stored action as the only variant
/// block, the way a refresh does.
#[derive(Clone)]
pub struct ActionResource {
    store: Arc<dyn ActionStore>,
}

impl ActionResource {
    pub fn new(store: Arc<dyn ActionStore>) -> Self {
        Self { store }
    }

    /// Create the action and record its composite id.
    #[instrument(skip(self, data), fields(repository = %data.repository, name = %data.name))]
    pub async fn create(&self, data: &mut ResourceData) -> Result<(), ResourceError> {
        self.create_inner(data)
            .await
            .map_err(|cause| ResourceError::new(Operation::Create, cause))
    }

    /// Refresh the resource data from the store.
    ///
    /// A record holding only its composite id, as after an import, has its
    /// repository and name recovered from the id first.
    #[instrument(skip(self, data), fields(id = %data.id))]
    pub async fn read(&self, data: &mut ResourceData) -> Result<(), ResourceError> {
        self.read_inner(data)
            .await
            .map_err(|cause| ResourceError::new(Operation::Read, cause))
    }

    /// Push the planned action to the store, then refresh.
    #[instrument(skip(self, data), fields(id = %data.id))]
    pub async fn update(&self, data: &mut ResourceData) -> Result<(), ResourceError> {
        self.update_inner(data)
            .await
            .map_err(|cause| ResourceError::new(Operation::Update, cause))
    }

    /// Delete the action from the store.
    #[instrument(skip(self, data), fields(id = %data.id))]
    pub async fn delete(&self, data: &ResourceData) -> Result<(), ResourceError> {
        self.delete_inner(data)
            .await
            .map_err(|cause| ResourceError::new(Operation::Delete, cause))
    }

    /// Start managing an existing action known only by its composite id.
    pub async fn import(&self, id: &str) -> Result<ResourceData, ResourceError> {
        let mut data = ResourceData::from_id(id);
        self.read(&mut data).await?;
        Ok(data)
    }

    async fn create_inner(&self, data: &mut ResourceData) -> Result<(), ResourceFailure> {
        let action = decode_declared(data)?;
        let stored = self.store.add(&data.repository, &action).await?;
        data.id = identifier::encode(&data.repository, &stored.name);
        info!(id = %data.id, action_id = %stored.id, "action created");
        self.read_inner(data).await
    }

    async fn read_inner(&self, data: &mut ResourceData) -> Result<(), ResourceFailure> {
        if data.repository.is_empty() {
            let (repository, name) = identifier::decode(&data.id)?;
            debug!(repository, name, "recovered repository and name from id");
            data.repository = repository.to_owned();
            data.name = name.to_owned();
        }

        let remote = self.store.get(&data.repository, &data.name).await?;
        if remote.is_empty() {
            return Err(StoreError::NotFound(identifier::encode(&data.repository, &data.name)).into());
        }

        let action = Action::try_from(remote)?;
        encode_into(&action, data);
        Ok(())
    }

    async fn update_inner(&self, data: &mut ResourceData) -> Result<(), ResourceFailure> {
        let action = decode_declared(data)?;
        let stored = self.store.update(&data.repository, &action).await?;
        info!(action_id = %stored.id, "action updated");
        self.read_inner(data).await
    }

    async fn delete_inner(&self, data: &ResourceData) -> Result<(), ResourceFailure> {
        let action = decode_declared(data)?;
        self.store.delete(&data.repository, &action.name).await?;
        info!("action deleted");
        Ok(())
    }
}
