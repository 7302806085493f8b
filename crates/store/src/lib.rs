//! Persistence seam for actions and the resource lifecycle built on it.
//!
//! [`ActionStore`] is the CRUD interface of the remote alerting service.
//! [`MemoryActionStore`] implements it in process for tests and dry runs.
//! [`ActionResource`] drives create, read, update and delete of one action
//! resource through the resolver.

pub mod error;
pub mod memory;
pub mod resource;
pub mod store;

pub use error::{Operation, ResourceError, ResourceFailure, StoreError};
pub use memory::MemoryActionStore;
pub use resource::ActionResource;
pub use store::ActionStore;
