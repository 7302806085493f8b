//! Bidirectional resolver between action definitions and canonical actions.
//!
//! A definition is the flat attribute view an operator writes: scalar fields
//! plus one optional block per action type. [`decode`] selects the block for
//! the declared type and converts it into an [`Action`](alertsync_core::Action);
//! [`encode`] goes the other way. For every action, decoding its encoding
//! yields the same action.
//!
//! ```rust
//! use alertsync_core::{Action, ActionPayload, OpsGenieAction};
//!
//! let action = Action::new("page-ops", ActionPayload::OpsGenie(OpsGenieAction::new("key")));
//! let data = alertsync_resolver::encode(&action);
//! let back = alertsync_resolver::decode("OpsGenieAction", &data).unwrap();
//! assert_eq!(back, action);
//! ```

pub mod block;
pub mod codec;
pub mod document;
pub mod error;
pub mod resource;
pub mod resolver;
pub mod selector;

pub use block::PropertyBlock;
pub use codec::VariantCodec;
pub use document::{DocumentFormat, load_document, parse_document, render_document};
pub use error::DocumentError;
pub use resolver::{decode, decode_declared, encode, encode_into, encode_remote};
pub use resource::{BlockCandidates, ResourceData};
pub use selector::select_block;
