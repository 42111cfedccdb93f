//! Contact store: the single source of truth for the contact screen.
//!
//! Mutations are expressed as [`Command`]s and dispatched through the
//! [`Store`] trait. A successful dispatch returns the [`Event`]s describing
//! what changed and then notifies subscribers with a fresh [`StateSnapshot`].

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod snapshot;
pub mod store;
pub mod subscriptions;
pub mod types;

pub use dispatch::ContactStore;
pub use errors::DispatchError;
pub use events::Event;
pub use snapshot::StateSnapshot;
pub use store::Store;
pub use subscriptions::SubscriptionId;
pub use types::Command;
