//! contactbook-core: in-memory contact list store with an edit-mode protocol
//!
//! This library holds the state behind the contact manager screen. It is used
//! by the CLI front end, which only ever reads snapshots and dispatches
//! commands.
//!
//! # Main Entry Points
//!
//! - [`state`] - `ContactStore`, commands, events and subscriptions
//! - [`contacts`] - Contact values, ids and the ordered contact list
//! - [`form`] - Headless model of the add/edit form
//! - [`config`] - Configuration management

pub mod config;
pub mod contacts;
pub mod errors;
pub mod events;
pub mod form;
pub mod logging;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use config::ContactbookConfig;
pub use contacts::{Contact, ContactEntry, ContactError, ContactId, ContactList};
pub use errors::{ConfigError, ContactbookError};
pub use form::ContactForm;
pub use state::{
    Command, ContactStore, DispatchError, Event, StateSnapshot, Store, SubscriptionId,
};

// Re-export logging initialization
pub use logging::init_logging;
