pub mod errors;
pub mod list;
pub mod types;

// Re-export commonly used types at module level
pub use errors::ContactError;
pub use list::ContactList;
pub use types::{Contact, ContactEntry, ContactId};
