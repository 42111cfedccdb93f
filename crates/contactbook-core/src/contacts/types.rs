use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a contact in the list.
///
/// Assigned once when the contact is added and kept across edits, so it keeps
/// referring to the same entry when earlier entries are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A name/email value pair.
///
/// Contacts are plain values: two contacts with the same fields compare equal.
/// Identity lives in [`ContactEntry`]. Any pair of strings is a valid contact,
/// including empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Copy of this contact with surrounding whitespace removed from both fields.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// A contact together with its stable id, as stored in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub id: ContactId,
    #[serde(flatten)]
    pub contact: Contact,
}

impl ContactEntry {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: ContactId::generate(),
            contact,
        }
    }

    pub fn name(&self) -> &str {
        &self.contact.name
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }
}
