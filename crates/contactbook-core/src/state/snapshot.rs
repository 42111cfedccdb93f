use serde::{Deserialize, Serialize};

use crate::contacts::{Contact, ContactEntry, ContactId, ContactList};

/// Immutable read of the store state for one render pass.
///
/// Snapshots are owned copies: holding one never blocks or observes later
/// mutations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub contacts: Vec<ContactEntry>,
    /// Current position of the contact being edited.
    pub edit_target: Option<usize>,
    /// Stable id of the contact being edited.
    pub edit_target_id: Option<ContactId>,
    pub show_info_screen: bool,
}

impl StateSnapshot {
    pub(crate) fn capture(list: &ContactList, show_info_screen: bool) -> Self {
        Self {
            contacts: list.entries().to_vec(),
            edit_target: list.edit_target_index(),
            edit_target_id: list.edit_target_id(),
            show_info_screen,
        }
    }

    /// Contact values in display order, without ids.
    pub fn contact_values(&self) -> Vec<Contact> {
        self.contacts.iter().map(|e| e.contact.clone()).collect()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// The entry being edited, if any.
    pub fn editing_entry(&self) -> Option<&ContactEntry> {
        self.edit_target.and_then(|i| self.contacts.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}
