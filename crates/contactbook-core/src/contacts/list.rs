use super::errors::ContactError;
use super::types::{Contact, ContactEntry, ContactId};

/// Ordered contact list with the edit-mode pointer.
///
/// Key invariant: `edit_target` always names an entry currently in `entries`,
/// or is `None` (idle). The pointer is held by id rather than position, so
/// removing an earlier entry never retargets it to a different contact. The
/// invariant is maintained automatically when entries are removed.
#[derive(Clone, Debug, Default)]
pub struct ContactList {
    /// Contacts in insertion order (private to enforce invariants).
    entries: Vec<ContactEntry>,
    /// Id of the contact being edited, or None when not in edit mode.
    edit_target: Option<ContactId>,
}

impl ContactList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_index(&self, index: usize) -> Result<(), ContactError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ContactError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Append a contact, returning its new id and position.
    ///
    /// No duplicate check: identical contacts get distinct ids.
    pub fn push(&mut self, contact: Contact) -> (ContactId, usize) {
        let entry = ContactEntry::new(contact);
        let id = entry.id;
        self.entries.push(entry);
        (id, self.entries.len() - 1)
    }

    /// Replace the contact at `index`, keeping its id.
    ///
    /// # Errors
    /// Returns `ContactError::IndexOutOfRange` if `index >= len`.
    pub fn replace(&mut self, index: usize, contact: Contact) -> Result<ContactId, ContactError> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        entry.contact = contact;
        Ok(entry.id)
    }

    /// Remove the contact at `index`, shifting later contacts left by one.
    ///
    /// Adjusts the edit target to maintain the invariant:
    /// - If the removed contact was being edited: edit mode is cleared
    /// - Otherwise the target keeps its id (its index drops by one if it was after `index`)
    ///
    /// # Errors
    /// Returns `ContactError::IndexOutOfRange` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<ContactEntry, ContactError> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);

        if self.edit_target == Some(removed.id) {
            self.edit_target = None;
        }

        Ok(removed)
    }

    /// Enter edit mode for the contact at `index`, or leave it with `None`.
    ///
    /// Returns the id of the new target, if any.
    ///
    /// # Errors
    /// Returns `ContactError::IndexOutOfRange` if `index` is `Some` and out of range.
    /// The current edit target is left untouched on error.
    pub fn set_edit_target(
        &mut self,
        index: Option<usize>,
    ) -> Result<Option<ContactId>, ContactError> {
        let target = match index {
            Some(index) => {
                self.check_index(index)?;
                Some(self.entries[index].id)
            }
            None => None,
        };
        self.edit_target = target;
        Ok(target)
    }

    /// Leave edit mode, returning the id that was targeted.
    pub fn clear_edit_target(&mut self) -> Option<ContactId> {
        self.edit_target.take()
    }

    /// Whether a contact is currently targeted for editing.
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Id of the contact being edited, if any.
    pub fn edit_target_id(&self) -> Option<ContactId> {
        self.edit_target
    }

    /// Current position of the contact being edited, if any.
    pub fn edit_target_index(&self) -> Option<usize> {
        self.edit_target.and_then(|id| self.position(id))
    }

    /// Current position of the contact with the given id.
    fn position(&self, id: ContactId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[ContactEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
