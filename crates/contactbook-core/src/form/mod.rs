//! Headless model of the add/edit contact form.
//!
//! The form keeps the draft field values and its own visibility. Whether a
//! submit adds or edits is decided by the store's edit mode, never by the
//! form, so the two cannot disagree.

use tracing::debug;

use crate::config::FormConfig;
use crate::contacts::{Contact, ContactId};
use crate::state::{ContactStore, DispatchError, Event, StateSnapshot};

/// Draft state of the contact form.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    visible: bool,
    trim_whitespace: bool,
    /// Edit target last seen by `sync_with`, used to prefill only on change.
    synced_target: Option<ContactId>,
    editing: bool,
}

impl ContactForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            trim_whitespace: config.trim_whitespace(),
            ..Self::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Show or hide the form (the "Add Contact" / "Edit Contact" button).
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Whether the last synced snapshot was in edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Follow the store's edit mode.
    ///
    /// When the edit target changes to a contact, the draft is pre-filled with
    /// that contact's fields. Leaving edit mode keeps the draft as typed.
    pub fn sync_with(&mut self, snapshot: &StateSnapshot) {
        self.editing = snapshot.is_editing();
        if snapshot.edit_target_id == self.synced_target {
            return;
        }
        if let Some(entry) = snapshot.editing_entry() {
            self.name = entry.contact.name.clone();
            self.email = entry.contact.email.clone();
            debug!(
                event = "core.form.prefilled",
                contact_id = %entry.id,
                index = ?snapshot.edit_target
            );
        }
        self.synced_target = snapshot.edit_target_id;
    }

    pub fn title(&self) -> &'static str {
        if self.editing {
            "Edit Contact"
        } else {
            "Add Contact"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing { "Update" } else { "Submit" }
    }

    /// The contact that `submit` would send.
    pub fn draft(&self) -> Contact {
        let contact = Contact::new(self.name.clone(), self.email.clone());
        if self.trim_whitespace {
            contact.trimmed()
        } else {
            contact
        }
    }

    /// Submit the draft: edits the current edit target if there is one,
    /// otherwise adds a new contact.
    ///
    /// On success the draft is cleared, the form hidden, and edit mode left.
    /// On error the form is unchanged so the input can be corrected.
    pub fn submit(&mut self, store: &mut ContactStore) -> Result<Vec<Event>, DispatchError> {
        let contact = self.draft();

        let mut events = match store.contacts().edit_target_index() {
            Some(index) => store.edit_contact(index, contact)?,
            None => store.add_contact(contact)?,
        };
        events.extend(store.set_edit_form(None)?);

        self.name.clear();
        self.email.clear();
        self.visible = false;
        self.sync_with(&store.snapshot());

        Ok(events)
    }
}
