use serde::{Deserialize, Serialize};

use crate::contacts::Contact;

/// All state transitions that can be dispatched through the store.
///
/// Indices are 0-based positions in the current list. Commands use owned
/// types so they can be serialized, recorded, and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Append a contact to the end of the list.
    AddContact { contact: Contact },
    /// Replace the contact at `index` and leave edit mode.
    EditContact { index: usize, contact: Contact },
    /// Remove the contact at `index`, shifting later contacts left.
    DeleteContact { index: usize },
    /// Enter edit mode for `index`, or leave edit mode with `None`.
    SetEditForm { index: Option<usize> },
    /// Flip the info screen flag.
    ToggleInfoScreen,
}

impl Command {
    /// Short stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddContact { .. } => "add_contact",
            Command::EditContact { .. } => "edit_contact",
            Command::DeleteContact { .. } => "delete_contact",
            Command::SetEditForm { .. } => "set_edit_form",
            Command::ToggleInfoScreen => "toggle_info_screen",
        }
    }
}
