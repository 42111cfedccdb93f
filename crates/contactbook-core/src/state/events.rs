use serde::{Deserialize, Serialize};

use crate::contacts::ContactId;

/// All state changes that can result from a dispatched command.
///
/// Each variant describes _what happened_, not what should happen. Only
/// successful state changes produce events; rejected commands use the
/// `Result` error channel (`Err(DispatchError)`), not the event stream.
///
/// Indices are positions at the time the event was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A contact was appended to the list.
    ContactAdded { id: ContactId, index: usize },
    /// The contact at `index` was replaced (id unchanged).
    ContactEdited { id: ContactId, index: usize },
    /// The contact formerly at `index` was removed.
    ContactDeleted { id: ContactId, index: usize },
    /// Edit mode now targets the contact at `index`.
    EditModeEntered { id: ContactId, index: usize },
    /// Edit mode ended (explicitly, on commit, or because the target was deleted).
    EditModeExited,
    /// The info screen flag changed.
    InfoScreenToggled { visible: bool },
}
