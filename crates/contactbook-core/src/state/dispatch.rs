use tracing::{debug, info, warn};

use crate::contacts::{Contact, ContactList};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::snapshot::StateSnapshot;
use crate::state::store::Store;
use crate::state::subscriptions::{Subscribers, SubscriptionId};
use crate::state::types::Command;

/// In-memory Store implementation backing the contact screen.
///
/// Constructed explicitly at startup and passed to whoever needs it; there is
/// no global instance. State starts empty, idle, with the info screen hidden,
/// and is lost when the store is dropped.
#[derive(Default)]
pub struct ContactStore {
    contacts: ContactList,
    show_info_screen: bool,
    subscribers: Subscribers,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.contacts, self.show_info_screen)
    }

    /// Read-only view of the contact list.
    pub fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    pub fn show_info_screen(&self) -> bool {
        self.show_info_screen
    }

    /// Register a listener called after every committed mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StateSnapshot, &[Event]) + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    /// Release a listener. Returns false if it was already released.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<Vec<Event>, DispatchError> {
        self.dispatch(Command::AddContact { contact })
    }

    pub fn edit_contact(
        &mut self,
        index: usize,
        contact: Contact,
    ) -> Result<Vec<Event>, DispatchError> {
        self.dispatch(Command::EditContact { index, contact })
    }

    pub fn delete_contact(&mut self, index: usize) -> Result<Vec<Event>, DispatchError> {
        self.dispatch(Command::DeleteContact { index })
    }

    pub fn set_edit_form(&mut self, index: Option<usize>) -> Result<Vec<Event>, DispatchError> {
        self.dispatch(Command::SetEditForm { index })
    }

    pub fn toggle_info_screen(&mut self) -> Result<Vec<Event>, DispatchError> {
        self.dispatch(Command::ToggleInfoScreen)
    }

    /// Apply a command to the state. Every check runs before the first write,
    /// so an `Err` leaves the state untouched.
    fn apply(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        match cmd {
            Command::AddContact { contact } => {
                let (id, index) = self.contacts.push(contact);
                Ok(vec![Event::ContactAdded { id, index }])
            }
            Command::EditContact { index, contact } => {
                let id = self.contacts.replace(index, contact)?;
                let mut events = vec![Event::ContactEdited { id, index }];
                // Committing an edit always ends edit mode
                if self.contacts.clear_edit_target().is_some() {
                    events.push(Event::EditModeExited);
                }
                Ok(events)
            }
            Command::DeleteContact { index } => {
                let was_editing = self.contacts.is_editing();
                let removed = self.contacts.remove(index)?;
                let mut events = vec![Event::ContactDeleted {
                    id: removed.id,
                    index,
                }];
                if was_editing && !self.contacts.is_editing() {
                    events.push(Event::EditModeExited);
                }
                Ok(events)
            }
            Command::SetEditForm { index: Some(index) } => {
                let target = self.contacts.set_edit_target(Some(index))?;
                Ok(target
                    .map(|id| Event::EditModeEntered { id, index })
                    .into_iter()
                    .collect())
            }
            Command::SetEditForm { index: None } => {
                if self.contacts.clear_edit_target().is_some() {
                    Ok(vec![Event::EditModeExited])
                } else {
                    Ok(Vec::new())
                }
            }
            Command::ToggleInfoScreen => {
                self.show_info_screen = !self.show_info_screen;
                Ok(vec![Event::InfoScreenToggled {
                    visible: self.show_info_screen,
                }])
            }
        }
    }
}

impl Store for ContactStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        let command = cmd.name();
        debug!(event = "core.state.dispatch_started", command = command);

        let result = self.apply(cmd);

        match &result {
            Ok(events) => {
                info!(
                    event = "core.state.dispatch_completed",
                    command = command,
                    event_count = events.len(),
                    contact_count = self.contacts.len()
                );
                if !events.is_empty() {
                    let snapshot = self.snapshot();
                    self.subscribers.notify(&snapshot, events);
                }
            }
            // Rejections are user input errors, never fatal
            Err(e) => warn!(
                event = "core.state.dispatch_failed",
                command = command,
                error = %e
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::ContactError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn a() -> Contact {
        Contact::new("A", "a@x.com")
    }

    fn b() -> Contact {
        Contact::new("B", "b@x.com")
    }

    fn store_with(contacts: &[Contact]) -> ContactStore {
        let mut store = ContactStore::new();
        for contact in contacts {
            store.add_contact(contact.clone()).unwrap();
        }
        store
    }

    #[test]
    fn test_core_store_implements_store_trait() {
        fn assert_store<T: Store>(_s: &T) {}
        let store = ContactStore::new();
        assert_store(&store);
    }

    #[test]
    fn test_initial_state() {
        let snapshot = ContactStore::new().snapshot();
        assert!(snapshot.contacts.is_empty());
        assert_eq!(snapshot.edit_target, None);
        assert!(!snapshot.show_info_screen);
    }

    #[test]
    fn test_adds_preserve_call_order() {
        let contacts: Vec<Contact> = (0..5)
            .map(|i| Contact::new(format!("C{i}"), format!("c{i}@x.com")))
            .collect();
        let store = store_with(&contacts);
        assert_eq!(store.snapshot().contact_values(), contacts);
    }

    #[test]
    fn test_add_emits_contact_added_with_index() {
        let mut store = store_with(&[a()]);
        let events = store.add_contact(b()).unwrap();
        let id = store.contacts().entries()[1].id;
        assert_eq!(events, vec![Event::ContactAdded { id, index: 1 }]);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let store = store_with(&[a(), a()]);
        assert_eq!(store.snapshot().contact_values(), vec![a(), a()]);
    }

    #[test]
    fn test_add_accepts_any_strings() {
        let inputs = vec![a(), Contact::new("", ""), Contact::new("B", " ")];
        let mut store = ContactStore::new();
        for contact in &inputs {
            store.add_contact(contact.clone()).unwrap();
        }
        assert_eq!(store.snapshot().contact_values(), inputs);
    }

    #[test]
    fn test_add_keeps_edit_mode() {
        let mut store = store_with(&[a()]);
        store.set_edit_form(Some(0)).unwrap();
        store.add_contact(b()).unwrap();
        assert_eq!(store.snapshot().edit_target, Some(0));
    }

    #[test]
    fn test_scenario_add_edit_delete() {
        let mut store = ContactStore::new();
        store.add_contact(a()).unwrap();
        store.add_contact(b()).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.contact_values(), vec![a(), b()]);
        assert_eq!(snapshot.edit_target, None);

        store.set_edit_form(Some(0)).unwrap();
        assert_eq!(store.snapshot().edit_target, Some(0));

        let a2 = Contact::new("A2", "a2@x.com");
        store.edit_contact(0, a2.clone()).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.contact_values(), vec![a2, b()]);
        assert_eq!(snapshot.edit_target, None);

        store.delete_contact(0).unwrap();
        assert_eq!(store.snapshot().contact_values(), vec![b()]);
    }

    #[test]
    fn test_edit_replaces_only_target_index() {
        let c = Contact::new("C", "c@x.com");
        let mut store = store_with(&[a(), b(), c.clone()]);
        let ids_before: Vec<_> = store.contacts().entries().iter().map(|e| e.id).collect();

        let replacement = Contact::new("B2", "b2@x.com");
        store.edit_contact(1, replacement.clone()).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.contact_values(), vec![a(), replacement, c]);
        let ids_after: Vec<_> = snapshot.contacts.iter().map(|e| e.id).collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn test_edit_ends_edit_mode_unconditionally() {
        let mut store = store_with(&[a(), b()]);
        store.set_edit_form(Some(0)).unwrap();

        // Commit to a different index than the one being edited
        let events = store.edit_contact(1, Contact::new("B2", "b2@x.com")).unwrap();

        assert!(events.contains(&Event::EditModeExited));
        assert_eq!(store.snapshot().edit_target, None);
    }

    #[test]
    fn test_edit_while_idle_emits_single_event() {
        let mut store = store_with(&[a()]);
        let events = store.edit_contact(0, b()).unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::ContactEdited { index: 0, .. }));
    }

    #[test]
    fn test_edit_out_of_range_is_rejected_and_keeps_edit_mode() {
        let mut store = store_with(&[a(), b()]);
        store.set_edit_form(Some(1)).unwrap();

        let result = store.edit_contact(2, Contact::new("X", "x@x.com"));

        assert_eq!(
            result,
            Err(DispatchError::Contact(ContactError::IndexOutOfRange {
                index: 2,
                len: 2
            }))
        );
        let snapshot = store.snapshot();
        assert_eq!(snapshot.contact_values(), vec![a(), b()]);
        assert_eq!(snapshot.edit_target, Some(1));
    }

    #[test]
    fn test_edit_accepts_empty_fields() {
        let mut store = store_with(&[a()]);
        store.set_edit_form(Some(0)).unwrap();
        store.edit_contact(0, Contact::new("", "")).unwrap();
        assert_eq!(store.snapshot().contact_values(), vec![Contact::new("", "")]);
        assert_eq!(store.snapshot().edit_target, None);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_shifts() {
        let c = Contact::new("C", "c@x.com");
        let mut store = store_with(&[a(), b(), c.clone()]);

        store.delete_contact(1).unwrap();

        assert_eq!(store.snapshot().contact_values(), vec![a(), c]);
    }

    #[test]
    fn test_delete_out_of_range_is_rejected() {
        let mut store = store_with(&[a(), b()]);

        let result = store.delete_contact(5);

        assert!(matches!(
            result,
            Err(DispatchError::Contact(ContactError::IndexOutOfRange { index: 5, len: 2 }))
        ));
        assert_eq!(store.snapshot().contact_values(), vec![a(), b()]);
    }

    #[test]
    fn test_delete_before_edit_target_remaps_it() {
        let c = Contact::new("C", "c@x.com");
        let mut store = store_with(&[a(), b(), c.clone()]);
        store.set_edit_form(Some(2)).unwrap();
        let target_id = store.snapshot().edit_target_id;

        let events = store.delete_contact(0).unwrap();

        assert_eq!(events.len(), 1);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.edit_target, Some(1));
        assert_eq!(snapshot.edit_target_id, target_id);
        assert_eq!(snapshot.editing_entry().unwrap().contact, c);
    }

    #[test]
    fn test_delete_edit_target_exits_edit_mode() {
        let mut store = store_with(&[a(), b()]);
        store.set_edit_form(Some(1)).unwrap();

        let events = store.delete_contact(1).unwrap();

        assert!(matches!(events[0], Event::ContactDeleted { index: 1, .. }));
        assert_eq!(events[1], Event::EditModeExited);
        assert_eq!(store.snapshot().edit_target, None);
    }

    #[test]
    fn test_set_edit_form_round_trip_leaves_contacts_unmodified() {
        let mut store = store_with(&[a(), b()]);
        let before = store.snapshot();

        store.set_edit_form(Some(1)).unwrap();
        store.set_edit_form(None).unwrap();

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_set_edit_form_switches_target() {
        let mut store = store_with(&[a(), b()]);
        store.set_edit_form(Some(0)).unwrap();
        let events = store.set_edit_form(Some(1)).unwrap();
        let id = store.contacts().entries()[1].id;
        assert_eq!(events, vec![Event::EditModeEntered { id, index: 1 }]);
        assert_eq!(store.snapshot().edit_target, Some(1));
    }

    #[test]
    fn test_set_edit_form_out_of_range_is_rejected() {
        let mut store = store_with(&[a()]);
        assert!(store.set_edit_form(Some(1)).is_err());
        assert_eq!(store.snapshot().edit_target, None);
    }

    #[test]
    fn test_leaving_edit_mode_while_idle_is_a_no_op() {
        let mut store = store_with(&[a()]);
        let events = store.set_edit_form(None).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_toggle_info_screen_is_orthogonal() {
        let mut store = store_with(&[a()]);
        store.set_edit_form(Some(0)).unwrap();

        let events = store.toggle_info_screen().unwrap();
        assert_eq!(events, vec![Event::InfoScreenToggled { visible: true }]);
        assert!(store.show_info_screen());
        assert_eq!(store.snapshot().edit_target, Some(0));
        assert_eq!(store.snapshot().contact_values(), vec![a()]);

        store.toggle_info_screen().unwrap();
        assert!(!store.show_info_screen());
    }

    #[test]
    fn test_subscribers_notified_after_commit() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ContactStore::new();
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot, events| {
            sink.borrow_mut().push((snapshot.len(), events.len()));
        });

        store.add_contact(a()).unwrap();
        store.add_contact(b()).unwrap();

        // Listener sees the state after the mutation
        assert_eq!(*seen.borrow(), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn test_rejected_command_does_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let mut store = store_with(&[a(), b()]);
        let counter = Rc::clone(&count);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        let _ = store.delete_contact(5);
        let _ = store.edit_contact(2, a());
        let _ = store.set_edit_form(Some(9));
        let _ = store.set_edit_form(None);

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unsubscribed_listener_is_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut store = ContactStore::new();
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.add_contact(a()).unwrap();
        assert!(store.unsubscribe(id));
        store.add_contact(b()).unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_dispatch_through_trait_object_generic() {
        fn run<S: Store<Error = DispatchError>>(store: &mut S) -> Result<usize, DispatchError> {
            let events = store.dispatch(Command::AddContact {
                contact: Contact::new("A", "a@x.com"),
            })?;
            Ok(events.len())
        }
        let mut store = ContactStore::new();
        assert_eq!(run(&mut store), Ok(1));
    }
}
