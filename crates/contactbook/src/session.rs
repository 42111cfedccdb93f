//! Front-end session: one store, one form, and the rendering of both.

use tracing::{info, warn};

use contactbook_core::config::DisplayConfig;
use contactbook_core::contacts::ContactError;
use contactbook_core::{
    Contact, ContactForm, ContactStore, ContactbookConfig, DispatchError, StateSnapshot,
};

use crate::line::{HELP, LineCommand, LineParseError};
use crate::table::TableFormatter;

pub const INFO_SCREEN: &str = "\
Contact Manager

Keep a list of names and email addresses for as long as this session runs.
Nothing is saved: the list starts empty every time.

Type 'info' again to return to the list, or 'help' for commands.";

/// What the caller should do after a line was executed.
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// The store changed; subscribers have already been notified.
    Changed,
    /// Print this text.
    Message(String),
    /// Nothing to print.
    Silent,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error(transparent)]
    Parse(#[from] LineParseError),

    #[error("No contact #{position} (list has {len} contacts)")]
    NoSuchPosition { position: usize, len: usize },

    #[error(transparent)]
    Dispatch(DispatchError),
}

impl From<DispatchError> for LineError {
    fn from(error: DispatchError) -> Self {
        // Store indices are 0-based; report them the way the table shows them
        match error {
            DispatchError::Contact(ContactError::IndexOutOfRange { index, len }) => {
                LineError::NoSuchPosition {
                    position: index + 1,
                    len,
                }
            }
            other => LineError::Dispatch(other),
        }
    }
}

pub struct Session {
    store: ContactStore,
    form: ContactForm,
    config: ContactbookConfig,
}

impl Session {
    pub fn new(config: ContactbookConfig) -> Self {
        Self {
            store: ContactStore::new(),
            form: ContactForm::new(&config.form),
            config,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ContactStore {
        &mut self.store
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.config.display
    }

    fn contact(&self, name: String, email: String) -> Contact {
        let contact = Contact::new(name, email);
        if self.config.form.trim_whitespace() {
            contact.trimmed()
        } else {
            contact
        }
    }

    /// Execute one parsed line against the store and form.
    pub fn execute(&mut self, command: LineCommand) -> Result<Reply, LineError> {
        let reply = match command {
            LineCommand::Add { name, email } => {
                let contact = self.contact(name, email);
                self.store.add_contact(contact)?;
                Reply::Changed
            }
            LineCommand::Edit {
                position,
                name,
                email,
            } => {
                let contact = self.contact(name, email);
                self.store.edit_contact(position - 1, contact)?;
                Reply::Changed
            }
            LineCommand::Delete { position } => {
                self.store.delete_contact(position - 1)?;
                Reply::Changed
            }
            LineCommand::Select { position } => {
                self.store.set_edit_form(Some(position - 1))?;
                self.form.show();
                Reply::Changed
            }
            LineCommand::Cancel => {
                if self.store.set_edit_form(None)?.is_empty() {
                    Reply::Message("Not editing a contact".to_string())
                } else {
                    Reply::Changed
                }
            }
            LineCommand::Form => {
                self.form.toggle();
                Reply::Message(render_form(&self.form))
            }
            LineCommand::Name(value) => {
                self.form.name = value;
                Reply::Message(render_form(&self.form))
            }
            LineCommand::Email(value) => {
                self.form.email = value;
                Reply::Message(render_form(&self.form))
            }
            LineCommand::Submit => {
                self.form.submit(&mut self.store)?;
                Reply::Changed
            }
            LineCommand::Info => {
                self.store.toggle_info_screen()?;
                Reply::Changed
            }
            LineCommand::List => Reply::Message(self.render()),
            LineCommand::Help => Reply::Message(HELP.to_string()),
            LineCommand::Quit => Reply::Quit,
        };

        self.form.sync_with(&self.store.snapshot());

        if reply == Reply::Changed {
            info!(
                event = "cli.session.state_changed",
                contact_count = self.store.contacts().len(),
                editing = self.store.contacts().is_editing()
            );
        }

        Ok(reply)
    }

    /// Parse and execute one raw input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Reply, LineError> {
        match crate::line::parse_line(line)? {
            Some(command) => self.execute(command),
            None => Ok(Reply::Silent),
        }
    }

    pub fn render(&self) -> String {
        render_screen(&self.store.snapshot(), &self.config.display)
    }

    pub fn log_rejected(&self, line: &str, error: &LineError) {
        warn!(
            event = "cli.session.line_rejected",
            line = line,
            error = %error
        );
    }
}

/// Render the whole screen for one snapshot.
pub fn render_screen(snapshot: &StateSnapshot, display: &DisplayConfig) -> String {
    if snapshot.show_info_screen {
        return INFO_SCREEN.to_string();
    }

    let mut out = String::from("Contact Manager\n");
    if snapshot.is_empty() {
        out.push_str(display.empty_message());
    } else {
        out.push_str(&TableFormatter::new(snapshot, display).render(snapshot));
    }

    if let Some(entry) = snapshot.editing_entry()
        && let Some(index) = snapshot.edit_target
    {
        out.push_str(&format!("\nEditing #{}: {}", index + 1, entry.name()));
    }

    out
}

/// Render the form panel.
pub fn render_form(form: &ContactForm) -> String {
    if !form.is_visible() {
        return format!("[{}] (hidden, type 'form' to show)", form.title());
    }
    format!(
        "[{}]\n  name:  {}\n  email: {}\n  (type 'submit' to {})",
        form.title(),
        form.name,
        form.email,
        form.submit_label().to_lowercase()
    )
}
