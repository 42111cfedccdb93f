use contactbook_core::StateSnapshot;
use contactbook_core::config::DisplayConfig;

/// Box-drawn table of the contact list.
///
/// The `#` column shows 1-based positions; the contact being edited is
/// marked with `*`.
pub struct TableFormatter {
    position_width: usize,
    name_width: usize,
    email_width: usize,
}

impl TableFormatter {
    pub fn new(snapshot: &StateSnapshot, display: &DisplayConfig) -> Self {
        // Room for the largest position plus the edit marker
        let position_width = (snapshot.len().to_string().len() + 1).max(2);

        let name_width = snapshot
            .contacts
            .iter()
            .map(|e| e.name().chars().count())
            .max()
            .unwrap_or(0)
            .clamp(4, display.max_name_width().max(4)); // Between "Name" header and configured max

        let email_width = snapshot
            .contacts
            .iter()
            .map(|e| e.email().chars().count())
            .max()
            .unwrap_or(0)
            .clamp(5, display.max_email_width().max(5));

        Self {
            position_width,
            name_width,
            email_width,
        }
    }

    pub fn render(&self, snapshot: &StateSnapshot) -> String {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        for (index, entry) in snapshot.contacts.iter().enumerate() {
            let marker = if snapshot.edit_target == Some(index) {
                "*"
            } else {
                ""
            };
            let position = format!("{}{}", index + 1, marker);
            lines.push(self.row(&position, entry.name(), entry.email()));
        }
        lines.push(self.bottom_border());
        lines.join("\n")
    }

    fn row(&self, position: &str, name: &str, email: &str) -> String {
        format!(
            "│ {:<width_pos$} │ {} │ {} │",
            position,
            truncate(name, self.name_width),
            truncate(email, self.email_width),
            width_pos = self.position_width,
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_pos$} │ {:<width_name$} │ {:<width_email$} │",
            "#",
            "Name",
            "Email",
            width_pos = self.position_width,
            width_name = self.name_width,
            width_email = self.email_width,
        )
    }

    fn rule(&self, left: &str, mid: &str, right: &str) -> String {
        format!(
            "{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(self.position_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.email_width + 2),
        )
    }

    fn top_border(&self) -> String {
        self.rule("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.rule("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.rule("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
