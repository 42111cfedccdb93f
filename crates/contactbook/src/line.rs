//! Parsing of the line commands accepted by `shell` and `run`.
//!
//! One command per line. Arguments are separated by whitespace; wrap an
//! argument in double quotes to include spaces (`add "Ada Lovelace" ada@x.com`).
//! Positions are 1-based, matching the `#` column of the table.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineCommand {
    Add { name: String, email: String },
    Edit {
        position: usize,
        name: String,
        email: String,
    },
    Delete { position: usize },
    Select { position: usize },
    Cancel,
    Form,
    Name(String),
    Email(String),
    Submit,
    Info,
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <name> <email>         Add a contact
  edit <#> <name> <email>    Replace the contact at position #
  delete <#>                 Delete the contact at position #
  select <#>                 Edit the contact at position # using the form
  cancel                     Leave edit mode
  form                       Show or hide the form
  name <value>               Set the form's name field
  email <value>              Set the form's email field
  submit                     Submit the form (adds, or updates in edit mode)
  info                       Show or hide the info screen
  list                       Show the contact list
  help                       Show this help
  quit                       Exit";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineParseError {
    #[error("Unknown command '{command}'. Type 'help' for a list of commands")]
    UnknownCommand { command: String },

    #[error("Usage: {usage}")]
    WrongArguments { usage: &'static str },

    #[error("Invalid position '{value}': positions are whole numbers starting at 1")]
    InvalidPosition { value: String },

    #[error("Unterminated quote")]
    UnterminatedQuote,
}

/// Split a line into arguments, honouring double quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>, LineParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(LineParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_position(value: &str) -> Result<usize, LineParseError> {
    match value.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position),
        _ => Err(LineParseError::InvalidPosition {
            value: value.to_string(),
        }),
    }
}

/// Parse one line. Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<LineCommand>, LineParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed)?;
    let Some((command, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let parsed = match (command.to_ascii_lowercase().as_str(), args) {
        ("add", [name, email]) => LineCommand::Add {
            name: name.clone(),
            email: email.clone(),
        },
        ("add", _) => {
            return Err(LineParseError::WrongArguments {
                usage: "add <name> <email>",
            });
        }
        ("edit", [position, name, email]) => LineCommand::Edit {
            position: parse_position(position)?,
            name: name.clone(),
            email: email.clone(),
        },
        ("edit", _) => {
            return Err(LineParseError::WrongArguments {
                usage: "edit <#> <name> <email>",
            });
        }
        ("delete", [position]) => LineCommand::Delete {
            position: parse_position(position)?,
        },
        ("delete", _) => {
            return Err(LineParseError::WrongArguments {
                usage: "delete <#>",
            });
        }
        ("select", [position]) => LineCommand::Select {
            position: parse_position(position)?,
        },
        ("select", _) => {
            return Err(LineParseError::WrongArguments {
                usage: "select <#>",
            });
        }
        // Field values may contain spaces without quoting
        ("name", rest) => LineCommand::Name(rest.join(" ")),
        ("email", rest) => LineCommand::Email(rest.join(" ")),
        ("cancel", []) => LineCommand::Cancel,
        ("form", []) => LineCommand::Form,
        ("submit", []) => LineCommand::Submit,
        ("info", []) => LineCommand::Info,
        ("list", []) => LineCommand::List,
        ("help", _) => LineCommand::Help,
        ("quit" | "exit", []) => LineCommand::Quit,
        (other, _) => {
            return Err(LineParseError::UnknownCommand {
                command: other.to_string(),
            });
        }
    };

    Ok(Some(parsed))
}
