// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use hangar_core::FieldKey;
use std::path::PathBuf;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app (the roster is saved on the way out when non-empty)
    Quit,
    // Display help
    Help,
    // Fetch from the remote API
    Load,
    // Erase persisted and in-memory roster
    Clear,
    // Persist the roster now
    Save,
    // Remove one record by id
    Delete(u64),
    // Sort by a column label
    Sort(FieldKey),
    // Write the HTML table to a file
    Export(Option<PathBuf>),
    // Change theme
    Theme(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without
    /// acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "load" | "fetch" => Ok(Command::Load),
            "clear" => Ok(Command::Clear),
            "w" | "save" => Ok(Command::Save),
            "delete" => match rest.parse::<u64>() {
                Ok(id) => Ok(Command::Delete(id)),
                Err(_) => Err("usage: delete <id>".to_string()),
            },
            "sort" => {
                if rest.is_empty() {
                    Err("usage: sort <column>".to_string())
                } else {
                    FieldKey::from_label(rest).map(Command::Sort).ok_or_else(|| {
                        format!(
                            "unknown column: {rest} (name, model, manufacturer, passengers, max-speed)"
                        )
                    })
                }
            }
            "export" => {
                if rest.is_empty() {
                    Ok(Command::Export(None))
                } else {
                    Ok(Command::Export(Some(PathBuf::from(rest))))
                }
            }
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
