//! Session command parser.
//!
//! Parses incoming lines from raw text into structured `Command` variants
//! that the session loop can dispatch on.

/// A parsed client-to-session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the session must reply `readyok`.
    IsReady,

    /// Print the current order, one division per line.
    List,

    /// Select a division by name or id: `select <text>`.
    Select { text: String },

    /// Return to the unselected state.
    Clear,

    /// Select a uniformly random division.
    Random,

    /// Suggest division names matching partial input: `suggest <text>`.
    Suggest { text: String },

    /// Report the map marker coordinate.
    Map,

    /// Report the applied division.
    Status,

    /// Report dataset counts per division type.
    Summary,

    /// End the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };

    match name {
        "isready" => Some(Command::IsReady),
        "list" => Some(Command::List),
        "clear" => Some(Command::Clear),
        "random" => Some(Command::Random),
        "map" => Some(Command::Map),
        "status" => Some(Command::Status),
        "summary" => Some(Command::Summary),
        "quit" => Some(Command::Quit),

        "select" => parse_text_arg(name, rest).map(|text| Command::Select { text }),
        "suggest" => parse_text_arg(name, rest).map(|text| Command::Suggest { text }),

        other => {
            log::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Captures the free text after a command word; names may contain spaces.
fn parse_text_arg(name: &str, rest: &str) -> Option<String> {
    if rest.is_empty() {
        log::warn!("malformed {}: expected '{} <text>'", name, name);
        return None;
    }
    Some(rest.to_string())
}
