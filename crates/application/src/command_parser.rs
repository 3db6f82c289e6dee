//! Command parsing - turns one line of console input into a typed command

use domain::Command;

/// Result of tokenizing one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank input, nothing to do
    Empty,
    /// First word did not match any command keyword
    Unknown(String),
    /// A recognized command with its raw arguments
    Command(Command, Vec<String>),
}

/// Split a line into a command keyword and its raw arguments
///
/// Tokens are separated by runs of whitespace. Only the keyword is matched
/// case-insensitively; arguments keep their casing untouched so names are
/// stored exactly as entered.
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return ParsedLine::Empty;
    };
    let args: Vec<String> = tokens.map(str::to_string).collect();

    Command::from_keyword(keyword).map_or_else(
        || ParsedLine::Unknown(keyword.to_string()),
        |command| ParsedLine::Command(command, args),
    )
}
