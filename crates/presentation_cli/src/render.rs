//! Console rendering - banner, menu, and list formatting
//!
//! All coloring happens here. Handlers hand back plain strings or
//! structured data; this module decides how they look on the screen.

use domain::Command;
use domain::greetings::GreetingEntry;
use owo_colors::OwoColorize;

/// Startup banner
pub const BANNER: &str = r"
 _____        _  ____                 _
|_   _|  ___ | || __ )   ___    ___  | | __
  | |   / _ \| ||  _ \  / _ \  / _ \ | |/ /
  | |  |  __/| || |_) || (_) || (_) ||   <
  |_|   \___||_||____/  \___/  \___/ |_|\_\
";

/// Width of the horizontal rules around the menu
const BORDER_WIDTH: usize = 62;

/// A command keyword, colored for the console
fn format_cmd(text: &str) -> String {
    text.cyan().to_string()
}

/// A parameter placeholder, colored for the console
fn format_param(text: &str) -> String {
    text.yellow().to_string()
}

/// Greeting text, colored for the console
fn format_greeting(text: &str) -> String {
    text.green().to_string()
}

/// The banner and menu shown when a session starts
#[must_use]
pub fn startup() -> String {
    format!(
        "{}\nWelcome to the assistant bot!\n\n{}",
        format_greeting(BANNER),
        menu()
    )
}

/// The response to `hello`
#[must_use]
pub fn hello() -> String {
    format!("How can I help you?\n\n{}", menu())
}

/// The input prompt
#[must_use]
pub fn prompt() -> String {
    format_greeting("\nEnter a command >>> ")
}

/// The numbered command list
#[must_use]
pub fn menu() -> String {
    let border = "-".repeat(BORDER_WIDTH);
    let mut lines = Vec::with_capacity(Command::MENU.len() + 3);
    lines.push("You can use commands:".to_string());
    lines.push(border.clone());
    for (index, command) in Command::MENU.into_iter().enumerate() {
        lines.push(menu_line(index, command));
    }
    lines.push(border);
    lines.join("\n")
}

fn menu_line(index: usize, command: Command) -> String {
    let keyword = if command == Command::Exit {
        format!("{} or {}", format_cmd(command.keyword()), format_cmd("close"))
    } else {
        format_cmd(command.keyword())
    };
    let mut line = format!("[{index:02}] {keyword}");
    if !command.usage().is_empty() {
        line.push(' ');
        line.push_str(&format_param(command.usage()));
    }
    line.push(' ');
    line.push_str(command.description());
    line
}

/// The weekly greeting list, one contact per line
#[must_use]
pub fn greeting_list(entries: &[GreetingEntry]) -> String {
    if entries.is_empty() {
        return "No birthdays in the next week.".to_string();
    }
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A contact's phone numbers on one line
#[must_use]
pub fn phone_list(phones: &[String]) -> String {
    phones.join("; ")
}
