//! Console commands - strongly typed representations of user intents

/// All commands the console session understands
///
/// Variants carry no payload; raw arguments travel separately so that arity
/// and validation failures can be reported uniformly by the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Greet the user and show the command list again
    Hello,
    /// Add a contact, optionally with a first phone number
    Add,
    /// Replace one of a contact's phone numbers
    Change,
    /// Remove a contact entirely
    Delete,
    /// Show a contact's phone numbers
    Phone,
    /// List every contact
    All,
    /// Set or replace a contact's birthday
    AddBirthday,
    /// Show a contact's birthday
    ShowBirthday,
    /// List contacts to greet during the next week
    Birthdays,
    /// Fill the book with generated demo contacts
    Demo,
    /// Save the book and leave
    Exit,
}

impl Command {
    /// Every command in menu order
    pub const MENU: [Self; 11] = [
        Self::Hello,
        Self::Add,
        Self::Change,
        Self::Delete,
        Self::Phone,
        Self::All,
        Self::AddBirthday,
        Self::ShowBirthday,
        Self::Birthdays,
        Self::Demo,
        Self::Exit,
    ];

    /// The keyword typed to invoke this command
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Demo => "demo",
            Self::Exit => "exit",
        }
    }

    /// Resolve a keyword to a command, ignoring case
    ///
    /// `close` is accepted as an alias for [`Command::Exit`].
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "hello" => Some(Self::Hello),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "delete" => Some(Self::Delete),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "add-birthday" => Some(Self::AddBirthday),
            "show-birthday" => Some(Self::ShowBirthday),
            "birthdays" => Some(Self::Birthdays),
            "demo" => Some(Self::Demo),
            "exit" | "close" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parameter placeholders shown in the menu
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Hello | Self::All | Self::Birthdays | Self::Demo | Self::Exit => "",
            Self::Add => "[CONTACT_NAME] [PHONE]",
            Self::Change => "[CONTACT_NAME] [OLD_PHONE] [NEW_PHONE]",
            Self::Delete | Self::Phone | Self::ShowBirthday => "[CONTACT_NAME]",
            Self::AddBirthday => "[CONTACT_NAME] [DD.MM.YYYY]",
        }
    }

    /// Short menu description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Hello => "to show command list",
            Self::Add => "to add a new contact",
            Self::Change => "to change an existing phone number",
            Self::Delete => "to delete a contact",
            Self::Phone => "to show contact phone numbers",
            Self::All => "to show all contacts",
            Self::AddBirthday => "to add a birthday to a contact",
            Self::ShowBirthday => "to show a contact birthday",
            Self::Birthdays => "to show birthdays for the next week",
            Self::Demo => "to fill the book with demo contacts",
            Self::Exit => "to save and close the app",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_resolves_back_to_its_command() {
        for command in Command::MENU {
            assert_eq!(Command::from_keyword(command.keyword()), Some(command));
        }
    }

    #[test]
    fn keyword_matching_ignores_case() {
        assert_eq!(Command::from_keyword("ADD"), Some(Command::Add));
        assert_eq!(Command::from_keyword("Add-Birthday"), Some(Command::AddBirthday));
    }

    #[test]
    fn close_is_an_alias_for_exit() {
        assert_eq!(Command::from_keyword("close"), Some(Command::Exit));
        assert_eq!(Command::from_keyword("CLOSE"), Some(Command::Exit));
    }

    #[test]
    fn unknown_keyword_resolves_to_none() {
        assert_eq!(Command::from_keyword("frobnicate"), None);
        assert_eq!(Command::from_keyword(""), None);
    }

    #[test]
    fn menu_lists_each_command_once() {
        use std::collections::HashSet;
        let unique: HashSet<Command> = Command::MENU.into_iter().collect();
        assert_eq!(unique.len(), Command::MENU.len());
    }

    #[test]
    fn display_is_the_keyword() {
        assert_eq!(Command::AddBirthday.to_string(), "add-birthday");
    }

    #[test]
    fn argument_taking_commands_document_their_parameters() {
        assert_eq!(Command::Add.usage(), "[CONTACT_NAME] [PHONE]");
        assert_eq!(
            Command::Change.usage(),
            "[CONTACT_NAME] [OLD_PHONE] [NEW_PHONE]"
        );
        assert_eq!(Command::Hello.usage(), "");
    }
}
