//! Console command handlers
//!
//! One function per command. Each handler receives the raw argument list and
//! the address book, checks arity, and returns either the console message or
//! structured data for the presentation layer to render. Handlers never
//! print and never read the clock.

use chrono::NaiveDate;
use domain::DomainError;
use domain::entities::{AddressBook, Record};
use domain::greetings::GreetingEntry;
use domain::value_objects::ContactName;
use tracing::info;

use crate::error::ApplicationError;

/// Notice shown by listing commands when the book is empty
pub const EMPTY_BOOK: &str = "The address book does not contain any contacts yet.";

fn expect_args(args: &[String], min: usize, max: usize) -> Result<(), ApplicationError> {
    if args.len() < min {
        return Err(ApplicationError::NotEnoughArgs);
    }
    if args.len() > max {
        return Err(ApplicationError::TooManyArgs);
    }
    Ok(())
}

/// `add NAME [PHONE]` - create a contact or add a phone to an existing one
///
/// The record is only inserted into the book once every given field has
/// validated, so a bad phone number never leaves a half-built contact
/// behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String, ApplicationError> {
    expect_args(args, 1, 2)?;
    let name = &args[0];
    let phone = args.get(1);

    if let Some(record) = book.find_mut(name) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        info!(name = %name, "Updated contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(ContactName::new(name.as_str())?);
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    book.add(record)?;
    info!(name = %name, "Added contact");
    Ok("Contact added.".to_string())
}

/// `change NAME OLD_PHONE NEW_PHONE` - replace one phone number
pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String, ApplicationError> {
    expect_args(args, 3, 3)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| DomainError::ContactNotFound(name.clone()))?;
    record.edit_phone(old, new)?;
    info!(name = %name, "Changed phone number");
    Ok("Phone changed.".to_string())
}

/// `delete NAME` - remove a contact entirely
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> Result<String, ApplicationError> {
    expect_args(args, 1, 1)?;
    let name = &args[0];

    book.delete(name)?;
    info!(name = %name, "Deleted contact");
    Ok("Contact deleted.".to_string())
}

/// `phone NAME` - the contact's phone numbers in insertion order
pub fn show_phone(args: &[String], book: &AddressBook) -> Result<Vec<String>, ApplicationError> {
    expect_args(args, 1, 1)?;
    let name = &args[0];

    let record = book
        .find(name)
        .ok_or_else(|| DomainError::ContactNotFound(name.clone()))?;
    Ok(record.phone_texts())
}

/// `all` - every contact, one line each, or the empty-book notice
#[must_use]
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return EMPTY_BOOK.to_string();
    }
    book.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday NAME DD.MM.YYYY` - set a birthday, creating the contact if
/// needed
///
/// For a new name the birthday is validated before the record reaches the
/// book; invalid input creates nothing.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String, ApplicationError> {
    expect_args(args, 2, 2)?;
    let (name, birthday) = (&args[0], &args[1]);

    if let Some(record) = book.find_mut(name) {
        record.set_birthday(birthday)?;
        info!(name = %name, "Updated birthday");
        return Ok("Birthday added.".to_string());
    }

    let mut record = Record::new(ContactName::new(name.as_str())?);
    record.set_birthday(birthday)?;
    book.add(record)?;
    info!(name = %name, "Added contact with birthday");
    Ok("Birthday added.".to_string())
}

/// `show-birthday NAME` - the birthday as text, or the no-birthday message
pub fn show_birthday(args: &[String], book: &AddressBook) -> Result<String, ApplicationError> {
    expect_args(args, 1, 1)?;
    let name = &args[0];

    let record = book
        .find(name)
        .ok_or_else(|| DomainError::ContactNotFound(name.clone()))?;
    Ok(record.birthday_text())
}

/// `birthdays` - contacts to greet within the next week
///
/// Returns an empty list when nobody qualifies; the empty-book notice is the
/// caller's concern.
#[must_use]
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> Vec<GreetingEntry> {
    book.upcoming_birthdays(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    fn fixture_today() -> NaiveDate {
        // A Monday
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn add_creates_a_contact_without_phone() {
        let mut book = AddressBook::new();
        let msg = add_contact(&args(&["John"]), &mut book).unwrap();
        assert_eq!(msg, "Contact added.");
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn add_creates_a_contact_with_phone() {
        let mut book = AddressBook::new();
        let msg = add_contact(&args(&["John", "0501234567"]), &mut book).unwrap();
        assert_eq!(msg, "Contact added.");
        assert_eq!(
            book.find("John").unwrap().phone_texts(),
            vec!["0501234567"]
        );
    }

    #[test]
    fn add_on_existing_name_appends_the_phone() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "0501234567"]), &mut book).unwrap();
        let msg = add_contact(&args(&["JOHN", "0989876543"]), &mut book).unwrap();
        assert_eq!(msg, "Contact updated.");
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.find("John").unwrap().phone_texts(),
            vec!["0501234567", "0989876543"]
        );
    }

    #[test]
    fn add_with_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["John", "123"]), &mut book).unwrap_err();
        assert_eq!(
            err.user_message(),
            "The phone number must contain exactly 10 digits!"
        );
        assert!(book.is_empty());
    }

    #[test]
    fn add_arity_is_checked() {
        let mut book = AddressBook::new();
        assert!(matches!(
            add_contact(&args(&[]), &mut book),
            Err(ApplicationError::NotEnoughArgs)
        ));
        assert!(matches!(
            add_contact(&args(&["John", "0501234567", "extra"]), &mut book),
            Err(ApplicationError::TooManyArgs)
        ));
    }

    #[test]
    fn change_replaces_a_phone() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "0501234567"]), &mut book).unwrap();
        let msg = change_contact(&args(&["John", "0501234567", "0989876543"]), &mut book).unwrap();
        assert_eq!(msg, "Phone changed.");
        assert_eq!(
            book.find("John").unwrap().phone_texts(),
            vec!["0989876543"]
        );
    }

    #[test]
    fn change_requires_exactly_three_args() {
        let mut book = AddressBook::new();
        assert!(matches!(
            change_contact(&args(&["John", "0501234567"]), &mut book),
            Err(ApplicationError::NotEnoughArgs)
        ));
        assert!(matches!(
            change_contact(
                &args(&["John", "0501234567", "0989876543", "extra"]),
                &mut book
            ),
            Err(ApplicationError::TooManyArgs)
        ));
    }

    #[test]
    fn change_for_unknown_contact_fails() {
        let mut book = AddressBook::new();
        let err =
            change_contact(&args(&["Ghost", "0501234567", "0989876543"]), &mut book).unwrap_err();
        assert_eq!(err.user_message(), "This contact not found!");
    }

    #[test]
    fn change_for_unknown_phone_fails() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "0501234567"]), &mut book).unwrap();
        let err =
            change_contact(&args(&["John", "0999999999", "0989876543"]), &mut book).unwrap_err();
        assert_eq!(err.user_message(), "This phone not found!");
    }

    #[test]
    fn delete_removes_the_contact() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John"]), &mut book).unwrap();
        let msg = delete_contact(&args(&["john"]), &mut book).unwrap();
        assert_eq!(msg, "Contact deleted.");
        assert!(book.is_empty());
    }

    #[test]
    fn delete_unknown_contact_fails() {
        let mut book = AddressBook::new();
        let err = delete_contact(&args(&["Ghost"]), &mut book).unwrap_err();
        assert_eq!(err.user_message(), "This contact not found!");
    }

    #[test]
    fn show_phone_returns_the_numbers_in_order() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "0501234567"]), &mut book).unwrap();
        add_contact(&args(&["John", "0989876543"]), &mut book).unwrap();
        let phones = show_phone(&args(&["JOHN"]), &book).unwrap();
        assert_eq!(phones, vec!["0501234567", "0989876543"]);
    }

    #[test]
    fn show_phone_for_unknown_contact_fails() {
        let book = AddressBook::new();
        let err = show_phone(&args(&["Ghost"]), &book).unwrap_err();
        assert_eq!(err.user_message(), "This contact not found!");
    }

    #[test]
    fn show_all_on_empty_book_returns_the_notice() {
        let book = AddressBook::new();
        assert_eq!(show_all(&book), EMPTY_BOOK);
    }

    #[test]
    fn show_all_lists_one_line_per_contact_in_insertion_order() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Charlie", "0501234567"]), &mut book).unwrap();
        add_contact(&args(&["Alice"]), &mut book).unwrap();
        add_birthday(&args(&["Alice", "01.01.1990"]), &mut book).unwrap();

        let listing = show_all(&book);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Contact name: Charlie, phones: 0501234567, birthday: ..."
        );
        assert_eq!(lines[1], "Contact name: Alice, phones: , birthday: 01.01.1990");
    }

    #[test]
    fn add_birthday_updates_an_existing_contact() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John"]), &mut book).unwrap();
        let msg = add_birthday(&args(&["John", "07.06.1990"]), &mut book).unwrap();
        assert_eq!(msg, "Birthday added.");
        assert_eq!(book.find("John").unwrap().birthday_text(), "07.06.1990");
    }

    #[test]
    fn add_birthday_creates_a_missing_contact() {
        let mut book = AddressBook::new();
        let msg = add_birthday(&args(&["John", "07.06.1990"]), &mut book).unwrap();
        assert_eq!(msg, "Birthday added.");
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().birthday_text(), "07.06.1990");
    }

    #[test]
    fn add_birthday_with_invalid_date_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_birthday(&args(&["John", "1.1.1990"]), &mut book).unwrap_err();
        assert_eq!(err.user_message(), "Invalid date format. Use DD.MM.YYYY");
        assert!(book.is_empty());
    }

    #[test]
    fn add_birthday_with_invalid_date_keeps_the_existing_value() {
        let mut book = AddressBook::new();
        add_birthday(&args(&["John", "07.06.1990"]), &mut book).unwrap();
        assert!(add_birthday(&args(&["John", "31.02.2000"]), &mut book).is_err());
        assert_eq!(book.find("John").unwrap().birthday_text(), "07.06.1990");
    }

    #[test]
    fn show_birthday_returns_the_date_text() {
        let mut book = AddressBook::new();
        add_birthday(&args(&["John", "07.06.1990"]), &mut book).unwrap();
        assert_eq!(show_birthday(&args(&["john"]), &book).unwrap(), "07.06.1990");
    }

    #[test]
    fn show_birthday_placeholder_when_unset() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John"]), &mut book).unwrap();
        assert_eq!(
            show_birthday(&args(&["John"]), &book).unwrap(),
            "Contact hasn't birthday yet"
        );
    }

    #[test]
    fn birthdays_returns_only_window_hits() {
        let mut book = AddressBook::new();
        add_birthday(&args(&["Today", "10.06.1985"]), &mut book).unwrap();
        add_birthday(&args(&["Saturday", "15.06.1985"]), &mut book).unwrap();
        add_birthday(&args(&["Passed", "01.01.1990"]), &mut book).unwrap();
        add_contact(&args(&["NoBirthday"]), &mut book).unwrap();

        let entries = birthdays(&book, fixture_today());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Today");
        assert_eq!(entries[0].congratulation_date, "10.06.2024");
        assert_eq!(entries[1].name, "Saturday");
        assert_eq!(entries[1].congratulation_date, "17.06.2024");
    }

    #[test]
    fn birthdays_with_no_hits_is_empty() {
        let mut book = AddressBook::new();
        add_birthday(&args(&["Passed", "01.01.1990"]), &mut book).unwrap();
        assert!(birthdays(&book, fixture_today()).is_empty());
    }
}
