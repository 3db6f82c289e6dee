//! Contact record entity - a named contact with phone numbers and an optional birthday

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Birthday, ContactName, PhoneNumber};

/// Placeholder shown when a contact has no birthday set
pub const NO_BIRTHDAY: &str = "Contact hasn't birthday yet";

/// Everything the book keeps for a single contact
///
/// Phone numbers keep their insertion order and stay unique within the
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    #[must_use]
    pub const fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name
    #[must_use]
    pub const fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in insertion order
    #[must_use]
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Phone numbers as plain strings, in insertion order
    #[must_use]
    pub fn phone_texts(&self) -> Vec<String> {
        self.phones.iter().map(ToString::to_string).collect()
    }

    /// The contact's birthday, if set
    #[must_use]
    pub const fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// The birthday as display text, or the no-birthday placeholder
    #[must_use]
    pub fn birthday_text(&self) -> String {
        self.birthday
            .map_or_else(|| NO_BIRTHDAY.to_string(), |b| b.to_string())
    }

    /// Add a phone number
    ///
    /// Adding a number that is already present is a no-op, not an error.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), DomainError> {
        let phone = PhoneNumber::new(phone)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Remove a phone number
    ///
    /// The number is parsed before the lookup; malformed input reports
    /// `InvalidPhoneNumber` rather than `PhoneNotFound`.
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), DomainError> {
        let phone = PhoneNumber::new(phone)?;
        let position = self
            .phones
            .iter()
            .position(|p| *p == phone)
            .ok_or_else(|| DomainError::PhoneNotFound(phone.as_str().to_string()))?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replace one phone number with another, keeping its position
    ///
    /// Both numbers are validated before anything changes. The replacement
    /// is not checked against the other entries, so editing onto a number
    /// that already exists leaves the record with a duplicate.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), DomainError> {
        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;
        let position = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| DomainError::PhoneNotFound(old.as_str().to_string()))?;
        self.phones[position] = new;
        Ok(())
    }

    /// Look up a stored phone number by its text
    ///
    /// Never fails: text that is not a valid phone number simply matches
    /// nothing.
    #[must_use]
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set or replace the birthday
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), DomainError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phone_texts().join("; "),
            self.birthday
                .map_or_else(|| "...".to_string(), |b| b.to_string()),
        )
    }
}
