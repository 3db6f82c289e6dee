//! Address book aggregate - the keyed collection of contact records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::Record;
use crate::errors::DomainError;
use crate::greetings::{self, GreetingEntry};

/// All contact records of a session, unique by case-normalized name
///
/// Records keep their insertion order. Lookups scan linearly; the book is
/// sized for a person's contacts, not a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of contacts in the book
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the book holds no contacts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record
    ///
    /// Fails when a record with the same name (ignoring case) is already
    /// present.
    pub fn add(&mut self, record: Record) -> Result<(), DomainError> {
        if self.position(record.name().as_str()).is_some() {
            return Err(DomainError::ContactAlreadyExists(
                record.name().as_str().to_string(),
            ));
        }
        self.records.push(record);
        Ok(())
    }

    /// Find a record by name, ignoring case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Find a record by name for mutation, ignoring case
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|i| &mut self.records[i])
    }

    /// Remove a record by name, ignoring case
    pub fn delete(&mut self, name: &str) -> Result<(), DomainError> {
        let position = self
            .position(name)
            .ok_or_else(|| DomainError::ContactNotFound(name.to_string()))?;
        self.records.remove(position);
        Ok(())
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Contacts whose birthday falls within the next 7 days
    ///
    /// Entries carry the greeting date (weekends already shifted to Monday)
    /// and appear in the book's insertion order. Contacts without a birthday
    /// are skipped.
    #[must_use]
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<GreetingEntry> {
        self.records
            .iter()
            .filter_map(|record| {
                let outcome = greetings::compute_greeting(record.birthday()?, today);
                outcome.is_within_week.then(|| {
                    GreetingEntry::new(record.name().as_str(), outcome.greeting_date)
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().matches(name))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
