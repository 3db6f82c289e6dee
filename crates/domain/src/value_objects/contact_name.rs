//! Contact name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The name identifying a contact
///
/// Casing is preserved exactly as entered; lookups compare the
/// case-normalized [`key`](Self::key) instead. Deserialization runs the
/// same validation as [`ContactName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ContactName {
    value: String,
}

impl ContactName {
    /// Create a new contact name, trimming surrounding whitespace
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::InvalidContactName);
        }

        Ok(Self { value })
    }

    /// Get the name as entered
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Case-normalized form used for lookups and uniqueness
    pub fn key(&self) -> String {
        Self::normalize(&self.value)
    }

    /// Normalize a raw name the same way stored keys are normalized
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Check whether a raw name refers to this contact
    pub fn matches(&self, raw: &str) -> bool {
        self.key() == Self::normalize(raw)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<ContactName> for String {
    fn from(name: ContactName) -> Self {
        name.value
    }
}

impl TryFrom<String> for ContactName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContactName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
