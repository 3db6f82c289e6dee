//! Phone number value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated phone number of exactly 10 decimal digits (e.g., 0501234567)
///
/// Deserialization runs the same validation as [`PhoneNumber::new`], so a
/// hand-edited snapshot cannot smuggle a malformed number into the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Required number of digits
    pub const DIGITS: usize = 10;

    /// Create a new phone number, validating the format
    ///
    /// Exactly 10 ASCII decimal digits, nothing else: no separators, no
    /// country prefix, no surrounding whitespace.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let value = number.into();

        if value.len() != Self::DIGITS || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneNumber(value));
        }

        Ok(Self { value })
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.value
    }
}

impl FromStr for PhoneNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
