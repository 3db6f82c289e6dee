//! Birthday value object

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated calendar date entered as `DD.MM.YYYY`
///
/// The format is strict: two-digit day and month, four-digit year, dot
/// separators. `1.1.2020` is rejected even though the date itself exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Birthday {
    date: NaiveDate,
}

impl Birthday {
    /// Date format for all user-facing dates
    pub const DATE_FORMAT: &'static str = "%d.%m.%Y";

    /// Parse a birthday from `DD.MM.YYYY` text
    pub fn new(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let text = text.as_ref();

        if !has_strict_shape(text) {
            return Err(DomainError::InvalidBirthday(text.to_string()));
        }

        // The shape check leaves the calendar to chrono: 31.02.2020 has the
        // right shape but no such day exists.
        let date = NaiveDate::parse_from_str(text, Self::DATE_FORMAT)
            .map_err(|_| DomainError::InvalidBirthday(text.to_string()))?;

        Ok(Self { date })
    }

    /// Build a birthday from an already-validated calendar date
    pub const fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The underlying calendar date
    pub const fn date(self) -> NaiveDate {
        self.date
    }
}

/// chrono's `%d` and `%m` accept unpadded fields, so the zero-padded shape
/// is checked before the calendar parse.
fn has_strict_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && [0, 1, 3, 4, 6, 7, 8, 9]
            .into_iter()
            .all(|i| bytes[i].is_ascii_digit())
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(Self::DATE_FORMAT))
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl FromStr for Birthday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Birthday {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
