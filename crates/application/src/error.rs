//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while handling a console command
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Too few arguments for the command
    #[error("Not enough arguments")]
    NotEnoughArgs,

    /// Too many arguments for the command
    #[error("Too many arguments")]
    TooManyArgs,
}

impl ApplicationError {
    /// The text shown on the console for this error
    ///
    /// Every error kind maps to one fixed, friendly sentence; diagnostic
    /// detail stays in the `Display` form and the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotEnoughArgs => "Not enough arguments. Try again!",
            Self::TooManyArgs => "Too many arguments. Try again!",
            Self::Domain(DomainError::InvalidContactName) => {
                "The contact name must not be empty!"
            }
            Self::Domain(DomainError::InvalidPhoneNumber(_)) => {
                "The phone number must contain exactly 10 digits!"
            }
            Self::Domain(DomainError::InvalidBirthday(_)) => {
                "Invalid date format. Use DD.MM.YYYY"
            }
            Self::Domain(DomainError::PhoneNotFound(_)) => "This phone not found!",
            Self::Domain(DomainError::ContactAlreadyExists(_)) => {
                "This contact already exists. Use command change to update it!"
            }
            Self::Domain(DomainError::ContactNotFound(_)) => "This contact not found!",
        }
    }
}
