//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Contact name is empty or blank
    #[error("Contact name must not be empty")]
    InvalidContactName,

    /// Invalid phone number format
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Invalid birthday format or nonexistent calendar date
    #[error("Invalid birthday: {0}")]
    InvalidBirthday(String),

    /// Phone number not present on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A contact with the same name (ignoring case) already exists
    #[error("Contact already exists: {0}")]
    ContactAlreadyExists(String),

    /// No contact with this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_contact_name_error_message() {
        let err = DomainError::InvalidContactName;
        assert_eq!(err.to_string(), "Contact name must not be empty");
    }

    #[test]
    fn invalid_phone_error_message() {
        let err = DomainError::InvalidPhoneNumber("123".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: 123");
    }

    #[test]
    fn invalid_birthday_error_message() {
        let err = DomainError::InvalidBirthday("31.02.2020".to_string());
        assert_eq!(err.to_string(), "Invalid birthday: 31.02.2020");
    }

    #[test]
    fn phone_not_found_error_message() {
        let err = DomainError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 0501234567");
    }

    #[test]
    fn contact_already_exists_error_message() {
        let err = DomainError::ContactAlreadyExists("John".to_string());
        assert_eq!(err.to_string(), "Contact already exists: John");
    }

    #[test]
    fn contact_not_found_error_message() {
        let err = DomainError::ContactNotFound("Jane".to_string());
        assert_eq!(err.to_string(), "Contact not found: Jane");
    }
}
