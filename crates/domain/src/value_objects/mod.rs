//! Value Objects - Immutable, identity-less domain primitives

mod birthday;
mod contact_name;
mod phone_number;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use phone_number::PhoneNumber;
