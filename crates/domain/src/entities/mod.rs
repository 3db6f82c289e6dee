//! Domain entities - Objects with identity and lifecycle

mod address_book;
mod record;

pub use address_book::AddressBook;
pub use record::{NO_BIRTHDAY, Record};
