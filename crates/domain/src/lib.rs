//! Domain layer for telbook
//!
//! Contains the contact data model, validated value objects, the
//! upcoming-birthday calculator, and domain errors. This layer knows nothing
//! about storage or presentation.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod greetings;
pub mod value_objects;

pub use commands::Command;
pub use entities::*;
pub use errors::DomainError;
pub use greetings::{GreetingEntry, GreetingOutcome, compute_greeting};
pub use value_objects::*;
