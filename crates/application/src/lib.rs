//! Application layer - Use cases and orchestration
//!
//! Contains the command tokenizer and one handler per console command.
//! Orchestrates domain objects; owns no I/O beyond log records.

pub mod command_parser;
pub mod error;
pub mod handlers;

pub use command_parser::{ParsedLine, parse_line};
pub use error::ApplicationError;
