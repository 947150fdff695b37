//! minidns domain layer: the DNS wire codec, errors and configuration.
pub mod config;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config};
pub use errors::{DomainError, WireError};
pub use wire::{Answer, Header, HeaderFlags, Message, Name, Question};
