//! Error handling for the euchre engine.

pub mod domain;
pub mod error_code;
pub mod game;

pub use domain::{BidViolation, DomainError, PlayViolation};
pub use error_code::ErrorCode;
pub use game::GameError;

#[cfg(test)]
mod tests_error_mapping;
