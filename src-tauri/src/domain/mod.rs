//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO storage dependencies (only serde and thiserror).

mod entity;
mod monkey;

pub use entity::{Entity, DomainError, DomainResult};
pub use monkey::{Monkey, MonkeyFields};
