//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod monkey_repo;


pub use traits::Repository;
pub use db::{init_db, DbState};
#[cfg(test)]
pub(crate) use db::run_migrations;
pub use monkey_repo::MonkeyRepository;
