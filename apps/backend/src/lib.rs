#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Persistence layer for a game-review catalogue: games, users, their
//! reviews, and which users are linked to which games.

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod schema;
pub mod state;

// Re-exports for public API
pub use config::db::{DbKind, DbOwner, RuntimeEnv};
pub use db::txn::with_txn;
pub use error::AppError;
pub use errors::domain::DomainError;
pub use infra::state::build_state;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
