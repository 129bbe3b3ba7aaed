//! SeaORM adapters, one per table.
//!
//! Adapter functions return `sea_orm::DbErr` unchanged; the repos layer maps
//! it to `DomainError` via `infra::db_errors::map_db_err`.

use sea_orm::{ActiveValue, NotSet, Set, Value};

pub mod game_users_sea;
pub mod games_sea;
pub mod reviews_sea;
pub mod users_sea;

/// Three-state update field to an active value: `None` leaves the column alone.
pub(crate) fn set_or_keep<T: Into<Value>>(value: Option<T>) -> ActiveValue<T> {
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}
