//! Repository functions for the domain layer.
//!
//! Every accessor is an explicit call against a connection; nothing is
//! loaded lazily. Free functions are generic over `ConnectionTrait` for reads
//! and take a `DatabaseTransaction` for writes.

use std::fmt::{Display, Formatter, Result as FmtResult};

pub mod game_users;
pub mod games;
pub mod reviews;
pub mod users;

/// Displays an optional column, printing `None` when it is null.
pub(crate) struct OrNone<'a, T>(pub &'a Option<T>);

impl<T: Display> Display for OrNone<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("None"),
        }
    }
}
