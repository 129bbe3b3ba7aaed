//! SeaORM -> DomainError translation.
//!
//! Adapters hand back `sea_orm::DbErr` untouched; repos pass it through
//! [`map_db_err`] so callers see a classified `DomainError` that still carries
//! the storage message.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_unique_message(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

fn is_foreign_key_message(msg: &str) -> bool {
    mentions_sqlstate(msg, "23503")
        || msg.contains("violates foreign key constraint")
        || msg.contains("FOREIGN KEY constraint failed")
}

/// SQLite names the columns (`game_users.game_id, game_users.user_id`),
/// Postgres names the index (`game_users_pkey`).
fn unique_conflict(msg: &str) -> DomainError {
    if msg.contains("game_users") {
        return DomainError::conflict(
            ConflictKind::DuplicateLink,
            format!("Game and user are already linked: {msg}"),
        );
    }
    DomainError::conflict(
        ConflictKind::Unique,
        format!("Unique constraint violation: {msg}"),
    )
}

fn foreign_key_violation(msg: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::ForeignKey,
        format!("Foreign key constraint violation: {msg}"),
    )
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        DbErr::RecordNotFound(what) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), what.clone());
        }
        DbErr::RecordNotUpdated => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not updated",
            );
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            warn!(raw_error = %msg, "Unique constraint violation");
            return unique_conflict(&msg);
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            warn!(raw_error = %msg, "Foreign key constraint violation");
            return foreign_key_violation(&msg);
        }
        _ => {}
    }

    // drivers that do not surface a structured code
    if is_unique_message(&error_msg) {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        return unique_conflict(&error_msg);
    }

    if is_foreign_key_message(&error_msg) {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return foreign_key_violation(&error_msg);
    }

    if error_msg.contains("timeout") || error_msg.contains("pool timed out") {
        warn!(raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(InfraErrorKind::Other("DbErr".into()), error_msg)
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
