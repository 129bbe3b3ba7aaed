//! Database configuration as seen by the backend.
//!
//! Resolution from environment variables lives in `db_infra` so the
//! migration CLI shares it; this module re-exports it and adds the
//! backend's own view of the application connection string.

pub use db_infra::config::db::{
    build_connection_settings, make_conn_spec, sqlite_file_spec, validate_db_config,
    ConnectionSettings, DbKind, DbOwner, PoolPurpose, RuntimeEnv,
};

use crate::error::AppError;

/// Connection string for the application (non-owner) role.
pub fn app_db_url(env: RuntimeEnv, db_kind: DbKind) -> Result<String, AppError> {
    validate_db_config(env, db_kind)?;
    Ok(make_conn_spec(env, db_kind, DbOwner::App)?)
}
