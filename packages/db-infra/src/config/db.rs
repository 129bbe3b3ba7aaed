//! Database configuration resolved from environment variables.

use std::path::PathBuf;
use std::{env, fs};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::DbInfraError;

/// Runtime environment the process is connecting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Test environment - enforces the `_test` database name rule
    Test,
}

/// Storage engine and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolPurpose {
    Runtime,
    Migration,
}

/// Pool sizing for a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
}

// RFC 3986 unreserved characters stay as-is in the userinfo part
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const DEFAULT_POOL_MAX: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_SQLITE_DIR: &str = "./data/sqlite";

/// Reject combinations that make no sense before any connection is attempted.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    if env == RuntimeEnv::Prod && db_kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "in-memory SQLite is not allowed for the prod environment",
        ));
    }
    Ok(())
}

/// Build the connection string for the given environment, engine and owner.
pub fn make_conn_spec(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<String, DbInfraError> {
    match db_kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            let username = utf8_percent_encode(&username, USERINFO);
            let password = utf8_percent_encode(&password, USERINFO);

            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = sqlite_file_spec(db_kind, env)?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Path of the SQLite database file (`<SQLITE_DB_DIR>/<db_name>.db`).
pub fn sqlite_file_spec(db_kind: DbKind, env: RuntimeEnv) -> Result<String, DbInfraError> {
    if db_kind != DbKind::SqliteFile {
        return Err(DbInfraError::config(format!(
            "sqlite_file_spec requires DbKind::SqliteFile, got {db_kind:?}"
        )));
    }
    Ok(sqlite_file_path(env)?.to_string_lossy().into_owned())
}

fn sqlite_file_path(env: RuntimeEnv) -> Result<PathBuf, DbInfraError> {
    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| DEFAULT_SQLITE_DIR.to_string());
    Ok(PathBuf::from(dir).join(format!("{}.db", db_name(env)?)))
}

/// Create the directory holding the SQLite file; SQLite will not.
pub fn ensure_sqlite_dir(env: RuntimeEnv) -> Result<PathBuf, DbInfraError> {
    let path = sqlite_file_path(env)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            DbInfraError::unavailable(format!(
                "failed to create SQLite directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    Ok(path)
}

pub fn build_connection_settings(
    env: RuntimeEnv,
    db_kind: DbKind,
    purpose: PoolPurpose,
) -> Result<ConnectionSettings, DbInfraError> {
    let acquire_timeout_ms = parse_var("REVIEWS_DB_ACQUIRE_TIMEOUT_MS", DEFAULT_ACQUIRE_TIMEOUT_MS)?;

    // in-memory databases live and die with their single connection
    if purpose == PoolPurpose::Migration || db_kind == DbKind::SqliteMemory {
        return Ok(ConnectionSettings {
            pool_min: 1,
            pool_max: 1,
            acquire_timeout_ms,
        });
    }

    let default_max = match env {
        RuntimeEnv::Test => 2,
        RuntimeEnv::Prod => DEFAULT_POOL_MAX,
    };
    let pool_max = parse_var("REVIEWS_DB_POOL_MAX", default_max)?;
    if pool_max == 0 {
        return Err(DbInfraError::config("REVIEWS_DB_POOL_MAX must be at least 1"));
    }

    Ok(ConnectionSettings {
        pool_min: 1,
        pool_max,
        acquire_timeout_ms,
    })
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("REVIEWS_OWNER_USER")?,
            must_var("REVIEWS_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, DbInfraError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| DbInfraError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
