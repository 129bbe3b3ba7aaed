use std::process;
use std::str::FromStr;
use std::time::Duration;

use db_infra::infra::db::core::{build_admin_pool, orchestrate_migration_internal};
use db_infra::sanitize_db_url;
use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace};

use super::{DbKind, RuntimeEnv};
use crate::config::db::{
    app_db_url, build_connection_settings, validate_db_config, ConnectionSettings, PoolPurpose,
};
use crate::error::AppError;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;
const APPLICATION_NAME: &str = "game-reviews";

fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Per-connection statements run from the pool's `after_connect` hook.
fn build_session_statements(db_kind: DbKind) -> Vec<String> {
    match db_kind {
        // SQLite ignores foreign keys unless asked, on every connection
        DbKind::SqliteFile | DbKind::SqliteMemory => vec![
            "PRAGMA foreign_keys = ON;".to_string(),
            format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS};"),
        ],
        DbKind::Postgres => vec![
            format!("SET application_name = '{APPLICATION_NAME}';"),
            "SET timezone = 'UTC';".to_string(),
        ],
    }
}

/// Build the runtime pool *and* guarantee the schema is current.
///
/// In-memory SQLite is migrated on the pool that is returned, since every
/// connection would otherwise see its own empty database. File and Postgres
/// databases are migrated through a short-lived owner pool first.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    validate_db_config(env, db_kind)?;

    info!(
        "bootstrap=start env={:?} db_kind={:?} engine={} pid={}",
        env,
        db_kind,
        get_db_engine(db_kind),
        process::id()
    );

    let settings = build_connection_settings(env, db_kind, PoolPurpose::Runtime)?;

    let pool = match db_kind {
        DbKind::SqliteMemory => {
            let pool = build_pool(env, db_kind, &settings).await?;
            orchestrate_migration_internal(&pool, env, db_kind, MigrationCommand::Up).await?;
            pool
        }
        DbKind::SqliteFile | DbKind::Postgres => {
            let admin_pool = build_admin_pool(env, db_kind).await?;
            orchestrate_migration_internal(&admin_pool, env, db_kind, MigrationCommand::Up)
                .await?;
            admin_pool.close().await?;
            build_pool(env, db_kind, &settings).await?
        }
    };

    info!("bootstrap=ready");
    Ok(pool)
}

/// Application pool with the session settings applied to every connection.
pub async fn build_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    pool_cfg: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = app_db_url(env, db_kind)?;
    let statements = build_session_statements(db_kind);

    match db_kind {
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let connect_opts = SqliteConnectOptions::from_str(&url)
                .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
                .create_if_missing(true);

            let mut pool_opts = SqlitePoolOptions::new()
                .min_connections(pool_cfg.pool_min)
                .max_connections(pool_cfg.pool_max)
                .acquire_timeout(Duration::from_millis(pool_cfg.acquire_timeout_ms));

            // the in-memory database dies with its connection
            if db_kind == DbKind::SqliteMemory {
                pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
            }

            let pool: SqlitePool = pool_opts
                .after_connect(move |conn, _meta| {
                    let statements = statements.clone();
                    Box::pin(async move {
                        for stmt in &statements {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        trace!("db=sqlite hook=after_connect ok");
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect_with(connect_opts)
                .await?;

            info!(
                "pool=create engine=sqlite path={} min={} max={} acquire_timeout_ms={}",
                url, pool_cfg.pool_min, pool_cfg.pool_max, pool_cfg.acquire_timeout_ms
            );
            Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
        }

        DbKind::Postgres => {
            let pool = PgPoolOptions::new()
                .min_connections(pool_cfg.pool_min)
                .max_connections(pool_cfg.pool_max)
                .acquire_timeout(Duration::from_millis(pool_cfg.acquire_timeout_ms))
                .idle_timeout(Duration::from_secs(30))
                .after_connect(move |conn, _meta| {
                    let statements = statements.clone();
                    Box::pin(async move {
                        for stmt in &statements {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect(&url)
                .await?;

            info!(
                "pool=create engine=postgres url={} min={} max={} acquire_timeout_ms={}",
                sanitize_db_url(&url),
                pool_cfg.pool_min,
                pool_cfg.pool_max,
                pool_cfg.acquire_timeout_ms
            );
            Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
        }
    }
}
