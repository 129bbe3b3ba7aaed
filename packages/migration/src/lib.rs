//! Schema migrations for the game-reviews tables.

pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};
pub use sea_orm_migration::prelude::*;
use tracing::{error, info};

pub mod foreign_keys;
mod m20250901_000001_init; // keep filename + module name in sync
pub mod naming;

pub use m20250901_000001_init::{
    game_users_table, game_users_table_sqlite, games_table, reviews_table, reviews_table_sqlite,
    users_table,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run `command` against an open connection, logging applied counts around it.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let defined = Migrator::migrations().len();
    let applied_before = count_applied_migrations(db).await?;

    info!(cmd = ?command, ?backend, defined, applied = applied_before, "migrate=begin");

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    if let Err(e) = result {
        error!(cmd = ?command, ?backend, error = %e, "migrate=failed");
        return Err(e);
    }

    if command != MigrationCommand::Status {
        let applied_after = count_applied_migrations(db).await?;
        info!(cmd = ?command, applied = applied_after, "migrate=ok");
    }
    Ok(())
}

/// Number of applied migrations; 0 before the tracking table exists.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) | Err(DbErr::Query(_)) => Ok(0),
        Err(e) => Err(e),
    }
}
