use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use db_infra::config::db::{DbKind, RuntimeEnv};
use db_infra::orchestrate_migration;
use migration::MigrationCommand;

mod telemetry;

#[derive(Debug, Parser)]
#[command(name = "migration", about = "Apply or inspect game-reviews schema migrations")]
struct Cli {
    /// Runtime environment (selects PROD_DB or TEST_DB)
    #[arg(long, value_enum, default_value_t = EnvArg::Prod)]
    env: EnvArg,

    /// Storage engine
    #[arg(long, value_enum, default_value_t = DbArg::Postgres)]
    db: DbArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EnvArg {
    Prod,
    Test,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DbArg {
    Postgres,
    SqliteFile,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Apply all pending migrations
    Up,
    /// Roll back the last applied migration
    Down,
    /// Drop all tables and reapply every migration
    Fresh,
    /// Roll back every applied migration
    Reset,
    /// Reset, then reapply every migration
    Refresh,
    /// Show applied and pending migrations
    Status,
}

impl From<EnvArg> for RuntimeEnv {
    fn from(value: EnvArg) -> Self {
        match value {
            EnvArg::Prod => RuntimeEnv::Prod,
            EnvArg::Test => RuntimeEnv::Test,
        }
    }
}

impl From<DbArg> for DbKind {
    fn from(value: DbArg) -> Self {
        match value {
            DbArg::Postgres => DbKind::Postgres,
            DbArg::SqliteFile => DbKind::SqliteFile,
        }
    }
}

impl From<Command> for MigrationCommand {
    fn from(value: Command) -> Self {
        match value {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    let cli = Cli::parse();

    match orchestrate_migration(cli.env.into(), cli.db.into(), cli.command.into()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "migration failed");
            ExitCode::FAILURE
        }
    }
}
