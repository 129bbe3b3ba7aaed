use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend, Statement};
use sea_orm_migration::sea_query::{
    ColumnDef, Index, SqliteQueryBuilder, Table, TableCreateStatement,
};

use crate::foreign_keys::{ForeignKeySpec, GAME_USERS_FOREIGN_KEYS, REVIEWS_FOREIGN_KEYS};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    Title,
    Genre,
    Platform,
    Price,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    Score,
    Comment,
    GameId,
    UserId,
}

#[derive(Iden)]
enum GameUsers {
    Table,
    GameId,
    UserId,
}

pub fn games_table() -> TableCreateStatement {
    Table::create()
        .table(Games::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Games::Id)
                .big_integer()
                .not_null()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(Games::Title).string().null())
        .col(ColumnDef::new(Games::Genre).string().null())
        .col(ColumnDef::new(Games::Platform).string().null())
        .col(ColumnDef::new(Games::Price).integer().null())
        .to_owned()
}

pub fn users_table() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Users::Id)
                .big_integer()
                .not_null()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(Users::Name).string().null())
        .col(
            ColumnDef::new(Users::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        // stays NULL until the first update
        .col(
            ColumnDef::new(Users::UpdatedAt)
                .timestamp_with_time_zone()
                .null(),
        )
        .to_owned()
}

fn reviews_columns() -> TableCreateStatement {
    let mut table = Table::create()
        .table(Reviews::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Reviews::Id)
                .big_integer()
                .not_null()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(Reviews::Score).integer().null())
        .col(ColumnDef::new(Reviews::Comment).string().null())
        .to_owned();
    for fk in &REVIEWS_FOREIGN_KEYS {
        table.col(fk.column_def());
    }
    table
}

fn game_users_columns() -> TableCreateStatement {
    let mut table = Table::create()
        .table(GameUsers::Table)
        .if_not_exists()
        .to_owned();
    for fk in &GAME_USERS_FOREIGN_KEYS {
        table.col(fk.column_def());
    }
    table
        .primary_key(
            Index::create()
                .col(GameUsers::GameId)
                .col(GameUsers::UserId),
        )
        .to_owned()
}

fn with_foreign_keys(
    mut table: TableCreateStatement,
    fks: &[ForeignKeySpec],
) -> TableCreateStatement {
    for fk in fks {
        table.foreign_key(&mut fk.statement());
    }
    table
}

/// SQLite `CREATE TABLE` with named constraints appended to the column list.
fn sqlite_create_sql(table: &TableCreateStatement, fks: &[ForeignKeySpec]) -> String {
    let sql = table.to_string(SqliteQueryBuilder);
    let body = sql.trim_end();
    let body = body.strip_suffix(')').unwrap_or(body).trim_end();
    let constraints: Vec<String> = fks.iter().map(ForeignKeySpec::sqlite_constraint).collect();
    format!("{body}, {} )", constraints.join(", "))
}

pub fn reviews_table() -> TableCreateStatement {
    with_foreign_keys(reviews_columns(), &REVIEWS_FOREIGN_KEYS)
}

pub fn reviews_table_sqlite() -> String {
    sqlite_create_sql(&reviews_columns(), &REVIEWS_FOREIGN_KEYS)
}

pub fn game_users_table() -> TableCreateStatement {
    with_foreign_keys(game_users_columns(), &GAME_USERS_FOREIGN_KEYS)
}

pub fn game_users_table_sqlite() -> String {
    sqlite_create_sql(&game_users_columns(), &GAME_USERS_FOREIGN_KEYS)
}

async fn create_with_foreign_keys(
    manager: &SchemaManager<'_>,
    portable: TableCreateStatement,
    sqlite_sql: String,
) -> Result<(), DbErr> {
    match manager.get_database_backend() {
        DbBackend::Sqlite => {
            manager
                .get_connection()
                .execute(Statement::from_string(DbBackend::Sqlite, sqlite_sql))
                .await?;
            Ok(())
        }
        _ => manager.create_table(portable).await,
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(games_table()).await?;
        manager.create_table(users_table()).await?;
        create_with_foreign_keys(manager, reviews_table(), reviews_table_sqlite()).await?;
        create_with_foreign_keys(manager, game_users_table(), game_users_table_sqlite()).await?;

        // reverse lookup for "games of a user"
        manager
            .create_index(
                Index::create()
                    .name("ix_game_users_user_id")
                    .table(GameUsers::Table)
                    .col(GameUsers::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_reviews_game_id")
                    .table(Reviews::Table)
                    .col(Reviews::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_reviews_user_id")
                    .table(Reviews::Table)
                    .col(Reviews::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_reviews_user_id")
                    .table(Reviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_reviews_game_id")
                    .table(Reviews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_game_users_user_id")
                    .table(GameUsers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameUsers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}
