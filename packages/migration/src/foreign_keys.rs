//! Foreign keys of the schema, declared once.
//!
//! The migration builds its DDL from these declarations and the backend's
//! schema metadata reads them back.

use sea_orm_migration::sea_query::{
    Alias, ColumnDef, ForeignKey, ForeignKeyAction, ForeignKeyCreateStatement,
};

use crate::naming::fk_name;

/// What happens to referencing rows when the referenced row is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    SetNull,
    Cascade,
}

impl DeletePolicy {
    pub fn action(self) -> ForeignKeyAction {
        match self {
            DeletePolicy::SetNull => ForeignKeyAction::SetNull,
            DeletePolicy::Cascade => ForeignKeyAction::Cascade,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            DeletePolicy::SetNull => "SET NULL",
            DeletePolicy::Cascade => "CASCADE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeySpec {
    pub table: &'static str,
    pub column: &'static str,
    pub referred_table: &'static str,
    pub referred_column: &'static str,
    pub nullable: bool,
    pub on_delete: DeletePolicy,
}

pub static REVIEWS_FOREIGN_KEYS: [ForeignKeySpec; 2] = [
    ForeignKeySpec {
        table: "reviews",
        column: "game_id",
        referred_table: "games",
        referred_column: "id",
        nullable: true,
        on_delete: DeletePolicy::SetNull,
    },
    ForeignKeySpec {
        table: "reviews",
        column: "user_id",
        referred_table: "users",
        referred_column: "id",
        nullable: true,
        on_delete: DeletePolicy::SetNull,
    },
];

pub static GAME_USERS_FOREIGN_KEYS: [ForeignKeySpec; 2] = [
    ForeignKeySpec {
        table: "game_users",
        column: "game_id",
        referred_table: "games",
        referred_column: "id",
        nullable: false,
        on_delete: DeletePolicy::Cascade,
    },
    ForeignKeySpec {
        table: "game_users",
        column: "user_id",
        referred_table: "users",
        referred_column: "id",
        nullable: false,
        on_delete: DeletePolicy::Cascade,
    },
];

/// Foreign keys declared on `table`; empty for tables without any.
pub fn foreign_keys_of(table: &str) -> &'static [ForeignKeySpec] {
    match table {
        "reviews" => &REVIEWS_FOREIGN_KEYS,
        "game_users" => &GAME_USERS_FOREIGN_KEYS,
        _ => &[],
    }
}

impl ForeignKeySpec {
    pub fn name(&self) -> String {
        fk_name(self.table, self.column, self.referred_table)
    }

    /// The referencing column itself (`BIGINT`, nullability from the declaration).
    pub fn column_def(&self) -> ColumnDef {
        let mut def = ColumnDef::new(Alias::new(self.column));
        def.big_integer();
        if self.nullable {
            def.null();
        } else {
            def.not_null();
        }
        def
    }

    pub fn statement(&self) -> ForeignKeyCreateStatement {
        ForeignKey::create()
            .name(self.name())
            .from(Alias::new(self.table), Alias::new(self.column))
            .to(Alias::new(self.referred_table), Alias::new(self.referred_column))
            .on_delete(self.on_delete.action())
            .to_owned()
    }

    /// Table-constraint clause for SQLite, whose query builder drops FK names.
    pub fn sqlite_constraint(&self) -> String {
        format!(
            "CONSTRAINT \"{}\" FOREIGN KEY (\"{}\") REFERENCES \"{}\" (\"{}\") ON DELETE {}",
            self.name(),
            self.column,
            self.referred_table,
            self.referred_column,
            self.on_delete.as_sql()
        )
    }
}
