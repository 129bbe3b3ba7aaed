//! Static description of the four tables.
//!
//! Columns and primary keys are read from the entity definitions. Foreign
//! keys come from `migration::foreign_keys`, the declarations the migration
//! builds its DDL from.

use migration::foreign_keys::{foreign_keys_of, ForeignKeySpec};
use sea_orm::{EntityName, EntityTrait, IdenStatic, Iterable, PrimaryKeyToColumn};

use crate::entities::{game_users, games, reviews, users};

pub use migration::foreign_keys::DeletePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyMeta {
    pub name: String,
    pub column: &'static str,
    pub referred_table: &'static str,
    pub referred_column: &'static str,
    pub nullable: bool,
    pub on_delete: DeletePolicy,
}

impl From<&ForeignKeySpec> for ForeignKeyMeta {
    fn from(spec: &ForeignKeySpec) -> Self {
        Self {
            name: spec.name(),
            column: spec.column,
            referred_table: spec.referred_table,
            referred_column: spec.referred_column,
            nullable: spec.nullable,
            on_delete: spec.on_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    pub name: String,
    pub columns: Vec<String>,
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKeyMeta>,
}

impl TableMeta {
    pub fn foreign_key(&self, column: &str) -> Option<&ForeignKeyMeta> {
        self.foreign_keys.iter().find(|fk| fk.column == column)
    }
}

fn describe<E: EntityTrait>(entity: E) -> TableMeta {
    let name = entity.table_name().to_string();
    let foreign_keys = foreign_keys_of(&name)
        .iter()
        .map(ForeignKeyMeta::from)
        .collect();

    TableMeta {
        name,
        columns: E::Column::iter().map(|c| c.as_str().to_string()).collect(),
        primary_key: E::PrimaryKey::iter()
            .map(|pk| pk.into_column().as_str().to_string())
            .collect(),
        foreign_keys,
    }
}

/// `games`, `users`, `reviews`, `game_users`, in creation order.
pub fn tables() -> Vec<TableMeta> {
    vec![
        describe(games::Entity),
        describe(users::Entity),
        describe(reviews::Entity),
        describe(game_users::Entity),
    ]
}

pub fn table(name: &str) -> Option<TableMeta> {
    tables().into_iter().find(|t| t.name == name)
}
