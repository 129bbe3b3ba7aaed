use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::game_users::Entity")]
    GameUsers,
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::game_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameUsers.def()
    }
}

// games <-> users through the association table
impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_users::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_users::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
