//! SeaORM adapter for the users table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Related, Set,
};
use time::OffsetDateTime;

use super::set_or_keep;
use crate::entities::{games, reviews, users};

pub mod dto;

pub use dto::{UserCreate, UserUpdate};

pub async fn create_user(
    txn: &DatabaseTransaction,
    dto: UserCreate,
) -> Result<users::Model, DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_at: Set(OffsetDateTime::now_utc()),
        updated_at: Set(None),
    };

    user_active.insert(txn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn update_user(
    txn: &DatabaseTransaction,
    dto: UserUpdate,
) -> Result<users::Model, DbErr> {
    let user = users::ActiveModel {
        id: Set(dto.id),
        name: set_or_keep(dto.name),
        created_at: NotSet,
        updated_at: Set(Some(OffsetDateTime::now_utc())),
    };
    user.update(txn).await
}

pub async fn delete_user(txn: &DatabaseTransaction, user_id: i64) -> Result<u64, DbErr> {
    let result = users::Entity::delete_by_id(user_id).exec(txn).await?;
    Ok(result.rows_affected)
}

/// Games the user is linked to, ordered by game id.
pub async fn find_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<games::Model>, DbErr> {
    <users::Entity as Related<games::Entity>>::find_related()
        .filter(users::Column::Id.eq(user_id))
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn find_reviews<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<reviews::Model>, DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::UserId.eq(user_id))
        .order_by_asc(reviews::Column::Id)
        .all(conn)
        .await
}
