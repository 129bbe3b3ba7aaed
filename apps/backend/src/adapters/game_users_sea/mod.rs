//! SeaORM adapter for the game_users association table.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::game_users;

/// Insert the pair. A second insert of the same pair fails with the
/// storage's primary-key violation.
pub async fn insert_link(
    txn: &DatabaseTransaction,
    game_id: i64,
    user_id: i64,
) -> Result<game_users::Model, DbErr> {
    let link = game_users::ActiveModel {
        game_id: Set(game_id),
        user_id: Set(user_id),
    };

    game_users::Entity::insert(link)
        .exec_without_returning(txn)
        .await?;

    Ok(game_users::Model { game_id, user_id })
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_link(
    txn: &DatabaseTransaction,
    game_id: i64,
    user_id: i64,
) -> Result<u64, DbErr> {
    let result = game_users::Entity::delete_by_id((game_id, user_id))
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn find_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<Option<game_users::Model>, DbErr> {
    game_users::Entity::find_by_id((game_id, user_id))
        .one(conn)
        .await
}

pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_users::Model>, DbErr> {
    game_users::Entity::find()
        .filter(game_users::Column::GameId.eq(game_id))
        .order_by_asc(game_users::Column::UserId)
        .all(conn)
        .await
}

pub async fn find_all_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<game_users::Model>, DbErr> {
    game_users::Entity::find()
        .filter(game_users::Column::UserId.eq(user_id))
        .order_by_asc(game_users::Column::GameId)
        .all(conn)
        .await
}
