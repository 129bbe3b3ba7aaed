//! SeaORM adapter for the games table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Related, Set,
};

use super::set_or_keep;
use crate::entities::{games, reviews, users};

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

pub async fn create_game(
    txn: &DatabaseTransaction,
    dto: GameCreate,
) -> Result<games::Model, DbErr> {
    let game_active = games::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        genre: Set(dto.genre),
        platform: Set(dto.platform),
        price: Set(dto.price),
    };

    game_active.insert(txn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn update_game(
    txn: &DatabaseTransaction,
    dto: GameUpdate,
) -> Result<games::Model, DbErr> {
    if dto.is_noop() {
        return find_by_id(txn, dto.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("game {}", dto.id)));
    }

    let game = games::ActiveModel {
        id: Set(dto.id),
        title: set_or_keep(dto.title),
        genre: set_or_keep(dto.genre),
        platform: set_or_keep(dto.platform),
        price: set_or_keep(dto.price),
    };
    game.update(txn).await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_game(txn: &DatabaseTransaction, game_id: i64) -> Result<u64, DbErr> {
    let result = games::Entity::delete_by_id(game_id).exec(txn).await?;
    Ok(result.rows_affected)
}

/// Users linked to the game through `game_users`, ordered by user id.
pub async fn find_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<users::Model>, DbErr> {
    <games::Entity as Related<users::Entity>>::find_related()
        .filter(games::Column::Id.eq(game_id))
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
}

/// Reviews whose `game_id` points at the game, ordered by review id.
pub async fn find_reviews<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<reviews::Model>, DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::GameId.eq(game_id))
        .order_by_asc(reviews::Column::Id)
        .all(conn)
        .await
}
