//! SeaORM adapter for the reviews table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait,
    NotSet, QueryFilter, Related, Set,
};

use super::set_or_keep;
use crate::entities::{games, reviews, users};

pub mod dto;

pub use dto::{ReviewCreate, ReviewUpdate};

pub async fn create_review(
    txn: &DatabaseTransaction,
    dto: ReviewCreate,
) -> Result<reviews::Model, DbErr> {
    let review_active = reviews::ActiveModel {
        id: NotSet,
        score: Set(dto.score),
        comment: Set(dto.comment),
        game_id: Set(dto.game_id),
        user_id: Set(dto.user_id),
    };

    review_active.insert(txn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Option<reviews::Model>, DbErr> {
    reviews::Entity::find_by_id(review_id).one(conn).await
}

pub async fn update_review(
    txn: &DatabaseTransaction,
    dto: ReviewUpdate,
) -> Result<reviews::Model, DbErr> {
    if dto.is_noop() {
        return find_by_id(txn, dto.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("review {}", dto.id)));
    }

    let review = reviews::ActiveModel {
        id: Set(dto.id),
        score: set_or_keep(dto.score),
        comment: set_or_keep(dto.comment),
        game_id: set_or_keep(dto.game_id),
        user_id: set_or_keep(dto.user_id),
    };
    review.update(txn).await
}

pub async fn delete_review(txn: &DatabaseTransaction, review_id: i64) -> Result<u64, DbErr> {
    let result = reviews::Entity::delete_by_id(review_id).exec(txn).await?;
    Ok(result.rows_affected)
}

/// The game `reviews.game_id` points at, resolved through the relation.
pub async fn find_game_of_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Option<games::Model>, DbErr> {
    <reviews::Entity as Related<games::Entity>>::find_related()
        .filter(reviews::Column::Id.eq(review_id))
        .one(conn)
        .await
}

pub async fn find_user_of_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Option<users::Model>, DbErr> {
    <reviews::Entity as Related<users::Entity>>::find_related()
        .filter(reviews::Column::Id.eq(review_id))
        .one(conn)
        .await
}
