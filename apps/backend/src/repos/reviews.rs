//! Review repository functions for domain layer.

use std::fmt::{Display, Formatter, Result as FmtResult};

use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr};
use tracing::debug;

use super::games::Game;
use super::users::User;
use super::OrNone;
use crate::adapters::reviews_sea as reviews_adapter;
use crate::entities::reviews;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub use crate::adapters::reviews_sea::{ReviewCreate, ReviewUpdate};

/// Review domain model. Both foreign keys are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub game_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl Display for Review {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Review(id={}, score={}, game_id={})",
            self.id,
            OrNone(&self.score),
            OrNone(&self.game_id)
        )
    }
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            score: model.score,
            comment: model.comment,
            game_id: model.game_id,
            user_id: model.user_id,
        }
    }
}

fn review_not_found(review_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Review, format!("Review {review_id} not found"))
}

/// Insert a review. A `game_id` or `user_id` that names no row is rejected
/// by the storage and surfaces as `DomainError::Validation`.
pub async fn create_review(
    txn: &DatabaseTransaction,
    dto: ReviewCreate,
) -> Result<Review, DomainError> {
    let review = reviews_adapter::create_review(txn, dto).await?;
    debug!(
        review_id = review.id,
        game_id = ?review.game_id,
        user_id = ?review.user_id,
        "review created"
    );
    Ok(Review::from(review))
}

pub async fn find_review_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Option<Review>, DomainError> {
    let review = reviews_adapter::find_by_id(conn, review_id).await?;
    Ok(review.map(Review::from))
}

pub async fn require_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Review, DomainError> {
    find_review_by_id(conn, review_id)
        .await?
        .ok_or_else(|| review_not_found(review_id))
}

pub async fn update_review(
    txn: &DatabaseTransaction,
    dto: ReviewUpdate,
) -> Result<Review, DomainError> {
    let review_id = dto.id;
    let review = reviews_adapter::update_review(txn, dto)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => review_not_found(review_id),
            other => map_db_err(other),
        })?;
    debug!(review_id, "review updated");
    Ok(Review::from(review))
}

pub async fn delete_review(txn: &DatabaseTransaction, review_id: i64) -> Result<(), DomainError> {
    let rows = reviews_adapter::delete_review(txn, review_id).await?;
    if rows == 0 {
        return Err(review_not_found(review_id));
    }
    debug!(review_id, "review deleted");
    Ok(())
}

/// The reviewed game, or `None` when the review has no `game_id`.
pub async fn associated_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review: &Review,
) -> Result<Option<Game>, DomainError> {
    if review.game_id.is_none() {
        return Ok(None);
    }
    let game = reviews_adapter::find_game_of_review(conn, review.id).await?;
    Ok(game.map(Game::from))
}

/// The reviewing user, or `None` when the review has no `user_id`.
pub async fn associated_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review: &Review,
) -> Result<Option<User>, DomainError> {
    if review.user_id.is_none() {
        return Ok(None);
    }
    let user = reviews_adapter::find_user_of_review(conn, review.id).await?;
    Ok(user.map(User::from))
}

/// Alias of [`associated_game`].
pub async fn game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review: &Review,
) -> Result<Option<Game>, DomainError> {
    associated_game(conn, review).await
}

/// Alias of [`associated_user`].
pub async fn user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review: &Review,
) -> Result<Option<User>, DomainError> {
    associated_user(conn, review).await
}
