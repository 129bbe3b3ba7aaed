//! User repository functions for domain layer.

use std::fmt::{Display, Formatter, Result as FmtResult};

use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr};
use time::OffsetDateTime;
use tracing::debug;

use super::games::Game;
use super::reviews::Review;
use super::OrNone;
use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub use crate::adapters::users_sea::{UserCreate, UserUpdate};

/// User domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub created_at: OffsetDateTime,
    /// `None` until the first update
    pub updated_at: Option<OffsetDateTime>,
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "User(id={}, name={})", self.id, OrNone(&self.name))
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn user_not_found(user_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::User, format!("User {user_id} not found"))
}

pub async fn create_user(txn: &DatabaseTransaction, dto: UserCreate) -> Result<User, DomainError> {
    let user = users_adapter::create_user(txn, dto).await?;
    debug!(user_id = user.id, "user created");
    Ok(User::from(user))
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    find_user_by_id(conn, user_id)
        .await?
        .ok_or_else(|| user_not_found(user_id))
}

/// Apply the update and stamp `updated_at` with the current time.
pub async fn update_user(txn: &DatabaseTransaction, dto: UserUpdate) -> Result<User, DomainError> {
    let user_id = dto.id;
    let user = users_adapter::update_user(txn, dto)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => user_not_found(user_id),
            other => map_db_err(other),
        })?;
    debug!(user_id, "user updated");
    Ok(User::from(user))
}

pub async fn delete_user(txn: &DatabaseTransaction, user_id: i64) -> Result<(), DomainError> {
    let rows = users_adapter::delete_user(txn, user_id).await?;
    if rows == 0 {
        return Err(user_not_found(user_id));
    }
    debug!(user_id, "user deleted");
    Ok(())
}

/// Games the user is linked to through `game_users`.
pub async fn games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Game>, DomainError> {
    let games = users_adapter::find_games(conn, user_id).await?;
    Ok(games.into_iter().map(Game::from).collect())
}

pub async fn reviews<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Review>, DomainError> {
    let reviews = users_adapter::find_reviews(conn, user_id).await?;
    Ok(reviews.into_iter().map(Review::from).collect())
}

/// Same rows as [`reviews`].
pub async fn reviews_associated<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Review>, DomainError> {
    reviews(conn, user_id).await
}
