//! Game repository functions for domain layer.

use std::fmt::{Display, Formatter, Result as FmtResult};

use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr};
use tracing::debug;

use super::reviews::Review;
use super::users::User;
use super::OrNone;
use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub use crate::adapters::games_sea::{GameCreate, GameUpdate};

/// Game domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i32>,
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Game(id={}, title={}, platform={})",
            self.id,
            OrNone(&self.title),
            OrNone(&self.platform)
        )
    }
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            genre: model.genre,
            platform: model.platform,
            price: model.price,
        }
    }
}

fn game_not_found(game_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
}

pub async fn create_game(txn: &DatabaseTransaction, dto: GameCreate) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(txn, dto).await?;
    debug!(game_id = game.id, "game created");
    Ok(Game::from(game))
}

pub async fn find_game_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Like [`find_game_by_id`], but a missing row is `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_game_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

pub async fn update_game(txn: &DatabaseTransaction, dto: GameUpdate) -> Result<Game, DomainError> {
    let game_id = dto.id;
    let game = games_adapter::update_game(txn, dto)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => game_not_found(game_id),
            other => map_db_err(other),
        })?;
    debug!(game_id, "game updated");
    Ok(Game::from(game))
}

/// Delete the game. Its reviews keep existing with `game_id` cleared and its
/// association rows are removed by the storage.
pub async fn delete_game(txn: &DatabaseTransaction, game_id: i64) -> Result<(), DomainError> {
    let rows = games_adapter::delete_game(txn, game_id).await?;
    if rows == 0 {
        return Err(game_not_found(game_id));
    }
    debug!(game_id, "game deleted");
    Ok(())
}

/// Users linked to the game through `game_users`.
pub async fn users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<User>, DomainError> {
    let users = games_adapter::find_users(conn, game_id).await?;
    Ok(users.into_iter().map(User::from).collect())
}

/// Reviews whose `game_id` is this game.
pub async fn reviews<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Review>, DomainError> {
    let reviews = games_adapter::find_reviews(conn, game_id).await?;
    Ok(reviews.into_iter().map(Review::from).collect())
}

/// Same rows as [`reviews`]; kept for callers that use the association name.
pub async fn reviews_associated<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Review>, DomainError> {
    reviews(conn, game_id).await
}
