//! Game/user association functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::debug;

use crate::adapters::game_users_sea as game_users_adapter;
use crate::entities::game_users;
use crate::errors::domain::DomainError;

/// One row of `game_users`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameUser {
    pub game_id: i64,
    pub user_id: i64,
}

impl From<game_users::Model> for GameUser {
    fn from(model: game_users::Model) -> Self {
        Self {
            game_id: model.game_id,
            user_id: model.user_id,
        }
    }
}

/// Link a game and a user.
///
/// Linking the same pair twice fails with
/// `DomainError::Conflict(ConflictKind::DuplicateLink, _)`; a pair naming a
/// missing game or user fails with `DomainError::Validation`.
pub async fn link(
    txn: &DatabaseTransaction,
    game_id: i64,
    user_id: i64,
) -> Result<GameUser, DomainError> {
    let row = game_users_adapter::insert_link(txn, game_id, user_id).await?;
    debug!(game_id, user_id, "game linked to user");
    Ok(GameUser::from(row))
}

/// Remove the pair. Returns whether a row existed.
pub async fn unlink(
    txn: &DatabaseTransaction,
    game_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let rows = game_users_adapter::delete_link(txn, game_id, user_id).await?;
    debug!(game_id, user_id, removed = rows > 0, "game unlinked from user");
    Ok(rows > 0)
}

pub async fn is_linked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let row = game_users_adapter::find_link(conn, game_id, user_id).await?;
    Ok(row.is_some())
}

pub async fn links_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<GameUser>, DomainError> {
    let rows = game_users_adapter::find_all_by_game(conn, game_id).await?;
    Ok(rows.into_iter().map(GameUser::from).collect())
}

pub async fn links_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<GameUser>, DomainError> {
    let rows = game_users_adapter::find_all_by_user(conn, user_id).await?;
    Ok(rows.into_iter().map(GameUser::from).collect())
}
