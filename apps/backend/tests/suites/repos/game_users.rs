use game_reviews::errors::domain::{ConflictKind, DomainError, ValidationKind};
use game_reviews::repos::game_users::{self, GameUser};
use game_reviews::repos::{games, users};
use game_reviews::{with_txn, AppError};

use crate::support::factory::{create_test_game, create_test_user};
use crate::support::test_state::memory_state;

#[tokio::test]
async fn test_link_creates_exactly_one_row() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Linked").await?;
            let user = create_test_user(txn, "linked").await?;

            let link = game_users::link(txn, game.id, user.id).await?;
            assert_eq!(
                link,
                GameUser {
                    game_id: game.id,
                    user_id: user.id
                }
            );

            assert!(game_users::is_linked(txn, game.id, user.id).await?);
            assert_eq!(game_users::links_for_game(txn, game.id).await?, vec![link]);
            assert_eq!(game_users::links_for_user(txn, user.id).await?, vec![link]);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_link_is_visible_from_both_sides() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Both Sides").await?;
            let alice = create_test_user(txn, "alice").await?;
            let bob = create_test_user(txn, "bob").await?;
            let other_game = create_test_game(txn, "Other").await?;

            game_users::link(txn, game.id, alice.id).await?;
            game_users::link(txn, game.id, bob.id).await?;
            game_users::link(txn, other_game.id, bob.id).await?;

            let players: Vec<i64> = games::users(txn, game.id)
                .await?
                .into_iter()
                .map(|u| u.id)
                .collect();
            assert_eq!(players, vec![alice.id, bob.id]);

            let bobs_games: Vec<i64> = users::games(txn, bob.id)
                .await?
                .into_iter()
                .map(|g| g.id)
                .collect();
            assert_eq!(bobs_games, vec![game.id, other_game.id]);
            assert_eq!(users::games(txn, alice.id).await?, vec![game]);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_unlink() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Unlinked").await?;
            let user = create_test_user(txn, "unlinked").await?;
            game_users::link(txn, game.id, user.id).await?;

            assert!(game_users::unlink(txn, game.id, user.id).await?);
            assert!(!game_users::is_linked(txn, game.id, user.id).await?);
            assert!(!game_users::unlink(txn, game.id, user.id).await?);

            // the pair can be linked again once removed
            game_users::link(txn, game.id, user.id).await?;
            assert!(game_users::is_linked(txn, game.id, user.id).await?);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_duplicate_link_is_rejected() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Twice").await?;
            let user = create_test_user(txn, "twice").await?;
            game_users::link(txn, game.id, user.id).await?;

            let err = game_users::link(txn, game.id, user.id).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::DuplicateLink, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_duplicate_link_surfaces_as_app_conflict() -> Result<(), AppError> {
    let state = memory_state().await?;

    let result = with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Conflict").await?;
            let user = create_test_user(txn, "conflict").await?;
            game_users::link(txn, game.id, user.id).await?;
            game_users::link(txn, game.id, user.id).await?;
            Ok::<_, AppError>(())
        })
    })
    .await;

    match result {
        Err(err) => assert_eq!(err.code(), game_reviews::errors::ErrorCode::DuplicateLink),
        Ok(()) => panic!("second link should fail"),
    }
    Ok(())
}

#[tokio::test]
async fn test_link_to_missing_game_is_rejected() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = create_test_user(txn, "dangling").await?;
            let err = game_users::link(txn, 888_888, user.id).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(ValidationKind::ForeignKey, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}
