use game_reviews::errors::domain::{DomainError, NotFoundKind};
use game_reviews::repos::games::{self, GameCreate, GameUpdate};
use game_reviews::{with_txn, AppError};

use crate::support::factory::{create_test_game, create_test_review, create_test_user};
use crate::support::test_state::memory_state;

#[tokio::test]
async fn test_create_and_find_game() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let created = games::create_game(
                txn,
                GameCreate::new()
                    .with_title("Chrono Quest")
                    .with_genre("RPG")
                    .with_platform("PC")
                    .with_price(40),
            )
            .await?;
            assert!(created.id > 0);

            let found = games::require_game(txn, created.id).await?;
            assert_eq!(found, created);
            assert_eq!(found.title.as_deref(), Some("Chrono Quest"));
            assert_eq!(found.price, Some(40));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_game_with_no_columns_set() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = games::create_game(txn, GameCreate::new()).await?;
            assert_eq!(game.title, None);
            assert_eq!(game.genre, None);
            assert_eq!(game.platform, None);
            assert_eq!(game.price, None);
            assert_eq!(game.to_string(), format!("Game(id={}, title=None, platform=None)", game.id));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_find_missing_game() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            assert!(games::find_game_by_id(txn, 999_999).await?.is_none());

            let err = games::require_game(txn, 999_999).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_update_game_changes_only_given_fields() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Starfall").await?;

            let updated = games::update_game(
                txn,
                GameUpdate::new(game.id)
                    .with_price(Some(25))
                    .with_platform(None),
            )
            .await?;

            assert_eq!(updated.id, game.id);
            assert_eq!(updated.title, game.title);
            assert_eq!(updated.genre, game.genre);
            assert_eq!(updated.price, Some(25));
            assert_eq!(updated.platform, None);

            // an empty update is a plain read
            let same = games::update_game(txn, GameUpdate::new(game.id)).await?;
            assert_eq!(same, updated);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_update_missing_game_is_not_found() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = games::update_game(txn, GameUpdate::new(424_242).with_price(Some(1)))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_delete_game() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Short Lived").await?;
            games::delete_game(txn, game.id).await?;
            assert!(games::find_game_by_id(txn, game.id).await?.is_none());

            let err = games::delete_game(txn, game.id).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_reviews_and_reviews_associated_agree() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Echoes").await?;
            let other = create_test_game(txn, "Elsewhere").await?;
            let user = create_test_user(txn, "reviewer").await?;

            let first = create_test_review(txn, Some(game.id), Some(user.id), 7).await?;
            let second = create_test_review(txn, Some(game.id), None, 3).await?;
            create_test_review(txn, Some(other.id), Some(user.id), 5).await?;

            let reviews = games::reviews(txn, game.id).await?;
            assert_eq!(reviews, vec![first, second]);
            assert_eq!(games::reviews_associated(txn, game.id).await?, reviews);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_users_of_game_without_links_is_empty() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Lonely").await?;
            create_test_user(txn, "bystander").await?;
            assert!(games::users(txn, game.id).await?.is_empty());
            Ok::<_, AppError>(())
        })
    })
    .await
}
