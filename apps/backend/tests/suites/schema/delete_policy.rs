use game_reviews::repos::{game_users, games, reviews, users};
use game_reviews::{with_txn, AppError};

use crate::support::factory::{create_test_game, create_test_review, create_test_user};
use crate::support::test_state::memory_state;

#[tokio::test]
async fn test_deleting_game_nullifies_reviews_and_drops_links() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Sunset").await?;
            let user = create_test_user(txn, "sunset").await?;
            game_users::link(txn, game.id, user.id).await?;
            let review = create_test_review(txn, Some(game.id), Some(user.id), 6).await?;

            games::delete_game(txn, game.id).await?;

            let orphan = reviews::require_review(txn, review.id).await?;
            assert_eq!(orphan.game_id, None);
            assert_eq!(orphan.user_id, Some(user.id));
            assert_eq!(reviews::associated_game(txn, &orphan).await?, None);

            assert!(!game_users::is_linked(txn, game.id, user.id).await?);
            assert!(users::games(txn, user.id).await?.is_empty());
            assert!(users::find_user_by_id(txn, user.id).await?.is_some());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_deleting_user_nullifies_reviews_and_drops_links() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Afterglow").await?;
            let user = create_test_user(txn, "afterglow").await?;
            game_users::link(txn, game.id, user.id).await?;
            let review = create_test_review(txn, Some(game.id), Some(user.id), 8).await?;

            users::delete_user(txn, user.id).await?;

            let orphan = reviews::require_review(txn, review.id).await?;
            assert_eq!(orphan.user_id, None);
            assert_eq!(orphan.game_id, Some(game.id));
            assert_eq!(games::reviews(txn, game.id).await?, vec![orphan]);

            assert!(game_users::links_for_game(txn, game.id).await?.is_empty());
            assert!(games::users(txn, game.id).await?.is_empty());
            Ok::<_, AppError>(())
        })
    })
    .await
}
