use game_reviews::errors::domain::{DomainError, NotFoundKind};
use game_reviews::repos::reviews::{self, ReviewCreate, ReviewUpdate};
use game_reviews::{with_txn, AppError};

use crate::support::factory::{create_test_game, create_test_review, create_test_user};
use crate::support::test_state::memory_state;

#[tokio::test]
async fn test_review_without_game_or_user_is_accepted() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let review = reviews::create_review(
                txn,
                ReviewCreate::new().with_score(5).with_comment("No context"),
            )
            .await?;
            assert_eq!(review.game_id, None);
            assert_eq!(review.user_id, None);

            assert_eq!(reviews::associated_game(txn, &review).await?, None);
            assert_eq!(reviews::associated_user(txn, &review).await?, None);
            assert_eq!(
                review.to_string(),
                format!("Review(id={}, score=5, game_id=None)", review.id)
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_associated_accessors_and_aliases_resolve_same_rows() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Lumen").await?;
            let user = create_test_user(txn, "lumen-fan").await?;
            let review = create_test_review(txn, Some(game.id), Some(user.id), 10).await?;

            let by_assoc = reviews::associated_game(txn, &review).await?;
            let by_alias = reviews::game(txn, &review).await?;
            assert_eq!(by_assoc.as_ref(), Some(&game));
            assert_eq!(by_alias, by_assoc);

            let author = reviews::associated_user(txn, &review).await?;
            assert_eq!(author.as_ref().map(|u| u.id), Some(user.id));
            assert_eq!(reviews::user(txn, &review).await?, author);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_update_review_can_detach_game() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Detached").await?;
            let review = create_test_review(txn, Some(game.id), None, 4).await?;

            let updated = reviews::update_review(
                txn,
                ReviewUpdate::new(review.id)
                    .with_score(Some(6))
                    .with_game(None),
            )
            .await?;
            assert_eq!(updated.score, Some(6));
            assert_eq!(updated.game_id, None);
            assert_eq!(updated.comment, review.comment);
            assert_eq!(reviews::associated_game(txn, &updated).await?, None);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_find_update_delete_missing_review() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            assert!(reviews::find_review_by_id(txn, 77).await?.is_none());

            let err = reviews::require_review(txn, 77).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Review, _)));

            let err = reviews::update_review(txn, ReviewUpdate::new(77).with_score(Some(1)))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Review, _)));

            let err = reviews::delete_review(txn, 77).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Review, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_delete_review_leaves_game_and_user() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Keeper").await?;
            let user = create_test_user(txn, "keeper").await?;
            let review = create_test_review(txn, Some(game.id), Some(user.id), 9).await?;

            reviews::delete_review(txn, review.id).await?;
            assert!(reviews::find_review_by_id(txn, review.id).await?.is_none());
            assert!(game_reviews::repos::games::find_game_by_id(txn, game.id)
                .await?
                .is_some());
            assert!(game_reviews::repos::users::find_user_by_id(txn, user.id)
                .await?
                .is_some());
            Ok::<_, AppError>(())
        })
    })
    .await
}
