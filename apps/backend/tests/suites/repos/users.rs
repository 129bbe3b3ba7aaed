use game_reviews::errors::domain::{DomainError, NotFoundKind};
use game_reviews::repos::users::{self, UserCreate, UserUpdate};
use game_reviews::{with_txn, AppError};

use crate::support::factory::{create_test_game, create_test_review, create_test_user};
use crate::support::test_state::memory_state;

#[tokio::test]
async fn test_new_user_has_created_at_and_no_updated_at() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let before = time::OffsetDateTime::now_utc();
            let user = users::create_user(txn, UserCreate::new().with_name("Ada")).await?;

            assert!(user.created_at >= before - time::Duration::seconds(1));
            assert_eq!(user.updated_at, None);

            let found = users::require_user(txn, user.id).await?;
            assert_eq!(found.created_at, user.created_at);
            assert_eq!(found.updated_at, None);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_update_sets_updated_at() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = create_test_user(txn, "renamed").await?;

            let updated = users::update_user(
                txn,
                UserUpdate::new(user.id).with_name(Some("Grace".to_string())),
            )
            .await?;
            assert_eq!(updated.name.as_deref(), Some("Grace"));
            assert_eq!(updated.created_at, user.created_at);
            let stamped = updated.updated_at.expect("updated_at set by update");
            assert!(stamped >= updated.created_at);

            // touching without changing the name still stamps
            let touched = users::update_user(txn, UserUpdate::new(user.id)).await?;
            assert_eq!(touched.name.as_deref(), Some("Grace"));
            assert!(touched.updated_at.expect("still set") >= stamped);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = users::update_user(txn, UserUpdate::new(31_337)).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::User, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_delete_user() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = create_test_user(txn, "leaving").await?;
            users::delete_user(txn, user.id).await?;
            assert!(users::find_user_by_id(txn, user.id).await?.is_none());

            let err = users::delete_user(txn, user.id).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::User, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_user_reviews_and_alias() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = create_test_game(txn, "Tidebreaker").await?;
            let user = create_test_user(txn, "critic").await?;
            let other = create_test_user(txn, "someone-else").await?;

            let mine = create_test_review(txn, Some(game.id), Some(user.id), 8).await?;
            let unattached = create_test_review(txn, None, Some(user.id), 2).await?;
            create_test_review(txn, Some(game.id), Some(other.id), 6).await?;

            let reviews = users::reviews(txn, user.id).await?;
            assert_eq!(reviews, vec![mine, unattached]);
            assert_eq!(users::reviews_associated(txn, user.id).await?, reviews);
            Ok::<_, AppError>(())
        })
    })
    .await
}
