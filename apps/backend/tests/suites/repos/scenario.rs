//! End-to-end walk through the catalogue: one game, one user, one review.

use game_reviews::repos::games::{self, GameCreate};
use game_reviews::repos::reviews::{self, ReviewCreate};
use game_reviews::repos::users::{self, UserCreate};
use game_reviews::repos::game_users;
use game_reviews::{with_txn, AppError};

use crate::support::test_state::memory_state;

#[tokio::test]
async fn test_chrono_quest_reviewed_by_ada() -> Result<(), AppError> {
    let state = memory_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let game = games::create_game(
                txn,
                GameCreate::new()
                    .with_title("Chrono Quest")
                    .with_genre("RPG")
                    .with_platform("PC")
                    .with_price(40),
            )
            .await?;
            let ada = users::create_user(txn, UserCreate::new().with_name("Ada")).await?;
            game_users::link(txn, game.id, ada.id).await?;

            let review = reviews::create_review(
                txn,
                ReviewCreate::new()
                    .with_score(9)
                    .with_comment("Great")
                    .for_game(game.id)
                    .by(ada.id),
            )
            .await?;

            assert_eq!(games::reviews(txn, game.id).await?, vec![review.clone()]);
            assert_eq!(users::reviews(txn, ada.id).await?, vec![review.clone()]);

            let reviewed = reviews::associated_game(txn, &review)
                .await?
                .expect("review points at a game");
            assert_eq!(reviewed.title.as_deref(), Some("Chrono Quest"));

            let author = reviews::associated_user(txn, &review)
                .await?
                .expect("review points at a user");
            assert_eq!(author.to_string(), format!("User(id={}, name=Ada)", ada.id));

            assert_eq!(games::users(txn, game.id).await?, vec![ada.clone()]);
            assert_eq!(users::games(txn, ada.id).await?, vec![game.clone()]);
            assert_eq!(
                game.to_string(),
                format!("Game(id={}, title=Chrono Quest, platform=PC)", game.id)
            );
            assert_eq!(
                review.to_string(),
                format!("Review(id={}, score=9, game_id={})", review.id, game.id)
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}
