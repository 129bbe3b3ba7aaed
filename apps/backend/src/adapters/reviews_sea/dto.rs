//! DTOs for reviews_sea adapter.

/// DTO for creating a review. Both foreign keys may be left empty.
#[derive(Debug, Clone, Default)]
pub struct ReviewCreate {
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub game_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl ReviewCreate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn for_game(mut self, game_id: i64) -> Self {
        self.game_id = Some(game_id);
        self
    }

    pub fn by(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Partial update of a review; same three-state fields as `GameUpdate`.
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub id: i64,
    pub score: Option<Option<i32>>,
    pub comment: Option<Option<String>>,
    pub game_id: Option<Option<i64>>,
    pub user_id: Option<Option<i64>>,
}

impl ReviewUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            score: None,
            comment: None,
            game_id: None,
            user_id: None,
        }
    }

    pub fn with_score(mut self, score: Option<i32>) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_game(mut self, game_id: Option<i64>) -> Self {
        self.game_id = Some(game_id);
        self
    }

    pub fn with_user(mut self, user_id: Option<i64>) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.score.is_none()
            && self.comment.is_none()
            && self.game_id.is_none()
            && self.user_id.is_none()
    }
}
