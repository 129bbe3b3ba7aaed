//! DTOs for games_sea adapter.

/// DTO for creating a new game. Every column is optional.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i32>,
}

impl GameCreate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }
}

/// Partial update of a game.
///
/// Each field is three-state: `None` = no change, `Some(None)` = clear,
/// `Some(Some(v))` = set.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub title: Option<Option<String>>,
    pub genre: Option<Option<String>>,
    pub platform: Option<Option<String>>,
    pub price: Option<Option<i32>>,
}

impl GameUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            genre: None,
            platform: None,
            price: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_genre(mut self, genre: Option<String>) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn with_platform(mut self, platform: Option<String>) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_price(mut self, price: Option<i32>) -> Self {
        self.price = Some(price);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.platform.is_none()
            && self.price.is_none()
    }
}
