//! DTOs for users_sea adapter.

#[derive(Debug, Clone, Default)]
pub struct UserCreate {
    pub name: Option<String>,
}

impl UserCreate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// DTO for updating a user. `updated_at` is stamped by the adapter on every
/// call, even when `name` is left unchanged.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: i64,
    /// `None` = no change, `Some(None)` = clear
    pub name: Option<Option<String>>,
}

impl UserUpdate {
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = Some(name);
        self
    }
}
