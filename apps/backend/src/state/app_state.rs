use sea_orm::DatabaseConnection;

use crate::config::db::RuntimeEnv;

/// Shared resources handed to every data-layer call
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent when built without a database)
    db: Option<DatabaseConnection>,
    pub env: RuntimeEnv,
}

impl AppState {
    pub fn new(db: DatabaseConnection, env: RuntimeEnv) -> Self {
        Self { db: Some(db), env }
    }

    pub fn new_without_db(env: RuntimeEnv) -> Self {
        Self { db: None, env }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
