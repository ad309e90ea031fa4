use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Maps session tokens to the username they authenticate.
pub type SessionStore = Arc<Mutex<HashMap<String, String>>>;

pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState {
            pool,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}
