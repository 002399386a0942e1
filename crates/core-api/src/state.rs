use std::sync::Arc;

use axum::extract::FromRef;

pub type Database = Arc<starwars_database::Database>;

/// Shared by every handler; only the database handle so far
#[derive(Clone)]
pub struct ApiState {
    pub db: Database,
}

impl FromRef<ApiState> for Database {
    fn from_ref(state: &ApiState) -> Self {
        state.db.clone()
    }
}
