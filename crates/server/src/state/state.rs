use std::sync::Arc;

use deadpool_sqlite::Pool;

use crate::{
    cli::Cli,
    store::{ExerciseStore, UserStore},
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
    pub users: UserStore,
    pub exercises: ExerciseStore,
    pub args: Arc<Cli>,
}

impl AppState {
    /// Builds the stores on top of `pool`
    pub fn new(pool: Pool, args: Cli) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            exercises: ExerciseStore::new(pool.clone()),
            pool,
            args: Arc::new(args),
        }
    }
}
