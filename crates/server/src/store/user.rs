use deadpool_sqlite::Pool;
use shared::{
    model::{NewUser, User},
    types::Uuid,
};
use tracing::{debug, instrument};

use super::StoreError;

#[derive(Debug, Clone)]
pub struct UserStore {
    pool: Pool,
}

impl UserStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Persists a new user. Usernames don't have to be unique or non-empty
    #[instrument(skip(self))]
    pub async fn create_user(&self, username: String) -> Result<User, StoreError> {
        let new_user = NewUser::new(username);

        let conn = self.pool.get().await?;
        let user = conn
            .interact(move |conn| User::create(conn, new_user))
            .await??;

        debug!(id = %user.id, "Created user");
        Ok(user)
    }

    /// `Ok(None)` if no user has this id, an error if it isn't an id at all
    #[instrument(skip(self))]
    pub async fn find_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        let id = Uuid::parse(id).map_err(|source| StoreError::MalformedId {
            id: id.to_owned(),
            source,
        })?;

        let conn = self.pool.get().await?;
        let user = conn
            .interact(move |conn| User::fetch_maybe(conn, &id))
            .await??;

        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn find_all_users(&self) -> Result<Vec<User>, StoreError> {
        let conn = self.pool.get().await?;
        let users = conn.interact(|conn| User::fetch_all(conn)).await??;

        Ok(users)
    }
}
