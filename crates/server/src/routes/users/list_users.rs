use axum::{extract::State, Json};
use shared::{
    api::error::{Nothing, ServerError},
    model::User,
};
use tracing::instrument;

use crate::store::UserStore;

#[instrument(skip(users))]
pub async fn list_users(
    State(users): State<UserStore>,
) -> Result<Json<Vec<User>>, ServerError<Nothing>> {
    let users = users.find_all_users().await?;
    Ok(Json(users))
}
