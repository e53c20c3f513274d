use axum::{extract::State, Json};
use shared::{
    api::{
        error::{Nothing, ServerError},
        payloads::CreateUserRequest,
    },
    model::User,
};
use tracing::instrument;

use crate::{extract::Payload, store::UserStore};

#[instrument(skip(users))]
pub async fn create_user(
    State(users): State<UserStore>,
    Payload(request): Payload<CreateUserRequest>,
) -> Result<Json<User>, ServerError<Nothing>> {
    let user = users.create_user(request.username).await?;
    Ok(Json(user))
}
