use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{CreateExerciseRequest, ExerciseResponse},
        response_errors::CreateExerciseError,
    },
    utils::date::parse_date,
};
use tracing::instrument;

use crate::{
    extract::Payload,
    routes::missing_user,
    state::Args,
    store::{ExerciseStore, UserStore},
};

#[instrument(skip(users, exercises, args))]
pub async fn create_exercise(
    State(users): State<UserStore>,
    State(exercises): State<ExerciseStore>,
    args: Args,
    Path(user_id): Path<String>,
    Payload(request): Payload<CreateExerciseRequest>,
) -> Result<Response, ServerError<CreateExerciseError>> {
    let Some(user) = users.find_user(&user_id).await? else {
        return missing_user(&args, CreateExerciseError::UserNotFound { id: user_id });
    };

    let date = match request.date() {
        None => None,
        Some(raw) => Some(parse_date(raw).ok_or_else(|| CreateExerciseError::InvalidDate {
            date: raw.to_owned(),
        })?),
    };

    let exercise = exercises
        .create_exercise(user.id, request.description, request.duration, date)
        .await?;

    Ok(Json(ExerciseResponse::new(&user, &exercise)).into_response())
}
