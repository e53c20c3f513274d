use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{LogResponse, LogsQuery},
        response_errors::LogsError,
    },
    model::ExerciseFilter,
    utils::date::parse_optional_date,
};
use tracing::instrument;

use crate::{
    routes::missing_user,
    state::Args,
    store::{ExerciseStore, UserStore},
};

/// Exercise log of a user
///
/// Unparsable `from`/`to` fall back to the defaults of `ExerciseFilter`,
/// an unparsable `limit` means no limit.
#[instrument(skip(users, exercises, args))]
pub async fn fetch_logs(
    State(users): State<UserStore>,
    State(exercises): State<ExerciseStore>,
    args: Args,
    Path(user_id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> Result<Response, ServerError<LogsError>> {
    let Some(user) = users.find_user(&user_id).await? else {
        return missing_user(&args, LogsError::UserNotFound { id: user_id });
    };

    let filter = ExerciseFilter::new(user.id)
        .from(parse_optional_date(query.from.as_deref()))
        .to(parse_optional_date(query.to.as_deref()))
        .limit(ExerciseFilter::parse_limit(query.limit.as_deref()));

    let exercises = exercises.find_user_exercises(filter).await?;

    Ok(Json(LogResponse::new(&user, exercises)).into_response())
}
