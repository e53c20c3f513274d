use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use shared::api::{error::ServerError, Object};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{cli::Cli, state::AppState};

pub mod ping;
pub mod users;

pub fn router(state: AppState) -> Router {
    let max_body_bytes = state.args.max_body_bytes;

    Router::new()
        .route(
            Object::Users.path(),
            get(users::list_users).post(users::create_user),
        )
        .route(Object::UserExercises.path(), post(users::create_exercise))
        .route(Object::UserLogs.path(), get(users::fetch_logs))
        .route(Object::Ping.path(), get(ping::ping))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Response for a user id that is well formed but unknown
///
/// An empty object unless `--strict-not-found` asks for a 404
pub(crate) fn missing_user<T>(args: &Cli, not_found: T) -> Result<Response, ServerError<T>>
where
    ServerError<T>: From<T>,
{
    if args.strict_not_found {
        Err(not_found.into())
    } else {
        Ok(Json(serde_json::json!({})).into_response())
    }
}
