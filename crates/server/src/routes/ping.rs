use axum::{http::StatusCode, Json};
use shared::api::error::{Nothing, ServerError};

use crate::{db::DatabaseConnection, store::StoreError};

/// Liveness check that also makes sure the database answers
pub async fn ping(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<(StatusCode, Json<()>), ServerError<Nothing>> {
    conn.interact(|conn| conn.query_row("SELECT 1", (), |row| row.get::<_, i64>(0)))
        .await
        .map_err(StoreError::from)?
        .map_err(StoreError::from)?;

    Ok((StatusCode::OK, Json(())))
}
