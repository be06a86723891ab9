use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::delete,
    Router,
};
use tracing::{info, instrument};

use crate::{auth::extractors::AuthUser, auth::repo::User, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/users/:id", delete(delete_user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(caller_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = User::delete_by_id(&state.db, id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("User"));
    }
    info!(deleted_user_id = id, caller_id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
