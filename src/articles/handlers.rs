use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    state::AppState,
};

use super::dto::{CreateArticleRequest, Pagination};
use super::repo::Article;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles))
        .route("/articles/:id", get(get_article))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", post(create_article))
        .route("/articles/:id", delete(delete_article))
}

#[instrument(skip(state))]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = Article::list(&state.db, p.limit.max(1), p.offset()).await?;
    Ok(Json(articles))
}

#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    let article = Article::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Article"))?;
    Ok(Json(article))
}

#[instrument(skip(state, payload))]
pub async fn create_article(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateArticleRequest>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    if payload.title.is_empty() || payload.body.is_empty() {
        return Err(ApiError::validation("Both title and body required"));
    }

    let article = Article::create(&state.db, &payload.title, &payload.body).await?;
    info!(article_id = article.id, user_id, "article created");
    Ok((StatusCode::CREATED, Json(article)))
}

#[instrument(skip(state))]
pub async fn delete_article(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = Article::delete_by_id(&state.db, id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Article"));
    }
    info!(article_id = id, user_id, "article deleted");
    Ok(StatusCode::NO_CONTENT)
}
