use crate::{
    dto::{CreatePostRequest, UpdatePostRequest},
    errors::ApiError,
    models::Post,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

/// GET /blog-posts
/// Response: 200 OK with a JSON array of all posts, in insertion order
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.store.all())
}

/// POST /blog-posts
/// Body: { "title": "...", "content": "...", "author": "...", "publishDate": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let (title, content, author, publish_date) = payload.into_fields()?;

    let post = state.store.create(title, content, author, publish_date);

    info!("Blog post created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /blog-posts/{id}
/// Body: { "id": "...", "title": "...", "content": "...", "author": "...", "publishDate": "..." }
///
/// The body id must match the path id. Updating an id that matches no post
/// is a 404, never an upsert.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<StatusCode, ApiError> {
    let post = payload.into_post(&id)?;

    if !state.store.update(post) {
        return Err(ApiError::NotFound(id));
    }

    info!("Blog post updated: {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /blog-posts/{id}
/// Responds 204 whether or not the id exists.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.remove(&id);

    info!("Blog post deleted: {}", id);

    StatusCode::NO_CONTENT
}
