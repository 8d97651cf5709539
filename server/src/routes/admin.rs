//! Admin moderation routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use uuid::Uuid;

use super::auth::AdminUser;
use crate::services::moderation::{self, ModerationError, PostView};
use crate::state::AppState;

pub const COMMENT_DELETED_MESSAGE: &str = "Comment deleted successfully";

pub(crate) fn moderation_error_to_status(err: ModerationError) -> StatusCode {
    match err {
        ModerationError::CommentNotFound(_) => StatusCode::NOT_FOUND,
        ModerationError::Database(e) => {
            tracing::error!(error = %e, "moderation query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[derive(Serialize)]
pub struct PostsResponse {
    pub posts: Vec<PostView>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `GET /api/v1/admin/posts/all`: every post with author and nested comments.
pub async fn list_posts(State(state): State<AppState>, _admin: AdminUser) -> Result<Json<PostsResponse>, StatusCode> {
    let posts = moderation::list_posts_with_comments(&state.pool)
        .await
        .map_err(moderation_error_to_status)?;
    Ok(Json(PostsResponse { posts }))
}

/// `DELETE /api/v1/admin/comments/delete/{comment_id}`: hard-delete a comment.
pub async fn delete_comment(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(comment_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StatusCode> {
    moderation::delete_comment(&state.pool, comment_id)
        .await
        .map_err(moderation_error_to_status)?;
    tracing::info!(admin = %admin.user.id, %comment_id, "comment deleted");
    Ok(Json(MessageResponse { message: COMMENT_DELETED_MESSAGE }))
}
