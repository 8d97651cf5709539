//! Post/comment moderation queries for the admin API.
//!
//! DESIGN
//! ======
//! Posts and comments are loaded with two queries and stitched together in
//! memory, so a post with no comments still appears with an empty list.
//! Posts are newest first; comments within a post are oldest first.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error("comment not found: {0}")]
    CommentNotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Public identity of a post author or commenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub post_id: Uuid,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub user: UserRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub author: UserRef,
    pub comments: Vec<CommentView>,
}

/// Load every post with its author and nested comments.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_posts_with_comments(pool: &PgPool) -> Result<Vec<PostView>, ModerationError> {
    let post_rows = sqlx::query(
        r"SELECT p.id, p.title, p.created_at, u.username, u.email
          FROM posts p
          JOIN users u ON u.id = p.author_id
          ORDER BY p.created_at DESC, p.id",
    )
    .fetch_all(pool)
    .await?;

    let posts = post_rows
        .into_iter()
        .map(|r| PostView {
            id: r.get("id"),
            title: r.get("title"),
            created_at: r.get("created_at"),
            author: UserRef { username: r.get("username"), email: r.get("email") },
            comments: Vec::new(),
        })
        .collect::<Vec<_>>();

    let comment_rows = sqlx::query(
        r"SELECT c.id, c.post_id, c.content, c.created_at, u.username, u.email
          FROM comments c
          JOIN users u ON u.id = c.user_id
          ORDER BY c.created_at ASC, c.id",
    )
    .fetch_all(pool)
    .await?;

    let comments = comment_rows
        .into_iter()
        .map(|r| CommentView {
            id: r.get("id"),
            post_id: r.get("post_id"),
            content: r.get("content"),
            created_at: r.get("created_at"),
            user: UserRef { username: r.get("username"), email: r.get("email") },
        })
        .collect::<Vec<_>>();

    Ok(attach_comments(posts, comments))
}

/// Move each comment under its parent post, preserving comment order.
/// Comments whose post is not in `posts` are dropped.
pub(crate) fn attach_comments(mut posts: Vec<PostView>, comments: Vec<CommentView>) -> Vec<PostView> {
    let index: HashMap<Uuid, usize> = posts.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
    for comment in comments {
        if let Some(&i) = index.get(&comment.post_id) {
            posts[i].comments.push(comment);
        }
    }
    posts
}

/// Hard-delete one comment.
///
/// # Errors
///
/// Returns [`ModerationError::CommentNotFound`] if no row was deleted.
pub async fn delete_comment(pool: &PgPool, comment_id: Uuid) -> Result<(), ModerationError> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ModerationError::CommentNotFound(comment_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "moderation_test.rs"]
mod tests;
