//! Admin comment moderation page.
//!
//! DESIGN
//! ======
//! One-shot load plus reload-on-mutation: every successful delete is
//! followed by a full re-fetch of the post list, never a local removal.
//! `load` and `delete_comment` take `&mut self` across the request, so two
//! fetches on the same view cannot overlap and a stale response can never
//! overwrite a newer one.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and delete failures are logged and otherwise dropped. The table
//! keeps its previous contents and no notice is produced.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::net::api::AdminApi;
use crate::net::types::Post;
use crate::state::auth::SessionState;
use crate::state::notice::Notice;

pub const PAGE_TITLE: &str = "Style Share Admin | Manage Users Comments 💬";
pub const COMMENT_DELETED_MESSAGE: &str = "Comment deleted successfully";
const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

// =============================================================================
// TABLE MODEL
// =============================================================================

/// Summary row for one post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostRow {
    pub post_id: String,
    pub title: String,
    pub author_username: String,
    pub author_email: String,
    pub created: String,
    pub comment_count: usize,
}

/// Detail row for one comment, shown beneath its post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentRow {
    pub comment_id: String,
    pub username: String,
    pub email: String,
    pub content: String,
    pub created: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableRow {
    Post(PostRow),
    Comment(CommentRow),
}

fn format_with(ts: OffsetDateTime, format: &[BorrowedFormatItem<'_>]) -> String {
    ts.format(format).unwrap_or_else(|_| ts.to_string())
}

/// Generated initials avatar for a commenter.
#[must_use]
pub fn avatar_url(username: &str) -> String {
    reqwest::Url::parse_with_params(
        AVATAR_BASE_URL,
        &[("name", username), ("background", "0ea5e9"), ("color", "fff"), ("rounded", "true"), ("bold", "true")],
    )
    .map(String::from)
    .unwrap_or_else(|_| AVATAR_BASE_URL.to_owned())
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct ModerationView {
    posts: Vec<Post>,
    pub sidebar_open: bool,
}

impl ModerationView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Replace the post list with a fresh copy from the server. Returns
    /// whether the fetch succeeded.
    pub async fn load(&mut self, api: &dyn AdminApi, session: &SessionState) -> bool {
        match api.fetch_posts(session.token()).await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "posts loaded");
                self.posts = posts;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching posts");
                false
            }
        }
    }

    /// Delete one comment, then reload the whole list. Returns a success
    /// notice, or `None` if the delete failed.
    pub async fn delete_comment(
        &mut self,
        api: &dyn AdminApi,
        session: &SessionState,
        comment_id: &str,
    ) -> Option<Notice> {
        if let Err(e) = api.delete_comment(session.token(), comment_id).await {
            tracing::error!(error = %e, %comment_id, "error deleting comment");
            return None;
        }
        self.load(api, session).await;
        Some(Notice::success(COMMENT_DELETED_MESSAGE))
    }

    /// Flattened table: each post row is followed by its comment rows.
    #[must_use]
    pub fn rows(&self) -> Vec<TableRow> {
        let mut rows = Vec::with_capacity(self.posts.iter().map(|p| p.comments.len() + 1).sum());
        for post in &self.posts {
            rows.push(TableRow::Post(PostRow {
                post_id: post.id.clone(),
                title: post.title.clone(),
                author_username: post.author.username.clone(),
                author_email: post.author.email.clone(),
                created: format_with(post.created_at, DATE_FORMAT),
                comment_count: post.comments.len(),
            }));
            rows.extend(post.comments.iter().map(|c| {
                TableRow::Comment(CommentRow {
                    comment_id: c.id.clone(),
                    username: c.user.username.clone(),
                    email: c.user.email.clone(),
                    content: c.content.clone(),
                    created: format_with(c.created_at, DATETIME_FORMAT),
                    avatar_url: avatar_url(&c.user.username),
                })
            }));
        }
        rows
    }
}
