//! REST client for the admin API.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Views decide what to do with a
//! failure; the moderation page logs and drops it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::Url;
use reqwest::header::AUTHORIZATION;

use super::types::{Post, PostsResponse};

pub const POSTS_ALL_PATH: &str = "/api/v1/admin/posts/all";
const POSTS_ALL_SEGMENTS: &[&str] = &["api", "v1", "admin", "posts", "all"];
const DELETE_COMMENT_SEGMENTS: &[&str] = &["api", "v1", "admin", "comments", "delete"];
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid comment id: {0:?}")]
    InvalidCommentId(String),
    #[error("{method} {path} failed: {status}")]
    Status { method: &'static str, path: String, status: u16 },
}

pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiError::InvalidBaseUrl(raw.to_owned()));
    }
    reqwest::Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    Ok(trimmed.to_owned())
}

/// Admin endpoints used by the moderation page. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /api/v1/admin/posts/all`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-2xx status.
    async fn fetch_posts(&self, token: &str) -> Result<Vec<Post>, ApiError>;

    /// `DELETE /api/v1/admin/comments/delete/{comment_id}`. The response
    /// body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-2xx status.
    async fn delete_comment(&self, token: &str, comment_id: &str) -> Result<(), ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpAdminApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpAdminApi {
    /// Build a client for `base_url` (e.g. `http://127.0.0.1:3000`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or the HTTP client fails
    /// to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let normalized = normalize_base_url(base_url)?;
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidBaseUrl(format!("{normalized}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(normalized));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Base URL with `segments` appended. Each segment is percent-encoded on
    /// its own, so `/`, `?` and `#` inside one cannot change the route.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: http(s) bases always have a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `DELETE` target for one comment. Empty, `.` and `..` ids are rejected
    /// since they would not survive as a path segment.
    pub(crate) fn delete_comment_url(&self, comment_id: &str) -> Result<Url, ApiError> {
        if matches!(comment_id, "" | "." | "..") {
            return Err(ApiError::InvalidCommentId(comment_id.to_owned()));
        }
        let mut url = self.endpoint(DELETE_COMMENT_SEGMENTS);
        if let Ok(mut path) = url.path_segments_mut() {
            path.push(comment_id);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl AdminApi for HttpAdminApi {
    async fn fetch_posts(&self, token: &str) -> Result<Vec<Post>, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(POSTS_ALL_SEGMENTS))
            .header(AUTHORIZATION, bearer_header(token))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status { method: "GET", path: POSTS_ALL_PATH.to_owned(), status: resp.status().as_u16() });
        }
        let body: PostsResponse = resp.json().await?;
        Ok(body.posts)
    }

    async fn delete_comment(&self, token: &str, comment_id: &str) -> Result<(), ApiError> {
        let url = self.delete_comment_url(comment_id)?;
        let path = url.path().to_owned();
        let resp = self
            .http
            .delete(url)
            .header(AUTHORIZATION, bearer_header(token))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status { method: "DELETE", path, status: resp.status().as_u16() });
        }
        Ok(())
    }
}
