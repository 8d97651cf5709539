use super::*;

fn api() -> HttpAdminApi {
    HttpAdminApi::new("http://127.0.0.1:3000/").unwrap()
}

#[test]
fn delete_comment_url_embeds_id() {
    let url = api().delete_comment_url("c42").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/v1/admin/comments/delete/c42");
}

#[test]
fn delete_comment_url_keeps_traversal_inside_one_segment() {
    let url = api().delete_comment_url("../../posts/all").unwrap();
    assert_eq!(url.path(), "/api/v1/admin/comments/delete/..%2F..%2Fposts%2Fall");
}

#[test]
fn delete_comment_url_escapes_query_and_fragment() {
    let url = api().delete_comment_url("c1?all=1#top").unwrap();
    assert!(url.path().starts_with("/api/v1/admin/comments/delete/"));
    assert_eq!(url.path_segments().unwrap().count(), 6);
    assert_eq!(url.query(), None);
    assert_eq!(url.fragment(), None);
}

#[test]
fn delete_comment_url_rejects_dot_segments() {
    for id in ["", ".", ".."] {
        assert!(matches!(api().delete_comment_url(id), Err(ApiError::InvalidCommentId(_))), "{id:?}");
    }
}

#[test]
fn endpoints_keep_base_path_prefix() {
    let api = HttpAdminApi::new("https://styleshare.dev/backend/").unwrap();
    let url = api.delete_comment_url("c1").unwrap();
    assert_eq!(url.path(), "/backend/api/v1/admin/comments/delete/c1");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok"), "Bearer tok");
}

#[test]
fn bearer_header_keeps_empty_token() {
    assert_eq!(bearer_header(""), "Bearer ");
}

#[test]
fn normalize_base_url_strips_trailing_slash() {
    assert_eq!(normalize_base_url("http://127.0.0.1:3000/").unwrap(), "http://127.0.0.1:3000");
    assert_eq!(normalize_base_url("  https://styleshare.dev ").unwrap(), "https://styleshare.dev");
}

#[test]
fn normalize_base_url_rejects_non_http() {
    assert!(matches!(normalize_base_url("ftp://example.com"), Err(ApiError::InvalidBaseUrl(_))));
    assert!(matches!(normalize_base_url("localhost:3000"), Err(ApiError::InvalidBaseUrl(_))));
}

#[test]
fn http_admin_api_builds_urls_from_base() {
    let api = api();
    assert_eq!(api.base_url(), "http://127.0.0.1:3000");
    let url = api.endpoint(POSTS_ALL_SEGMENTS);
    assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/v1/admin/posts/all");
    assert_eq!(url.path(), POSTS_ALL_PATH);
}

#[test]
fn status_error_message_names_request() {
    let path = api().delete_comment_url("c1").unwrap().path().to_owned();
    let err = ApiError::Status { method: "DELETE", path, status: 404 };
    assert_eq!(err.to_string(), "DELETE /api/v1/admin/comments/delete/c1 failed: 404");
}
