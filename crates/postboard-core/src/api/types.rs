//! Wire types for the posts service.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::RegisterConfig;

/// A post as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(alias = "id")]
    pub post_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Post {
    /// Creation time formatted as `YYYY-MM-DD HH:MM`, if the backend sent one.
    pub fn created_display(&self) -> Option<String> {
        self.created_at.as_deref().and_then(format_timestamp)
    }
}

/// Formats a backend timestamp for display.
///
/// Accepts RFC 3339 (with offset) and naive ISO 8601 timestamps, which is
/// what the backend emits depending on how the row was stored.
pub fn format_timestamp(raw: &str) -> Option<String> {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.format(DISPLAY).to_string());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|parsed| parsed.format(DISPLAY).to_string())
}

/// Envelope of `GET /api/posts`. Paging fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: String,
}

impl RegisterRequest {
    /// Builds a registration body, filling profile fields from the login.
    pub fn from_credentials(login: &str, password: &str, profile: &RegisterConfig) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
            email: format!("{login}@{}", profile.email_domain),
            first_name: login.to_string(),
            last_name: login.to_string(),
            phone: profile.phone.clone(),
            role: profile.role.clone(),
        }
    }
}

/// Form body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Token returned by `/register` and `/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Body of `PATCH /api/posts/{id}`. Only provided fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Profile returned by `GET /api/me`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub login: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_decodes_backend_shape() {
        let json = r#"{
            "post_id": 7,
            "user_id": 2,
            "title": "Hello",
            "content": "World",
            "likes_count": 3,
            "created_at": "2025-03-01T10:15:00",
            "updated_at": "2025-03-01T10:15:00"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.post_id, 7);
        assert_eq!(post.likes_count, 3);
        assert_eq!(post.user_id, Some(2));
        assert_eq!(post.created_display().as_deref(), Some("2025-03-01 10:15"));
    }

    #[test]
    fn test_post_decodes_minimal_shape() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "title": "A"}"#).unwrap();
        assert_eq!(post.post_id, 1);
        assert_eq!(post.content, "");
        assert_eq!(post.likes_count, 0);
        assert_eq!(post.created_display(), None);
    }

    #[test]
    fn test_posts_page_ignores_paging_fields() {
        let json = r#"{"totalCount": 1, "page": 1, "pageSize": 10, "totalPages": 1,
                       "posts": [{"post_id": 1, "title": "A", "content": "", "likes_count": 0}]}"#;
        let page: PostsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.posts.len(), 1);
    }

    #[test]
    fn test_token_response_reads_access_token_only() {
        let json = r#"{"access_token": "abc", "token_type": "bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc");
    }

    #[test]
    fn test_format_timestamp_with_offset() {
        assert_eq!(
            format_timestamp("2025-03-01T10:15:42+00:00").as_deref(),
            Some("2025-03-01 10:15")
        );
        assert_eq!(format_timestamp("yesterday"), None);
    }

    #[test]
    fn test_register_request_fills_profile() {
        let body = RegisterRequest::from_credentials("ann", "pw", &RegisterConfig::default());
        assert_eq!(body.email, "ann@example.com");
        assert_eq!(body.first_name, "ann");
        assert_eq!(body.last_name, "ann");
        assert_eq!(body.phone, "0000000000");
        assert_eq!(body.role, "user");
    }

    #[test]
    fn test_patch_skips_missing_fields() {
        let patch = PostPatch {
            title: Some("T".to_string()),
            content: None,
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":"T"}"#);
        assert!(PostPatch::default().is_empty());
    }
}
