//! HTTP client for the posts service.
//!
//! Every request attaches `Authorization: Bearer <token>` when a token is
//! set. Non-2xx responses become errors carrying the method, path, status
//! and a short excerpt of the body; callers decide how much of that to show.

pub mod types;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
pub use types::{
    LoginForm, NewPost, Post, PostPatch, PostsPage, RegisterRequest, TokenResponse, UserProfile,
    format_timestamp,
};

use crate::config::Config;

/// Standard User-Agent header for postboard requests.
pub const USER_AGENT: &str = concat!("postboard/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt kept in error messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Resolves connection settings from the loaded config (env wins for the base URL).
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            base_url: config.resolve_base_url()?,
            timeout: config.request_timeout(),
        })
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }
}

/// Posts service client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client without a token.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().default_headers(build_headers());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            http,
            token: None,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.set_token(token);
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `POST /register`; returns the issued access token.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or a bad body.
    pub async fn register(&self, body: &RegisterRequest) -> Result<String> {
        let response = self
            .send(self.request(Method::POST, "/register").json(body))
            .await?;
        decode_token(response).await
    }

    /// `POST /login` with a form-encoded `{username, password}` body.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or a bad body.
    pub async fn login(&self, login: &str, password: &str) -> Result<String> {
        let form = LoginForm {
            username: login,
            password,
        };
        let response = self
            .send(self.request(Method::POST, "/login").form(&form))
            .await?;
        decode_token(response).await
    }

    /// `GET /api/me`.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or a bad body.
    pub async fn me(&self) -> Result<UserProfile> {
        let response = self.send(self.request(Method::GET, "/api/me")).await?;
        response.json().await.context("Failed to decode profile")
    }

    /// `GET /api/posts`.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or a bad body.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let response = self.send(self.request(Method::GET, "/api/posts")).await?;
        let page: PostsPage = response.json().await.context("Failed to decode posts")?;
        Ok(page.posts)
    }

    /// `GET /api/posts/{id}`.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or a bad body.
    pub async fn get_post(&self, id: i64) -> Result<Post> {
        let response = self
            .send(self.request(Method::GET, &format!("/api/posts/{id}")))
            .await?;
        response.json().await.context("Failed to decode post")
    }

    /// `POST /api/posts`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn create_post(&self, post: &NewPost) -> Result<()> {
        self.send(self.request(Method::POST, "/api/posts").json(post))
            .await
            .map(drop)
    }

    /// `PATCH /api/posts/{id}`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn update_post(&self, id: i64, patch: &PostPatch) -> Result<()> {
        self.send(
            self.request(Method::PATCH, &format!("/api/posts/{id}"))
                .json(patch),
        )
        .await
        .map(drop)
    }

    /// `DELETE /api/posts/{id}`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn delete_post(&self, id: i64) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/api/posts/{id}")))
            .await
            .map(drop)
    }

    /// `POST /api/posts/{id}/like`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn like(&self, id: i64) -> Result<()> {
        self.send(self.request(Method::POST, &format!("/api/posts/{id}/like")))
            .await
            .map(drop)
    }

    /// `POST /api/posts/{id}/unlike`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn unlike(&self, id: i64) -> Result<()> {
        self.send(self.request(Method::POST, &format!("/api/posts/{id}/unlike")))
            .await
            .map(drop)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let builder = self.http.request(method, url);
        match self.token.as_deref() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().context("Failed to build request")?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!(%method, %path, "sending request");
        let response = self
            .http
            .execute(request)
            .await
            .with_context(|| format!("{method} {path} failed"))?;

        let status = response.status();
        tracing::debug!(%method, %path, status = status.as_u16(), "received response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        bail!(
            "{method} {path} returned {status}: {}",
            excerpt(&body, ERROR_BODY_LIMIT)
        );
    }
}

async fn decode_token(response: Response) -> Result<String> {
    let token: TokenResponse = response
        .json()
        .await
        .context("Failed to decode token response")?;
    if token.access_token.trim().is_empty() {
        bail!("Token response did not contain an access token");
    }
    Ok(token.access_token)
}

fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("accept", HeaderValue::from_static("application/json"));
    headers.insert("user-agent", HeaderValue::from_static(USER_AGENT));
    headers
}

fn excerpt(body: &str, limit: usize) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= limit {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(limit).collect();
    format!("{head}...")
}
