//! Client actions against the posts service.
//!
//! An [`Action`] is one user intent. [`perform`] runs it against the API and
//! returns an [`Outcome`]; every mutating action is followed by a full
//! re-fetch of the post list, so callers only ever replace their list
//! wholesale. Failures collapse into an [`ActionFailed`] whose user-facing
//! text depends only on the action, never on the cause.

mod state;

use std::fmt;

use anyhow::Result;
pub use state::{Credentials, Draft, FeedState, View};

use crate::api::{ApiClient, NewPost, Post, PostPatch, RegisterRequest, UserProfile};
use crate::config::RegisterConfig;

/// A delete the user has asked for but not yet confirmed.
///
/// The only way to obtain a [`ConfirmedDelete`] (and therefore an
/// [`Action::DeletePost`]) is [`PendingDelete::confirm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: i64,
    pub title: String,
}

impl PendingDelete {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn for_post(post: &Post) -> Self {
        Self::new(post.post_id, post.title.clone())
    }

    /// Question shown to the user before deleting.
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete \"{}\"?", self.title)
    }

    pub fn confirm(self) -> Action {
        Action::DeletePost(ConfirmedDelete { id: self.id })
    }
}

/// Proof that a delete was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedDelete {
    id: i64,
}

impl ConfirmedDelete {
    pub fn id(self) -> i64 {
        self.id
    }
}

/// A single user intent that talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Register(RegisterRequest),
    Login { login: String, password: String },
    ListPosts,
    CreatePost(NewPost),
    EditPost { id: i64, patch: PostPatch },
    DeletePost(ConfirmedDelete),
    Like { id: i64 },
    Unlike { id: i64 },
    WhoAmI,
    ShowPost { id: i64 },
}

impl Action {
    pub fn register(login: &str, password: &str, profile: &RegisterConfig) -> Self {
        Action::Register(RegisterRequest::from_credentials(login, password, profile))
    }

    pub fn login(login: &str, password: &str) -> Self {
        Action::Login {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    pub fn create_post(title: &str, content: &str) -> Self {
        Action::CreatePost(NewPost {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    /// Short stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Register(_) => "register",
            Action::Login { .. } => "login",
            Action::ListPosts => "list_posts",
            Action::CreatePost(_) => "create_post",
            Action::EditPost { .. } => "edit_post",
            Action::DeletePost(_) => "delete_post",
            Action::Like { .. } => "like",
            Action::Unlike { .. } => "unlike",
            Action::WhoAmI => "whoami",
            Action::ShowPost { .. } => "show_post",
        }
    }

    /// User-facing message shown when the action fails, whatever the cause.
    pub fn failure_notice(&self) -> &'static str {
        match self {
            Action::Register(_) => "Registration failed",
            Action::Login { .. } => "Login failed",
            Action::ListPosts => "Failed to load posts",
            Action::CreatePost(_) => "Failed to create post",
            Action::EditPost { .. } => "Failed to update post. You may not be the author.",
            Action::DeletePost(_) => "Failed to delete post. You may not be the author.",
            Action::Like { .. } => "Like failed",
            Action::Unlike { .. } => "Unlike failed",
            Action::WhoAmI => "Failed to load profile",
            Action::ShowPost { .. } => "Failed to load post",
        }
    }

    /// Whether a success yields a new session token.
    pub fn signs_in(&self) -> bool {
        matches!(self, Action::Register(_) | Action::Login { .. })
    }

    /// Whether the action changes backend state (and is followed by a refresh).
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Action::CreatePost(_)
                | Action::EditPost { .. }
                | Action::DeletePost(_)
                | Action::Like { .. }
                | Action::Unlike { .. }
        )
    }
}

/// Successful result of an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Register/login issued a token.
    SignedIn { token: String },
    /// A full post list.
    Posts(Vec<Post>),
    /// A mutation went through. `refreshed` is the list fetched right after
    /// it, or `None` if that fetch failed (logged, list left as-is).
    Mutated { refreshed: Option<Vec<Post>> },
    Profile(UserProfile),
    Post(Post),
}

/// Failed action: a fixed notice for the user, the cause for the log.
#[derive(Debug)]
pub struct ActionFailed {
    pub notice: &'static str,
    pub cause: anyhow::Error,
}

impl fmt::Display for ActionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notice)
    }
}

impl std::error::Error for ActionFailed {}

/// Runs an action against the API.
///
/// # Errors
/// Returns [`ActionFailed`] carrying the action's fixed notice when the
/// request (not the follow-up refresh) fails.
pub async fn perform(api: &ApiClient, action: &Action) -> Result<Outcome, ActionFailed> {
    tracing::info!(action = action.name(), "performing action");
    match execute(api, action).await {
        Ok(outcome) => Ok(outcome),
        Err(cause) => {
            tracing::warn!(action = action.name(), error = format!("{cause:#}"), "action failed");
            Err(ActionFailed {
                notice: action.failure_notice(),
                cause,
            })
        }
    }
}

async fn execute(api: &ApiClient, action: &Action) -> Result<Outcome> {
    let outcome = match action {
        Action::Register(request) => Outcome::SignedIn {
            token: api.register(request).await?,
        },
        Action::Login { login, password } => Outcome::SignedIn {
            token: api.login(login, password).await?,
        },
        Action::ListPosts => Outcome::Posts(api.list_posts().await?),
        Action::WhoAmI => Outcome::Profile(api.me().await?),
        Action::ShowPost { id } => Outcome::Post(api.get_post(*id).await?),
        Action::CreatePost(post) => {
            api.create_post(post).await?;
            refresh(api).await
        }
        Action::EditPost { id, patch } => {
            api.update_post(*id, patch).await?;
            refresh(api).await
        }
        Action::DeletePost(confirmed) => {
            api.delete_post(confirmed.id()).await?;
            refresh(api).await
        }
        Action::Like { id } => {
            api.like(*id).await?;
            refresh(api).await
        }
        Action::Unlike { id } => {
            api.unlike(*id).await?;
            refresh(api).await
        }
    };
    Ok(outcome)
}

async fn refresh(api: &ApiClient) -> Outcome {
    match api.list_posts().await {
        Ok(posts) => Outcome::Mutated {
            refreshed: Some(posts),
        },
        Err(err) => {
            tracing::warn!(error = format!("{err:#}"), "refresh after mutation failed");
            Outcome::Mutated { refreshed: None }
        }
    }
}
