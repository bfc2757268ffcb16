use super::{Action, Outcome};
use crate::api::{Post, UserProfile};

/// Which of the two screens is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    SignedOut,
    SignedIn,
}

/// Login form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn clear(&mut self) {
        self.login.clear();
        self.password.clear();
    }
}

/// New-post form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

/// Client-side state of the feed.
///
/// The view is derived from token presence. The post list is only ever
/// replaced as a whole.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    token: Option<String>,
    posts: Vec<Post>,
    pub credentials: Credentials,
    pub draft: Draft,
    pub profile: Option<UserProfile>,
}

impl FeedState {
    /// Starts signed in when a persisted token is present.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            ..Self::default()
        }
    }

    pub fn view(&self) -> View {
        if self.token.is_some() {
            View::SignedIn
        } else {
            View::SignedOut
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.view() == View::SignedIn
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.post_id == id)
    }

    /// Stores the token and clears the login form.
    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.credentials.clear();
    }

    /// Drops the token, the post list, and the profile.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.posts.clear();
        self.profile = None;
    }

    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Folds a successful action into the state.
    pub fn apply(&mut self, action: &Action, outcome: Outcome) {
        if matches!(action, Action::CreatePost(_)) {
            self.draft.clear();
        }

        match outcome {
            Outcome::SignedIn { token } => self.sign_in(token),
            Outcome::Posts(posts)
            | Outcome::Mutated {
                refreshed: Some(posts),
            } => self.replace_posts(posts),
            Outcome::Mutated { refreshed: None } | Outcome::Post(_) => {}
            Outcome::Profile(profile) => self.profile = Some(profile),
        }
    }
}
