//! Signed-in screen: composer on top, post list below.

mod render;
mod state;
mod update;

pub use render::render_posts;
pub use state::{PostsFocus, PostsState};
pub use update::{handle_posts_key, handle_posts_paste, logout};
