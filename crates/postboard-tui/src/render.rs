//! Pure view functions: read `&AppState`, draw to the frame, never mutate.

use postboard_core::feed::View;
use ratatui::Frame;

use crate::overlays::OverlayExt;
use crate::state::AppState;
use crate::{auth, posts};

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match app.tui.feed.view() {
        View::SignedOut => auth::render_auth(frame, area, &app.tui),
        View::SignedIn => posts::render_posts(frame, area, &app.tui),
    }
    app.overlay.render(frame, area);
}
