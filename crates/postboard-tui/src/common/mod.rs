//! Shared helpers for TUI slices and overlays.

pub mod field;
pub mod text;

pub use field::apply_edit_key;
pub use text::{mask, sanitize_for_display, truncate_start_with_ellipsis, truncate_with_ellipsis};
