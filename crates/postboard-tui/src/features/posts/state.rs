#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostsFocus {
    #[default]
    List,
    ComposeTitle,
    ComposeContent,
}

impl PostsFocus {
    pub fn is_compose(self) -> bool {
        !matches!(self, PostsFocus::List)
    }
}

/// Selection and focus for the post list.
#[derive(Debug, Default)]
pub struct PostsState {
    pub focus: PostsFocus,
    selected: usize,
}

impl PostsState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the selection inside a list that was just replaced.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
