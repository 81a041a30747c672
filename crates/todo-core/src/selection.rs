//! Cursor over a list whose length changes underneath it.

/// Single-row selection. `None` means nothing is selected, which only
/// holds for an empty list once [`SelectionState::sync`] has run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Move down one row, stopping at the last one.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move up one row, stopping at the first one.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |idx| idx.saturating_sub(1)));
    }

    pub fn jump_to_first(&mut self, len: usize) {
        self.selected_index = (len > 0).then_some(0);
    }

    pub fn jump_to_last(&mut self, len: usize) {
        self.selected_index = len.checked_sub(1);
    }

    pub fn auto_select_first_if_empty(&mut self, has_items: bool) {
        if self.selected_index.is_none() && has_items {
            self.selected_index = Some(0);
        }
    }

    /// Pull the selection back inside `0..len` after rows were removed.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected_index {
            self.selected_index = len.checked_sub(1).map(|last| idx.min(last));
        }
    }

    /// Clamp, then select the first row if the list has rows but nothing
    /// is selected. Call after any change to the list length.
    pub fn sync(&mut self, len: usize) {
        self.clamp(len);
        self.auto_select_first_if_empty(len > 0);
    }
}
