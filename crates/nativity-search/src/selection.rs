//! Keyboard selection over a result list.

/// Highlighted row in a list of search results.
///
/// Arrow keys move the cursor without wrapping; a new result list puts it back
/// on the first row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
    len: usize,
}

impl SelectionCursor {
    /// Cursor on the first of `len` rows.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Selected row, or `None` when there are no results.
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move down one row, stopping at the last.
    pub fn select_next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    /// Move down `steps` rows at once, stopping at the last.
    pub fn select_by(&mut self, steps: usize) {
        self.index = self
            .index
            .saturating_add(steps)
            .min(self.len.saturating_sub(1));
    }

    /// Move up one row, stopping at the first.
    pub fn select_previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Results changed: back to the first row.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// The selected element of `items`, if any.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.selected().and_then(|i| items.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor_selects_nothing() {
        let mut cursor = SelectionCursor::new(0);
        cursor.select_next();
        cursor.select_previous();
        assert_eq!(cursor.selected(), None);
        assert!(cursor.is_empty());
        assert_eq!(cursor.pick::<u8>(&[]), None);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut cursor = SelectionCursor::new(3);
        cursor.select_previous();
        assert_eq!(cursor.selected(), Some(0));

        for _ in 0..5 {
            cursor.select_next();
        }
        assert_eq!(cursor.selected(), Some(2));

        cursor.select_previous();
        assert_eq!(cursor.selected(), Some(1));
    }

    #[test]
    fn test_select_by_clamps_to_last_row() {
        let mut cursor = SelectionCursor::new(3);
        cursor.select_by(1);
        assert_eq!(cursor.selected(), Some(1));

        cursor.select_by(usize::MAX);
        assert_eq!(cursor.selected(), Some(2));

        let mut empty = SelectionCursor::new(0);
        empty.select_by(usize::MAX);
        assert_eq!(empty.selected(), None);
    }

    #[test]
    fn test_reset_returns_to_first_row() {
        let mut cursor = SelectionCursor::new(4);
        cursor.select_next();
        cursor.select_next();
        cursor.reset(2);
        assert_eq!(cursor.selected(), Some(0));
        assert_eq!(cursor.len(), 2);
    }

    #[test]
    fn test_pick() {
        let rows = ["button", "badge", "banner"];
        let mut cursor = SelectionCursor::new(rows.len());
        cursor.select_next();
        assert_eq!(cursor.pick(&rows), Some(&"badge"));
    }
}
