//! UI-only view state: terminal size, list cursor and scroll position.
//!
//! Domain data lives in `AppState`; this only tracks where the user is looking.

use crate::render::layout::ScreenLayout;
use ratatui::layout::Rect;

/// Viewport over the school list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Index of the highlighted school
    pub cursor: usize,

    /// Index of the school drawn on the first list row
    pub top: usize,

    /// Terminal dimensions
    pub width: u16,
    pub height: u16,
}

impl ViewState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cursor: 0,
            top: 0,
            width,
            height,
        }
    }

    /// Full terminal area
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.area())
    }

    /// Rows visible in the list region
    pub fn lines_per_page(&self) -> usize {
        self.layout().list_rows()
    }

    /// Place the cursor on `index`, clamped to the `total` schools, and scroll so it
    /// stays visible.
    pub fn move_cursor_to(&mut self, index: usize, total: usize) {
        self.cursor = index.min(total.saturating_sub(1));
        self.ensure_visible(total);
    }

    /// Move the cursor by `delta` rows (negative is up).
    pub fn move_by(&mut self, delta: i64, total: usize) {
        let target = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.cursor.saturating_add(delta as usize)
        };
        self.move_cursor_to(target, total);
    }

    pub fn page_up(&mut self, total: usize) {
        let page = self.lines_per_page().max(1) as i64;
        self.move_by(-page, total);
    }

    pub fn page_down(&mut self, total: usize) {
        let page = self.lines_per_page().max(1) as i64;
        self.move_by(page, total);
    }

    /// Update terminal dimensions. Returns true if they changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16, total: usize) -> bool {
        let changed = self.width != width || self.height != height;
        if changed {
            self.width = width;
            self.height = height;
            self.ensure_visible(total);
        }
        changed
    }

    /// Range of school indices drawn on screen.
    pub fn visible_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.top.min(total);
        let end = (self.top + self.lines_per_page()).min(total);
        start..end
    }

    fn ensure_visible(&mut self, total: usize) {
        let rows = self.lines_per_page().max(1);
        if self.cursor < self.top {
            self.top = self.cursor;
        } else if self.cursor >= self.top + rows {
            self.top = self.cursor + 1 - rows;
        }
        // Don't leave blank rows at the bottom when the list could fill them.
        let max_top = total.saturating_sub(rows);
        if self.top > max_top {
            self.top = max_top;
        }
    }
}
