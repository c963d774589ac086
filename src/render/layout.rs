//! Screen geometry shared by drawing and mouse hit testing.
//!
//! Everything here is a pure function of the terminal area (and, for the overlay,
//! of its content), so a click can be resolved against exactly what was drawn.

use crate::app::state::DetailView;
use crate::render::detail::detail_lines;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;

pub const VIEW_BUTTON: &str = "[ VIEW ]";
pub const CLOSE_BUTTON: &str = "[ CLOSE ]";
pub const OK_BUTTON: &str = "[ OK ]";

/// Overlay width as a percentage of the screen, and its offset from the top.
const OVERLAY_WIDTH_PERCENT: u16 = 90;
const OVERLAY_TOP_PERCENT: u16 = 10;

const ALERT_MAX_WIDTH: u16 = 50;

/// True when the cell at (`column`, `row`) lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn percent_of(value: u16, percent: u16) -> u16 {
    (u32::from(value) * u32::from(percent) / 100) as u16
}

fn button_width(label: &str) -> u16 {
    label.chars().count() as u16
}

/// A button label centred on one row of `area`.
fn centered_button(area: Rect, row: u16, label: &str) -> Rect {
    let width = button_width(label).min(area.width);
    Rect::new(area.x + (area.width - width) / 2, row, width, 1)
}

/// Header, list, and status regions of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Part of the list a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    /// The row's name area; carries the school index
    Row(usize),
    /// The row's VIEW control; carries the school index
    ViewButton(usize),
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        Self {
            header: chunks[0],
            list: chunks[1],
            status: chunks[2],
        }
    }

    /// Rows of the list visible at once.
    pub fn list_rows(&self) -> usize {
        self.list.height as usize
    }

    /// Width left for a school name once the VIEW control is placed.
    pub fn name_width(&self) -> u16 {
        self.list
            .width
            .saturating_sub(button_width(VIEW_BUTTON) + 1)
    }

    /// VIEW control for the row drawn `offset` lines below the top of the list.
    pub fn view_button(&self, offset: u16) -> Rect {
        let width = button_width(VIEW_BUTTON).min(self.list.width);
        Rect::new(
            self.list.x + self.list.width - width,
            self.list.y + offset,
            width,
            1,
        )
    }

    /// Resolve a click on the list, given the index of the first visible row and the
    /// number of schools.
    pub fn hit_list(&self, column: u16, row: u16, top: usize, total: usize) -> Option<ListHit> {
        if !contains(self.list, column, row) {
            return None;
        }
        let offset = row - self.list.y;
        let index = top + offset as usize;
        if index >= total {
            return None;
        }
        if contains(self.view_button(offset), column, row) {
            Some(ListHit::ViewButton(index))
        } else {
            Some(ListHit::Row(index))
        }
    }
}

/// Part of the screen a click landed on while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    CloseButton,
    Body,
    Backdrop,
}

/// Geometry of the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Bordered box
    pub outer: Rect,
    /// Text area for the detail lines
    pub body: Rect,
    pub close_button: Rect,
}

impl OverlayLayout {
    /// Size the overlay for `body_lines` lines of content plus a spacer and the
    /// close control, clipped to the screen.
    pub fn compute(area: Rect, body_lines: u16) -> Self {
        let width = percent_of(area.width, OVERLAY_WIDTH_PERCENT).max(area.width.min(20));
        let x = area.x + (area.width - width) / 2;
        let y = area.y + percent_of(area.height, OVERLAY_TOP_PERCENT);
        let available = area.height - (y - area.y);
        let height = body_lines.saturating_add(4).min(available);

        let outer = Rect::new(x, y, width, height);
        let inner = Rect::new(
            outer.x + 1,
            outer.y + 1,
            outer.width.saturating_sub(2),
            outer.height.saturating_sub(2),
        );
        let body = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
        let close_row = inner.y + inner.height.saturating_sub(1);
        let close_button = centered_button(inner, close_row, CLOSE_BUTTON);

        Self {
            outer,
            body,
            close_button,
        }
    }

    /// Overlay geometry for a specific school's detail, fitted to the content
    /// laid out for the tallest body the screen allows.
    pub fn for_detail(area: Rect, detail: &DetailView<'_>) -> Self {
        let tallest = Self::compute(area, u16::MAX);
        let lines = detail_lines(detail, tallest.body.width, tallest.body.height).len();
        Self::compute(area, lines.min(u16::MAX as usize) as u16)
    }

    pub fn hit(&self, column: u16, row: u16) -> OverlayHit {
        if contains(self.close_button, column, row) {
            OverlayHit::CloseButton
        } else if contains(self.outer, column, row) {
            OverlayHit::Body
        } else {
            OverlayHit::Backdrop
        }
    }
}

/// Geometry of the fetch-failure alert box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertLayout {
    pub outer: Rect,
    pub message: Rect,
    pub ok_button: Rect,
}

impl AlertLayout {
    pub fn compute(area: Rect, message_lines: u16) -> Self {
        let width = ALERT_MAX_WIDTH.min(area.width);
        let height = message_lines.saturating_add(4).min(area.height);
        let outer = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        let inner = Rect::new(
            outer.x + 1,
            outer.y + 1,
            outer.width.saturating_sub(2),
            outer.height.saturating_sub(2),
        );
        let message = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
        let ok_row = inner.y + inner.height.saturating_sub(1);
        Self {
            outer,
            message,
            ok_button: centered_button(inner, ok_row, OK_BUTTON),
        }
    }

    /// Inner text width available for the alert message.
    pub fn text_width(area: Rect) -> u16 {
        ALERT_MAX_WIDTH.min(area.width).saturating_sub(2)
    }
}
