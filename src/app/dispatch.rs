//! Interpretation of input actions against the current application state.
//!
//! The same key means different things depending on what is on screen: an alert
//! swallows everything but quit, the overlay only knows how to close, and the list
//! navigates and opens rows.

use crate::app::state::{AppState, CloseReason};
use crate::input::{InputAction, ScrollDirection};
use crate::render::layout::{ListHit, OverlayHit, OverlayLayout};
use crate::render::ui::ViewState;

/// Apply one action. Returns false if the application should quit.
pub fn process_action(state: &mut AppState, view: &mut ViewState, action: InputAction) -> bool {
    match action {
        InputAction::Quit => return false,
        InputAction::Resize { width, height } => {
            view.update_terminal_size(width, height, state.schools().len());
            return true;
        }
        InputAction::NoAction => return true,
        _ => {}
    }

    if state.alert().is_some() {
        handle_alert(state, action);
    } else if state.is_overlay_open() {
        handle_overlay(state, view, action);
    } else {
        handle_list(state, view, action);
    }
    true
}

fn handle_alert(state: &mut AppState, action: InputAction) {
    match action {
        InputAction::Activate
        | InputAction::Back
        | InputAction::Close
        | InputAction::Click { .. } => {
            state.dismiss_alert();
        }
        _ => {}
    }
}

fn handle_overlay(state: &mut AppState, view: &ViewState, action: InputAction) {
    let reason = match action {
        InputAction::Activate | InputAction::Close => Some(CloseReason::CloseControl),
        InputAction::Back => Some(CloseReason::Background),
        InputAction::Click { column, row } => {
            let hit = state
                .detail()
                .map(|detail| OverlayLayout::for_detail(view.area(), &detail).hit(column, row));
            match hit {
                Some(OverlayHit::CloseButton) => Some(CloseReason::CloseControl),
                Some(OverlayHit::Backdrop) => Some(CloseReason::Background),
                Some(OverlayHit::Body) | None => None,
            }
        }
        // The list underneath does not move while the overlay is up.
        _ => None,
    };

    if let Some(reason) = reason {
        state.close_detail(reason);
    }
}

fn handle_list(state: &mut AppState, view: &mut ViewState, action: InputAction) {
    let total = state.schools().len();
    match action {
        InputAction::Scroll { direction, lines } => {
            let lines = i64::try_from(lines).unwrap_or(i64::MAX);
            let delta = match direction {
                ScrollDirection::Up => -lines,
                ScrollDirection::Down => lines,
            };
            view.move_by(delta, total);
        }
        InputAction::PageUp => view.page_up(total),
        InputAction::PageDown => view.page_down(total),
        InputAction::GoToStart => view.move_cursor_to(0, total),
        InputAction::GoToEnd => view.move_cursor_to(total.saturating_sub(1), total),
        InputAction::Activate => {
            if total > 0 {
                state.open_detail(view.cursor);
            }
        }
        InputAction::Click { column, row } => {
            match view.layout().hit_list(column, row, view.top, total) {
                Some(ListHit::ViewButton(index)) => {
                    view.move_cursor_to(index, total);
                    state.open_detail(index);
                }
                Some(ListHit::Row(index)) => view.move_cursor_to(index, total),
                None => {}
            }
        }
        _ => {}
    }
}
