//! High-level input service.
//!
//! Consumes coalesced raw events, maps keys through the key bindings, and yields
//! domain-level `InputAction`s. What an action means (move the list cursor, close the
//! overlay, dismiss an alert) is decided by the application from its current state.

use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent, ScrollDirection};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// High-level input actions emitted by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Scroll {
        direction: ScrollDirection,
        lines: u64,
    },
    PageUp,
    PageDown,
    GoToStart,
    GoToEnd,
    /// Enter: activate the focused control (VIEW on a row, CLOSE in the overlay)
    Activate,
    /// Esc: the keyboard stand-in for tapping the overlay background
    Back,
    /// Explicit close key
    Close,
    Click {
        column: u16,
        row: u16,
    },
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
}

/// Fixed key bindings, vi/less flavoured.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyBindings;

impl KeyBindings {
    pub fn new() -> Self {
        Self
    }

    pub fn action_for(&self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => InputAction::Quit,
            (KeyCode::Char('q'), _) if plain => InputAction::Quit,
            (KeyCode::Char('j'), _) if plain => step(ScrollDirection::Down),
            (KeyCode::Down, _) => step(ScrollDirection::Down),
            (KeyCode::Char('k'), _) if plain => step(ScrollDirection::Up),
            (KeyCode::Up, _) => step(ScrollDirection::Up),
            (KeyCode::Char(' ') | KeyCode::Char('f'), _) if plain => InputAction::PageDown,
            (KeyCode::PageDown, _) => InputAction::PageDown,
            (KeyCode::Char('b'), _) if plain => InputAction::PageUp,
            (KeyCode::PageUp, _) => InputAction::PageUp,
            (KeyCode::Char('g'), _) if plain => InputAction::GoToStart,
            (KeyCode::Home, _) => InputAction::GoToStart,
            (KeyCode::Char('G'), _) if plain => InputAction::GoToEnd,
            (KeyCode::End, _) => InputAction::GoToEnd,
            (KeyCode::Enter, _) => InputAction::Activate,
            (KeyCode::Char('v'), _) if plain => InputAction::Activate,
            (KeyCode::Esc, _) => InputAction::Back,
            (KeyCode::Char('c'), _) if plain => InputAction::Close,
            _ => InputAction::NoAction,
        }
    }
}

fn step(direction: ScrollDirection) -> InputAction {
    InputAction::Scroll {
        direction,
        lines: 1,
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    bindings: KeyBindings,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    /// Wait up to `timeout` for terminal input and return every action it produced.
    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.try_flush() {
                if let Some(action) = self.process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    /// Feed a synthetic terminal event through the pipeline.
    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.try_flush() {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.bindings.action_for(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Scroll { direction, lines } => InputAction::Scroll { direction, lines },
            RawInputEvent::Click { column, row } => InputAction::Click { column, row },
        };

        match action {
            InputAction::NoAction => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}
