//! Terminal rendering components.
//!
//! This module hosts the concrete terminal UI implementation along with the supporting view
//! state, frame composition and styling utilities.

pub mod frame;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use frame::{draw, status_text};
pub use renderer::UIRenderer;
pub use state::ViewState;
pub use terminal::TerminalUI;
pub use theme::{ColorTheme, ThemeName};

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
