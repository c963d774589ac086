//! Rendering subsystem: screen geometry, overlay content, text fitting, and the
//! terminal UI itself.

pub mod detail;
pub mod layout;
pub mod text;
pub mod ui;
