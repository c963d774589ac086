//! Input subsystem: raw crossterm collection and the key/mouse to action mapping.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than
// reaching into submodules.
pub use raw::{RawInputCollector, RawInputEvent, ScrollDirection};
pub use service::{InputAction, InputService, KeyBindings};
