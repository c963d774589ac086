//! # nycschools - NYC High School Browser
//!
//! A terminal application listing New York City public high schools from the city's
//! open-data portal, with a detail overlay showing each school's SAT averages.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Endpoints, theme and mouse settings
//! - [`data`] - Record types, decoding, the HTTP source and startup loaders
//! - [`input`] - Terminal input collection and key bindings
//! - [`render`] - Layout, overlay content and the ratatui terminal UI
//! - [`app`] - Application state and the event loop that owns it

// Core modules
pub mod config;
pub mod error;

// Subsystems
pub mod data;
pub mod input;
pub mod render;

// Application core
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, SchoolsError};

pub use app::state::{AppState, CloseReason, DetailView, Overlay};
pub use app::Application;
pub use config::Config;
pub use data::{Collection, DataSource, HttpSource, LoadState, SatScore, School};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
