//! Color theme and styling definitions using ratatui colors
//!
//! The default theme follows the dark greys of the school browser's original
//! design; monochrome and high-contrast variants cover limited terminals.

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Theme selectable from the command line or the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Dark,
    Monochrome,
    HighContrast,
}

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Screen background and normal text
    pub base: Style,

    /// Title bar at the top of the screen
    pub header: Style,

    /// School row
    pub row: Style,

    /// Row under the cursor
    pub selection: Style,

    /// VIEW / CLOSE / OK controls
    pub button: Style,

    /// Detail overlay box
    pub overlay: Style,

    /// School name inside the overlay
    pub overlay_title: Style,

    /// Labels and headings inside the overlay
    pub overlay_heading: Style,

    /// Alert box
    pub alert: Style,

    /// Status line
    pub status: Style,
}

impl Default for ColorTheme {
    fn default() -> Self {
        let background = Color::Rgb(0x12, 0x12, 0x12);
        let text = Color::Rgb(0xEA, 0xEA, 0xEA);
        Self {
            base: Style::default().fg(text).bg(background),
            header: Style::default()
                .fg(Color::Rgb(0xFD, 0xFD, 0xFD))
                .bg(Color::Rgb(0x24, 0x24, 0x24)),
            row: Style::default().fg(text).bg(Color::Rgb(0x42, 0x42, 0x42)),
            selection: Style::default()
                .fg(Color::Rgb(0x12, 0x12, 0x12))
                .bg(Color::Rgb(0xDE, 0xDE, 0xDE)),
            button: Style::default()
                .fg(Color::Rgb(0xDE, 0xDE, 0xDE))
                .bg(background)
                .add_modifier(Modifier::BOLD),
            overlay: Style::default()
                .fg(Color::Rgb(0xEE, 0xEE, 0xEE))
                .bg(Color::Rgb(0x95, 0x95, 0x95)),
            overlay_title: Style::default()
                .fg(Color::Rgb(0xFD, 0xFD, 0xFD))
                .bg(background),
            overlay_heading: Style::default().add_modifier(Modifier::BOLD),
            alert: Style::default().fg(Color::White).bg(Color::Red),
            status: Style::default()
                .fg(Color::Rgb(0xFD, 0xFD, 0xFD))
                .bg(Color::Rgb(0x24, 0x24, 0x24)),
        }
    }
}

impl ColorTheme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        let reversed = Style::default().add_modifier(Modifier::REVERSED);
        Self {
            base: Style::default(),
            header: reversed,
            row: Style::default(),
            selection: reversed,
            button: Style::default().add_modifier(Modifier::BOLD),
            overlay: Style::default(),
            overlay_title: reversed,
            overlay_heading: Style::default().add_modifier(Modifier::BOLD),
            alert: reversed,
            status: reversed,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            base: Style::default().fg(Color::White).bg(Color::Black),
            header: Style::default().fg(Color::Black).bg(Color::White),
            row: Style::default().fg(Color::White).bg(Color::Black),
            selection: Style::default().fg(Color::Black).bg(Color::LightYellow),
            button: Style::default()
                .fg(Color::LightYellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            overlay: Style::default().fg(Color::White).bg(Color::Blue),
            overlay_title: Style::default().fg(Color::Black).bg(Color::White),
            overlay_heading: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            alert: Style::default().fg(Color::White).bg(Color::LightRed),
            status: Style::default().fg(Color::Black).bg(Color::White),
        }
    }
}
