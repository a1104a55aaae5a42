//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha palette and the styles built from it
//!
//! Colors are from the official Catppuccin palette:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};
use tracing::{debug, instrument};

/// Logs the palette once at start-up.
#[instrument(level = "debug")]
pub fn init_theme() {
    debug!("Initializing Catppuccin Mocha theme");
    debug!("Background: {:?}", BACKGROUND);
    debug!("Foreground: {:?}", FOREGROUND);
    debug!("Current line: {:?}", CURRENT_LINE);
}

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn base_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn border_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn focused_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn table_header_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn directory_row_style() -> Style {
    Style::default().fg(CYAN)
}

pub fn file_row_style() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn location_style() -> Style {
    Style::default().fg(COMMENT).add_modifier(Modifier::ITALIC)
}

pub fn highlight_style() -> Style {
    Style::default()
        .bg(CURRENT_LINE)
        .add_modifier(Modifier::BOLD)
}

pub fn crumb_style() -> Style {
    Style::default().fg(CYAN)
}

pub fn crumb_cursor_style() -> Style {
    Style::default()
        .fg(BACKGROUND)
        .bg(CYAN)
        .add_modifier(Modifier::BOLD)
}

pub fn crumb_separator_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn query_label_style() -> Style {
    Style::default().fg(ORANGE).add_modifier(Modifier::BOLD)
}

pub fn clear_search_style() -> Style {
    Style::default().fg(BACKGROUND).bg(ORANGE)
}

pub fn loading_style() -> Style {
    Style::default().fg(YELLOW)
}

pub fn hint_style() -> Style {
    Style::default().fg(GREEN)
}
