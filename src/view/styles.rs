//! Table styling configuration.
//!
//! Provides the colors for cursor, selected, edited and disabled elements.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for the record table and its controls.
///
/// Without colors, emphasis falls back to modifiers (reverse, bold, dim) so
/// the cursor and selection stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy)]
pub struct TableStyles {
    /// Column headers and title.
    pub header: Style,
    /// Row under the cursor.
    pub cursor: Style,
    /// Checked rows.
    pub selected: Style,
    /// Row being edited.
    pub editing: Style,
    /// Field receiving edit keystrokes.
    pub active_field: Style,
    /// Unavailable page controls.
    pub disabled: Style,
    /// Available page controls.
    pub enabled: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Border of the focused search box.
    pub focused_border: Style,
}

impl TableStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default().fg(Color::Black).bg(Color::LightYellow),
                editing: Style::default().fg(Color::Green),
                active_field: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                enabled: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                focused_border: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default().add_modifier(Modifier::BOLD),
                editing: Style::default().add_modifier(Modifier::UNDERLINED),
                active_field: Style::default().add_modifier(Modifier::REVERSED),
                disabled: Style::default().add_modifier(Modifier::DIM),
                enabled: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
