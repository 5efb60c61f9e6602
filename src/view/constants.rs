//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for counts and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the checkbox column (`[x]`).
pub const CHECKBOX_COLUMN_WIDTH: u16 = 3;

/// Width of the id column.
pub const ID_COLUMN_WIDTH: u16 = 8;

/// Minimum width of the name column; name and email share the remainder.
pub const NAME_COLUMN_MIN_WIDTH: u16 = 12;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
