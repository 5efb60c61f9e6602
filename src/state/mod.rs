//! Table state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod edit;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod text_input;

// Re-export for convenience
pub use app_state::{AppState, Focus, LoadStatus};
pub use edit::EditSession;
pub use pagination::{Pagination, DEFAULT_ITEMS_PER_PAGE};
pub use search::{filter_records, record_matches, FilterPolicy};
pub use selection::SelectionSet;
pub use text_input::TextInput;
