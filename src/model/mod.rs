//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, LoadError};
pub use key_action::KeyAction;
pub use record::{sort_by_id, Record, RecordField, RecordId};
