//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Text entry (search box, edit fields) is handled before binding lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up one row. Default: k/↑
    CursorUp,
    /// Move the row cursor down one row. Default: j/↓
    CursorDown,

    // Pagination
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Go to the previous page. Default: h/←/Page Up
    PrevPage,
    /// Go to the next page. Default: l/→/Page Down
    NextPage,
    /// Jump to the last page. Default: G/End
    LastPage,

    // Selection and deletion
    /// Toggle the checkbox of the row under the cursor. Default: Space
    ToggleSelect,
    /// Delete the row under the cursor. Default: d/Delete
    DeleteRow,
    /// Delete every selected row. Default: D
    DeleteSelected,

    // Editing
    /// Begin editing the row under the cursor. Default: e/Enter
    BeginEdit,
    /// Move to the next field while editing. Default: Tab
    NextField,
    /// Move to the previous field while editing. Default: Shift+Tab
    PrevField,
    /// Save the edit in progress. Default: Enter (while editing)
    CommitEdit,
    /// Discard the edit in progress. Default: Esc (while editing)
    CancelEdit,

    // Search
    /// Focus the search box. Default: / or Ctrl+f
    FocusSearch,
    /// Run the search with the current box contents. Default: Enter (in box)
    SubmitSearch,
    /// Leave the search box without searching. Default: Esc (in box)
    LeaveSearch,

    // Application
    /// Show or hide the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let set: HashSet<KeyAction> = [
            KeyAction::NextPage,
            KeyAction::PrevPage,
            KeyAction::NextPage,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }
}
