//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Table-mode bindings only. Keys typed into the search box or an edit
/// field are routed as text before this lookup happens.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }

    fn insert(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bind(KeyEvent::new(code, modifiers), action);
    }
}

/// Drop key state/kind so lookups match on code and modifiers only.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Row cursor
        keys.insert(KeyCode::Char('j'), none, KeyAction::CursorDown);
        keys.insert(KeyCode::Char('k'), none, KeyAction::CursorUp);
        keys.insert(KeyCode::Down, none, KeyAction::CursorDown);
        keys.insert(KeyCode::Up, none, KeyAction::CursorUp);

        // Pagination
        keys.insert(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.insert(KeyCode::Home, none, KeyAction::FirstPage);
        keys.insert(KeyCode::Char('h'), none, KeyAction::PrevPage);
        keys.insert(KeyCode::Left, none, KeyAction::PrevPage);
        keys.insert(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.insert(KeyCode::Char('l'), none, KeyAction::NextPage);
        keys.insert(KeyCode::Right, none, KeyAction::NextPage);
        keys.insert(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.insert(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        keys.insert(KeyCode::End, none, KeyAction::LastPage);

        // Selection and deletion
        keys.insert(KeyCode::Char(' '), none, KeyAction::ToggleSelect);
        keys.insert(KeyCode::Char('d'), none, KeyAction::DeleteRow);
        keys.insert(KeyCode::Delete, none, KeyAction::DeleteRow);
        keys.insert(KeyCode::Char('D'), KeyModifiers::SHIFT, KeyAction::DeleteSelected);

        // Editing
        keys.insert(KeyCode::Char('e'), none, KeyAction::BeginEdit);
        keys.insert(KeyCode::Enter, none, KeyAction::BeginEdit);

        // Search
        keys.insert(KeyCode::Char('/'), none, KeyAction::FocusSearch);
        keys.insert(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::FocusSearch);

        // Application controls
        keys.insert(KeyCode::Char('?'), none, KeyAction::Help);
        keys.insert(KeyCode::Char('q'), none, KeyAction::Quit);

        keys
    }
}
