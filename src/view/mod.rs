//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
pub mod pagination_bar;
mod search_input;
pub mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::{render_layout, split_screen, ScreenAreas};
pub use pagination_bar::{page_label, status_text, PaginationBar};
pub use search_input::{SearchInput, SEARCH_PLACEHOLDER};
pub use styles::{ColorConfig, TableStyles};
pub use table::RecordTable;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::source::{spawn_load, LoadHandle};
use crate::state::{AppState, Focus, Pagination};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// How long the loop waits for input before checking the background load.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Background fetch, until its result has been applied.
    load: Option<LoadHandle>,
    styles: TableStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        load: Option<LoadHandle>,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            load,
            KeyBindings::default(),
            colors,
        ))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        load: Option<LoadHandle>,
        key_bindings: KeyBindings,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            load,
            styles: TableStyles::with_color_config(colors),
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input, resize, and
    /// when the background load delivers.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_load() {
                self.draw()?;
            }
        }
    }

    /// Apply the background load result if it has arrived.
    ///
    /// Returns true when state changed.
    fn poll_load(&mut self) -> bool {
        let Some(handle) = self.load.as_mut() else {
            return false;
        };
        let Some(result) = handle.try_take() else {
            return false;
        };

        self.load = None;
        self.app_state.apply_load(result);
        true
    }

    /// Stop waiting for the background load.
    fn cancel_load(&mut self) {
        if let Some(handle) = self.load.take() {
            debug!("Cancelling pending load");
            handle.cancel();
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even mid-edit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => {
                    self.app_state.help_visible = false;
                    false
                }
                KeyCode::Char('q') => true,
                _ => false,
            };
        }

        if self.app_state.edit_session().is_some() {
            return match edit_key_action(key) {
                Some(action) => self.dispatch(action),
                None => {
                    self.handle_edit_text(key);
                    false
                }
            };
        }

        if self.app_state.focus == Focus::Search {
            return match search_key_action(key) {
                Some(action) => self.dispatch(action),
                None => {
                    self.handle_search_text(key);
                    false
                }
            };
        }

        match self.key_bindings.get(key) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Apply `action` to the state. Returns true if the app should quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        let state = &mut self.app_state;
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => state.help_visible = !state.help_visible,

            KeyAction::CursorUp => state.cursor_up(),
            KeyAction::CursorDown => state.cursor_down(),

            KeyAction::FirstPage => state.first_page(),
            KeyAction::PrevPage => state.prev_page(),
            KeyAction::NextPage => state.next_page(),
            KeyAction::LastPage => state.last_page(),

            KeyAction::ToggleSelect => {
                if let Some(id) = state.cursor_record().map(|r| r.id.clone()) {
                    state.toggle_select(&id);
                }
            }
            KeyAction::DeleteRow => state.delete_at_cursor(),
            KeyAction::DeleteSelected => state.delete_selected(),

            KeyAction::BeginEdit => state.begin_edit_at_cursor(),
            KeyAction::NextField => {
                if let Some(session) = state.edit_session_mut() {
                    session.next_field();
                }
            }
            KeyAction::PrevField => {
                if let Some(session) = state.edit_session_mut() {
                    session.prev_field();
                }
            }
            KeyAction::CommitEdit => state.commit_edit(),
            KeyAction::CancelEdit => state.cancel_edit(),

            KeyAction::FocusSearch => state.focus = Focus::Search,
            KeyAction::SubmitSearch => {
                state.submit_search();
                state.focus = Focus::Table;
            }
            KeyAction::LeaveSearch => state.focus = Focus::Table,
        }
        false
    }

    fn handle_edit_text(&mut self, key: KeyEvent) {
        let Some(session) = self.app_state.edit_session_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                session.edit_active(|input| input.insert_char(ch));
            }
            KeyCode::Backspace => session.edit_active(|input| input.backspace()),
            KeyCode::Delete => session.edit_active(|input| input.delete()),
            KeyCode::Left => session.edit_active(|input| input.cursor_left()),
            KeyCode::Right => session.edit_active(|input| input.cursor_right()),
            KeyCode::Home => session.edit_active(|input| input.cursor_home()),
            KeyCode::End => session.edit_active(|input| input.cursor_end()),
            _ => {}
        }
    }

    fn handle_search_text(&mut self, key: KeyEvent) {
        let input = &mut self.app_state.search_input;
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.insert_char(ch);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.cursor_left(),
            KeyCode::Right => input.cursor_right(),
            KeyCode::Home => input.cursor_home(),
            KeyCode::End => input.cursor_end(),
            _ => {}
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

/// Keys with a fixed meaning while an edit is in progress.
fn edit_key_action(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Enter => Some(KeyAction::CommitEdit),
        KeyCode::Esc => Some(KeyAction::CancelEdit),
        KeyCode::Tab => Some(KeyAction::NextField),
        KeyCode::BackTab => Some(KeyAction::PrevField),
        _ => None,
    }
}

/// Keys with a fixed meaning while the search box has focus.
fn search_key_action(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Enter => Some(KeyAction::SubmitSearch),
        KeyCode::Esc => Some(KeyAction::LeaveSearch),
        _ => None,
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn poll_load_test(&mut self) -> bool {
        self.poll_load()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application for a resolved configuration.
///
/// Starts the background load, runs the event loop, and restores the
/// terminal on exit. A provider that cannot even be built counts as a
/// failed load, not a fatal error.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app_state = AppState::new(
        Pagination::new(config.items_per_page),
        config.filter_policy,
    );

    let load = match config.source_spec().into_provider() {
        Ok(provider) => {
            info!(source = %provider.describe(), "Loading records");
            Some(spawn_load(provider, config.retry_policy()))
        }
        Err(err) => {
            app_state.apply_load(Err(err));
            None
        }
    };

    let mut app = TuiApp::new(app_state, load, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    app.cancel_load();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
