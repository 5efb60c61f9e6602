//! Application state and transitions.
//!
//! AppState is the root state type containing all table state.
//! Every user-visible operation is one method here; none of them touch the
//! terminal, so the whole controller is testable without a TUI.

use crate::model::{sort_by_id, LoadError, Record, RecordField, RecordId};
use crate::state::search::{filter_records, FilterPolicy};
use crate::state::{EditSession, Pagination, SelectionSet, TextInput};
use tracing::{debug, info, warn};

// ===== LoadStatus =====

/// Progress of the one-time record load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch in flight.
    Pending,
    /// Records applied.
    Loaded {
        /// Number of records received.
        count: usize,
    },
    /// Fetch failed; the table stays empty.
    Failed {
        /// Error text, as logged.
        reason: String,
    },
}

// ===== Focus =====

/// Which control receives keystrokes when no edit is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Table navigation and row commands.
    #[default]
    Table,
    /// Typing into the search box.
    Search,
}

// ===== AppState =====

/// Table state. Pure data, no side effects.
///
/// # State
///
/// - **store**: authoritative record list, sorted by id after load and commit
/// - **filtered**: result of the last search, or the store after a mutation
/// - **selection**: ids checked for bulk delete
/// - **edit**: at most one in-progress edit
/// - **pagination**: clamped 1-based page over `filtered`
///
/// # Mutations
///
/// Commit, delete and delete-selected publish the store to the filtered
/// view according to [`FilterPolicy`]. With the default `Stale` policy the
/// previous search is dropped and the whole store becomes visible.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Vec<Record>,
    filtered: Vec<Record>,
    selection: SelectionSet,
    edit: Option<EditSession>,
    pagination: Pagination,
    policy: FilterPolicy,
    /// Query behind `filtered`, if the view is currently a search result.
    active_query: Option<String>,
    load_status: LoadStatus,

    /// Search box contents. Only applied on submit.
    pub search_input: TextInput,
    /// Row cursor within the visible page (clamped on read).
    cursor_row: usize,
    /// Control receiving keystrokes.
    pub focus: Focus,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Pagination::default(), FilterPolicy::default())
    }
}

impl AppState {
    /// Create empty state awaiting the initial load.
    pub fn new(pagination: Pagination, policy: FilterPolicy) -> Self {
        Self {
            store: Vec::new(),
            filtered: Vec::new(),
            selection: SelectionSet::new(),
            edit: None,
            pagination,
            policy,
            active_query: None,
            load_status: LoadStatus::Pending,
            search_input: TextInput::default(),
            cursor_row: 0,
            focus: Focus::Table,
            help_visible: false,
        }
    }

    /// Create state already loaded with `records` (sorted on the way in).
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut state = Self::default();
        state.apply_load(Ok(records));
        state
    }

    // ===== Load =====

    /// Apply the outcome of the record fetch.
    ///
    /// Success sorts by id and publishes to both store and filtered view.
    /// Failure leaves both empty and is only logged.
    pub fn apply_load(&mut self, result: Result<Vec<Record>, LoadError>) {
        match result {
            Ok(mut records) => {
                sort_by_id(&mut records);
                info!(count = records.len(), "Records loaded");
                self.load_status = LoadStatus::Loaded {
                    count: records.len(),
                };
                self.filtered = records.clone();
                self.store = records;
                self.active_query = None;
            }
            Err(err) => {
                warn!(error = %err, "Record load failed; table stays empty");
                self.load_status = LoadStatus::Failed {
                    reason: err.to_string(),
                };
            }
        }
    }

    /// Progress of the record load.
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    // ===== Search =====

    /// Filter the store by `query` and go back to page 1.
    ///
    /// Always filters the full store, never the current view. An empty
    /// query shows everything.
    pub fn search(&mut self, query: &str) {
        self.filtered = filter_records(&self.store, query);
        self.active_query = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        self.pagination.reset();
        self.cursor_row = 0;
        debug!(query, matches = self.filtered.len(), "Search applied");
    }

    /// Run the search with the current search box contents.
    pub fn submit_search(&mut self) {
        let query = self.search_input.text().to_string();
        self.search(&query);
    }

    /// Query behind the current view, if it is a search result.
    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    // ===== Selection =====

    /// Flip the checkbox for `id`.
    pub fn toggle_select(&mut self, id: &RecordId) {
        let selected = self.selection.toggle(id);
        debug!(id = %id, selected, "Selection toggled");
    }

    /// Whether `id` is checked and still names a record.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id) && self.store.iter().any(|r| &r.id == id)
    }

    /// Checked ids that still exist, in store order.
    pub fn selected_ids(&self) -> Vec<&RecordId> {
        self.selection.live_ids(&self.store)
    }

    /// Raw selection, possibly holding ids that were deleted since.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Remove every checked record and clear the selection.
    ///
    /// Survivors keep their relative order. The page is not reset; it is
    /// clamped on the next read.
    pub fn delete_selected(&mut self) {
        let before = self.store.len();
        let selection = &self.selection;
        self.store.retain(|record| !selection.contains(&record.id));
        debug!(removed = before - self.store.len(), "Deleted selected rows");
        self.selection.clear();
        self.publish();
    }

    // ===== Pagination =====

    /// Go to page `page`, clamped to the available pages.
    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page, self.filtered.len());
        self.cursor_row = 0;
    }

    /// Go to page 1. No-op when already there.
    pub fn first_page(&mut self) {
        if !self.is_first_page() {
            self.go_to_page(1);
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn prev_page(&mut self) {
        if !self.is_first_page() {
            self.go_to_page(self.current_page() - 1);
        }
    }

    /// Go forward one page. No-op on the last page.
    pub fn next_page(&mut self) {
        if !self.is_last_page() {
            self.go_to_page(self.current_page() + 1);
        }
    }

    /// Jump to page `ceil(len / items_per_page)`.
    pub fn last_page(&mut self) {
        if !self.is_last_page() {
            self.go_to_page(self.page_count());
        }
    }

    /// Current page, 1-based and clamped.
    pub fn current_page(&self) -> usize {
        self.pagination.current(self.filtered.len())
    }

    /// Number of pages in the filtered view. Zero when it is empty.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered.len())
    }

    /// Rows per page.
    pub fn items_per_page(&self) -> usize {
        self.pagination.items_per_page()
    }

    /// Whether First and Prev are unavailable.
    pub fn is_first_page(&self) -> bool {
        self.pagination.is_first_page(self.filtered.len())
    }

    /// Whether Next and Last are unavailable.
    pub fn is_last_page(&self) -> bool {
        self.pagination.is_last_page(self.filtered.len())
    }

    /// Records on the current page.
    pub fn visible(&self) -> &[Record] {
        self.pagination.visible(&self.filtered)
    }

    // ===== Row cursor =====

    /// Cursor row within the visible page, or `None` when the page is empty.
    pub fn cursor_row(&self) -> Option<usize> {
        let len = self.visible().len();
        (len > 0).then(|| self.cursor_row.min(len - 1))
    }

    /// Record under the cursor.
    pub fn cursor_record(&self) -> Option<&Record> {
        self.cursor_row().map(|row| &self.visible()[row])
    }

    /// Move the row cursor up, stopping at the top row.
    pub fn cursor_up(&mut self) {
        if let Some(row) = self.cursor_row() {
            self.cursor_row = row.saturating_sub(1);
        }
    }

    /// Move the row cursor down, stopping at the last visible row.
    pub fn cursor_down(&mut self) {
        if let Some(row) = self.cursor_row() {
            let last = self.visible().len() - 1;
            self.cursor_row = (row + 1).min(last);
        }
    }

    // ===== Edit =====

    /// Start editing `record`, discarding any edit already in progress.
    pub fn begin_edit(&mut self, record: Record) {
        if let Some(previous) = &self.edit {
            debug!(id = %previous.target(), "Discarding uncommitted edit");
        }
        debug!(id = %record.id, "Edit started");
        self.edit = Some(EditSession::begin(record));
    }

    /// Start editing the record under the cursor, if any.
    pub fn begin_edit_at_cursor(&mut self) {
        if let Some(record) = self.cursor_record().cloned() {
            self.begin_edit(record);
        }
    }

    /// Overwrite one field of the draft. No-op without an edit in progress.
    pub fn update_field(&mut self, field: RecordField, value: impl Into<String>) {
        if let Some(session) = self.edit.as_mut() {
            session.update_field(field, value);
        }
    }

    /// Live edit session, if its target still exists in the store.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit
            .as_ref()
            .filter(|session| self.store.iter().any(|r| &r.id == session.target()))
    }

    /// Mutable access to the live edit session.
    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        let store = &self.store;
        self.edit
            .as_mut()
            .filter(|session| store.iter().any(|r| &r.id == session.target()))
    }

    /// Whether `id` is the row currently being edited.
    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.edit_session()
            .is_some_and(|session| session.target() == id)
    }

    /// Replace the edited record with the draft, re-sort, and clear the session.
    ///
    /// Every record whose id equals the session's original id is replaced.
    /// When none remains the commit is a no-op.
    pub fn commit_edit(&mut self) {
        let Some(session) = self.edit.take() else {
            return;
        };
        let (target, draft) = session.finish();

        if !self.store.iter().any(|r| r.id == target) {
            warn!(id = %target, "Edited record no longer exists; edit dropped");
            return;
        }

        for record in self.store.iter_mut().filter(|r| r.id == target) {
            *record = draft.clone();
        }
        sort_by_id(&mut self.store);
        debug!(from = %target, to = %draft.id, "Edit committed");
        self.publish();
    }

    /// Drop the edit in progress without touching the store.
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            debug!(id = %session.target(), "Edit cancelled");
        }
    }

    // ===== Delete =====

    /// Remove the record(s) with `id`.
    ///
    /// Selection and edit session are left alone; lingering references are
    /// ignored on read.
    pub fn delete_one(&mut self, id: &RecordId) {
        let before = self.store.len();
        self.store.retain(|record| &record.id != id);
        if self.store.len() == before {
            debug!(id = %id, "Delete of unknown id ignored");
        } else {
            debug!(id = %id, "Row deleted");
        }
        self.publish();
    }

    /// Delete the record under the cursor, if any.
    pub fn delete_at_cursor(&mut self) {
        if let Some(id) = self.cursor_record().map(|record| record.id.clone()) {
            self.delete_one(&id);
        }
    }

    // ===== Read access =====

    /// Authoritative record list.
    pub fn store(&self) -> &[Record] {
        &self.store
    }

    /// Records the pages are cut from.
    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// What mutations do to an active search.
    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    /// Write the store to the filtered view after a mutation.
    fn publish(&mut self) {
        match (self.policy, self.active_query.as_deref()) {
            (FilterPolicy::Reapply, Some(query)) => {
                self.filtered = filter_records(&self.store, query);
            }
            (FilterPolicy::Reapply, None) => {
                self.filtered = self.store.clone();
            }
            (FilterPolicy::Stale, _) => {
                self.filtered = self.store.clone();
                self.active_query = None;
            }
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
