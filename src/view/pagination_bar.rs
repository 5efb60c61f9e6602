//! Footer: page controls and record counts.

use super::styles::TableStyles;
use crate::state::{AppState, LoadStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// `Page X of Y`. An empty view still reads as page 1 of 1.
pub fn page_label(state: &AppState) -> String {
    format!(
        "Page {} of {}",
        state.current_page(),
        state.page_count().max(1)
    )
}

/// Counts line: visible of total, selected rows, and load progress.
pub fn status_text(state: &AppState) -> String {
    let mut parts = vec![format!(
        "{} of {} records",
        state.filtered().len(),
        state.store().len()
    )];

    let selected = state.selected_ids().len();
    if selected > 0 {
        parts.push(format!("{} selected", selected));
    }

    match state.load_status() {
        LoadStatus::Pending => parts.push("loading...".to_string()),
        LoadStatus::Failed { .. } => parts.push("load failed".to_string()),
        LoadStatus::Loaded { .. } => {}
    }

    if let Some(query) = state.active_query() {
        parts.push(format!("search: {}", query));
    }

    parts.join(" | ")
}

/// Page navigation controls. Unavailable controls render dimmed.
pub struct PaginationBar<'a> {
    state: &'a AppState,
    styles: TableStyles,
}

impl<'a> PaginationBar<'a> {
    /// Controls for the current page of `state`.
    pub fn new(state: &'a AppState, styles: TableStyles) -> Self {
        Self { state, styles }
    }

    fn control(&self, label: &'static str, available: bool) -> Span<'static> {
        let style = if available {
            self.styles.enabled
        } else {
            self.styles.disabled
        };
        Span::styled(label, style)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let back = !self.state.is_first_page();
        let forward = !self.state.is_last_page();

        let line = Line::from(vec![
            self.control("« First", back),
            Span::raw("  "),
            self.control("‹ Prev", back),
            Span::raw("  "),
            Span::raw(page_label(self.state)),
            Span::raw("  "),
            self.control("Next ›", forward),
            Span::raw("  "),
            self.control("Last »", forward),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
