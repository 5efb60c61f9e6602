//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into title, search box, table,
//! page controls and status bar, then renders each widget into its slot.

use super::constants::{
    PAGINATION_BAR_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT,
};
use super::help::render_help_overlay;
use super::pagination_bar::{status_text, PaginationBar};
use super::search_input::SearchInput;
use super::styles::TableStyles;
use super::table::RecordTable;
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// App title.
    pub title: Rect,
    /// Search box.
    pub search: Rect,
    /// Record table.
    pub table: Rect,
    /// Page controls.
    pub pagination: Rect,
    /// Counts and key hints.
    pub status: Rect,
}

/// Split `area` into the fixed-height bars and a flexible table area.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        search: chunks[1],
        table: chunks[2],
        pagination: chunks[3],
        status: chunks[4],
    }
}

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: TableStyles) {
    let areas = split_screen(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" Admin UI", styles.header))),
        areas.title,
    );

    frame.render_widget(
        SearchInput::new(&state.search_input, state.focus == Focus::Search, styles)
            .active_query(state.active_query()),
        areas.search,
    );

    frame.render_widget(RecordTable::new(state, styles), areas.table);
    frame.render_widget(PaginationBar::new(state, styles), areas.pagination);
    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: TableStyles) {
    let hint = if state.edit_session().is_some() {
        "Tab: next field | Enter: save | Esc: cancel"
    } else if state.focus == Focus::Search {
        "Enter: search | Esc: back"
    } else {
        "?: help | q: quit"
    };

    let line = Line::from(vec![
        Span::raw(format!(" {}", status_text(state))),
        Span::raw("  "),
        Span::styled(hint, styles.muted),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_screen_gives_remaining_height_to_table() {
        let areas = split_screen(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.title.height, TITLE_BAR_HEIGHT);
        assert_eq!(areas.search.height, SEARCH_INPUT_HEIGHT);
        assert_eq!(areas.pagination.height, PAGINATION_BAR_HEIGHT);
        assert_eq!(areas.status.height, STATUS_BAR_HEIGHT);
        assert_eq!(
            areas.table.height,
            24 - TITLE_BAR_HEIGHT - SEARCH_INPUT_HEIGHT - PAGINATION_BAR_HEIGHT - STATUS_BAR_HEIGHT
        );
    }

    #[test]
    fn split_screen_stacks_areas_in_order() {
        let areas = split_screen(Rect::new(0, 0, 80, 24));

        assert!(areas.title.y < areas.search.y);
        assert!(areas.search.y < areas.table.y);
        assert!(areas.table.y < areas.pagination.y);
        assert!(areas.pagination.y < areas.status.y);
    }
}
