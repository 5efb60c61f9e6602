//! Record table widget.
//!
//! Renders the current page of the filtered view. The row being edited shows
//! its draft values with the active field highlighted and a cursor.

use super::constants::{CHECKBOX_COLUMN_WIDTH, ID_COLUMN_WIDTH, NAME_COLUMN_MIN_WIDTH};
use super::styles::TableStyles;
use crate::model::{Record, RecordField};
use crate::state::edit::field_value;
use crate::state::{AppState, EditSession, LoadStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Table of the visible page.
pub struct RecordTable<'a> {
    state: &'a AppState,
    styles: TableStyles,
}

impl<'a> RecordTable<'a> {
    /// Table for the visible page of `state`.
    pub fn new(state: &'a AppState, styles: TableStyles) -> Self {
        Self { state, styles }
    }

    fn header(&self) -> Row<'static> {
        Row::new(vec![
            Cell::from("[ ]"),
            Cell::from(RecordField::Id.label()),
            Cell::from(RecordField::Name.label()),
            Cell::from(RecordField::Email.label()),
        ])
        .style(self.styles.header)
    }

    fn row(&self, index: usize, record: &'a Record) -> Row<'a> {
        let selected = self.state.is_selected(&record.id);
        let checkbox = if selected { "[x]" } else { "[ ]" };

        let cells = match self.state.edit_session() {
            Some(session) if session.target() == &record.id => {
                let mut cells = vec![Cell::from(checkbox)];
                cells.extend(
                    RecordField::ALL
                        .iter()
                        .map(|&field| Cell::from(self.edit_cell(session, field))),
                );
                cells
            }
            _ => vec![
                Cell::from(checkbox),
                Cell::from(record.id.as_str()),
                Cell::from(record.name.as_str()),
                Cell::from(record.email.as_str()),
            ],
        };

        let mut style = Style::default();
        if selected {
            style = style.patch(self.styles.selected);
        }
        if self.state.is_editing(&record.id) {
            style = style.patch(self.styles.editing);
        }
        if self.state.cursor_row() == Some(index) {
            style = style.patch(self.styles.cursor);
        }

        Row::new(cells).style(style)
    }

    fn edit_cell(&self, session: &'a EditSession, field: RecordField) -> Line<'a> {
        if field != session.active_field() {
            return Line::from(field_value(session.draft(), field));
        }

        let (before, after) = session.input().split_at_cursor();
        let mut rest = after.chars();
        let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".into());

        Line::from(vec![
            Span::styled(before, self.styles.active_field),
            Span::styled(
                cursor_char,
                self.styles.active_field.add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(rest.as_str(), self.styles.active_field),
        ])
    }

    /// Text shown in place of rows when the page is empty.
    fn empty_message(&self) -> &'static str {
        match self.state.load_status() {
            LoadStatus::Pending => "Loading records...",
            LoadStatus::Failed { .. } => "Could not load records (see log)",
            LoadStatus::Loaded { .. } if self.state.active_query().is_some() => {
                "No records match the search"
            }
            LoadStatus::Loaded { .. } => "No records",
        }
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Users ");
        let visible = self.state.visible();

        if visible.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.empty_message(),
                self.styles.muted,
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        let rows: Vec<Row<'_>> = visible
            .iter()
            .enumerate()
            .map(|(index, record)| self.row(index, record))
            .collect();

        let widths = [
            Constraint::Length(CHECKBOX_COLUMN_WIDTH),
            Constraint::Length(ID_COLUMN_WIDTH),
            Constraint::Min(NAME_COLUMN_MIN_WIDTH),
            Constraint::Percentage(50),
        ];

        Table::new(rows, widths)
            .header(self.header())
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal
            .draw(|frame| {
                let styles = TableStyles::with_color_config(ColorConfig::enabled());
                frame.render_widget(RecordTable::new(state, styles), frame.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn sample_state() -> AppState {
        AppState::with_records(vec![
            Record::new("2", "Bob", "bob@x.com"),
            Record::new("1", "Ann", "ann@x.com"),
        ])
    }

    #[test]
    fn rows_render_in_id_order() {
        let lines = render(&sample_state());
        let ann = lines.iter().position(|l| l.contains("Ann")).unwrap();
        let bob = lines.iter().position(|l| l.contains("Bob")).unwrap();

        assert!(ann < bob, "Record 1 should render above record 2");
    }

    #[test]
    fn selected_row_shows_checked_box() {
        let mut state = sample_state();
        state.toggle_select(&RecordId::from("2"));

        let lines = render(&state);
        let bob = lines.iter().find(|l| l.contains("Bob")).unwrap();
        let ann = lines.iter().find(|l| l.contains("Ann")).unwrap();

        assert!(bob.contains("[x]"));
        assert!(ann.contains("[ ]"));
    }

    #[test]
    fn edited_row_shows_draft_values() {
        let mut state = sample_state();
        state.begin_edit(Record::new("1", "Ann", "ann@x.com"));
        state.update_field(RecordField::Name, "Annabel");

        let lines = render(&state);

        assert!(lines.iter().any(|l| l.contains("Annabel")));
    }

    #[test]
    fn pending_load_shows_loading_message() {
        let lines = render(&AppState::default());

        assert!(lines.iter().any(|l| l.contains("Loading records...")));
    }

    #[test]
    fn empty_search_result_says_no_match() {
        let mut state = sample_state();
        state.search("nobody");

        let lines = render(&state);

        assert!(lines.iter().any(|l| l.contains("No records match")));
    }
}
