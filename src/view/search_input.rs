//! Search input widget for rendering the search bar.

use super::styles::TableStyles;
use crate::state::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Placeholder shown in an empty, unfocused search box.
pub const SEARCH_PLACEHOLDER: &str = "Search by name, email or role";

/// Search input widget.
///
/// Shows a block cursor while focused. Unfocused, it shows the typed text
/// (or a placeholder) and marks whether a query is currently applied.
pub struct SearchInput<'a> {
    input: &'a TextInput,
    focused: bool,
    active_query: Option<&'a str>,
    styles: TableStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(input: &'a TextInput, focused: bool, styles: TableStyles) -> Self {
        Self {
            input,
            focused,
            active_query: None,
            styles,
        }
    }

    /// Query currently applied to the table, shown in the title.
    pub fn active_query(mut self, query: Option<&'a str>) -> Self {
        self.active_query = query;
        self
    }

    fn title(&self) -> String {
        match self.active_query {
            Some(query) => format!(" Search (filtering: \"{}\") ", query),
            None => " Search ".to_string(),
        }
    }

    fn content(&self, inner_width: usize) -> Line<'a> {
        if self.focused {
            let (before, after) = self.input.split_at_cursor();
            // Keep one column for the cursor itself
            let before = tail_fitting(before, inner_width.saturating_sub(1));
            let mut rest = after.chars();
            let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".into());

            return Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char,
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
                Span::raw(rest.as_str()),
            ]);
        }

        if self.input.text().is_empty() {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, self.styles.muted))
        } else {
            Line::from(self.input.text())
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title());

        let inner_width = usize::from(area.width.saturating_sub(2));
        Paragraph::new(self.content(inner_width))
            .block(block)
            .render(area, buf);
    }
}

/// Longest suffix of `text` that fits in `max_width` terminal columns.
fn tail_fitting(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (index, ch) in text.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return &text[index + ch.len_utf8()..];
        }
    }
    text
}
