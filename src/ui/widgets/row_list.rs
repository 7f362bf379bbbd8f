//! Row list widget for the current scope or search results

use crate::ui::theme::Theme;
use crate::view::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// List of rendered views with a cursor on one row
pub struct RowList<'a> {
    rows: &'a [Box<dyn View>],
    cursor: Option<usize>,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> RowList<'a> {
    #[must_use]
    pub const fn new(
        rows: &'a [Box<dyn View>],
        cursor: Option<usize>,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rows,
            cursor,
            title,
            theme,
        }
    }

    fn render_row(&self, row: &dyn View, is_cursor: bool) -> ListItem<'static> {
        let marker = if is_cursor { "> " } else { "  " };
        let lines: Vec<Line<'static>> = row
            .render()
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let prefix = if index == 0 { marker } else { "  " };
                let mut spans = vec![Span::styled(prefix, self.theme.cursor_style())];
                spans.extend(line.spans);
                Line::from(spans)
            })
            .collect();

        ListItem::new(Text::from(lines))
    }
}

impl Widget for RowList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(self.title, self.theme.title_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.render_row(row.as_ref(), self.cursor == Some(index)))
            .collect();

        let list = List::new(items).highlight_style(self.theme.selected_style());
        let mut state = ListState::default().with_selected(self.cursor);
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
