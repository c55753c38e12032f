//! Sidebar widget rendering: the `Sidebar` struct and its `StatefulWidget` implementation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, StatefulWidget, Widget},
};

use crate::resource::{ResourceStatus, SidebarItem as ResourceRow};

use super::{SidebarContext, SidebarState};

/// Sidebar widget for displaying the projected resource list.
pub struct Sidebar<'a> {
    /// Common sidebar parameters
    ctx: &'a SidebarContext<'a>,
    /// Whether the sidebar has keyboard focus
    focused: bool,
}

impl<'a> Sidebar<'a> {
    /// Create a new sidebar widget.
    pub fn new(ctx: &'a SidebarContext<'a>, focused: bool) -> Self {
        Self { ctx, focused }
    }
}

impl<'a> StatefulWidget for Sidebar<'a> {
    type State = SidebarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = if self.ctx.alerts_on_top {
            " Resources (alerts on top) "
        } else {
            " Resources "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner_area = block.inner(area);
        block.render(area, buf);

        // Split inner area: filter row at top (when visible), list below
        let show_filter_row = self.ctx.filter_active || !self.ctx.filter_query.is_empty();
        let (filter_area, list_area) = if show_filter_row && inner_area.height > 1 {
            (
                Rect {
                    height: 1,
                    ..inner_area
                },
                Rect {
                    y: inner_area.y + 1,
                    height: inner_area.height - 1,
                    ..inner_area
                },
            )
        } else {
            (Rect::default(), inner_area)
        };

        if show_filter_row && filter_area.height > 0 {
            render_filter_row(
                filter_area,
                buf,
                self.ctx.filter_query,
                self.ctx.filter_active,
                self.ctx.filter_cursor_pos,
            );
        }

        if self.ctx.list.is_empty() {
            let message = if self.ctx.filter_query.is_empty() {
                "No resources"
            } else {
                "No resources match filter"
            };
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .render(list_area, buf);
            return;
        }

        let rows: Vec<ListItem> = self
            .ctx
            .list
            .iter()
            .enumerate()
            .map(|(i, item)| resource_row(item, i < self.ctx.list.starred.len()))
            .collect();

        let list = List::new(rows)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(list, list_area, buf, &mut state.list_state);
    }
}

/// Render the inline filter input row.
fn render_filter_row(area: Rect, buf: &mut Buffer, query: &str, active: bool, cursor_pos: usize) {
    let mut spans = vec![Span::styled("/", Style::default().fg(Color::Yellow))];

    if active {
        // Show a block cursor at the insertion point
        let (before, after) = query.split_at(cursor_pos.min(query.len()));
        spans.push(Span::raw(before.to_string()));
        let (cursor_char, rest) = match after.chars().next() {
            Some(c) => (c.to_string(), &after[c.len_utf8()..]),
            None => (" ".to_string(), after),
        };
        spans.push(Span::styled(
            cursor_char,
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ));
        spans.push(Span::raw(rest.to_string()));
    } else {
        spans.push(Span::raw(query.to_string()));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

/// Build the list row for one resource.
fn resource_row(item: &ResourceRow, starred: bool) -> ListItem<'static> {
    let star = if starred {
        Span::styled("★ ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("  ")
    };

    let status = match item.status {
        ResourceStatus::Ok => Span::styled("● ", Style::default().fg(Color::Green)),
        ResourceStatus::Pending => Span::styled("◌ ", Style::default().fg(Color::Yellow)),
        ResourceStatus::Error => Span::styled("● ", Style::default().fg(Color::Red)),
    };

    let mut spans = vec![star, status, Span::raw(item.name.clone())];
    if item.alerting {
        spans.push(Span::styled(
            " !",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    ListItem::new(Line::from(spans))
}
