use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::app::{App, KeyAction};
use crate::resource::{ResourceStatus, SidebarItem};
use crate::ui::layout::create_layout;
use crate::ui::sidebar::{Sidebar, SidebarContext};

/// Run the main draw/input loop until the user quits.
pub fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app)).context("Failed to draw frame")?;

        if !poll(Duration::from_millis(100)).context("Failed to poll for events")? {
            continue;
        }

        match read().context("Failed to read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let KeyAction::Quit = app.handle_key(key)? {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let (sidebar_area, detail_area, help_area) = create_layout(frame.area());

    let projected = app.projected();

    // Clone filter state to avoid overlapping borrows with render_stateful_widget
    let filter_query = app.sidebar.filter_query.clone();

    let ctx = SidebarContext {
        list: &projected,
        alerts_on_top: app.options.options().alerts_on_top,
        filter_query: &filter_query,
        filter_active: app.sidebar.filter_active,
        filter_cursor_pos: app.sidebar.filter_cursor_pos,
    };

    frame.render_stateful_widget(
        Sidebar::new(&ctx, !app.sidebar.filter_active),
        sidebar_area,
        &mut app.sidebar,
    );

    let selected = app
        .sidebar
        .list_state
        .selected()
        .and_then(|i| projected.get(i));
    render_detail(frame, detail_area, selected, app.starred.len());

    render_help_bar(frame, help_area, app.sidebar.filter_active);
}

/// Detail pane for the selected resource.
fn render_detail(frame: &mut Frame, area: Rect, item: Option<&SidebarItem>, star_count: usize) {
    let block = Block::default().title(" Detail ").borders(Borders::ALL);

    let lines = match item {
        Some(item) => {
            let (status, style) = match item.status {
                ResourceStatus::Ok => ("ok", Style::default().fg(Color::Green)),
                ResourceStatus::Pending => ("pending", Style::default().fg(Color::Yellow)),
                ResourceStatus::Error => ("error", Style::default().fg(Color::Red)),
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    item.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![Span::raw("status: "), Span::styled(status, style)]),
            ];
            if item.alerting {
                lines.push(Line::from(Span::styled(
                    "alerting",
                    Style::default().fg(Color::Red),
                )));
            }
            lines.push(Line::from(format!("starred resources: {star_count}")));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No resource selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One-line key hint bar at the bottom.
fn render_help_bar(frame: &mut Frame, area: Rect, filter_active: bool) {
    let hints = if filter_active {
        "type to filter | Enter keep | Esc clear"
    } else {
        "j/k move | s star | a alerts on top | / filter | q quit"
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
