use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create the main layout: sidebar on the left, detail pane on the right,
/// one-line help bar at the bottom.
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let main_area = vertical[0];
    let help_area = vertical[1];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_area);

    (horizontal[0], horizontal[1], help_area)
}
