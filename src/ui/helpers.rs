use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{resolve_image_url, Doctor};

/// Text lines for one doctor card: bold name, italic specialty, rating, and
/// the portrait URL (falling back to the placeholder for legacy blank rows).
pub(crate) fn doctor_card_lines(doctor: &Doctor, selected: bool) -> Vec<Line<'static>> {
    let name = if selected {
        format!("> {}", doctor.name)
    } else {
        doctor.name.clone()
    };

    vec![
        Line::from(Span::styled(
            name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            doctor.specialty.to_string(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(vec![
            Span::styled("* ", Style::default().fg(Color::Yellow)),
            Span::raw(doctor.rating_label()),
        ]),
        Line::from(Span::styled(
            resolve_image_url(&doctor.image_url).to_string(),
            Style::default().fg(Color::Cyan),
        )),
    ]
}

/// First index of the scrolling window that keeps `selected` visible.
pub(crate) fn visible_start(selected: usize, capacity: usize, len: usize) -> usize {
    let capacity = capacity.max(1);
    let mut start = if selected >= capacity {
        selected + 1 - capacity
    } else {
        0
    };
    if start + capacity > len {
        start = len.saturating_sub(capacity);
    }
    start
}

/// Terminal cell for a text cursor `offset` columns into `row` of `area`,
/// kept inside the area however long the typed value grows.
pub(crate) fn cursor_position(area: Rect, offset: usize, row: u16) -> (u16, u16) {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    let last_column = area.right().saturating_sub(1).max(area.x);
    let last_row = area.bottom().saturating_sub(1).max(area.y);
    (
        area.x.saturating_add(offset).min(last_column),
        area.y.saturating_add(row).min(last_row),
    )
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_inside_area() {
        let area = Rect::new(10, 5, 30, 4);
        assert_eq!(cursor_position(area, 7, 1), (17, 6));
        assert_eq!(cursor_position(area, 500, 1), (39, 6));
        assert_eq!(cursor_position(area, usize::MAX, 9), (39, 8));

        let edge = Rect::new(u16::MAX - 2, 0, 2, 1);
        assert_eq!(cursor_position(edge, 70_000, 0), (u16::MAX - 1, 0));
    }

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_start(0, 3, 10), 0);
        assert_eq!(visible_start(2, 3, 10), 0);
        assert_eq!(visible_start(5, 3, 10), 3);
        assert_eq!(visible_start(9, 3, 10), 7);
        assert_eq!(visible_start(1, 5, 2), 0);
    }

    #[test]
    fn surface_error_reports_root_cause() {
        let err = anyhow::anyhow!("disk full").context("failed to insert doctor");
        assert_eq!(surface_error(&err), "disk full");
    }
}
