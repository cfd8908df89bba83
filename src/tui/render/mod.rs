pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use crate::util::unicode::display_width;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | input | separator | list | footer | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + theme
            Constraint::Length(1), // input row
            Constraint::Length(1), // separator
            Constraint::Min(1),    // list
            Constraint::Length(1), // count + filters
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    header::render_input_row(frame, app, chunks[1]);
    header::render_separator(frame, app, chunks[2]);
    list_view::render_list(frame, app, chunks[3]);
    footer::render_footer(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Join left and right spans with background padding so the right side
/// is flush with `width`. If both don't fit, they are simply concatenated.
pub(super) fn spread<'a>(
    mut left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    bg: Style,
) -> Line<'a> {
    let used: usize = left
        .iter()
        .chain(right.iter())
        .map(|s| display_width(&s.content))
        .sum();
    if used < width {
        left.push(Span::styled(" ".repeat(width - used), bg));
    }
    left.extend(right);
    Line::from(left)
}
