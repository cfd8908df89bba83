use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

/// Columns taken by the cursor marker and checkbox: "▸ [x] "
const GUTTER: usize = 6;

/// Render the visible projection, one row per item.
///
/// Draws straight from the store's last render, replacing the whole area
/// each frame.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let len = app.projection().len();

    if len == 0 {
        let empty = Paragraph::new("  Nothing to show")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    app.scroll_offset = adjust_scroll(app.scroll_offset, app.cursor, height, len);

    let show_cursor = app.mode == Mode::Navigate;
    let text_room = (area.width as usize).saturating_sub(GUTTER);
    let mut lines: Vec<Line> = Vec::with_capacity(height);

    for (i, item) in app
        .projection()
        .items
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = show_cursor && i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let marker = if is_cursor { "\u{25B8} " } else { "  " };
        let marker_style = Style::default().fg(app.theme.highlight).bg(row_bg);

        let (box_style, text_style) = if item.completed {
            (
                Style::default().fg(app.theme.check).bg(row_bg),
                Style::default()
                    .fg(app.theme.done)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            let fg = if is_cursor {
                app.theme.text_bright
            } else {
                app.theme.text
            };
            (
                Style::default().fg(app.theme.dim).bg(row_bg),
                Style::default().fg(fg).bg(row_bg),
            )
        };

        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(item.marker(), box_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(truncate_to_width(&item.text, text_room), text_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Scroll so the cursor row is on screen
fn adjust_scroll(scroll: usize, cursor: usize, height: usize, len: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let max_scroll = len.saturating_sub(height);
    let scroll = if cursor < scroll {
        cursor
    } else if cursor >= scroll + height {
        cursor + 1 - height
    } else {
        scroll
    };
    scroll.min(max_scroll)
}
