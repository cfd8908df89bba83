use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

const NAVIGATE_HINTS: &str = "a add  space toggle  1-3 filter  c clear  t theme  ? help";
const EDIT_HINTS: &str = "Enter add  Esc done";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if app.ui.show_key_hints {
        let hints = match app.mode {
            Mode::Navigate => NAVIGATE_HINTS,
            Mode::Edit => EDIT_HINTS,
        };
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(hints, width.saturating_sub(1)),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ])
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn hints_follow_mode() {
        let mut app = app_with_items(&[]);
        let output = render_to_string(60, 1, |frame, area| render_status_row(frame, &app, area));
        assert_eq!(output, format!(" {}", NAVIGATE_HINTS));

        app.mode = Mode::Edit;
        let output = render_to_string(60, 1, |frame, area| render_status_row(frame, &app, area));
        assert_eq!(output, " Enter add  Esc done");
    }

    #[test]
    fn hints_truncate() {
        let app = app_with_items(&[]);
        let output = render_to_string(12, 1, |frame, area| render_status_row(frame, &app, area));
        assert_eq!(output, " a add  spa\u{2026}");
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = app_with_items(&[]);
        app.ui.show_key_hints = false;
        let output = render_to_string(60, 1, |frame, area| render_status_row(frame, &app, area));
        assert_eq!(output, "");
    }
}
