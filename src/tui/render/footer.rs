use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::spread;

const CLEAR_HINT: &str = "c clear completed";

/// Items-left counter on the left; filter tabs and the clear-completed
/// hint on the right. The hint is dropped when the row is too narrow.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let projection = app.projection();

    let count = Span::styled(
        format!(" {}", projection.items_left_label()),
        Style::default().fg(app.theme.dim).bg(bg),
    );

    let mut tabs: Vec<Span> = Vec::new();
    for (i, mode) in FilterMode::ALL.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled(" ", bg_style));
        }
        let style = if *mode == projection.filter {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        tabs.push(Span::styled(mode.label(), style));
    }

    let width = area.width as usize;
    let used: usize = display_width(&count.content)
        + tabs.iter().map(|s| display_width(&s.content)).sum::<usize>();
    if used + 2 + CLEAR_HINT.len() + 1 <= width {
        let has_completed = app.store.list().items.iter().any(|item| item.completed);
        let hint_fg = if has_completed {
            app.theme.text
        } else {
            app.theme.dim
        };
        tabs.push(Span::styled("  ", bg_style));
        tabs.push(Span::styled(CLEAR_HINT, Style::default().fg(hint_fg).bg(bg)));
    }
    tabs.push(Span::styled(" ", bg_style));

    let line = spread(vec![count], tabs, width, bg_style);
    frame.render_widget(Paragraph::new(line).style(bg_style), area);
}
