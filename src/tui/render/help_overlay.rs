use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const LIST_BINDINGS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}/jk", "Move cursor"),
    ("g/G", "Jump to top/bottom"),
    ("Space/Enter", "Toggle completed"),
    ("a/i", "Add an item"),
    ("1 2 3", "Show all / active / completed"),
    ("f/Tab", "Next filter"),
    ("c", "Clear completed"),
    ("t", "Light / dark theme"),
];

const EDIT_BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Add item"),
    ("Ctrl+W", "Delete word"),
    ("Ctrl+U", "Delete to start"),
    ("Esc", "Back to list"),
];

const GLOBAL_BINDINGS: &[(&str, &str)] = &[
    ("?", "Toggle this help"),
    ("q/Esc", "Quit"),
    ("Ctrl+C", "Quit (any mode)"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(44, 24, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    let sections = [
        (" List", LIST_BINDINGS),
        (" Input", EDIT_BINDINGS),
        (" Global", GLOBAL_BINDINGS),
    ];
    for (title, bindings) in sections {
        lines.push(Line::from(Span::styled(title, header_style)));
        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<14}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );
}

/// A rectangle of at most `width` x `height` centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
