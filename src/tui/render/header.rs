use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ThemeMode;
use crate::tui::app::{App, Mode};
use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode::{column_of, display_width};

use super::spread;

const PLACEHOLDER: &str = "What needs to be done?";
const PROMPT: &str = " > ";

/// Title on the left, theme switch on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = Style::default().bg(app.theme.background);
    let title = Span::styled(
        " ticklist",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    );
    let indicator = match app.theme_mode() {
        ThemeMode::Dark => "\u{263E} dark ",
        ThemeMode::Light => "\u{2600} light ",
    };
    let switch = Span::styled(
        indicator,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );
    let line = spread(vec![title], vec![switch], area.width as usize, bg);
    frame.render_widget(Paragraph::new(line).style(bg), area);
}

/// The new-item input, with the terminal cursor placed while editing
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Edit;
    let prompt_style = if editing {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let room = (area.width as usize).saturating_sub(PROMPT.len());
    // While editing, one cell stays free for the cursor past the last character
    let budget = if editing { room.saturating_sub(1) } else { room };
    let (visible, cursor_col) = visible_input(&app.edit_buffer, app.edit_cursor, budget);
    let body = if app.edit_buffer.is_empty() && !editing {
        Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(visible, Style::default().fg(app.theme.text_bright).bg(bg))
    };

    let line = Line::from(vec![Span::styled(PROMPT, prompt_style), body]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);

    if editing {
        let x = area.x + (PROMPT.len() + cursor_col).min(area.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

/// Rule under the input row
pub fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let rule = "\u{2500}".repeat(area.width as usize);
    let style = Style::default().fg(app.theme.border).bg(app.theme.background);
    frame.render_widget(Paragraph::new(Span::styled(rule, style)), area);
}

/// The part of `s` that fits in `max_cells`, plus the column of `cursor`
/// (a byte offset on a grapheme boundary) within it.
///
/// Shows the tail when it contains the cursor, otherwise starts at the cursor.
fn visible_input(s: &str, cursor: usize, max_cells: usize) -> (&str, usize) {
    let cursor = cursor.min(s.len());
    if display_width(s) <= max_cells {
        return (s, column_of(s, cursor));
    }
    let start = tail_start(s, max_cells).min(cursor);
    let end = start + head_end(&s[start..], max_cells);
    (&s[start..end], display_width(&s[start..cursor]))
}

/// Byte offset where the widest tail of `s` fitting `max_cells` begins
fn tail_start(s: &str, max_cells: usize) -> usize {
    let mut used = 0;
    let mut start = s.len();
    for (i, g) in s.grapheme_indices(true).rev() {
        used += display_width(g);
        if used > max_cells {
            break;
        }
        start = i;
    }
    start
}

/// Byte length of the widest head of `s` fitting `max_cells`
fn head_end(s: &str, max_cells: usize) -> usize {
    let mut used = 0;
    let mut end = 0;
    for (i, g) in s.grapheme_indices(true) {
        used += display_width(g);
        if used > max_cells {
            break;
        }
        end = i + g.len();
    }
    end
}
