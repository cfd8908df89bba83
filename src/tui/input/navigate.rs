use crossterm::event::{KeyCode, KeyEvent};

use crate::model::FilterMode;
use crate::ops::InputEvent;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Input row
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Edit;
            app.edit_cursor = app.edit_buffer.len();
        }

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.projection().len().saturating_sub(1);
        }

        // Store events
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                app.send(InputEvent::SelectItem(id));
            }
        }
        KeyCode::Char('1') => app.send(InputEvent::SelectFilter(FilterMode::All)),
        KeyCode::Char('2') => app.send(InputEvent::SelectFilter(FilterMode::Active)),
        KeyCode::Char('3') => app.send(InputEvent::SelectFilter(FilterMode::Completed)),
        KeyCode::Char('f') | KeyCode::Tab => {
            let next = app.store.filter().next();
            app.send(InputEvent::SelectFilter(next));
        }
        KeyCode::Char('c') => app.send(InputEvent::ClearCompleted),
        KeyCode::Char('t') => app.send(InputEvent::ToggleTheme),
        _ => {}
    }
}
