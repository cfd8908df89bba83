use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::InputEvent;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_start_before};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => submit(app),

        KeyCode::Char('w') if ctrl => {
            let start = word_start_before(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.replace_range(start..app.edit_cursor, "");
            app.edit_cursor = start;
        }
        KeyCode::Char('u') if ctrl => {
            app.edit_buffer.replace_range(..app.edit_cursor, "");
            app.edit_cursor = 0;
        }
        KeyCode::Char('a') if ctrl => app.edit_cursor = 0,
        KeyCode::Char('e') if ctrl => app.edit_cursor = app.edit_buffer.len(),
        KeyCode::Char(c) if !ctrl => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }

        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        _ => {}
    }
}

/// Submit the buffer as a new item. The buffer is only cleared when the
/// store actually added something; blank input stays as typed.
fn submit(app: &mut App) {
    let before = app.store.list().len();
    app.send(InputEvent::SubmitItem(app.edit_buffer.clone()));
    if app.store.list().len() > before {
        app.edit_buffer.clear();
        app.edit_cursor = 0;
    }
}
