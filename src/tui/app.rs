use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, ItemId, Projection, ThemeMode, UiConfig};
use crate::ops::{Dispatch, InputEvent, Snapshot, Store, dispatch};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list, single-key commands
    Navigate,
    /// Typing a new item into the input row
    Edit,
}

/// Main application state
pub struct App {
    pub store: Store<Snapshot>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub ui: UiConfig,
    /// Index into the visible projection
    pub cursor: usize,
    /// First visible list row
    pub scroll_offset: usize,
    /// Text being typed in Edit mode
    pub edit_buffer: String,
    /// Byte offset into `edit_buffer`, always on a grapheme boundary
    pub edit_cursor: usize,
    /// Help overlay visible (the only modal)
    pub show_help: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: Store::new(config.ui.default_filter, Snapshot::default()),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(config.ui.theme, &config.ui),
            ui: config.ui.clone(),
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            show_help: false,
        }
    }

    /// What the store last rendered
    pub fn projection(&self) -> &Projection {
        &self.store.sink().current
    }

    /// Id of the item under the cursor
    pub fn selected_id(&self) -> Option<ItemId> {
        self.projection().id_at(self.cursor)
    }

    /// Send an input event through the dispatch table.
    pub fn send(&mut self, event: InputEvent) {
        if dispatch(&mut self.store, event) == Dispatch::ToggleTheme {
            self.toggle_theme();
        }
        self.clamp_cursor();
    }

    pub fn toggle_theme(&mut self) {
        let mode = self.theme.mode.toggled();
        self.theme = Theme::from_config(mode, &self.ui);
        tracing::debug!(theme = %mode, "theme toggled");
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    /// Keep the cursor inside the visible list after it changes size
    pub fn clamp_cursor(&mut self) {
        let len = self.projection().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.projection().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }
}

pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    tracing::info!(
        theme = %app.theme_mode(),
        filter = %app.store.filter(),
        "starting tui"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if we panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(items = app.store.list().len(), "tui stopped");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
