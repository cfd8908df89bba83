use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::cli::commands::*;
use crate::io::config_io;
use crate::io::log;
use crate::io::script::{self, ScriptCommand};
use crate::model::{Config, FilterMode, ThemeMode};
use crate::ops::{Dispatch, InputEvent, JsonSink, PresentationSink, Store, TextSink, dispatch};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch_cli(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(ref path) = cli.log_file {
        log::init_file_logging(path)?;
    }
    let config = resolve_config(&cli)?;

    match cli.command {
        None => crate::tui::run(&config),
        Some(Commands::Replay(args)) => cmd_replay(args, &config),
    }
}

/// Load the config file and apply command-line overrides on top.
pub fn resolve_config(cli: &Cli) -> Result<Config, config_io::ConfigError> {
    let mut config = config_io::load_config(cli.config.as_deref())?;
    if let Some(filter) = cli.filter {
        config.ui.default_filter = filter;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

fn cmd_replay(args: ReplayArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let json = args.json;
    let reader: Box<dyn BufRead> = if args.script == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.script)
            .map_err(|e| format!("cannot open script '{}': {}", args.script, e))?;
        Box::new(BufReader::new(file))
    };
    let commands = script::parse_script(reader)?;
    tracing::info!(commands = commands.len(), json, "replaying script");

    let stdout = io::stdout().lock();
    let mut out = if json {
        replay(&commands, config, JsonSink::new(stdout))?.into_inner()
    } else {
        replay(&commands, config, TextSink::new(stdout))?.into_inner()
    };
    out.flush()?;
    Ok(())
}

/// Sink plus the extra lines scripted output needs around renders
pub trait ReplayOutput: PresentationSink {
    /// Written before each render triggered by a script line
    fn separator(&mut self) -> io::Result<()>;
    fn theme_changed(&mut self, theme: ThemeMode) -> io::Result<()>;
    /// Write failure from the most recent renders, if any
    fn take_error(&mut self) -> Option<io::Error>;
}

impl<W: Write> ReplayOutput for TextSink<W> {
    fn take_error(&mut self) -> Option<io::Error> {
        TextSink::take_error(self)
    }

    fn separator(&mut self) -> io::Result<()> {
        self.get_mut().write_all(b"---\n")
    }

    fn theme_changed(&mut self, theme: ThemeMode) -> io::Result<()> {
        writeln!(self.get_mut(), "theme: {}", theme)
    }
}

impl<W: Write> ReplayOutput for JsonSink<W> {
    fn take_error(&mut self) -> Option<io::Error> {
        JsonSink::take_error(self)
    }

    fn separator(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn theme_changed(&mut self, theme: ThemeMode) -> io::Result<()> {
        serde_json::to_writer(self.get_mut(), &serde_json::json!({ "theme": theme }))?;
        self.get_mut().write_all(b"\n")
    }
}

/// Run parsed commands through a fresh store, returning the sink.
/// Stops at the first render whose output could not be written.
pub fn replay<S: ReplayOutput>(commands: &[ScriptCommand], config: &Config, sink: S) -> io::Result<S> {
    let mut store = Store::new(config.ui.default_filter, sink);
    let mut theme = config.ui.theme;
    if let Some(e) = store.sink_mut().take_error() {
        return Err(e);
    }

    for command in commands {
        let Some(event) = command.to_event(&store.projection()) else {
            tracing::debug!(?command, "nothing selected, skipping");
            continue;
        };
        if event != InputEvent::ToggleTheme {
            store.sink_mut().separator()?;
        }
        if dispatch(&mut store, event) == Dispatch::ToggleTheme {
            theme = theme.toggled();
            store.sink_mut().theme_changed(theme)?;
        }
        if let Some(e) = store.sink_mut().take_error() {
            return Err(e);
        }
    }

    Ok(store.into_sink())
}

/// Convenience for callers holding script text rather than a file
pub fn replay_text(text: &str, filter: FilterMode, json: bool) -> Result<String, Box<dyn std::error::Error>> {
    let commands = script::parse_script(text.as_bytes())?;
    let mut config = Config::default();
    config.ui.default_filter = filter;
    let bytes = if json {
        replay(&commands, &config, JsonSink::new(Vec::new()))?.into_inner()
    } else {
        replay(&commands, &config, TextSink::new(Vec::new()))?.into_inner()
    };
    Ok(String::from_utf8(bytes)?)
}
