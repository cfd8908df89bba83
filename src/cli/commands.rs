use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::{FilterMode, ThemeMode};

#[derive(Parser)]
#[command(name = "ticklist", about = concat!("[x] ticklist v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read settings from this TOML file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Initial filter (all, active, completed)
    #[arg(long, global = true)]
    pub filter: Option<FilterMode>,

    /// Initial theme (dark, light)
    #[arg(long, global = true)]
    pub theme: Option<ThemeMode>,

    /// Append logs to this file (level from TICKLIST_LOG)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay an event script and print every render
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, or - for stdin
    pub script: String,

    /// Print each render as a JSON object
    #[arg(long)]
    pub json: bool,
}
