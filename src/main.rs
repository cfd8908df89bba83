use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::cli::handlers;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = handlers::dispatch_cli(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
