use astviz::cli::Cli;
use astviz::visualizer::Visualizer;
use clap::Parser as ClapParser;
use std::process::exit;

/// The main entry point for the application.
///
/// Parses command-line arguments and runs the visualizer.
fn main() {
    if run() == false {
        exit(1);
    }
}

/// Runs the visualizer.
///
/// This function reads the parse tree and source text, walks the tree,
/// and writes the interactive HTML document.
fn run() -> bool {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let visualizer = Visualizer::new(cli.into_config());
    match visualizer.run() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("\x1b[31mError\x1b[0m: {}", e);
            false
        }
    }
}
