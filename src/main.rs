//! CLI entry point for termframe.

mod cli;

use clap::Parser;
use termframe::config::load_config;
use termframe::prompt::PromptEngine;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter (e.g. `TERMFRAME_LOG=termframe=debug`).
const LOG_ENV: &str = "TERMFRAME_LOG";

fn main() {
    init_tracing();
    let args = cli::Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Logs go to stderr so they never land inside the framed stdout rows.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &cli::Args) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_config(args.config.as_deref())?;
    tracing::debug!(source = ?loaded.source, "configuration resolved");

    let mut layout = loaded.config.layout_config();
    args.apply_layout(&mut layout);
    let clear_mode = args.clear.unwrap_or(loaded.config.terminal.clear);

    let mut engine = PromptEngine::stdio(layout, clear_mode.into_clearer());
    for line in &args.lines {
        engine.screen_mut().append_line(line);
    }

    if let Some(message) = &args.prompt {
        let answer = engine.get_response(message, args.acceptance())?;
        println!("{answer}");
    } else if args.pause {
        engine.get_continue()?;
    } else {
        engine.screen_mut().render()?;
    }
    Ok(())
}
