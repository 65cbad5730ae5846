//! wp2jekyll - Convert a WordPress WXR export into a Jekyll site.
//!
//! This binary wires the feed extractor, the content pipeline, and the
//! site writer together behind two subcommands: `import` for whole
//! export archives and `fix-code` for in-place fix-up of site files.

mod archive;
mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Command};
use log::{error, info, LevelFilter};
use std::io::Write;
use wp2jekyll_config::Config;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    setup_logging(&cli.log_level);
    info!("wp2jekyll v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> wp2jekyll_core::Result<()> {
    match &cli.command {
        Command::Import {
            export,
            output,
            config,
            max_posts,
        } => {
            let config = Config::load_with_override(config.as_deref())?;
            let summary = archive::import(export, output, &config, *max_posts)?;
            info!(
                "{} post(s) imported, {} skipped",
                summary.imported, summary.skipped
            );
        }
        Command::FixCode { dir } => {
            let summary = archive::fix_code(dir)?;
            info!(
                "{} file(s) rewritten, {} skipped",
                summary.rewritten, summary.skipped
            );
        }
    }
    Ok(())
}
