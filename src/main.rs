//! Conference typesetting CLI.
//!
//! Reads the session export and writes the LaTeX sources of the book of
//! abstracts and the daily scientific program.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use conference_typeset::cli::Args;
use conference_typeset::parse::{read_organizers_from_path, read_sessions_from_path};
use conference_typeset::renderers::DirectorySink;
use conference_typeset::{Generator, GeneratorConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    config.reveal_prize_lectures |= args.with_mises;

    let sessions = read_sessions_from_path(&args.sessions)
        .with_context(|| format!("Failed to read sessions from {}", args.sessions.display()))?;

    let mut generator = Generator::new(config);
    if let Some(path) = &args.organizers {
        let organizers = read_organizers_from_path(path)
            .with_context(|| format!("Failed to read organizers from {}", path.display()))?;
        generator = generator.with_organizers(organizers);
    }

    let mut sink = DirectorySink::new(&args.output);
    generator
        .run(&sessions, args.selection(), &mut sink)
        .with_context(|| format!("Failed to generate documents in {}", args.output.display()))?;

    Ok(())
}
