//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::generator::DocumentSelection;

/// Typeset a conference schedule export into LaTeX sources
#[derive(Parser, Debug, Clone)]
#[command(name = "conference-typeset")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Reveal the Richard von Mises prize lecture(s)
    #[arg(short = 'm', long)]
    pub with_mises: bool,

    /// Session export (`;`-separated CSV)
    #[arg(long, default_value = "CSV/sessions.csv")]
    pub sessions: PathBuf,

    /// Organizer export used for section headers
    #[arg(long)]
    pub organizers: Option<PathBuf>,

    /// Output root directory
    #[arg(short = 'o', long, default_value = "LaTeX")]
    pub output: PathBuf,

    /// YAML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Generate the book of abstracts
    #[arg(short = 'b', long)]
    pub boa: bool,

    /// Generate the daily scientific program
    #[arg(short = 'd', long)]
    pub dsp: bool,

    /// Generate the per-room schedules
    #[arg(short = 'r', long)]
    pub rooms: bool,

    /// Generate the per-day session sheets
    #[arg(long)]
    pub days: bool,

    /// Show verbose output (debug information)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Documents to produce; no selector means all of them
    pub fn selection(&self) -> DocumentSelection {
        let selection = DocumentSelection {
            book_of_abstracts: self.boa,
            daily_program: self.dsp,
            room_plans: self.rooms,
            day_sheets: self.days,
        };
        if selection.is_empty() {
            DocumentSelection::all()
        } else {
            selection
        }
    }
}
