//! CLI argument definitions for gradebook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Student grade tracker", version)]
pub struct Args {
    /// Load the roster from this JSON file and save changes back to it
    #[arg(long, value_name = "FILE", env = "GRADEBOOK_ROSTER", global = true)]
    pub roster: Option<PathBuf>,

    /// Start with an empty roster instead of the sample students
    #[arg(long, global = true)]
    pub no_sample: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show all students in insertion order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show count, average, highest and lowest grade
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print students and statistics as one JSON document
    Report,
    /// Add a student
    Add {
        /// Student name
        #[arg(short, long)]
        name: String,
        /// Grade (0-100)
        #[arg(short, long, allow_hyphen_values = true)]
        grade: String,
    },
    /// Remove the student at a row index
    Remove {
        /// Row index as shown by `list`
        #[arg(short, long)]
        index: usize,
    },
    /// Change the grade of the student at a row index
    SetGrade {
        /// Row index as shown by `list`
        #[arg(short, long)]
        index: usize,
        /// New grade (0-100)
        #[arg(short, long, allow_hyphen_values = true)]
        grade: String,
    },
    /// Interactive session (default)
    Interactive,
}
