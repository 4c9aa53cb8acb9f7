//! Add command implementation.

use std::path::Path;

use anyhow::Result;
use gradebook_core::export::{format_roster_table, format_stats_summary, format_summary};
use gradebook_core::parse_student_fields;
use owo_colors::OwoColorize;
use tracing::{info, warn};

use crate::cli_utils::{open_roster, persist_roster};

pub fn run(roster_path: Option<&Path>, no_sample: bool, name: &str, grade: &str) -> Result<()> {
    let mut roster = open_roster(roster_path, no_sample)?;

    let (name, grade) = parse_student_fields(name, grade)?;
    let added = roster.add(name, grade)?.to_string();

    println!("{} {}", "Student added successfully!".green(), added);
    println!("{}", format_roster_table(&roster, roster.count().checked_sub(1)));
    println!("{}", format_summary(&roster.statistics()));

    info!("Roster now {}", format_stats_summary(&roster.statistics()));
    if roster_path.is_none() {
        warn!("No --roster file given; the change is not saved");
    }
    persist_roster(roster_path, &roster)
}
