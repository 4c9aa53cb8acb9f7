//! Set-grade command implementation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use gradebook_core::export::{format_stats_summary, format_summary};
use gradebook_core::parse_grade;
use tracing::{info, warn};

use crate::cli_utils::{open_roster, persist_roster};

pub fn run(roster_path: Option<&Path>, no_sample: bool, index: usize, grade: &str) -> Result<()> {
    let mut roster = open_roster(roster_path, no_sample)?;

    let grade = parse_grade(grade)?;
    let Some(id) = roster.get(index).map(|s| s.id()) else {
        bail!(
            "No student at index {} (roster has {} students)",
            index,
            roster.count()
        );
    };
    roster.update_grade(id, grade)?;

    let student = roster.find(id).context("Updated student disappeared")?;
    println!("Updated {}", student);
    println!("{}", format_summary(&roster.statistics()));

    info!("Roster now {}", format_stats_summary(&roster.statistics()));
    if roster_path.is_none() {
        warn!("No --roster file given; the change is not saved");
    }
    persist_roster(roster_path, &roster)
}
