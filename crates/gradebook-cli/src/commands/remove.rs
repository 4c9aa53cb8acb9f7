//! Remove command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use gradebook_core::export::{format_roster_table, format_stats_summary, format_summary};
use tracing::{info, warn};

use crate::cli_utils::{open_roster, persist_roster};

pub fn run(roster_path: Option<&Path>, no_sample: bool, index: usize) -> Result<()> {
    let mut roster = open_roster(roster_path, no_sample)?;

    let Some(removed) = roster.remove_at(index) else {
        bail!(
            "No student at index {} (roster has {} students)",
            index,
            roster.count()
        );
    };

    println!("Removed {}", removed);
    println!("{}", format_roster_table(&roster, None));
    println!("{}", format_summary(&roster.statistics()));

    info!("Roster now {}", format_stats_summary(&roster.statistics()));
    if roster_path.is_none() {
        warn!("No --roster file given; the change is not saved");
    }
    persist_roster(roster_path, &roster)
}
