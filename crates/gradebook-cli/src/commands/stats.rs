//! Stats command implementation.

use std::path::Path;

use anyhow::Result;
use gradebook_core::export::{format_distribution, format_json_stats, format_summary};

use crate::cli_utils::open_roster;

pub fn run(roster_path: Option<&Path>, no_sample: bool, json: bool) -> Result<()> {
    let roster = open_roster(roster_path, no_sample)?;
    let stats = roster.statistics();

    if json {
        println!("{}", format_json_stats(&stats)?);
        return Ok(());
    }

    println!("{}", format_summary(&stats));
    println!("  Letters        : {}", format_distribution(&roster));
    Ok(())
}
