//! Report command implementation.

use std::path::Path;

use anyhow::Result;
use gradebook_core::export::format_json_report;

use crate::cli_utils::open_roster;

pub fn run(roster_path: Option<&Path>, no_sample: bool) -> Result<()> {
    let roster = open_roster(roster_path, no_sample)?;
    println!("{}", format_json_report(&roster)?);
    Ok(())
}
