//! List command implementation.

use std::path::Path;

use anyhow::Result;
use gradebook_core::export::{format_json_records, format_roster_table};

use crate::cli_utils::open_roster;

pub fn run(roster_path: Option<&Path>, no_sample: bool, json: bool) -> Result<()> {
    let roster = open_roster(roster_path, no_sample)?;

    if json {
        println!("{}", format_json_records(&roster)?);
    } else {
        println!("{}", format_roster_table(&roster, None));
    }

    Ok(())
}
