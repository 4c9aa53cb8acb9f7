//! Roster files on disk.
//!
//! A roster is stored as pretty JSON holding only names and grades; ids and
//! letters are rebuilt on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::roster::Roster;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredStudent {
    pub name: String,
    pub grade: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    pub students: Vec<StoredStudent>,
}

impl RosterFile {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            students: roster
                .iter()
                .map(|s| StoredStudent {
                    name: s.name().to_string(),
                    grade: s.grade(),
                })
                .collect(),
        }
    }

    /// Build a roster, validating every record in file order.
    pub fn into_roster(self) -> Result<Roster> {
        let mut roster = Roster::new();
        for stored in self.students {
            roster.add(&stored.name, stored.grade)?;
        }
        Ok(roster)
    }
}

pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let content = fs::read_to_string(path.as_ref())?;
    let file: RosterFile = serde_json::from_str(&content)?;
    let roster = file.into_roster()?;
    debug!(
        "Loaded {} students from {:?}",
        roster.count(),
        path.as_ref()
    );
    Ok(roster)
}

pub fn save_roster<P: AsRef<Path>>(path: P, roster: &Roster) -> Result<()> {
    let content = serde_json::to_string_pretty(&RosterFile::from_roster(roster))?;
    fs::write(path.as_ref(), content)?;
    debug!("Saved {} students to {:?}", roster.count(), path.as_ref());
    Ok(())
}
