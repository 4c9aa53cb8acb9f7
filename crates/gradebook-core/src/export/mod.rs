//! Output formats for roster data.

mod console;

pub use console::*;

use serde::Serialize;

use crate::error::Result;
use crate::roster::{Roster, Stats};
use crate::score::{LetterGrade, Student};

/// Serializable view of one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub id: u64,
    pub name: String,
    pub grade: f64,
    pub letter_grade: LetterGrade,
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().get(),
            name: student.name().to_string(),
            grade: student.grade(),
            letter_grade: student.letter_grade(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub students: Vec<StudentRecord>,
    pub statistics: Stats,
}

impl RosterReport {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            students: roster.iter().map(StudentRecord::from).collect(),
            statistics: roster.statistics(),
        }
    }
}

pub fn format_json_records(roster: &Roster) -> Result<String> {
    let records: Vec<StudentRecord> = roster.iter().map(StudentRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn format_json_stats(stats: &Stats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Records and statistics in a single document.
pub fn format_json_report(roster: &Roster) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RosterReport::from_roster(roster))?)
}
