//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use gradebook_core::{Roster, load_roster, save_roster};
use tracing::info;

/// Open the roster for a command.
///
/// A given file must exist unless it is about to be created, in which case the
/// starting roster is seeded the same way as without a file.
pub fn open_roster(path: Option<&Path>, no_sample: bool) -> Result<Roster> {
    match path {
        Some(path) if path.exists() => {
            let roster = load_roster(path)
                .with_context(|| format!("Failed to load roster from {}", path.display()))?;
            info!("Loaded {} students from {}", roster.count(), path.display());
            Ok(roster)
        }
        _ => Ok(initial_roster(no_sample)),
    }
}

pub fn initial_roster(no_sample: bool) -> Roster {
    if no_sample {
        Roster::new()
    } else {
        Roster::with_sample_data()
    }
}

/// Save the roster back if a file was given.
pub fn persist_roster(path: Option<&Path>, roster: &Roster) -> Result<()> {
    if let Some(path) = path {
        save_roster(path, roster)
            .with_context(|| format!("Failed to save roster to {}", path.display()))?;
        info!("Saved {} students to {}", roster.count(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_seeded_and_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("class.json");

        commands::add::run(Some(path.as_path()), false, "Frank Moore", "71.5").unwrap();
        assert!(path.exists());

        let roster = open_roster(Some(path.as_path()), true).unwrap();
        let names: Vec<_> = roster.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "Alice Johnson",
                "Bob Smith",
                "Carol Brown",
                "David Wilson",
                "Emma Davis",
                "Frank Moore"
            ]
        );
    }

    #[test]
    fn test_mutating_commands_save_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("class.json");

        commands::add::run(Some(path.as_path()), true, "Grace", "59").unwrap();
        commands::add::run(Some(path.as_path()), true, "Heidi", "88").unwrap();
        commands::set_grade::run(Some(path.as_path()), true, 0, "91").unwrap();
        commands::remove::run(Some(path.as_path()), true, 1).unwrap();

        let roster = open_roster(Some(path.as_path()), false).unwrap();
        assert_eq!(roster.count(), 1);
        let grace = roster.get(0).unwrap();
        assert_eq!(grace.name(), "Grace");
        assert_eq!(grace.grade(), 91.0);
    }

    #[test]
    fn test_rejected_add_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("class.json");

        commands::add::run(Some(path.as_path()), true, "Ivan", "70").unwrap();
        assert!(commands::add::run(Some(path.as_path()), true, "Judy", "150").is_err());

        let roster = open_roster(Some(path.as_path()), false).unwrap();
        assert_eq!(roster.count(), 1);
        assert_eq!(roster.statistics().highest, 70.0);
    }

    #[test]
    fn test_no_file_uses_seed_choice() {
        assert_eq!(open_roster(None, false).unwrap().count(), 5);
        assert!(open_roster(None, true).unwrap().is_empty());
    }
}
