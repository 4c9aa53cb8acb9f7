//! Interactive session.
//!
//! Reads one command per line from stdin and keeps a roster plus a selected
//! row between commands, re-rendering the summary whenever the roster changes.

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use gradebook_core::export::{
    format_distribution, format_roster_table, format_stats_summary, format_summary,
};
use gradebook_core::{Roster, RosterEvent, parse_grade, parse_student_fields};
use owo_colors::OwoColorize;
use tracing::{debug, info, warn};

use crate::cli_utils::{open_roster, persist_roster};

const HELP: &str = "\
Commands:
  add <name...> <grade>   Add a student (grade is the last word)
  delete [index]          Delete the given or the selected student
  select <index>          Select a row
  grade <index> <value>   Change a student's grade
  list                    Show all students
  stats | refresh         Show statistics
  help                    Show this help
  quit | exit             Leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add { name: String, grade: String },
    Delete(Option<usize>),
    Select(usize),
    Grade { index: usize, grade: String },
    List,
    Stats,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match keyword.to_ascii_lowercase().as_str() {
        "add" => {
            // A single word is taken as the name so the grade reads as missing
            let (name, grade) = match rest.split_last() {
                Some((grade, name)) if !name.is_empty() => (name.join(" "), grade.to_string()),
                Some((name, _)) => (name.to_string(), String::new()),
                None => (String::new(), String::new()),
            };
            SessionCommand::Add { name, grade }
        }
        "delete" | "del" | "rm" => match rest.as_slice() {
            [] => SessionCommand::Delete(None),
            [index] => SessionCommand::Delete(Some(parse_index(index)?)),
            _ => bail!("Usage: delete [index]"),
        },
        "select" | "sel" => match rest.as_slice() {
            [index] => SessionCommand::Select(parse_index(index)?),
            _ => bail!("Usage: select <index>"),
        },
        "grade" => match rest.as_slice() {
            [index, grade] => SessionCommand::Grade {
                index: parse_index(index)?,
                grade: grade.to_string(),
            },
            _ => bail!("Usage: grade <index> <value>"),
        },
        "list" | "ls" => SessionCommand::List,
        "stats" | "refresh" => SessionCommand::Stats,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => bail!("Unknown command: {} (try 'help')", other),
    };

    Ok(Some(command))
}

fn parse_index(text: &str) -> Result<usize> {
    text.parse()
        .with_context(|| format!("Invalid row index: {}", text))
}

/// Roster plus the selected row, as the window kept them.
pub struct Session {
    roster: Roster,
    selected: Option<usize>,
    changed: Rc<Cell<bool>>,
}

impl Session {
    pub fn new(mut roster: Roster) -> Self {
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        roster.subscribe(move |event: &RosterEvent| {
            debug!("Roster event: {:?}", event);
            flag.set(true);
        });
        Self {
            roster,
            selected: None,
            changed,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the roster changed since the last call.
    pub fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }

    /// Apply a command and return the text to show the user.
    pub fn execute(&mut self, command: &SessionCommand) -> String {
        match command {
            SessionCommand::Add { name, grade } => {
                let result = parse_student_fields(name, grade)
                    .and_then(|(name, grade)| self.roster.add(name, grade).map(|s| s.to_string()));
                match result {
                    Ok(added) => {
                        self.selected = self.roster.count().checked_sub(1);
                        format!("{} {}", "Student added successfully!".green(), added)
                    }
                    Err(e) => format!("{} {}", "Error:".red(), e),
                }
            }
            SessionCommand::Delete(index) => {
                let Some(index) = (*index).or(self.selected) else {
                    return format!("{} Please select a student to delete!", "Warning:".yellow());
                };
                match self.roster.remove_at(index) {
                    Some(removed) => {
                        self.selected = None;
                        format!("Deleted {}", removed)
                    }
                    None => format!("{} No student at index {}", "Error:".red(), index),
                }
            }
            SessionCommand::Select(index) => match self.roster.get(*index) {
                Some(student) => {
                    self.selected = Some(*index);
                    format!("Selected {}", student)
                }
                None => format!("{} No student at index {}", "Error:".red(), index),
            },
            SessionCommand::Grade { index, grade } => {
                let Some(id) = self.roster.get(*index).map(|s| s.id()) else {
                    return format!("{} No student at index {}", "Error:".red(), index);
                };
                let result = parse_grade(grade).and_then(|g| self.roster.update_grade(id, g));
                match (result, self.roster.find(id)) {
                    (Ok(_), Some(student)) => format!("Updated {}", student),
                    (Ok(_), None) => format!("{} No student at index {}", "Error:".red(), index),
                    (Err(e), _) => format!("{} {}", "Error:".red(), e),
                }
            }
            SessionCommand::List => format_roster_table(&self.roster, self.selected),
            SessionCommand::Stats => self.summary(),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => String::new(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}\n  Letters        : {}",
            format_summary(&self.roster.statistics()),
            format_distribution(&self.roster)
        )
    }
}

pub fn run(roster_path: Option<&Path>, no_sample: bool) -> Result<()> {
    let roster = open_roster(roster_path, no_sample)?;
    let mut session = Session::new(roster);

    println!("{}", "Student Grade Tracker".bold());
    println!("{}", format_roster_table(session.roster(), session.selected()));
    println!("{}", session.summary());
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{} {}", "Error:".red(), message);
                continue;
            }
        };
        if command == SessionCommand::Quit {
            break;
        }

        println!("{}", session.execute(&command));
        if session.take_changed() {
            println!("{}", format_roster_table(session.roster(), session.selected()));
            println!("{}", session.summary());
        }
    }

    info!(
        "Session ended: {}",
        format_stats_summary(&session.roster().statistics())
    );
    if roster_path.is_none() && session.roster().count() > 0 {
        warn!("No --roster file given; the session is not saved");
    }
    persist_roster(roster_path, session.roster())
}
