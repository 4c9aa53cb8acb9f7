//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::config::display::{GRADE_PRECISION, STATS_PRECISION};
use crate::roster::{Roster, Stats};
use crate::score::{LetterGrade, Student};

const NAME_HEADER: &str = "Name";
const MIN_NAME_WIDTH: usize = 20;

/// Format letter grade with color
pub fn format_colored_letter(letter: &LetterGrade) -> String {
    let name = letter.short_name();
    match letter {
        LetterGrade::A => name.truecolor(76, 175, 80).bold().to_string(),
        LetterGrade::B => name.truecolor(139, 195, 74).to_string(),
        LetterGrade::C => name.truecolor(255, 193, 7).to_string(),
        LetterGrade::D => name.truecolor(255, 152, 0).to_string(),
        LetterGrade::F => name.truecolor(244, 67, 54).to_string(),
    }
}

pub fn format_grade(grade: f64) -> String {
    format!("{:.*}", GRADE_PRECISION, grade)
}

/// Single table row: `  2  Bob Smith            87.0  B`
pub fn format_student_row(index: usize, student: &Student, name_width: usize) -> String {
    format!(
        "{:>3}  {:<width$}  {:>5}  {}",
        index,
        student.name(),
        format_grade(student.grade()),
        format_colored_letter(&student.letter_grade()),
        width = name_width
    )
}

/// Render the roster as a table, marking the selected row with `>`.
pub fn format_roster_table(roster: &Roster, selected: Option<usize>) -> String {
    let mut output = String::new();

    let name_width = roster
        .iter()
        .map(|s| s.name().chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);
    let border = "━".repeat(name_width + 20);

    let _ = writeln!(
        output,
        "   {:>3}  {:<width$}  {:>5}  {}",
        "#".bold(),
        NAME_HEADER.bold(),
        "Grade".bold(),
        "Letter".bold(),
        width = name_width
    );
    let _ = writeln!(output, "{}", border.dimmed());

    if roster.is_empty() {
        let _ = writeln!(output, "   {}", "(no students)".dimmed());
    }
    for (index, student) in roster.iter().enumerate() {
        let marker = if selected == Some(index) { ">" } else { " " };
        let _ = writeln!(
            output,
            "{}  {}",
            marker.cyan(),
            format_student_row(index, student, name_width)
        );
    }
    let _ = write!(output, "{}", border.dimmed());

    output
}

fn format_stat(value: f64, empty: bool) -> String {
    // The empty roster shows the bare sentinel rather than padded decimals
    if empty {
        format!("{:.1}", value)
    } else {
        format!("{:.*}", STATS_PRECISION, value)
    }
}

/// Multi-line statistics panel.
pub fn format_summary(stats: &Stats) -> String {
    let mut output = String::new();
    let empty = stats.is_empty();

    let _ = writeln!(output, "{}", "Statistics".bold());
    let _ = writeln!(output, "  Total Students : {}", stats.count);
    let _ = writeln!(output, "  Average        : {}", format_stat(stats.average, empty));
    let _ = writeln!(
        output,
        "  Highest        : {}",
        format_stat(stats.highest, empty).green()
    );
    let _ = write!(
        output,
        "  Lowest         : {}",
        format_stat(stats.lowest, empty).red()
    );

    output
}

/// One-line letter distribution, e.g. `A:2 B:2 C:1 D:0 F:0`.
pub fn format_distribution(roster: &Roster) -> String {
    roster
        .letter_distribution()
        .iter()
        .map(|(letter, count)| format!("{}:{}", format_colored_letter(letter), count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain summary for logging
pub fn format_stats_summary(stats: &Stats) -> String {
    format!(
        "count={} avg={:.2} high={:.2} low={:.2}",
        stats.count, stats.average, stats.highest, stats.lowest
    )
}
