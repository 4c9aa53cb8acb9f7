use serde::Serialize;

use crate::score::Student;

/// Summary statistics over a roster.
///
/// An empty roster yields the all-zero value rather than an absent one, so
/// callers can render it without special-casing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Stats {
    pub count: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl Stats {
    pub fn from_students(students: &[Student]) -> Self {
        let Some(first) = students.first() else {
            return Self::default();
        };

        let mut sum = 0.0;
        let mut highest = first.grade();
        let mut lowest = first.grade();
        for student in students {
            let grade = student.grade();
            sum += grade;
            highest = highest.max(grade);
            lowest = lowest.min(grade);
        }

        Self {
            count: students.len(),
            average: sum / students.len() as f64,
            highest,
            lowest,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
