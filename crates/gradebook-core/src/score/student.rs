use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::grade as bounds;
use crate::error::ValidationError;
use crate::score::LetterGrade;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a student record. Clones of a [`Student`] keep the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u64);

impl StudentId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A student record: name, numeric grade and the letter derived from it.
///
/// Equality is identity: two students are equal when they share an id, no
/// matter their names or grades.
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    name: String,
    grade: f64,
    letter_grade: LetterGrade,
}

impl Student {
    /// Build a validated student. The name is stored trimmed.
    pub fn new(name: impl AsRef<str>, grade: f64) -> Result<Self, ValidationError> {
        let name = validate_name(name.as_ref())?;
        let grade = validate_grade(grade)?;
        Ok(Self {
            id: StudentId::next(),
            name: name.to_string(),
            grade,
            letter_grade: LetterGrade::from_grade(grade),
        })
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    pub fn letter_grade(&self) -> LetterGrade {
        self.letter_grade
    }

    /// Replace the grade and recompute the letter. Leaves the record
    /// untouched when the grade is rejected.
    pub fn set_grade(&mut self, grade: f64) -> Result<(), ValidationError> {
        self.grade = validate_grade(grade)?;
        self.letter_grade = LetterGrade::from_grade(self.grade);
        Ok(())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.2} ({})", self.name, self.grade, self.letter_grade)
    }
}

fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed)
}

/// Accept a finite grade within [`bounds::MIN`, `bounds::MAX`].
pub fn validate_grade(grade: f64) -> Result<f64, ValidationError> {
    if grade.is_finite() && (bounds::MIN..=bounds::MAX).contains(&grade) {
        Ok(grade)
    } else {
        Err(ValidationError::OutOfRange(grade))
    }
}
