//! The ordered student collection and its aggregate operations.
//!
//! - `Roster` - insertion-ordered students with add/remove/update
//! - `Stats` - count, average, highest, lowest
//! - `RosterEvent`, `RosterObserver` - change notification for live views

mod events;
mod stats;

pub use events::*;
pub use stats::*;

use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::config::SAMPLE_STUDENTS;
use crate::error::ValidationError;
use crate::score::{LetterGrade, Student, StudentId};

#[derive(Default)]
pub struct Roster {
    students: Vec<Student>,
    observers: Vec<Box<dyn RosterObserver>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster preloaded with the five sample students.
    pub fn with_sample_data() -> Self {
        let mut roster = Self::new();
        for (name, grade) in SAMPLE_STUDENTS {
            if let Err(e) = roster.add(name, grade) {
                warn!("Skipping sample student {}: {}", name, e);
            }
        }
        roster
    }

    /// Register an observer for subsequent changes.
    pub fn subscribe(&mut self, observer: impl RosterObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Validate and append a student, returning the stored record.
    ///
    /// The roster is unchanged when validation fails.
    pub fn add(&mut self, name: impl AsRef<str>, grade: f64) -> Result<&Student, ValidationError> {
        let student = Student::new(name, grade)?;
        debug!("Added {} {}", student.id(), student);
        self.students.push(student.clone());
        self.notify(RosterEvent::Added(student));
        Ok(&self.students[self.students.len() - 1])
    }

    /// Remove the first student with the same identity. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, student: &Student) -> bool {
        self.remove_by_id(student.id()).is_some()
    }

    pub fn remove_by_id(&mut self, id: StudentId) -> Option<Student> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Student> {
        if index >= self.students.len() {
            return None;
        }
        let removed = self.students.remove(index);
        debug!("Removed {} {}", removed.id(), removed);
        self.notify(RosterEvent::Removed(removed.clone()));
        Some(removed)
    }

    /// Change a student's grade in place.
    ///
    /// Returns `Ok(false)` when no student has the given id.
    pub fn update_grade(&mut self, id: StudentId, grade: f64) -> Result<bool, ValidationError> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        let student = &mut self.students[index];
        let previous = student.grade();
        student.set_grade(grade)?;
        debug!("Updated {} {} -> {}", id, previous, grade);
        self.notify(RosterEvent::GradeChanged {
            id,
            previous,
            current: grade,
        });
        Ok(true)
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }

    /// Most recently added student still present.
    pub fn last(&self) -> Option<&Student> {
        self.students.last()
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn statistics(&self) -> Stats {
        Stats::from_students(&self.students)
    }

    /// Number of students per letter, in A to F order.
    pub fn letter_distribution(&self) -> Vec<(LetterGrade, usize)> {
        LetterGrade::iter()
            .map(|letter| {
                let count = self
                    .students
                    .iter()
                    .filter(|s| s.letter_grade() == letter)
                    .count();
                (letter, count)
            })
            .collect()
    }

    fn notify(&mut self, event: RosterEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roster")
            .field("students", &self.students)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(roster: &mut Roster) -> Rc<RefCell<Vec<RosterEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        roster.subscribe(move |event: &RosterEvent| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut roster = Roster::new();
        roster.add("First", 10.0).unwrap();
        let second = roster.add("Second", 20.0).unwrap().clone();

        assert_eq!(roster.count(), 2);
        assert_eq!(roster.last(), Some(&second));
        let names: Vec<_> = roster.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn test_add_failure_leaves_roster_unchanged() {
        let mut roster = Roster::with_sample_data();
        let before = roster.statistics();

        assert_eq!(roster.add("", 50.0).unwrap_err(), ValidationError::EmptyName);
        assert_eq!(
            roster.add("Frank", 101.0).unwrap_err(),
            ValidationError::OutOfRange(101.0)
        );
        assert_eq!(roster.count(), 5);
        assert_eq!(roster.statistics(), before);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut roster = Roster::new();
        let twin_a = roster.add("Twin", 75.0).unwrap().clone();
        let twin_b = roster.add("Twin", 75.0).unwrap().clone();

        assert!(roster.remove(&twin_b));
        assert_eq!(roster.list(), [twin_a.clone()]);
        assert!(!roster.remove(&twin_b));
        assert_eq!(roster.count(), 1);
    }

    #[test]
    fn test_remove_at_out_of_bounds() {
        let mut roster = Roster::with_sample_data();
        assert!(roster.remove_at(5).is_none());
        let removed = roster.remove_at(0).unwrap();
        assert_eq!(removed.name(), "Alice Johnson");
        assert_eq!(roster.count(), 4);
    }

    #[test]
    fn test_update_grade() {
        let mut roster = Roster::new();
        let id = roster.add("Grace", 59.0).unwrap().id();
        assert_eq!(roster.find(id).unwrap().letter_grade(), LetterGrade::F);

        assert_eq!(roster.update_grade(id, 91.0), Ok(true));
        let student = roster.find(id).unwrap();
        assert_eq!(student.grade(), 91.0);
        assert_eq!(student.letter_grade(), LetterGrade::A);

        assert_eq!(
            roster.update_grade(id, -3.0),
            Err(ValidationError::OutOfRange(-3.0))
        );
        assert_eq!(roster.find(id).unwrap().grade(), 91.0);
    }

    #[test]
    fn test_update_grade_unknown_id() {
        let mut roster = Roster::new();
        let outsider = Student::new("Outsider", 50.0).unwrap();
        assert_eq!(roster.update_grade(outsider.id(), 60.0), Ok(false));
    }

    #[test]
    fn test_observers_see_successful_mutations_only() {
        let mut roster = Roster::new();
        let events = recording(&mut roster);

        let id = roster.add("Heidi", 88.0).unwrap().id();
        let _ = roster.add(" ", 88.0);
        let _ = roster.update_grade(id, 150.0);
        roster.update_grade(id, 72.0).unwrap();
        roster.remove_at(3);
        roster.remove_by_id(id);

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], RosterEvent::Added(s) if s.id() == id));
        assert_eq!(
            events[1],
            RosterEvent::GradeChanged {
                id,
                previous: 88.0,
                current: 72.0
            }
        );
        assert!(matches!(&events[2], RosterEvent::Removed(s) if s.grade() == 72.0));
    }

    #[test]
    fn test_letter_distribution() {
        let roster = Roster::with_sample_data();
        let distribution = roster.letter_distribution();
        assert_eq!(
            distribution,
            vec![
                (LetterGrade::A, 2),
                (LetterGrade::B, 2),
                (LetterGrade::C, 1),
                (LetterGrade::D, 0),
                (LetterGrade::F, 0),
            ]
        );
    }

    #[test]
    fn test_sample_data_is_complete() {
        let roster = Roster::with_sample_data();
        assert_eq!(roster.count(), SAMPLE_STUDENTS.len());
        for (student, (name, grade)) in roster.iter().zip(SAMPLE_STUDENTS) {
            assert_eq!(student.name(), name);
            assert_eq!(student.grade(), grade);
        }
    }

    #[test]
    fn test_statistics_idempotent() {
        let roster = Roster::with_sample_data();
        assert_eq!(roster.statistics(), roster.statistics());
    }
}
