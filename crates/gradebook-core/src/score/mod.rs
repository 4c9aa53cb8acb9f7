//! Student records and letter grades.
//!
//! - `LetterGrade` - A/B/C/D/F classification of a numeric grade
//! - `Student`, `StudentId` - a validated record with its derived letter

mod letter;
mod student;

pub use letter::*;
pub use student::*;
