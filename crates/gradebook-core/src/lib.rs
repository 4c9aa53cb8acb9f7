pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod roster;
pub mod score;
pub mod storage;

pub use error::{Error, Result, ValidationError};
pub use export::{RosterReport, StudentRecord};
pub use input::{parse_grade, parse_name, parse_student_fields};
pub use roster::{Roster, RosterEvent, RosterObserver, Stats};
pub use score::{LetterGrade, Student, StudentId, classify};
pub use storage::{RosterFile, StoredStudent, load_roster, save_roster};
