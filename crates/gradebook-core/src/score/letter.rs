use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};

use crate::config::grade as thresholds;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Classify a numeric grade. Lower bounds are inclusive.
    ///
    /// Total over [0, 100]; anything that fails every threshold (including
    /// NaN) lands in `F`.
    pub fn from_grade(grade: f64) -> Self {
        if grade >= thresholds::A_THRESHOLD {
            Self::A
        } else if grade >= thresholds::B_THRESHOLD {
            Self::B
        } else if grade >= thresholds::C_THRESHOLD {
            Self::C
        } else if grade >= thresholds::D_THRESHOLD {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Shorthand for [`LetterGrade::from_grade`].
pub fn classify(grade: f64) -> LetterGrade {
    LetterGrade::from_grade(grade)
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
