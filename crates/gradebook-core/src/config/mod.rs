//! Configuration constants.
//!
//! This module groups the fixed values the roster and its presentation rely on:
//! - Grade bounds and letter thresholds
//! - Display precisions
//! - The sample roster loaded at startup

/// Valid grade range and letter-grade thresholds.
///
/// Each threshold is the inclusive lower bound of its letter.
pub mod grade {
    /// Lowest accepted grade.
    pub const MIN: f64 = 0.0;

    /// Highest accepted grade.
    pub const MAX: f64 = 100.0;

    pub const A_THRESHOLD: f64 = 90.0;
    pub const B_THRESHOLD: f64 = 80.0;
    pub const C_THRESHOLD: f64 = 70.0;
    pub const D_THRESHOLD: f64 = 60.0;
}

/// Decimal places used when rendering numbers.
pub mod display {
    /// Grade column in the record table.
    pub const GRADE_PRECISION: usize = 1;

    /// Average, highest and lowest in the summary panel.
    pub const STATS_PRECISION: usize = 2;
}

/// Students seeded into a fresh roster, in insertion order.
pub const SAMPLE_STUDENTS: [(&str, f64); 5] = [
    ("Alice Johnson", 92.5),
    ("Bob Smith", 87.0),
    ("Carol Brown", 94.5),
    ("David Wilson", 78.5),
    ("Emma Davis", 89.0),
];
