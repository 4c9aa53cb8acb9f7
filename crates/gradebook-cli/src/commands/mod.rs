//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod add;
pub mod interactive;
pub mod list;
pub mod remove;
pub mod report;
pub mod set_grade;
pub mod stats;
