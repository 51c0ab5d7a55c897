//! Type definitions for line comparison

use serde::Serialize;

/// One positional row of a comparison.
///
/// A side that ran out of lines is reported as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    pub old_line: String,
    pub new_line: String,
    pub is_different: bool,
}

impl DiffRow {
    pub fn new(old_line: impl Into<String>, new_line: impl Into<String>) -> Self {
        let old_line = old_line.into();
        let new_line = new_line.into();
        let is_different = old_line != new_line;
        Self {
            old_line,
            new_line,
            is_different,
        }
    }
}

/// Counts over a set of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub total: usize,
    pub same: usize,
    pub different: usize,
}

impl DiffSummary {
    pub fn is_identical(&self) -> bool {
        self.different == 0
    }
}
