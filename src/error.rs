use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    #[error("no valid courses: every entry is missing a grade or has a non-positive credit")]
    NoValidCourses,

    #[error("sgpa {0} is outside the valid range 0.0..=5.0")]
    SgpaOutOfRange(f64),

    #[error("ledger is full: all {0} semesters are already recorded")]
    LedgerFull(usize),

    #[error("no semester recorded at position {0}")]
    NotFound(usize),

    #[error("ledger is empty")]
    EmptyLedger,

    #[error("remaining semesters must be between 1 and {max}, got {got}")]
    InvalidSemesterCount { got: usize, max: usize },

    #[error("target cgpa {0} is outside the valid range 0.0..=5.0")]
    InvalidTargetCgpa(f64),
}
