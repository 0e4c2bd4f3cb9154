use serde::Serialize;

/// Letter grade on the fixed six-symbol scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub fn points(self) -> u8 {
        match self {
            Grade::A => 5,
            Grade::B => 4,
            Grade::C => 3,
            Grade::D => 2,
            Grade::E => 1,
            Grade::F => 0,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Grade> {
        match symbol.trim() {
            "A" | "a" => Some(Grade::A),
            "B" | "b" => Some(Grade::B),
            "C" | "c" => Some(Grade::C),
            "D" | "d" => Some(Grade::D),
            "E" | "e" => Some(Grade::E),
            "F" | "f" => Some(Grade::F),
            _ => None,
        }
    }
}

/// One course slot on the semester form. A slot with no grade or a
/// non-positive credit is treated as unfilled and skipped.
#[derive(Debug, Clone, Copy)]
pub struct CourseEntry {
    pub grade: Option<Grade>,
    pub credit: f64,
}

/// A committed semester result. Positions are 1-based and dense:
/// removal renumbers everything after the gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemesterRecord {
    pub semester: usize,
    pub sgpa: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feasibility {
    Achievable,
    AlreadyAchieved,
    ExceedsMaximum,
}

/// How hard a required average SGPA is to attain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EffortTier {
    Light,
    Moderate,
    Elevated,
    High,
    Intense,
    Maximum,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// Unclamped solution of the target equation. Clamp with
    /// `display_required` before showing it to a user.
    pub required: f64,
    pub feasibility: Feasibility,
    pub tier: Option<EffortTier>,
    pub advice: String,
    pub tip: Option<String>,
}

impl ProjectionResult {
    pub fn display_required(&self) -> f64 {
        self.required.clamp(0.0, 5.0)
    }
}
