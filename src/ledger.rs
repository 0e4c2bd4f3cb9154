use crate::error::PlannerError;
use crate::models::SemesterRecord;

/// Hard cap on recorded semesters: the programme is ten semesters long.
pub const MAX_SEMESTERS: usize = 10;

/// The single source of truth for committed semester results for one
/// planning session. Records stay dense and 1-based: removing a semester
/// compacts the run and renumbers everything after it.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    records: Vec<SemesterRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[f64]) -> Result<Self, PlannerError> {
        let mut ledger = Self::new();
        for &value in values {
            ledger.append(value)?;
        }
        Ok(ledger)
    }

    pub fn append(&mut self, sgpa: f64) -> Result<SemesterRecord, PlannerError> {
        if !(0.0..=5.0).contains(&sgpa) {
            return Err(PlannerError::SgpaOutOfRange(sgpa));
        }
        if self.records.len() >= MAX_SEMESTERS {
            return Err(PlannerError::LedgerFull(MAX_SEMESTERS));
        }
        let record = SemesterRecord {
            semester: self.records.len() + 1,
            sgpa,
        };
        self.records.push(record);
        Ok(record)
    }

    pub fn remove_at(&mut self, semester: usize) -> Result<(), PlannerError> {
        if semester == 0 || semester > self.records.len() {
            return Err(PlannerError::NotFound(semester));
        }
        self.records.remove(semester - 1);
        for (index, record) in self.records.iter_mut().enumerate() {
            record.semester = index + 1;
        }
        Ok(())
    }

    /// Unweighted mean of all recorded SGPAs. Each semester counts once,
    /// regardless of its credit load.
    pub fn cgpa(&self) -> Result<f64, PlannerError> {
        if self.records.is_empty() {
            return Err(PlannerError::EmptyLedger);
        }
        Ok(self.total() / self.records.len() as f64)
    }

    /// Running cumulative average after each recorded semester, in order.
    pub fn cumulative_trend(&self) -> Vec<f64> {
        let mut trend = Vec::with_capacity(self.records.len());
        let mut sum = 0.0;
        for (index, record) in self.records.iter().enumerate() {
            sum += record.sgpa;
            trend.push(sum / (index + 1) as f64);
        }
        trend
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_SEMESTERS - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SemesterRecord] {
        &self.records
    }

    pub fn total(&self) -> f64 {
        self.records.iter().map(|record| record.sgpa).sum()
    }
}
