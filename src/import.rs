use std::path::Path;

use anyhow::Context;

use crate::models::{CourseEntry, Grade};

/// Reads course entries from a CSV with `grade,credit` headers. An empty or
/// `-` grade cell marks an unfilled slot; an empty credit cell reads as zero.
/// Unrecognized grade symbols are an error, not a skip.
pub fn read_courses_csv(path: &Path) -> anyhow::Result<Vec<CourseEntry>> {
    #[derive(serde::Deserialize)]
    struct CourseRow {
        grade: String,
        credit: Option<f64>,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut entries = Vec::new();

    for (index, result) in reader.deserialize::<CourseRow>().enumerate() {
        let row = result.with_context(|| format!("bad course row {}", index + 1))?;
        let grade = match row.grade.trim() {
            "" | "-" => None,
            symbol => Some(Grade::from_symbol(symbol).with_context(|| {
                format!("unrecognized grade '{}' on row {}", symbol, index + 1)
            })?),
        };
        entries.push(CourseEntry {
            grade,
            credit: row.credit.unwrap_or(0.0),
        });
    }

    Ok(entries)
}

/// Reads recorded semester values from a CSV with an `sgpa` header column.
pub fn read_semesters_csv(path: &Path) -> anyhow::Result<Vec<f64>> {
    #[derive(serde::Deserialize)]
    struct SemesterRow {
        sgpa: f64,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut values = Vec::new();

    for (index, result) in reader.deserialize::<SemesterRow>().enumerate() {
        let row = result.with_context(|| format!("bad semester row {}", index + 1))?;
        values.push(row.sgpa);
    }

    Ok(values)
}
