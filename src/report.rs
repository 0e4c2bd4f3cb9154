use std::fmt::Write;

use chrono::Utc;

use crate::ledger::Ledger;
use crate::models::{Feasibility, ProjectionResult};

pub struct ProjectionSection<'a> {
    pub target: f64,
    pub remaining: usize,
    pub result: &'a ProjectionResult,
}

pub fn build_report(
    name: Option<&str>,
    ledger: &Ledger,
    projection: Option<ProjectionSection<'_>>,
) -> String {
    let mut output = String::new();
    let student = name.unwrap_or("the student");

    let _ = writeln!(output, "# Academic Performance Report");
    let _ = writeln!(
        output,
        "Generated for {} on {}",
        student,
        Utc::now().date_naive()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Semester Ledger");

    if ledger.is_empty() {
        let _ = writeln!(output, "No semesters recorded yet.");
    } else {
        for record in ledger.records() {
            let _ = writeln!(output, "- Semester {}: {:.2}", record.semester, record.sgpa);
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "## Cumulative Average");
        if let Ok(cgpa) = ledger.cgpa() {
            let _ = writeln!(
                output,
                "CGPA across {} semesters: {:.2} ({} remaining)",
                ledger.len(),
                cgpa,
                ledger.remaining_capacity()
            );
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "## Running Trend");
        for (record, average) in ledger.records().iter().zip(ledger.cumulative_trend()) {
            let _ = writeln!(
                output,
                "- After semester {}: {:.2}",
                record.semester, average
            );
        }
    }

    if let Some(section) = projection {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Target Projection");
        let _ = writeln!(output, "- Target CGPA: {:.2}", section.target);
        let _ = writeln!(output, "- Remaining semesters: {}", section.remaining);
        let _ = writeln!(
            output,
            "- Required average SGPA: {:.2}",
            section.result.display_required()
        );
        match section.result.feasibility {
            Feasibility::ExceedsMaximum => {
                let _ = writeln!(output, "- Feasibility: not achievable");
            }
            Feasibility::AlreadyAchieved => {
                let _ = writeln!(output, "- Feasibility: already achieved");
            }
            Feasibility::Achievable => {
                if let Some(tier) = section.result.tier {
                    let _ = writeln!(
                        output,
                        "- Feasibility: achievable with {}",
                        crate::advice::tier_label(tier)
                    );
                }
            }
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", section.result.advice);
        if let Some(tip) = &section.result.tip {
            let _ = writeln!(output, "Tip: {tip}");
        }
    }

    output
}
