use anyhow::{bail, Context};

use crate::error::PlannerError;
use crate::models::{CourseEntry, Grade};

/// Credit-weighted mean grade point for one semester.
///
/// Unfilled slots (no grade, or credit not strictly positive) are skipped
/// rather than rejected; they model the empty rows of a variable-length
/// course form. Fails only when nothing usable remains.
pub fn compute_sgpa(entries: &[CourseEntry]) -> Result<f64, PlannerError> {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    for entry in entries {
        let Some(grade) = entry.grade else {
            continue;
        };
        if !(entry.credit > 0.0) {
            continue;
        }
        total_points += f64::from(grade.points()) * entry.credit;
        total_credits += entry.credit;
    }

    if total_credits == 0.0 {
        return Err(PlannerError::NoValidCourses);
    }

    Ok(total_points / total_credits)
}

/// Parses a `GRADE:CREDIT` course argument, e.g. `A:3` or `B:1.5`.
/// An empty or `-` grade marks the slot unfilled; a missing credit reads
/// as zero, which `compute_sgpa` then skips.
pub fn parse_course_spec(spec: &str) -> anyhow::Result<CourseEntry> {
    let Some((grade_part, credit_part)) = spec.split_once(':') else {
        bail!("course '{spec}' must be GRADE:CREDIT, e.g. A:3");
    };

    let grade = match grade_part.trim() {
        "" | "-" => None,
        symbol => Some(
            Grade::from_symbol(symbol)
                .with_context(|| format!("unrecognized grade '{symbol}' in course '{spec}'"))?,
        ),
    };

    let credit = match credit_part.trim() {
        "" => 0.0,
        raw => raw
            .parse::<f64>()
            .with_context(|| format!("invalid credit '{raw}' in course '{spec}'"))?,
    };

    Ok(CourseEntry { grade, credit })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(grade: Grade, credit: f64) -> CourseEntry {
        CourseEntry {
            grade: Some(grade),
            credit,
        }
    }

    #[test]
    fn straight_a_semester_scores_five() {
        let entries = vec![entry(Grade::A, 3.0), entry(Grade::A, 2.0), entry(Grade::A, 4.0)];
        assert_eq!(compute_sgpa(&entries).unwrap(), 5.0);
    }

    #[test]
    fn all_failed_semester_scores_zero() {
        let entries = vec![entry(Grade::F, 3.0), entry(Grade::F, 1.5)];
        assert_eq!(compute_sgpa(&entries).unwrap(), 0.0);
    }

    #[test]
    fn weighted_by_credit() {
        // (5*3 + 3*1) / 4 = 4.5
        let entries = vec![entry(Grade::A, 3.0), entry(Grade::C, 1.0)];
        assert_eq!(compute_sgpa(&entries).unwrap(), 4.5);
    }

    #[test]
    fn order_of_entries_does_not_matter() {
        let forward = vec![entry(Grade::A, 2.0), entry(Grade::B, 3.0), entry(Grade::D, 1.0)];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(
            compute_sgpa(&forward).unwrap(),
            compute_sgpa(&reversed).unwrap()
        );
    }

    #[test]
    fn splitting_a_course_preserves_the_result() {
        let merged = vec![entry(Grade::B, 4.0), entry(Grade::A, 2.0)];
        let split = vec![entry(Grade::B, 2.0), entry(Grade::B, 2.0), entry(Grade::A, 2.0)];
        assert!((compute_sgpa(&merged).unwrap() - compute_sgpa(&split).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn unfilled_slots_are_skipped() {
        let entries = vec![
            entry(Grade::A, 3.0),
            CourseEntry {
                grade: None,
                credit: 3.0,
            },
            entry(Grade::B, 0.0),
            entry(Grade::C, -1.0),
        ];
        assert_eq!(compute_sgpa(&entries).unwrap(), 5.0);
    }

    #[test]
    fn fails_when_no_slot_is_usable() {
        let entries = vec![
            CourseEntry {
                grade: None,
                credit: 2.0,
            },
            entry(Grade::A, 0.0),
        ];
        assert_eq!(compute_sgpa(&entries), Err(PlannerError::NoValidCourses));
        assert_eq!(compute_sgpa(&[]), Err(PlannerError::NoValidCourses));
    }

    #[test]
    fn fractional_credits_are_accepted() {
        let entries = vec![entry(Grade::A, 1.5), entry(Grade::F, 1.5)];
        assert_eq!(compute_sgpa(&entries).unwrap(), 2.5);
    }

    #[test]
    fn parses_course_specs() {
        let parsed = parse_course_spec("A:3").unwrap();
        assert_eq!(parsed.grade, Some(Grade::A));
        assert_eq!(parsed.credit, 3.0);

        let blank = parse_course_spec("-:2").unwrap();
        assert_eq!(blank.grade, None);

        let no_credit = parse_course_spec("B:").unwrap();
        assert_eq!(no_credit.credit, 0.0);

        assert!(parse_course_spec("A-3").is_err());
        assert!(parse_course_spec("X:3").is_err());
        assert!(parse_course_spec("A:three").is_err());
    }
}
