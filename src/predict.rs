use crate::advice::{self, TipSource};
use crate::error::PlannerError;
use crate::ledger::{Ledger, MAX_SEMESTERS};
use crate::models::{Feasibility, ProjectionResult};

/// Solves for the average SGPA needed over the remaining semesters to land
/// the blended cumulative average on `desired_cgpa`:
///
/// `required = (desired * (n + m) - sum) / m`
///
/// With an empty ledger this degenerates to `required = desired_cgpa`, which
/// makes a standalone planning query work before any semester is recorded.
/// Feasibility and the effort tier are decided on the unclamped value;
/// clamping to [0, 5] is display-only.
pub fn project(
    desired_cgpa: f64,
    remaining: usize,
    ledger: &Ledger,
    tips: &mut dyn TipSource,
) -> Result<ProjectionResult, PlannerError> {
    if !(0.0..=5.0).contains(&desired_cgpa) {
        return Err(PlannerError::InvalidTargetCgpa(desired_cgpa));
    }

    let max_remaining = if ledger.is_empty() {
        MAX_SEMESTERS
    } else {
        ledger.remaining_capacity()
    };
    if remaining < 1 || remaining > max_remaining {
        return Err(PlannerError::InvalidSemesterCount {
            got: remaining,
            max: max_remaining,
        });
    }

    let n = ledger.len() as f64;
    let m = remaining as f64;
    let required = (desired_cgpa * (n + m) - ledger.total()) / m;

    let result = if required > 5.0 {
        ProjectionResult {
            required,
            feasibility: Feasibility::ExceedsMaximum,
            tier: None,
            advice: advice::NOT_ACHIEVABLE.to_string(),
            tip: None,
        }
    } else if required <= 0.0 {
        ProjectionResult {
            required,
            feasibility: Feasibility::AlreadyAchieved,
            tier: None,
            advice: advice::ALREADY_ACHIEVED.to_string(),
            tip: None,
        }
    } else {
        let tier = advice::classify(required);
        ProjectionResult {
            required,
            feasibility: Feasibility::Achievable,
            tier: Some(tier),
            advice: advice::tier_advice(tier).to_string(),
            tip: Some(advice::pick_tip(tier, tips).to_string()),
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::SeededTips;
    use crate::models::EffortTier;

    fn tips() -> SeededTips {
        SeededTips::new(1)
    }

    #[test]
    fn empty_ledger_degenerates_to_the_target() {
        let ledger = Ledger::new();
        let result = project(4.5, 3, &ledger, &mut tips()).unwrap();
        assert_eq!(result.required, 4.5);
        assert_eq!(result.feasibility, Feasibility::Achievable);
        assert_eq!(result.tier, Some(EffortTier::Intense));
    }

    #[test]
    fn blends_recorded_semesters_into_the_requirement() {
        let ledger = Ledger::from_values(&[3.0, 4.0]).unwrap();
        let result = project(4.0, 2, &ledger, &mut tips()).unwrap();
        // (4.0 * 4 - 7.0) / 2 = 4.5
        assert_eq!(result.required, 4.5);
        assert_eq!(result.tier, Some(EffortTier::Intense));
        assert!(result.tip.is_some());
    }

    #[test]
    fn unreachable_target_exceeds_maximum() {
        let ledger = Ledger::from_values(&[1.0, 1.0, 1.0]).unwrap();
        let result = project(4.5, 2, &ledger, &mut tips()).unwrap();
        assert!(result.required > 5.0);
        assert_eq!(result.feasibility, Feasibility::ExceedsMaximum);
        assert_eq!(result.tier, None);
        assert_eq!(result.display_required(), 5.0);
    }

    #[test]
    fn satisfied_target_is_already_achieved() {
        let ledger = Ledger::from_values(&[5.0, 5.0, 5.0]).unwrap();
        let result = project(2.0, 2, &ledger, &mut tips()).unwrap();
        assert!(result.required <= 0.0);
        assert_eq!(result.feasibility, Feasibility::AlreadyAchieved);
        assert_eq!(result.display_required(), 0.0);
    }

    #[test]
    fn target_outside_the_scale_is_rejected() {
        let ledger = Ledger::new();
        assert_eq!(
            project(5.1, 2, &ledger, &mut tips()),
            Err(PlannerError::InvalidTargetCgpa(5.1))
        );
        assert_eq!(
            project(-0.1, 2, &ledger, &mut tips()),
            Err(PlannerError::InvalidTargetCgpa(-0.1))
        );
    }

    #[test]
    fn remaining_count_is_bounded_by_capacity() {
        let empty = Ledger::new();
        assert_eq!(
            project(4.0, 0, &empty, &mut tips()),
            Err(PlannerError::InvalidSemesterCount { got: 0, max: 10 })
        );
        assert_eq!(
            project(4.0, 11, &empty, &mut tips()),
            Err(PlannerError::InvalidSemesterCount { got: 11, max: 10 })
        );

        let two_recorded = Ledger::from_values(&[4.0, 4.0]).unwrap();
        assert_eq!(
            project(4.0, 9, &two_recorded, &mut tips()),
            Err(PlannerError::InvalidSemesterCount { got: 9, max: 8 })
        );
        assert!(project(4.0, 8, &two_recorded, &mut tips()).is_ok());
    }

    #[test]
    fn tip_seed_never_changes_the_numbers() {
        let ledger = Ledger::from_values(&[3.0, 4.0]).unwrap();
        let first = project(4.0, 2, &ledger, &mut SeededTips::new(1)).unwrap();
        let second = project(4.0, 2, &ledger, &mut SeededTips::new(987_654_321)).unwrap();
        assert_eq!(first.required, second.required);
        assert_eq!(first.feasibility, second.feasibility);
        assert_eq!(first.tier, second.tier);
    }

    #[test]
    fn exact_maximum_requirement_is_still_achievable() {
        let ledger = Ledger::from_values(&[4.0]).unwrap();
        // (4.5 * 2 - 4.0) / 1 = 5.0
        let result = project(4.5, 1, &ledger, &mut tips()).unwrap();
        assert_eq!(result.required, 5.0);
        assert_eq!(result.feasibility, Feasibility::Achievable);
        assert_eq!(result.tier, Some(EffortTier::Maximum));
    }
}
