// Planning engine: pure, synchronous calculations over plain records.
// Each submodule backs one `/api/planner/*` endpoint.
pub mod grades;
pub mod required_gpa;
pub mod study_hours;
pub mod grade_combination;
pub mod scenarios;
pub mod semester_gpa;

pub use grades::{GradePoint, GradeScale, FIVE_POINT, UPGRADE_PATH};
pub use required_gpa::compute_required_gpa;
pub use study_hours::{ambition_multiplier, estimate_study_hours, hours_per_unit};
pub use grade_combination::{analyze_grade_combination, analyze_with_cap, MAX_ITERATIONS};
pub use scenarios::{compare_scenarios, MAX_SCENARIOS};
pub use semester_gpa::{gpa_status, semester_gpa};

use crate::error::{PlannerError, PlannerResult};
use crate::models::CourseLoad;

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rejects the whole batch if it is empty or any course has units that are
/// not a finite positive number. The field names the offending index.
pub(crate) fn check_course_units(courses: &[CourseLoad]) -> PlannerResult<()> {
    if courses.is_empty() {
        return Err(PlannerError::invalid("courses", "must contain at least one course"));
    }
    for (i, c) in courses.iter().enumerate() {
        check_units(i, c.units)?;
    }
    Ok(())
}

pub(crate) fn check_units(index: usize, units: f64) -> PlannerResult<()> {
    if !units.is_finite() || units <= 0.0 {
        return Err(PlannerError::invalid(
            format!("courses[{}].units", index),
            format!("must be a positive number, got {}", units),
        ));
    }
    Ok(())
}

pub(crate) fn check_finite(field: &str, value: f64) -> PlannerResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlannerError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}
