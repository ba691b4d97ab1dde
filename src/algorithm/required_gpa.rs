use tracing::debug;

use crate::algorithm::grades::FIVE_POINT;
use crate::algorithm::{check_finite, round2};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{AcademicStanding, RequiredGpa};

/// Semester GPA needed so that, after `semester_credits` more credits, the
/// cumulative GPA lands exactly on `desired_cgpa`.
///
/// `required = (desired * (completed + semester) - current * completed) / semester`
///
/// `is_achievable` is evaluated on the unrounded value against `[0, 5.0]`. A
/// negative requirement means the goal is already exceeded, above the scale
/// maximum means it cannot be reached in one semester; both report `false`
/// and the caller can tell them apart from the sign of the number.
pub fn compute_required_gpa(standing: &AcademicStanding) -> PlannerResult<RequiredGpa> {
    check_finite("currentCGPA", standing.current_cgpa)?;
    check_finite("creditsCompleted", standing.credits_completed)?;
    check_finite("desiredCGPA", standing.desired_cgpa)?;
    check_finite("semesterCredits", standing.semester_credits)?;
    if standing.semester_credits <= 0.0 {
        return Err(PlannerError::invalid("semesterCredits", "must be greater than 0"));
    }

    let total_credits = standing.credits_completed + standing.semester_credits;
    let required_points = standing.desired_cgpa * total_credits;
    let current_points = standing.current_cgpa * standing.credits_completed;
    let raw = (required_points - current_points) / standing.semester_credits;

    let is_achievable = (0.0..=FIVE_POINT.max_gpa()).contains(&raw);
    debug!(raw, is_achievable, "required semester gpa computed");

    Ok(RequiredGpa { required_semester_gpa: round2(raw), is_achievable, raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(current: f64, completed: f64, desired: f64, semester: f64) -> AcademicStanding {
        AcademicStanding {
            current_cgpa: current,
            credits_completed: completed,
            desired_cgpa: desired,
            semester_credits: semester,
        }
    }

    #[test]
    fn impossible_goal_above_scale() {
        let r = compute_required_gpa(&standing(3.0, 60.0, 3.5, 15.0)).unwrap();
        assert_eq!(r.required_semester_gpa, 5.5);
        assert!(!r.is_achievable);
    }

    #[test]
    fn reachable_goal() {
        let r = compute_required_gpa(&standing(3.0, 60.0, 3.2, 15.0)).unwrap();
        assert_eq!(r.required_semester_gpa, 4.0);
        assert!(r.is_achievable);
    }

    #[test]
    fn already_exceeded_goal_is_negative() {
        let r = compute_required_gpa(&standing(4.8, 90.0, 3.0, 10.0)).unwrap();
        assert!(r.required_semester_gpa < 0.0);
        assert!(!r.is_achievable);
    }

    #[test]
    fn first_semester_needs_exactly_the_goal() {
        let r = compute_required_gpa(&standing(0.0, 0.0, 4.25, 18.0)).unwrap();
        assert_eq!(r.required_semester_gpa, 4.25);
        assert!(r.is_achievable);
    }

    #[test]
    fn scale_edges_are_inclusive() {
        // 5.0 on 0 completed credits is exactly the scale maximum
        assert!(compute_required_gpa(&standing(0.0, 0.0, 5.0, 15.0)).unwrap().is_achievable);
        assert!(compute_required_gpa(&standing(0.0, 0.0, 0.0, 15.0)).unwrap().is_achievable);
    }

    #[test]
    fn rejects_zero_semester_credits() {
        let err = compute_required_gpa(&standing(3.0, 60.0, 3.2, 0.0)).unwrap_err();
        assert_eq!(err.field(), "semesterCredits");
        assert!(compute_required_gpa(&standing(3.0, 60.0, 3.2, -3.0)).is_err());
    }

    #[test]
    fn rejects_non_finite_input() {
        let err = compute_required_gpa(&standing(f64::NAN, 60.0, 3.2, 15.0)).unwrap_err();
        assert_eq!(err.field(), "currentCGPA");
        assert!(compute_required_gpa(&standing(3.0, f64::INFINITY, 3.2, 15.0)).is_err());
    }
}
