//! Greedy grade-combination search.
//!
//! Starting with every course at the floor of the grade scale, the analyzer
//! repeatedly bumps the heaviest course that can still improve by one grade
//! until the unit-weighted GPA reaches the target. Heavier courses move the
//! average the most per step, so this approximates the least-effort
//! combination. It is a heuristic: a different set of upgrades with the same
//! count may also reach the target.
//!
//! Ties on units go to the course that appears first in the request.

use tracing::debug;

use crate::algorithm::grades::{GradeScale, FIVE_POINT};
use crate::algorithm::{check_course_units, round2};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{AnalysisStatus, CourseLoad, GradeCombination, GradedCourse, UpgradeStep};

/// Hard bound on upgrade steps per analysis.
pub const MAX_ITERATIONS: usize = 100;

/// Runs the greedy search with the standard iteration cap.
pub fn analyze_grade_combination(
    courses: &[CourseLoad],
    target_semester_gpa: f64,
    scale: &GradeScale,
) -> PlannerResult<GradeCombination> {
    analyze_with_cap(courses, target_semester_gpa, scale, MAX_ITERATIONS)
}

pub fn analyze_with_cap(
    courses: &[CourseLoad],
    target_semester_gpa: f64,
    scale: &GradeScale,
    max_iterations: usize,
) -> PlannerResult<GradeCombination> {
    check_course_units(courses)?;
    // the target is bounded by the reporting scale, not the search scale, so a
    // search scale that tops out lower can end up `Unreachable`
    let scale_max = FIVE_POINT.max_gpa();
    if !target_semester_gpa.is_finite() || target_semester_gpa < 0.0 || target_semester_gpa > scale_max {
        return Err(PlannerError::invalid(
            "targetSemesterGPA",
            format!("must be between 0 and {}, got {}", scale_max, target_semester_gpa),
        ));
    }

    let floor = scale.floor();
    let mut combination: Vec<GradedCourse> = courses
        .iter()
        .map(|c| GradedCourse { name: c.name.clone(), units: c.units, grade: floor.grade, points: floor.points })
        .collect();
    let total_units: f64 = combination.iter().map(|c| c.units).sum();

    let mut gpa = weighted_gpa(&combination, total_units);
    let mut upgrades: Vec<UpgradeStep> = Vec::new();

    let status = loop {
        if gpa >= target_semester_gpa {
            break AnalysisStatus::Achieved;
        }
        let Some(idx) = next_candidate(&combination, scale) else {
            break AnalysisStatus::Unreachable;
        };
        if upgrades.len() >= max_iterations {
            break AnalysisStatus::CapExceeded;
        }
        let Some(next) = scale.step_up(combination[idx].grade) else {
            break AnalysisStatus::Unreachable;
        };

        let course = &mut combination[idx];
        let from = course.grade;
        course.grade = next.grade;
        course.points = next.points;
        gpa = weighted_gpa(&combination, total_units);

        debug!(course = idx, %from, to = %next.grade, gpa, "upgraded course");
        upgrades.push(UpgradeStep {
            course: idx,
            name: combination[idx].name.clone(),
            from,
            to: next.grade,
            gpa_after: round2(gpa),
        });
    };

    debug!(?status, steps = upgrades.len(), gpa, target = target_semester_gpa, "grade combination analysis finished");

    Ok(GradeCombination {
        achieved_gpa: round2(gpa),
        grade_combination: combination,
        is_achievable: status == AnalysisStatus::Achieved,
        status,
        upgrades,
    })
}

fn weighted_gpa(combination: &[GradedCourse], total_units: f64) -> f64 {
    let total_points: f64 = combination.iter().map(|c| f64::from(c.points) * c.units).sum();
    total_points / total_units
}

/// Index of the heaviest course not yet at the top grade; first wins on ties.
fn next_candidate(combination: &[GradedCourse], scale: &GradeScale) -> Option<usize> {
    let top = scale.max_points();
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in combination.iter().enumerate() {
        if c.points >= top {
            continue;
        }
        match best {
            Some((_, units)) if c.units <= units => {}
            _ => best = Some((i, c.units)),
        }
    }
    best.map(|(i, _)| i)
}
