use tracing::debug;

use crate::algorithm::{check_course_units, check_finite, round2};
use crate::error::PlannerResult;
use crate::models::{CourseHours, CourseLoad, Grade, StudyHoursPlan};

/// Weekly study hours per unit for a target grade. Anything that is not A, B
/// or C (including D, F, unknown letters and a missing grade) gets the
/// minimum of 1 hour so a graded course never plans zero hours.
pub fn hours_per_unit(target_grade: Option<&str>) -> f64 {
    match target_grade.map(str::parse::<Grade>) {
        Some(Ok(Grade::A)) => 3.0,
        Some(Ok(Grade::B)) => 2.0,
        _ => 1.0,
    }
}

/// Scaling applied to the total for more ambitious cumulative targets.
///
/// | target CGPA   | multiplier |
/// |---------------|------------|
/// | >= 4.9        | 1.40       |
/// | [4.75, 4.9)   | 1.30       |
/// | [4.0, 4.75)   | 1.15       |
/// | < 4.0         | 1.00       |
///
/// Targets in [3.5, 4.0) deliberately get no bonus.
pub fn ambition_multiplier(target_cgpa: f64) -> f64 {
    if target_cgpa >= 4.9 {
        1.4
    } else if target_cgpa >= 4.75 {
        1.3
    } else if target_cgpa >= 4.0 {
        1.15
    } else {
        1.0
    }
}

/// Estimates weekly study hours for a course list.
///
/// The breakdown keeps the input order and echoes each course's name, units
/// and target grade. A single course with invalid units rejects the batch.
pub fn estimate_study_hours(courses: &[CourseLoad], target_cgpa: f64) -> PlannerResult<StudyHoursPlan> {
    check_course_units(courses)?;
    check_finite("targetCGPA", target_cgpa)?;

    let mut base_hours = 0.0;
    let course_breakdown: Vec<CourseHours> = courses
        .iter()
        .map(|c| {
            let hours = hours_per_unit(c.target_grade.as_deref()) * c.units;
            base_hours += hours;
            CourseHours {
                name: c.name.clone(),
                units: c.units,
                target_grade: c.target_grade.clone(),
                hours,
            }
        })
        .collect();

    let multiplier = ambition_multiplier(target_cgpa);
    let adjusted_total_hours = round2(base_hours * multiplier);
    debug!(base_hours, multiplier, adjusted_total_hours, courses = courses.len(), "study hours estimated");

    Ok(StudyHoursPlan {
        base_hours: round2(base_hours),
        adjusted_total_hours,
        course_breakdown,
        multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_table() {
        assert_eq!(hours_per_unit(Some("A")), 3.0);
        assert_eq!(hours_per_unit(Some("b")), 2.0);
        assert_eq!(hours_per_unit(Some("C")), 1.0);
        assert_eq!(hours_per_unit(Some("D")), 1.0);
        assert_eq!(hours_per_unit(Some("F")), 1.0);
        assert_eq!(hours_per_unit(Some("Z")), 1.0);
        assert_eq!(hours_per_unit(None), 1.0);
    }

    #[test]
    fn single_a_course_without_bonus() {
        let plan = estimate_study_hours(&[CourseLoad::with_target("Calc", 3.0, "A")], 3.0).unwrap();
        assert_eq!(plan.base_hours, 9.0);
        assert_eq!(plan.multiplier, 1.0);
        assert_eq!(plan.adjusted_total_hours, 9.0);
    }

    #[test]
    fn single_a_course_top_bonus() {
        let plan = estimate_study_hours(&[CourseLoad::with_target("Calc", 3.0, "A")], 4.9).unwrap();
        assert_eq!(plan.multiplier, 1.4);
        assert_eq!(plan.adjusted_total_hours, 12.6);
    }

    #[test]
    fn breakdown_keeps_order_and_identity() {
        let courses = vec![
            CourseLoad::with_target("Physics", 4.0, "B"),
            CourseLoad::with_target("History", 2.0, "C"),
            CourseLoad::with_target("Algebra", 3.0, "A"),
        ];
        let plan = estimate_study_hours(&courses, 4.0).unwrap();
        let names: Vec<&str> = plan.course_breakdown.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Physics", "History", "Algebra"]);
        let hours: Vec<f64> = plan.course_breakdown.iter().map(|c| c.hours).collect();
        assert_eq!(hours, vec![8.0, 2.0, 9.0]);
        assert_eq!(plan.course_breakdown[0].target_grade.as_deref(), Some("B"));
        assert_eq!(plan.course_breakdown[2].units, 3.0);
        assert_eq!(plan.base_hours, 19.0);
        assert_eq!(plan.adjusted_total_hours, 21.85);
    }

    #[test]
    fn breakdown_hours_are_not_rounded() {
        let plan = estimate_study_hours(&[CourseLoad::with_target("Seminar", 1.333, "B")], 3.0).unwrap();
        assert_eq!(plan.course_breakdown[0].hours, 2.0 * 1.333);
        assert_eq!(plan.base_hours, 2.67);
        assert_eq!(plan.adjusted_total_hours, 2.67);
    }

    #[test]
    fn invalid_units_reject_whole_batch() {
        let courses = vec![CourseLoad::with_target("Ok", 3.0, "A"), CourseLoad::with_target("Bad", -1.0, "B")];
        let err = estimate_study_hours(&courses, 4.0).unwrap_err();
        assert_eq!(err.field(), "courses[1].units");
    }

    #[test]
    fn empty_list_and_nan_target_rejected() {
        assert!(estimate_study_hours(&[], 4.0).is_err());
        let err = estimate_study_hours(&[CourseLoad::new("x", 1.0)], f64::NAN).unwrap_err();
        assert_eq!(err.field(), "targetCGPA");
    }
}
