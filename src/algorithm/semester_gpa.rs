use crate::algorithm::grades::FIVE_POINT;
use crate::algorithm::{check_units, round2};
use crate::error::PlannerResult;
use crate::models::{Grade, GpaStatus, RecordedCourse, SemesterGpa};

/// Qualitative band for a GPA on the 5-point scale.
pub fn gpa_status(gpa: f64) -> GpaStatus {
    if gpa >= 4.5 {
        GpaStatus::Excellent
    } else if gpa >= 4.0 {
        GpaStatus::VeryGood
    } else if gpa >= 3.5 {
        GpaStatus::Good
    } else if gpa >= 3.0 {
        GpaStatus::Fair
    } else {
        GpaStatus::NeedsImprovement
    }
}

fn present(grade: &Option<String>) -> Option<&str> {
    grade.as_deref().map(str::trim).filter(|g| !g.is_empty())
}

/// Points earned by a recorded course: the actual grade if there is one,
/// otherwise the target grade, otherwise C. Letters outside the 5-point scale
/// earn 0.
fn course_points(course: &RecordedCourse) -> u8 {
    let letter = present(&course.actual_grade).or(present(&course.target_grade)).unwrap_or("C");
    letter
        .parse::<Grade>()
        .ok()
        .and_then(|g| FIVE_POINT.points_of(g))
        .unwrap_or(0)
}

/// Unit-weighted GPA of a semester's recorded courses. An empty semester has
/// GPA 0.
pub fn semester_gpa(courses: &[RecordedCourse]) -> PlannerResult<SemesterGpa> {
    for (i, c) in courses.iter().enumerate() {
        check_units(i, c.units)?;
    }
    let total_units: f64 = courses.iter().map(|c| c.units).sum();
    let gpa = if total_units == 0.0 {
        0.0
    } else {
        let total_points: f64 = courses.iter().map(|c| f64::from(course_points(c)) * c.units).sum();
        round2(total_points / total_units)
    };
    Ok(SemesterGpa { gpa, total_units, status: gpa_status(gpa) })
}
