//! JSON request contract for the `/api/planner/*` endpoints.
//!
//! Requests are deserialized leniently (numbers may arrive as strings, as
//! form submissions produce them) and then validated into the plain core
//! records. Every rule that fails is reported, not just the first one.
//!
//! Example body for `POST /api/planner/analyze-grades`:
//! ```json
//! {
//!   "courses": [
//!     { "name": "Calculus II", "units": 3 },
//!     { "name": "Lab", "units": "1" }
//!   ],
//!   "targetSemesterGPA": 4.0
//! }
//! ```

pub mod handlers;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldError};
use crate::models::{AcademicStanding, CourseLoad, Grade, RecordedCourse, Scenario};

/// A numeric field as submitted: a JSON number or a string holding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// The finite numeric value, if there is one.
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for NumberInput {
    fn from(v: f64) -> Self {
        NumberInput::Number(v)
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GpaCalculationRequest {
    #[serde(rename = "currentCGPA", default)]
    pub current_cgpa: Option<NumberInput>,
    #[serde(rename = "creditsCompleted", default)]
    pub credits_completed: Option<NumberInput>,
    #[serde(rename = "desiredCGPA", default)]
    pub desired_cgpa: Option<NumberInput>,
    #[serde(rename = "semesterCredits", default)]
    pub semester_credits: Option<NumberInput>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub units: Option<NumberInput>,
    #[serde(default)]
    pub target_grade: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StudyPlanRequest {
    #[serde(default)]
    pub courses: Option<Vec<CourseInput>>,
    #[serde(rename = "targetCGPA", default)]
    pub target_cgpa: Option<NumberInput>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GradeAnalysisRequest {
    #[serde(default)]
    pub courses: Option<Vec<CourseInput>>,
    #[serde(rename = "targetSemesterGPA", default)]
    pub target_semester_gpa: Option<NumberInput>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub standing: GpaCalculationRequest,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScenarioComparisonRequest {
    #[serde(default)]
    pub scenarios: Option<Vec<ScenarioInput>>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedCourseInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub units: Option<NumberInput>,
    #[serde(default)]
    pub actual_grade: Option<String>,
    #[serde(default)]
    pub target_grade: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SemesterGpaRequest {
    #[serde(default)]
    pub courses: Option<Vec<RecordedCourseInput>>,
}

/// Parses a request body from a JSON string.
pub fn parse_json_input<T: DeserializeOwned>(json_str: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(json_str).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

/// Collects failed rules while a request is being converted.
#[derive(Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn fail(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Reads a required number and checks `min <= v (<= max)`. Returns 0 on
    /// failure; the caller never sees that value because `finish` errors out.
    fn number(&mut self, field: &str, input: &Option<NumberInput>, min: f64, max: Option<f64>, message: &str) -> f64 {
        match input.as_ref().and_then(NumberInput::value) {
            Some(v) if v >= min && max.is_none_or(|m| v <= m) => v,
            _ => {
                self.fail(field, message);
                0.0
            }
        }
    }

    /// Like `number`, but the value must also be a whole number (`60`, `"15"`).
    fn whole(&mut self, field: &str, input: &Option<NumberInput>, min: f64, message: &str) -> f64 {
        match input.as_ref().and_then(NumberInput::value) {
            Some(v) if v >= min && v.fract() == 0.0 => v,
            _ => {
                self.fail(field, message);
                0.0
            }
        }
    }

    fn non_empty_name(&mut self, field: &str, name: &Option<String>, message: &str) -> String {
        match name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => {
                self.fail(field, message);
                String::new()
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ApiError> {
        if self.errors.is_empty() { Ok(value) } else { Err(ApiError::Validation(self.errors)) }
    }
}

fn standing_from(checks: &mut Checks, prefix: &str, req: &GpaCalculationRequest) -> AcademicStanding {
    let f = |name: &str| format!("{}{}", prefix, name);
    AcademicStanding {
        current_cgpa: checks.number(&f("currentCGPA"), &req.current_cgpa, 0.0, Some(5.0), "Current CGPA must be between 0 and 5"),
        credits_completed: checks.whole(&f("creditsCompleted"), &req.credits_completed, 0.0, "Credits completed must be a positive integer"),
        desired_cgpa: checks.number(&f("desiredCGPA"), &req.desired_cgpa, 0.0, Some(5.0), "Desired CGPA must be between 0 and 5"),
        semester_credits: checks.whole(&f("semesterCredits"), &req.semester_credits, 1.0, "Semester credits must be at least 1"),
    }
}

/// Shared course-list rules: non-empty list, each course named, whole units >= 1.
fn course_list<'a, C>(checks: &mut Checks, courses: &'a Option<Vec<C>>) -> &'a [C] {
    match courses.as_deref() {
        Some(list) if !list.is_empty() => list,
        _ => {
            checks.fail("courses", "Courses must be a non-empty array");
            &[]
        }
    }
}

impl GpaCalculationRequest {
    pub fn validate(&self) -> Result<AcademicStanding, ApiError> {
        let mut checks = Checks::default();
        let standing = standing_from(&mut checks, "", self);
        checks.finish(standing)
    }
}

impl StudyPlanRequest {
    pub fn validate(&self) -> Result<(Vec<CourseLoad>, f64), ApiError> {
        let mut checks = Checks::default();
        let mut loads = Vec::new();
        for (i, c) in course_list(&mut checks, &self.courses).iter().enumerate() {
            let name = checks.non_empty_name(&format!("courses[{}].name", i), &c.name, "Course name is required");
            let units = checks.whole(&format!("courses[{}].units", i), &c.units, 1.0, "Units must be at least 1");
            let grade = c.target_grade.as_deref().map(str::trim).unwrap_or("");
            if grade.parse::<Grade>().is_err() {
                checks.fail(format!("courses[{}].targetGrade", i), "Invalid target grade");
            }
            loads.push(CourseLoad { name, units, target_grade: Some(grade.to_ascii_uppercase()) });
        }
        let target = checks.number("targetCGPA", &self.target_cgpa, 0.0, Some(5.0), "Target CGPA must be between 0 and 5");
        checks.finish((loads, target))
    }
}

impl GradeAnalysisRequest {
    pub fn validate(&self) -> Result<(Vec<CourseLoad>, f64), ApiError> {
        let mut checks = Checks::default();
        let mut loads = Vec::new();
        for (i, c) in course_list(&mut checks, &self.courses).iter().enumerate() {
            let name = checks.non_empty_name(&format!("courses[{}].name", i), &c.name, "Course name is required");
            let units = checks.whole(&format!("courses[{}].units", i), &c.units, 1.0, "Units must be at least 1");
            loads.push(CourseLoad::new(name, units));
        }
        let target = checks.number("targetSemesterGPA", &self.target_semester_gpa, 0.0, Some(5.0), "Target GPA must be between 0 and 5");
        checks.finish((loads, target))
    }
}

impl ScenarioComparisonRequest {
    pub fn validate(&self) -> Result<Vec<Scenario>, ApiError> {
        let mut checks = Checks::default();
        let inputs: &[ScenarioInput] = match self.scenarios.as_deref() {
            Some(list) if !list.is_empty() => list,
            _ => {
                checks.fail("scenarios", "At least one scenario is required");
                &[]
            }
        };
        let scenarios: Vec<Scenario> = inputs
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let name = match s.name.as_deref().map(str::trim) {
                    Some(n) if !n.is_empty() => n.to_string(),
                    _ => format!("Scenario {}", i + 1),
                };
                let standing = standing_from(&mut checks, &format!("scenarios[{}].", i), &s.standing);
                Scenario { name, standing }
            })
            .collect();
        checks.finish(scenarios)
    }
}

impl SemesterGpaRequest {
    pub fn validate(&self) -> Result<Vec<RecordedCourse>, ApiError> {
        let mut checks = Checks::default();
        let mut out = Vec::new();
        for (i, c) in self.courses.as_deref().unwrap_or(&[]).iter().enumerate() {
            let units = checks.whole(&format!("courses[{}].units", i), &c.units, 1.0, "Units must be at least 1");
            for (field, grade) in [("actualGrade", &c.actual_grade), ("targetGrade", &c.target_grade)] {
                if let Some(g) = grade.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
                    if g.parse::<Grade>().is_err() {
                        checks.fail(format!("courses[{}].{}", i, field), "Invalid grade (must be A, B, C, D, or F)");
                    }
                }
            }
            out.push(RecordedCourse {
                name: c.name.clone().unwrap_or_default(),
                units,
                actual_grade: c.actual_grade.clone(),
                target_grade: c.target_grade.clone(),
            });
        }
        checks.finish(out)
    }
}
