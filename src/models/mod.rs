// Core data structures shared by the planner algorithms and the HTTP layer.
// Field names serialize in camelCase because the web client consumes them as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the 5-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Grade {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade `{}`", other)),
        }
    }
}

/// A course in the current plan. `target_grade` is only read by the study-hours
/// estimator; the analyzer assigns grades itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLoad {
    pub name: String,
    pub units: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_grade: Option<String>,
}

impl CourseLoad {
    pub fn new(name: impl Into<String>, units: f64) -> Self {
        CourseLoad { name: name.into(), units, target_grade: None }
    }

    pub fn with_target(name: impl Into<String>, units: f64, grade: impl Into<String>) -> Self {
        CourseLoad { name: name.into(), units, target_grade: Some(grade.into()) }
    }
}

/// Snapshot of where a student stands before the semester starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcademicStanding {
    #[serde(rename = "currentCGPA")]
    pub current_cgpa: f64,
    #[serde(rename = "creditsCompleted")]
    pub credits_completed: f64,
    #[serde(rename = "desiredCGPA")]
    pub desired_cgpa: f64,
    #[serde(rename = "semesterCredits")]
    pub semester_credits: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequiredGpa {
    #[serde(rename = "requiredSemesterGPA")]
    pub required_semester_gpa: f64,
    #[serde(rename = "isAchievable")]
    pub is_achievable: bool,
    /// Unrounded value, kept for callers that compose further.
    #[serde(skip)]
    pub raw: f64,
}

/// One entry of the study-hours breakdown; echoes the input course.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseHours {
    pub name: String,
    pub units: f64,
    pub target_grade: Option<String>,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyHoursPlan {
    pub base_hours: f64,
    pub adjusted_total_hours: f64,
    pub course_breakdown: Vec<CourseHours>,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedCourse {
    pub name: String,
    pub units: f64,
    pub grade: Grade,
    pub points: u8,
}

/// A single greedy step taken by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeStep {
    /// Index of the course in the request.
    pub course: usize,
    pub name: String,
    pub from: Grade,
    pub to: Grade,
    #[serde(rename = "gpaAfter")]
    pub gpa_after: f64,
}

/// Why the analyzer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisStatus {
    Achieved,
    /// Every course is at the top grade and the target is still above the GPA.
    Unreachable,
    CapExceeded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCombination {
    #[serde(rename = "achievedGPA")]
    pub achieved_gpa: f64,
    #[serde(rename = "gradeCombination")]
    pub grade_combination: Vec<GradedCourse>,
    #[serde(rename = "isAchievable")]
    pub is_achievable: bool,
    pub status: AnalysisStatus,
    pub upgrades: Vec<UpgradeStep>,
}

/// A named what-if standing used by the scenario comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub standing: AcademicStanding,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    #[serde(flatten)]
    pub standing: AcademicStanding,
    pub result: RequiredGpa,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScenario {
    pub index: usize,
    pub name: String,
    #[serde(rename = "requiredSemesterGPA")]
    pub required_semester_gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioComparison {
    pub scenarios: Vec<ScenarioOutcome>,
    pub best: Option<BestScenario>,
}

/// A course already recorded in a semester, possibly with its final grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedCourse {
    #[serde(default)]
    pub name: String,
    pub units: f64,
    #[serde(default)]
    pub actual_grade: Option<String>,
    #[serde(default)]
    pub target_grade: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GpaStatus {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterGpa {
    pub gpa: f64,
    pub total_units: f64,
    pub status: GpaStatus,
}
