//! Grade/point tables.
//!
//! Two scales are in use: the full 5-point scale for recorded grades and the
//! restricted A/B/C upgrade path the combination analyzer walks. Both are
//! immutable statics; anything else must go through `GradeScale::from_static`
//! so the ordering invariant is checked once.

use crate::error::{PlannerError, PlannerResult};
use crate::models::Grade;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradePoint {
    pub grade: Grade,
    pub points: u8,
}

const fn gp(grade: Grade, points: u8) -> GradePoint {
    GradePoint { grade, points }
}

const FIVE_POINT_ENTRIES: &[GradePoint] = &[
    gp(Grade::A, 5),
    gp(Grade::B, 4),
    gp(Grade::C, 3),
    gp(Grade::D, 2),
    gp(Grade::F, 0),
];

const UPGRADE_PATH_ENTRIES: &[GradePoint] = &[gp(Grade::A, 5), gp(Grade::B, 4), gp(Grade::C, 3)];

/// Grades ordered from best to worst with strictly decreasing points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeScale {
    entries: &'static [GradePoint],
}

/// A=5 B=4 C=3 D=2 F=0. Used for recorded grades and the scale maximum.
pub static FIVE_POINT: GradeScale = GradeScale { entries: FIVE_POINT_ENTRIES };

/// A=5 B=4 C=3. The default grade set of the combination analyzer.
pub static UPGRADE_PATH: GradeScale = GradeScale { entries: UPGRADE_PATH_ENTRIES };

impl GradeScale {
    /// Builds a scale after checking it is non-empty, ordered best-first with
    /// strictly decreasing points and free of duplicate letters.
    pub fn from_static(entries: &'static [GradePoint]) -> PlannerResult<GradeScale> {
        if entries.is_empty() {
            return Err(PlannerError::invalid("gradeScale", "must contain at least one grade"));
        }
        for pair in entries.windows(2) {
            if pair[0].points <= pair[1].points {
                return Err(PlannerError::invalid(
                    "gradeScale",
                    format!("{} ({}) must be worth more than {} ({})", pair[0].grade, pair[0].points, pair[1].grade, pair[1].points),
                ));
            }
        }
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.grade == e.grade) {
                return Err(PlannerError::invalid("gradeScale", format!("grade {} appears twice", e.grade)));
            }
        }
        Ok(GradeScale { entries })
    }

    /// Looks a scale up by its letters, e.g. `ABC` or `abcdf`.
    pub fn by_name(name: &str) -> Option<GradeScale> {
        match name.trim().to_ascii_uppercase().as_str() {
            "ABC" => Some(UPGRADE_PATH),
            "ABCDF" => Some(FIVE_POINT),
            _ => None,
        }
    }

    pub fn name(&self) -> String {
        self.entries.iter().map(|e| e.grade.letter()).collect()
    }

    pub fn entries(&self) -> &'static [GradePoint] {
        self.entries
    }

    pub fn top(&self) -> GradePoint {
        self.entries[0]
    }

    pub fn floor(&self) -> GradePoint {
        self.entries[self.entries.len() - 1]
    }

    pub fn max_points(&self) -> u8 {
        self.top().points
    }

    pub fn max_gpa(&self) -> f64 {
        f64::from(self.max_points())
    }

    pub fn points_of(&self, grade: Grade) -> Option<u8> {
        self.entries.iter().find(|e| e.grade == grade).map(|e| e.points)
    }

    pub fn grade_of(&self, points: u8) -> Option<Grade> {
        self.entries.iter().find(|e| e.points == points).map(|e| e.grade)
    }

    /// The next better grade in this scale, `None` at the top or for letters
    /// outside the scale.
    pub fn step_up(&self, grade: Grade) -> Option<GradePoint> {
        let pos = self.entries.iter().position(|e| e.grade == grade)?;
        if pos == 0 { None } else { Some(self.entries[pos - 1]) }
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        UPGRADE_PATH
    }
}
