use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::algorithm::{
    analyze_grade_combination, compare_scenarios, compute_required_gpa, estimate_study_hours, semester_gpa,
};
use crate::api_json::{
    GpaCalculationRequest, GradeAnalysisRequest, ScenarioComparisonRequest, SemesterGpaRequest, StudyPlanRequest,
};
use crate::config::PlannerSettings;
use crate::error::ApiError;

/// Wraps a result in the `{"success": true, "data": ...}` envelope.
pub fn success<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(json!({"success": true, "data": data}))
}

fn rejected(endpoint: &str, err: ApiError) -> ApiError {
    warn!(endpoint, error = %err, "request rejected");
    err
}

/// POST /api/planner/calculate-gpa
pub async fn calculate_gpa_handler(body: web::Json<GpaCalculationRequest>) -> Result<HttpResponse, ApiError> {
    let standing = body.validate().map_err(|e| rejected("calculate-gpa", e))?;
    let result = compute_required_gpa(&standing).map_err(|e| rejected("calculate-gpa", e.into()))?;
    info!(required = result.required_semester_gpa, achievable = result.is_achievable, "calculate-gpa");
    Ok(success(result))
}

/// POST /api/planner/plan-study
pub async fn plan_study_handler(body: web::Json<StudyPlanRequest>) -> Result<HttpResponse, ApiError> {
    let (courses, target_cgpa) = body.validate().map_err(|e| rejected("plan-study", e))?;
    let plan = estimate_study_hours(&courses, target_cgpa).map_err(|e| rejected("plan-study", e.into()))?;
    info!(courses = courses.len(), hours = plan.adjusted_total_hours, multiplier = plan.multiplier, "plan-study");
    Ok(success(plan))
}

/// POST /api/planner/analyze-grades
pub async fn analyze_grades_handler(
    settings: web::Data<PlannerSettings>,
    body: web::Json<GradeAnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    let (courses, target) = body.validate().map_err(|e| rejected("analyze-grades", e))?;
    let analysis = analyze_grade_combination(&courses, target, &settings.analyzer_scale)
        .map_err(|e| rejected("analyze-grades", e.into()))?;
    info!(
        courses = courses.len(),
        achieved = analysis.achieved_gpa,
        status = ?analysis.status,
        scale = %settings.analyzer_scale.name(),
        "analyze-grades"
    );
    Ok(success(analysis))
}

/// POST /api/planner/compare-scenarios
pub async fn compare_scenarios_handler(body: web::Json<ScenarioComparisonRequest>) -> Result<HttpResponse, ApiError> {
    let scenarios = body.validate().map_err(|e| rejected("compare-scenarios", e))?;
    let comparison = compare_scenarios(&scenarios).map_err(|e| rejected("compare-scenarios", e.into()))?;
    info!(scenarios = scenarios.len(), best = ?comparison.best.as_ref().map(|b| b.index), "compare-scenarios");
    Ok(success(comparison))
}

/// POST /api/planner/semester-gpa
pub async fn semester_gpa_handler(body: web::Json<SemesterGpaRequest>) -> Result<HttpResponse, ApiError> {
    let courses = body.validate().map_err(|e| rejected("semester-gpa", e))?;
    let result = semester_gpa(&courses).map_err(|e| rejected("semester-gpa", e.into()))?;
    info!(courses = courses.len(), gpa = result.gpa, "semester-gpa");
    Ok(success(result))
}
