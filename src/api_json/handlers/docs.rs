use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::error::ApiError;

const OPENAPI_JSON: &str = include_str!("../../openapi.json");
const SWAGGER_HTML: &str = include_str!("../../swagger.html");

pub async fn openapi_json_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/json; charset=utf-8")
        .body(OPENAPI_JSON)
}

pub async fn swagger_ui_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SWAGGER_HTML)
}

/// GET /
pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Student Planner API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /help: example bodies for every planner endpoint.
pub async fn help_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "description": "Planning API. All endpoints take and return JSON; numeric fields may also be sent as strings.",
        "endpoints": {
            "POST /api/planner/calculate-gpa": {
                "currentCGPA": 3.0, "creditsCompleted": 60, "desiredCGPA": 3.2, "semesterCredits": 15
            },
            "POST /api/planner/plan-study": {
                "courses": [{"name": "Calculus II", "units": 3, "targetGrade": "A"}],
                "targetCGPA": 4.5
            },
            "POST /api/planner/analyze-grades": {
                "courses": [{"name": "Calculus II", "units": 3}, {"name": "Lab", "units": 1}],
                "targetSemesterGPA": 4.0
            },
            "POST /api/planner/compare-scenarios": {
                "scenarios": [
                    {"name": "Steady", "currentCGPA": 3.0, "creditsCompleted": 60, "desiredCGPA": 3.2, "semesterCredits": 15},
                    {"name": "Stretch", "currentCGPA": 3.0, "creditsCompleted": 60, "desiredCGPA": 3.5, "semesterCredits": 15}
                ]
            },
            "POST /api/planner/semester-gpa": {
                "courses": [{"name": "Physics", "units": 4, "actualGrade": "B"}, {"name": "History", "units": 2, "targetGrade": "A"}]
            }
        },
        "docs": "/api-docs"
    }))
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
