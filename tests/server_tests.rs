use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use gradeshift::algorithm::FIVE_POINT;
use gradeshift::config::PlannerSettings;
use gradeshift::server::{configure, json_config};
use serde_json::{json, Value};

macro_rules! planner_app {
    ($settings:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($settings))
                .app_data(json_config())
                .configure(configure),
        )
        .await
    };
}

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    let app = planner_app!(PlannerSettings::default());
    let req = test::TestRequest::post().uri(path).set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn calculate_gpa_round_trip() {
    let (status, body) = post_json(
        "/api/planner/calculate-gpa",
        json!({"currentCGPA": 3.0, "creditsCompleted": 60, "desiredCGPA": 3.5, "semesterCredits": 15}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["requiredSemesterGPA"], 5.5);
    assert_eq!(body["data"]["isAchievable"], false);
}

#[actix_web::test]
async fn calculate_gpa_validation_failure() {
    let (status, body) = post_json(
        "/api/planner/calculate-gpa",
        json!({"currentCGPA": "abc", "creditsCompleted": 60, "desiredCGPA": 3.5, "semesterCredits": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation failed");
    let fields: Vec<&str> = body["details"].as_array().unwrap().iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["currentCGPA", "semesterCredits"]);
}

#[actix_web::test]
async fn plan_study_breakdown_in_order() {
    let (status, body) = post_json(
        "/api/planner/plan-study",
        json!({
            "courses": [
                {"name": "Calc", "units": 3, "targetGrade": "A"},
                {"name": "Art", "units": 2, "targetGrade": "D"}
            ],
            "targetCGPA": 4.9
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["baseHours"], 11.0);
    assert_eq!(data["multiplier"], 1.4);
    assert_eq!(data["adjustedTotalHours"], 15.4);
    assert_eq!(data["courseBreakdown"][0]["name"], "Calc");
    assert_eq!(data["courseBreakdown"][0]["hours"], 9.0);
    assert_eq!(data["courseBreakdown"][1]["name"], "Art");
    assert_eq!(data["courseBreakdown"][1]["targetGrade"], "D");
    assert_eq!(data["courseBreakdown"][1]["hours"], 2.0);
}

#[actix_web::test]
async fn analyze_grades_reports_walk() {
    let (status, body) = post_json(
        "/api/planner/analyze-grades",
        json!({"courses": [{"name": "Heavy", "units": 3}, {"name": "Light", "units": 1}], "targetSemesterGPA": 4.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["achievedGPA"], 4.5);
    assert_eq!(data["isAchievable"], true);
    assert_eq!(data["status"], "achieved");
    assert_eq!(data["gradeCombination"][0]["grade"], "A");
    assert_eq!(data["gradeCombination"][0]["points"], 5);
    assert_eq!(data["gradeCombination"][1]["grade"], "C");
    assert_eq!(data["upgrades"][0]["from"], "C");
    assert_eq!(data["upgrades"][0]["to"], "B");
    assert_eq!(data["upgrades"][1]["gpaAfter"], 4.5);
}

#[actix_web::test]
async fn analyzer_scale_comes_from_settings() {
    let app = planner_app!(PlannerSettings { analyzer_scale: FIVE_POINT });
    let req = test::TestRequest::post()
        .uri("/api/planner/analyze-grades")
        .set_json(json!({"courses": [{"name": "Solo", "units": 2}], "targetSemesterGPA": 1.0}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["gradeCombination"][0]["grade"], "D");
    assert_eq!(body["data"]["upgrades"][0]["from"], "F");
}

#[actix_web::test]
async fn compare_scenarios_picks_best() {
    let (status, body) = post_json(
        "/api/planner/compare-scenarios",
        json!({"scenarios": [
            {"name": "Stretch", "currentCGPA": 3.0, "creditsCompleted": 60, "desiredCGPA": 3.5, "semesterCredits": 15},
            {"name": "Steady", "currentCGPA": "3.0", "creditsCompleted": "60", "desiredCGPA": "3.2", "semesterCredits": "15"}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["best"]["name"], "Steady");
    assert_eq!(body["data"]["best"]["requiredSemesterGPA"], 4.0);
    assert_eq!(body["data"]["scenarios"][0]["result"]["isAchievable"], false);
}

#[actix_web::test]
async fn semester_gpa_with_status() {
    let (status, body) = post_json(
        "/api/planner/semester-gpa",
        json!({"courses": [{"name": "Physics", "units": 4, "actualGrade": "B"}, {"name": "History", "units": 2, "targetGrade": "A"}]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // (4*4 + 5*2) / 6
    assert_eq!(body["data"]["gpa"], 4.33);
    assert_eq!(body["data"]["status"], "Very Good");
}

#[actix_web::test]
async fn malformed_body_is_bad_request() {
    let app = planner_app!(PlannerSettings::default());
    let req = test::TestRequest::post()
        .uri("/api/planner/calculate-gpa")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("invalid JSON body"));
}

#[actix_web::test]
async fn unknown_route_is_json_404() {
    let app = planner_app!(PlannerSettings::default());
    let req = test::TestRequest::get().uri("/api/nothing-here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": false, "error": "Route not found"}));
}

#[actix_web::test]
async fn health_and_docs() {
    let app = planner_app!(PlannerSettings::default());
    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let doc: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/openapi.json").to_request()).await;
    assert!(doc["paths"]["/api/planner/analyze-grades"].is_object());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api-docs").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
