// Integration tests for Study Match

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::time::Duration;
use study_match::core::MatchGenerator;
use study_match::error::json_config;
use study_match::models::ErrorResponse;
use study_match::routes::{configure_routes, AppState};

fn test_state() -> AppState {
    AppState {
        generator: MatchGenerator::default(),
        processing_delay: Duration::ZERO,
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await
    };
}

fn sample_form() -> Value {
    json!({
        "year": "2nd Year",
        "branch": "Computer Science",
        "strongSubjects": ["Mathematics"],
        "helpSubjects": [],
        "studyStyle": "Quiet",
        "groupSize": "2-3",
        "timeSlots": "Mon/Wed 6-8pm",
        "sessionPreference": "Regular weekly",
        "location": "Library",
        "branchPreference": "Open to cross-branch"
    })
}

#[actix_web::test]
async fn test_integration_end_to_end_matching() {
    let app = test_app!(test_state());

    for _ in 0..20 {
        let req = test::TestRequest::post()
            .uri("/api/match")
            .set_json(sample_form())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);

        let matches = body["matches"].as_array().unwrap();
        assert!((3..=5).contains(&matches.len()), "got {} matches", matches.len());
        assert_eq!(
            body["message"],
            format!("Found {} potential study partners for you!", matches.len())
        );

        let mut names: Vec<&str> = Vec::new();
        let mut previous = u64::MAX;
        for m in matches {
            let name = m["name"].as_str().unwrap();
            assert!(!names.contains(&name), "duplicate name {}", name);
            names.push(name);

            let similarity = m["similarity"].as_u64().unwrap();
            assert!((70..=98).contains(&similarity));
            assert!(similarity <= previous, "matches not sorted by similarity");
            previous = similarity;

            // Mathematics is the only subject submitted, so it is always shared
            assert_eq!(m["commonSubjects"], json!(["Mathematics"]));
            assert!(m["studyStyle"].is_string());
        }
    }
}

#[actix_web::test]
async fn test_missing_year_is_rejected() {
    let app = test_app!(test_state());
    let mut form = sample_form();
    form["year"] = json!("");

    let req = test::TestRequest::post().uri("/api/match").set_json(form).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Year and branch are required fields");
    assert_eq!(body["code"], "validation_failed");
    assert!(body.get("matches").is_none());
}

#[actix_web::test]
async fn test_absent_branch_is_rejected() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(json!({ "year": "1st Year" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_null_year_or_branch_is_rejected() {
    let app = test_app!(test_state());

    for form in [
        json!({ "year": null, "branch": "Civil" }),
        json!({ "year": "1st Year", "branch": null }),
    ] {
        let req = test::TestRequest::post().uri("/api/match").set_json(form).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, "validation_failed");
    }
}

#[actix_web::test]
async fn test_body_read_regardless_of_content_type() {
    let app = test_app!(test_state());
    let payload = r#"{"year":"1st Year","branch":"Civil"}"#;

    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/match")
        .insert_header(("content-type", "text/plain"))
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn test_only_year_and_branch_required() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(json!({ "year": "Graduate", "branch": "Physics" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    for m in body["matches"].as_array().unwrap() {
        assert_eq!(m["commonSubjects"], json!([]));
    }
}

#[actix_web::test]
async fn test_malformed_body_is_server_error() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/match")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Failed to process your request. Please try again.");
    assert_eq!(body.status_code, 500);
}

#[actix_web::test]
async fn test_wrong_field_type_is_server_error() {
    let app = test_app!(test_state());
    let mut form = sample_form();
    form["strongSubjects"] = json!("Mathematics");

    let req = test::TestRequest::post().uri("/api/match").set_json(form).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_unknown_study_style_is_server_error() {
    let app = test_app!(test_state());
    let mut form = sample_form();
    form["studyStyle"] = json!("Loud");

    let req = test::TestRequest::post().uri("/api/match").set_json(form).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_get_match_is_method_not_allowed() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get().uri("/api/match").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Method not allowed. Use POST to submit match requests.");
    assert_eq!(body.code, "method_not_allowed");
}

#[actix_web::test]
async fn test_catalog_lists_form_options() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get().uri("/api/catalog").to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["years"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["studyStyles"],
        json!(["Quiet", "Interactive", "Problem-solving", "Mixed"])
    );
    assert_eq!(body["sessionPreferences"], json!(["Regular weekly", "On-demand"]));
}

#[actix_web::test]
async fn test_processing_delay_is_applied() {
    let state = AppState {
        processing_delay: Duration::from_millis(50),
        ..test_state()
    };
    let app = test_app!(state);

    let started = std::time::Instant::now();
    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(sample_form())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[actix_web::test]
async fn test_health() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get().uri("/health").to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
