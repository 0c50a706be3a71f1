use axum::http::StatusCode;
use serde_json::Value;

use vaidya_core::models::{DiseaseRecord, QueryFilters, RemedyRecord, SearchResponse};
use vaidya_core::screen::{SearchOutcome, compose};

use super::harness::{TestHarness, decode_json, get, post_empty, post_json};

fn panel<'a>(body: &'a Value, name: &str) -> &'a Value {
    body.get(name).expect("panel present")
}

fn visible(body: &Value, name: &str) -> bool {
    panel(body, name)["visible"].as_bool().expect("visible flag")
}

fn html<'a>(body: &'a Value, name: &str) -> &'a str {
    panel(body, name)["html"].as_str().expect("panel html")
}

#[tokio::test]
async fn empty_query_shows_only_the_disease_prompt() {
    let harness = TestHarness::setup().await;
    let response = get(&harness, "/api/search").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = decode_json(response).await;
    assert!(visible(&body, "disease"));
    assert!(html(&body, "disease").contains("Select a disease or ingredients to begin."));
    assert!(!visible(&body, "ingredient_remedies"));
    assert!(!visible(&body, "diseases_for_ingredients"));
    assert!(!visible(&body, "intersection"));
    assert_eq!(body["stale"], Value::Bool(false));
}

#[tokio::test]
async fn unreachable_backend_yields_the_uniform_error_screen() {
    let harness = TestHarness::setup().await;
    let response = get(&harness, "/api/search?disease=Cough&ingredients=tulsi,ginger").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = decode_json(response).await;
    for name in ["disease", "diseases_for_ingredients", "ingredient_remedies"] {
        assert!(visible(&body, name), "{name} should be forced visible");
        assert!(html(&body, name).contains("placeholder error"));
    }
    assert!(!visible(&body, "intersection"));
}

#[tokio::test]
async fn clear_resets_all_panels_and_is_idempotent() {
    let harness = TestHarness::setup().await;
    let _ = get(&harness, "/api/search?disease=Cough").await;

    let first: Value = decode_json(post_empty(&harness, "/api/search/clear").await).await;
    let second: Value = decode_json(post_empty(&harness, "/api/search/clear").await).await;
    for body in [&first, &second] {
        for name in [
            "disease",
            "diseases_for_ingredients",
            "ingredient_remedies",
            "intersection",
        ] {
            assert!(!visible(body, name));
            assert_eq!(html(body, name), "");
        }
    }
}

#[tokio::test]
async fn detail_serves_the_selected_record_from_the_session_screen() {
    let harness = TestHarness::setup().await;

    let filters = QueryFilters::new(Some("Cough"), &[]);
    let screen = compose(
        &filters,
        &SearchOutcome::Response(SearchResponse {
            disease_matches: vec![DiseaseRecord {
                disease: "Cough".to_string(),
                signs_and_symptoms: "dry throat".to_string(),
                is_primary: true,
                nested_remedies: Some(vec![RemedyRecord {
                    name: "Tulsi Tea".to_string(),
                    preparation: "boil tulsi".to_string(),
                    ..RemedyRecord::default()
                }]),
                ..DiseaseRecord::default()
            }],
            ..SearchResponse::default()
        }),
    );
    {
        let mut session = harness.state.session.write().await;
        let ticket = session.begin();
        assert!(session.apply(ticket, screen));
    }

    let response = get(&harness, "/api/detail?panel=disease&index=0").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = decode_json(response).await;
    assert_eq!(body["title"], Value::String("Cough".to_string()));
    let detail_html = body["html"].as_str().expect("detail html");
    assert!(detail_html.contains("dry throat"));
    assert!(detail_html.contains("Tulsi Tea"));
}

#[tokio::test]
async fn detail_close_is_idempotent_across_all_triggers() {
    let harness = TestHarness::setup().await;

    let filters = QueryFilters::new(Some("Cough"), &[]);
    let screen = compose(
        &filters,
        &SearchOutcome::Response(SearchResponse {
            disease_matches: vec![DiseaseRecord {
                disease: "Cough".to_string(),
                ..DiseaseRecord::default()
            }],
            ..SearchResponse::default()
        }),
    );
    {
        let mut session = harness.state.session.write().await;
        let ticket = session.begin();
        session.apply(ticket, screen);
    }

    for trigger in ["close", "outside", "escape"] {
        let opened = get(&harness, "/api/detail?panel=disease&index=0").await;
        assert_eq!(opened.status(), StatusCode::OK);

        let first: Value =
            decode_json(post_json(&harness, "/api/detail/close", &serde_json::json!({ "trigger": trigger })).await)
                .await;
        assert_eq!(first["was_visible"], Value::Bool(true));

        let second: Value =
            decode_json(post_json(&harness, "/api/detail/close", &serde_json::json!({ "trigger": trigger })).await)
                .await;
        assert_eq!(second["was_visible"], Value::Bool(false));
    }
}

#[tokio::test]
async fn detail_rejects_unknown_panels_and_missing_records() {
    let harness = TestHarness::setup().await;

    let unknown = get(&harness, "/api/detail?panel=mystery&index=0").await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    let body: Value = decode_json(unknown).await;
    assert_eq!(body["code"], Value::String("VALIDATION_FAILED".to_string()));

    let missing = get(&harness, "/api/detail?panel=disease&index=0").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn filters_endpoint_maps_backend_failure_to_bad_gateway() {
    let harness = TestHarness::setup().await;
    let response = get(&harness, "/api/filters").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = decode_json(response).await;
    assert_eq!(body["code"], Value::String("HTTP_ERROR".to_string()));
    assert!(body["trace_id"].as_str().is_some());
}
