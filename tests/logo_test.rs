mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;
use uuid::Uuid;

use common::{logo_json, FailingGenerator, TestApp};

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

fn assert_data_uri(value: &serde_json::Value) {
    let uri = value.as_str().unwrap();
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .expect("image is not a png data URI");
    let bytes = BASE64.decode(payload).expect("payload is not base64");
    assert!(!bytes.is_empty());
}

#[tokio::test]
async fn test_generate_image_defaults_to_one() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/generate-image")
        .json(&json!({ "prompt": "a red bicycle" }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let images = body["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_data_uri(&images[0]);

    app.cleanup().await;
}

#[tokio::test]
async fn test_generate_image_honors_count() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/generate-image")
        .json(&json!({ "prompt": "a red bicycle", "count": 3 }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let images = body["images"].as_array().unwrap();
    assert_eq!(images.len(), 3);
    for image in images {
        assert_data_uri(image);
    }

    app.cleanup().await;
}

#[tokio::test]
async fn test_generate_image_rejects_zero_count() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/generate-image")
        .json(&json!({ "prompt": "a red bicycle", "count": 0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    app.cleanup().await;
}

#[tokio::test]
async fn test_generate_image_provider_failure_is_bad_gateway() {
    let app = TestApp::with_generator(Arc::new(FailingGenerator)).await;

    let response = app
        .server
        .post("/api/generate-image")
        .json(&json!({ "prompt": "a red bicycle" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    app.cleanup().await;
}

#[tokio::test]
async fn test_generate_logo_returns_four_variations() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/generate-logo")
        .json(&json!({
            "company_name": "Acme",
            "style": "minimalist",
            "colors": "blue and white",
            "industry": "tech"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let logos = body["logos"].as_array().unwrap();
    assert_eq!(logos.len(), 4);
    for logo in logos {
        assert_data_uri(logo);
    }
    assert_eq!(
        body["prompt"].as_str().unwrap(),
        "Create a modern professional logo for Acme in minimalist style \
         using blue and white colors suitable for tech industry, \
         clean background, high quality, professional design"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn test_generate_logo_omits_empty_clauses() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/generate-logo")
        .json(&json!({
            "company_name": "Acme",
            "style": "minimalist",
            "colors": "",
            "industry": "retail"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["prompt"].as_str().unwrap(),
        "Create a modern professional logo for Acme in minimalist style \
         suitable for retail industry, clean background, high quality, \
         professional design"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn test_generate_logo_optional_fields_default_empty() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/generate-logo")
        .json(&json!({
            "company_name": "Acme",
            "style": "vintage"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body["prompt"].as_str().unwrap(),
        "Create a modern professional logo for Acme in vintage style, \
         clean background, high quality, professional design"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn test_generate_logo_provider_failure_is_bad_gateway() {
    let app = TestApp::with_generator(Arc::new(FailingGenerator)).await;

    let response = app
        .server
        .post("/api/generate-logo")
        .json(&json!({
            "company_name": "Acme",
            "style": "minimalist"
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    app.cleanup().await;
}

#[tokio::test]
async fn test_save_logo() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4().to_string();

    let response = app.server.post("/api/logos").json(&logo_json(&id)).await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"].as_str().unwrap(), "Logo saved successfully");
    assert_eq!(body["logo_id"].as_str().unwrap(), id);

    app.cleanup().await;
}

#[tokio::test]
async fn test_save_duplicate_logo_conflicts() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4().to_string();

    app.server
        .post("/api/logos")
        .json(&logo_json(&id))
        .await
        .assert_status(StatusCode::OK);

    let response = app.server.post("/api/logos").json(&logo_json(&id)).await;
    response.assert_status(StatusCode::CONFLICT);

    app.cleanup().await;
}

#[tokio::test]
async fn test_list_logos_empty() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/logos").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["logos"].as_array().unwrap().len(), 0);

    app.cleanup().await;
}

#[tokio::test]
async fn test_saved_logos_roundtrip_through_list() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4().to_string();
    let logo = logo_json(&id);

    app.server
        .post("/api/logos")
        .json(&logo)
        .await
        .assert_status(StatusCode::OK);

    let response = app.server.get("/api/logos").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let logos = body["logos"].as_array().unwrap();
    assert_eq!(logos.len(), 1);
    assert_eq!(logos[0], logo);

    app.cleanup().await;
}
