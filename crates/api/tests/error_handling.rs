//! Integration tests for error envelopes and the mutation not-found policy.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with, create_manual, delete_auth, get,
    post_raw_auth, put_json_auth, BASE, PUBLIC,
};
use manual_api::config::MutationNotFoundPolicy;
use serde_json::json;

#[tokio::test]
async fn malformed_json_body_is_422() {
    let app = build_test_app();
    let response = post_raw_auth(app.clone(), BASE, "{\"title\": ").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "INVALID_BODY");

    let list = body_json(get(app, PUBLIC).await).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn non_object_json_body_is_422() {
    let app = build_test_app();
    let response = post_raw_auth(app, BASE, "[\"title\"]").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_BODY");
}

#[tokio::test]
async fn non_numeric_id_is_400_with_envelope() {
    let app = build_test_app();
    let response = get(app, &format!("{PUBLIC}/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn non_numeric_id_on_mutations_is_400_with_envelope() {
    let app = build_test_app();

    let response = put_json_auth(app.clone(), &format!("{BASE}/abc"), json!({ "title": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = delete_auth(app, &format!("{BASE}/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn fault_policy_reports_missing_update_target_as_500() {
    let app = build_test_app_with(MutationNotFoundPolicy::Fault);
    let response = put_json_auth(app, &format!("{BASE}/99999"), json!({ "title": "x" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Failed to update user manual");
}

#[tokio::test]
async fn fault_policy_reports_missing_delete_target_as_500() {
    let app = build_test_app_with(MutationNotFoundPolicy::Fault);
    let response = delete_auth(app, &format!("{BASE}/99999")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Failed to delete user manual");
}

#[tokio::test]
async fn fault_policy_keeps_read_not_found_as_404() {
    let app = build_test_app_with(MutationNotFoundPolicy::Fault);
    let response = get(app, &format!("{PUBLIC}/99999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fault_policy_still_validates_first() {
    let app = build_test_app_with(MutationNotFoundPolicy::Fault);
    let created = create_manual(&app, json!({ "title": "Here" })).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(app.clone(), &format!("{BASE}/{id}"), json!({ "title": "" })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = put_json_auth(app, &format!("{BASE}/99999"), json!({ "title": "" })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
