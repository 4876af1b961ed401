use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tasky_backend::build_router;
use tower::ServiceExt;
use uuid::Uuid;

mod support;

#[tokio::test]
async fn responses_carry_a_generated_request_id() {
    let app = build_router(support::test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call health");

    assert_eq!(response.status(), StatusCode::OK);
    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id header");
    Uuid::parse_str(id).expect("request id is a uuid");
}

#[tokio::test]
async fn caller_supplied_request_id_is_echoed_back() {
    let app = build_router(support::test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "caller-supplied-id")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call health");

    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id header");
    assert_eq!(id, "caller-supplied-id");
}

#[tokio::test]
async fn error_responses_carry_the_request_id_too() {
    let app = build_router(support::test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/user")
                .header("x-request-id", "err-correlation")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call protected route");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id header");
    assert_eq!(id, "err-correlation");
}
