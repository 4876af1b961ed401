use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tasky_backend::{
    build_router,
    utils::jwt::{create_token, Claims},
};
use tower::ServiceExt;

mod support;

fn get_profile(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/user");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).expect("build request")
}

#[tokio::test]
async fn missing_authorization_header_is_rejected() {
    let app = build_router(support::test_state().await);

    let response = app
        .oneshot(get_profile(None))
        .await
        .expect("call protected route");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "Authorization token not found.");
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected_as_missing() {
    let app = build_router(support::test_state().await);

    let response = app
        .oneshot(get_profile(Some("Basic dXNlcjpwYXNz")))
        .await
        .expect("call protected route");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "Authorization token not found.");
}

#[tokio::test]
async fn garbage_token_is_rejected_as_invalid() {
    let app = build_router(support::test_state().await);

    let response = app
        .oneshot(get_profile(Some("Bearer not.a.jwt")))
        .await
        .expect("call protected route");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "Invalid or expired token.");
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let token = create_token(user.id, "some-other-secret", 1).expect("create token");
    let app = build_router(state);

    let response = app
        .oneshot(get_profile(Some(&format!("Bearer {}", token))))
        .await
        .expect("call protected route");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "Invalid or expired token.");
}

#[tokio::test]
async fn expired_token_is_rejected_before_the_handler() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let mut claims = Claims::new(user.id, 1);
    claims.exp = (Utc::now() - Duration::hours(2)).timestamp();
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_ref()),
    )
    .expect("encode token");
    let app = build_router(state);

    let response = app
        .oneshot(get_profile(Some(&format!("Bearer {}", token))))
        .await
        .expect("call protected route");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "Invalid or expired token.");
}

#[tokio::test]
async fn valid_token_reaches_the_handler() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let auth = support::bearer(&state.config, user.id);
    let app = build_router(state);

    let response = app
        .oneshot(get_profile(Some(&auth)))
        .await
        .expect("call protected route");

    assert_eq!(response.status(), StatusCode::OK);
    let json = support::response_json(response).await;
    assert_eq!(json["id"], user.id.to_string());
}

#[tokio::test]
async fn public_routes_do_not_require_a_token() {
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
    let json = support::response_json(response).await;
    assert_eq!(json["status"], "ok");
}
