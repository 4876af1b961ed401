use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tasky_backend::build_router;
use tower::ServiceExt;

mod support;

const BOUNDARY: &str = "tasky-test-boundary";

fn multipart_body(field_name: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn avatar_request(auth: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri("/api/auth/avatar")
        .header(header::AUTHORIZATION, auth)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("build request")
}

// Smallest possible valid-looking PNG header, enough for an upload payload.
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x01, 0x02];

#[tokio::test]
async fn upload_avatar_stores_file_under_the_user_id() {
    let upload_dir = tempfile::tempdir().expect("create upload dir");
    let mut config = support::test_config();
    config.upload_dir = upload_dir.path().display().to_string();
    let state = support::test_state_with_config(config).await;
    let user = support::seed_user(&state.pool).await;
    let auth = support::bearer(&state.config, user.id);
    let pool = state.pool.clone();
    let app = build_router(state);

    let response = app
        .oneshot(avatar_request(
            &auth,
            multipart_body("avatar", "me.png", "image/png", PNG_BYTES),
        ))
        .await
        .expect("upload avatar");

    assert_eq!(response.status(), StatusCode::OK);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "Avatar updated successfully.");
    let expected_path = format!("/uploads/{}.png", user.id);
    assert_eq!(json["user"]["avatar"], expected_path);

    let stored = std::fs::read(upload_dir.path().join(format!("{}.png", user.id)))
        .expect("read stored avatar");
    assert_eq!(stored, PNG_BYTES);

    let avatar: Option<String> = sqlx::query_scalar("SELECT avatar FROM users WHERE id = $1")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .expect("fetch avatar column");
    assert_eq!(avatar.as_deref(), Some(expected_path.as_str()));
}

#[tokio::test]
async fn upload_avatar_maps_content_type_to_extension() {
    let upload_dir = tempfile::tempdir().expect("create upload dir");
    let mut config = support::test_config();
    config.upload_dir = upload_dir.path().display().to_string();
    let state = support::test_state_with_config(config).await;
    let user = support::seed_user(&state.pool).await;
    let auth = support::bearer(&state.config, user.id);
    let app = build_router(state);

    let response = app
        .oneshot(avatar_request(
            &auth,
            multipart_body("avatar", "me.jpeg", "image/jpeg", b"jpeg-bytes"),
        ))
        .await
        .expect("upload avatar");

    assert_eq!(response.status(), StatusCode::OK);
    let json = support::response_json(response).await;
    assert_eq!(json["user"]["avatar"], format!("/uploads/{}.jpg", user.id));
}

#[tokio::test]
async fn upload_avatar_rejects_non_image_content() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let auth = support::bearer(&state.config, user.id);
    let app = build_router(state);

    let response = app
        .oneshot(avatar_request(
            &auth,
            multipart_body("avatar", "notes.txt", "text/plain", b"hello"),
        ))
        .await
        .expect("upload avatar");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "Only image files are allowed.");
}

#[tokio::test]
async fn upload_avatar_rejects_payload_without_avatar_field() {
    let state = support::test_state().await;
    let user = support::seed_user(&state.pool).await;
    let auth = support::bearer(&state.config, user.id);
    let app = build_router(state);

    let response = app
        .oneshot(avatar_request(
            &auth,
            multipart_body("document", "me.png", "image/png", PNG_BYTES),
        ))
        .await
        .expect("upload avatar");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "No file uploaded.");
}

#[tokio::test]
async fn upload_avatar_enforces_the_size_ceiling() {
    let upload_dir = tempfile::tempdir().expect("create upload dir");
    let mut config = support::test_config();
    config.upload_dir = upload_dir.path().display().to_string();
    config.avatar_max_bytes = 1024;
    let state = support::test_state_with_config(config).await;
    let user = support::seed_user(&state.pool).await;
    let auth = support::bearer(&state.config, user.id);
    let app = build_router(state);

    let oversized = vec![0u8; 2048];
    let response = app
        .oneshot(avatar_request(
            &auth,
            multipart_body("avatar", "big.png", "image/png", &oversized),
        ))
        .await
        .expect("upload avatar");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = support::response_json(response).await;
    assert_eq!(json["message"], "File is too large. Maximum size is 5MB.");
}

#[tokio::test]
async fn upload_avatar_requires_authentication() {
    let app = build_router(support::test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/auth/avatar")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(
                    "avatar",
                    "me.png",
                    "image/png",
                    PNG_BYTES,
                )))
                .expect("build request"),
        )
        .await
        .expect("upload avatar");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
