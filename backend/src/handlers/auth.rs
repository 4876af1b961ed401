//! Registration, login, password management and avatar upload.

use axum::{
    extract::{Extension, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};

use crate::{
    error::{is_unique_violation, AppError},
    models::{
        user::{
            AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest,
            RegisterRequest, ResetPasswordRequest, User, UserMessageResponse, UserResponse,
        },
        MessageResponse,
    },
    repositories,
    state::AppState,
    types::UserId,
    utils::{
        password::{hash_password, verify_password},
        security::{generate_reset_token, hash_token},
    },
    validation::rules,
};

const RESET_TOKEN_TTL_HOURS: i64 = 1;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let (first_name, last_name, username, email, password) = match (
        payload.first_name,
        payload.last_name,
        payload.username,
        payload.email,
        payload.password,
    ) {
        (Some(f), Some(l), Some(u), Some(e), Some(p))
            if !f.is_empty() && !l.is_empty() && !u.is_empty() && !e.is_empty() && !p.is_empty() =>
        {
            (f, l, u, e, p)
        }
        _ => {
            return Err(AppError::BadRequest("All fields are required.".to_string()));
        }
    };

    if rules::validate_username(&username).is_err() {
        return Err(AppError::BadRequest(
            "Username may only contain letters, numbers and underscores (max 50 characters)."
                .to_string(),
        ));
    }
    if rules::validate_email(&email).is_err() {
        return Err(AppError::BadRequest("Invalid email address.".to_string()));
    }

    let strength = rules::score_password(&password);
    if !strength.is_acceptable() {
        return Err(AppError::BadRequest(strength.rejection_message()));
    }

    if repositories::user::email_or_username_taken(&state.pool, &email, &username, None).await? {
        return Err(AppError::Conflict(
            "Email or username already in use.".to_string(),
        ));
    }

    let password_hash = hash_password(&password)?;
    let user = User::new(first_name, last_name, username, email, password_hash);

    let user = match repositories::user::create(&state.pool, &user).await {
        Ok(user) => user,
        // Losing the insert race to a concurrent registration is still a conflict.
        Err(err) if is_unique_violation(&err) => {
            return Err(AppError::Conflict(
                "Email or username already in use.".to_string(),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    let token = crate::utils::jwt::create_token(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully!".to_string(),
            token,
            user: UserResponse::from(user),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (identifier, password) = match (payload.email_or_username, payload.password) {
        (Some(i), Some(p)) if !i.is_empty() && !p.is_empty() => (i, p),
        _ => {
            return Err(AppError::BadRequest(
                "Email/username and password are required.".to_string(),
            ));
        }
    };

    // Unknown account and wrong password produce the same response.
    let user = repositories::user::find_by_email_or_username(&state.pool, &identifier)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid credentials.".to_string()))?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid credentials.".to_string()));
    }

    let token = crate::utils::jwt::create_token(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    Ok(Json(AuthResponse {
        message: "Logged in successfully!".to_string(),
        token,
        user: UserResponse::from(user),
    }))
}

pub async fn change_password(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (current_password, new_password) = match (payload.current_password, payload.new_password) {
        (Some(c), Some(n)) if !c.is_empty() && !n.is_empty() => (c, n),
        _ => {
            return Err(AppError::BadRequest("All fields are required.".to_string()));
        }
    };

    let strength = rules::score_password(&new_password);
    if !strength.is_acceptable() {
        return Err(AppError::BadRequest(strength.rejection_message()));
    }

    let user = repositories::user::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    if !verify_password(&current_password, &user.password_hash)? {
        return Err(AppError::BadRequest(
            "Invalid current password.".to_string(),
        ));
    }

    let password_hash = hash_password(&new_password)?;
    repositories::user::update_password(&state.pool, user.id, &password_hash).await?;

    Ok(Json(MessageResponse::new("Password updated successfully.")))
}

/// Always answers 200 with a neutral message so the endpoint cannot be
/// used to probe which emails have accounts. The reset email is only sent
/// on a real match.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = match payload.email {
        Some(e) if !e.is_empty() => e,
        _ => return Err(AppError::BadRequest("Email is required.".to_string())),
    };

    if let Some(user) = repositories::user::find_by_email(&state.pool, &email).await? {
        let token = generate_reset_token();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
        repositories::user::set_reset_token(&state.pool, user.id, &hash_token(&token), expires_at)
            .await?;

        if let Err(err) = state.mailer.send_password_reset(&user.email, &token).await {
            // A delivery failure must not reveal that the account exists.
            tracing::error!(user_id = %user.id, error = %err, "Failed to send reset email");
        }
    }

    Ok(Json(MessageResponse::new(
        "If an account with that email exists, a password reset link has been sent.",
    )))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (token, new_password) = match (payload.token, payload.new_password) {
        (Some(t), Some(p)) if !t.is_empty() && !p.is_empty() => (t, p),
        _ => {
            return Err(AppError::BadRequest("All fields are required.".to_string()));
        }
    };

    let strength = rules::score_password(&new_password);
    if !strength.is_acceptable() {
        return Err(AppError::BadRequest(strength.rejection_message()));
    }

    let user = repositories::user::find_by_active_reset_token(&state.pool, &hash_token(&token))
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid or expired reset token.".to_string()))?;

    let password_hash = hash_password(&new_password)?;
    repositories::user::complete_password_reset(&state.pool, user.id, &password_hash).await?;

    tracing::info!(user_id = %user.id, "Password reset completed");

    Ok(Json(MessageResponse::new(
        "Password has been reset successfully.",
    )))
}

pub async fn upload_avatar(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    mut multipart: Multipart,
) -> Result<Json<UserMessageResponse>, AppError> {
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Invalid multipart payload.".to_string()))?
    {
        if field.name() != Some("avatar") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|_| AppError::BadRequest("Invalid multipart payload.".to_string()))?;
        upload = Some((content_type, data));
        break;
    }

    let (content_type, data) =
        upload.ok_or_else(|| AppError::BadRequest("No file uploaded.".to_string()))?;

    let extension = match content_type.as_str() {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => {
            return Err(AppError::BadRequest(
                "Only image files are allowed.".to_string(),
            ));
        }
    };

    if data.len() > state.config.avatar_max_bytes {
        return Err(AppError::BadRequest(
            "File is too large. Maximum size is 5MB.".to_string(),
        ));
    }

    // One file per user: re-uploading overwrites the previous avatar.
    let filename = format!("{user_id}.{extension}");
    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalServerError(e.into()))?;
    let disk_path = std::path::Path::new(&state.config.upload_dir).join(&filename);
    tokio::fs::write(&disk_path, &data)
        .await
        .map_err(|e| AppError::InternalServerError(e.into()))?;

    let public_path = format!("/uploads/{filename}");
    let user = repositories::user::update_avatar(&state.pool, user_id, &public_path)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    Ok(Json(UserMessageResponse {
        message: "Avatar updated successfully.".to_string(),
        user: UserResponse::from(user),
    }))
}
