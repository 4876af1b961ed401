//! Profile endpoints for the authenticated user.

use axum::{
    extract::{Extension, State},
    Json,
};

use crate::{
    error::{is_unique_violation, AppError},
    models::user::{UpdateProfileRequest, UserMessageResponse, UserResponse},
    repositories,
    state::AppState,
    types::UserId,
    validation::rules,
};

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<UserResponse>, AppError> {
    let user = repositories::user::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserMessageResponse>, AppError> {
    let (first_name, last_name, username, email) = match (
        payload.first_name,
        payload.last_name,
        payload.username,
        payload.email,
    ) {
        (Some(f), Some(l), Some(u), Some(e))
            if !f.is_empty() && !l.is_empty() && !u.is_empty() && !e.is_empty() =>
        {
            (f, l, u, e)
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

    if repositories::user::email_or_username_taken(&state.pool, &email, &username, Some(user_id))
        .await?
    {
        return Err(AppError::Conflict(
            "Email or username already in use.".to_string(),
        ));
    }

    let updated = repositories::user::update_profile(
        &state.pool,
        user_id,
        &first_name,
        &last_name,
        &username,
        &email,
    )
    .await;

    let user = match updated {
        Ok(Some(user)) => user,
        Ok(None) => return Err(AppError::NotFound("User not found.".to_string())),
        // Concurrent updates can still trip the unique indexes.
        Err(err) if is_unique_violation(&err) => {
            return Err(AppError::Conflict(
                "Email or username already in use.".to_string(),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(UserMessageResponse {
        message: "Profile updated successfully.".to_string(),
        user: UserResponse::from(user),
    }))
}
