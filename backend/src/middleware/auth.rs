//! Bearer-token gate for protected routes.
//!
//! Applied as a `route_layer`, so handler code never runs for a rejected
//! request. On success the decoded claims and the typed user id are made
//! available through request extensions.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::verify_token;

pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Authorization token not found.".to_string()))?
        .to_string();

    let claims = verify_token(&token, &state.config.jwt_secret)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token.".to_string()))?;
    let user_id = claims
        .user_id()
        .map_err(|_| AppError::Unauthorized("Invalid or expired token.".to_string()))?;

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user_id);

    Ok(next.run(request).await)
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        let token = rest.trim_start();
        if !token.is_empty() {
            return Some(token);
        }
    }
    None
}
