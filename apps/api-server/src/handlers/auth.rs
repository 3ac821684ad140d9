//! Session handlers - login and current-user lookup.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use devlink_core::ports::{PasswordService, TokenService};
use devlink_shared::dto::{AuthResponse, LoginRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// POST /api/auth
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
    };

    // Find user by email
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::BadRequest(INVALID_CREDENTIALS.to_string()))?;

    // Verify password
    let valid = password_service
        .verify(&password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
    }

    // Generate token
    let token = token_service
        .generate_token(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// GET /api/auth - the session user, without the password hash.
pub async fn current_user(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
