//! User registration handler.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use devlink_core::domain::User;
use devlink_core::ports::{PasswordService, TokenService};
use devlink_shared::FieldError;
use devlink_shared::dto::{AuthResponse, RegisterUserRequest};

use super::present;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input, collecting one message per violated field
    let mut errors = Vec::new();
    let name = present(req.name);
    if name.is_none() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    let email = present(req.email).filter(|e| e.contains('@'));
    if email.is_none() {
        errors.push(FieldError::new("email", "Please include a valid email"));
    }
    let password = req.password.filter(|p| p.len() >= 6);
    if password.is_none() {
        errors.push(FieldError::new(
            "password",
            "Please enter a password with 6 or more characters",
        ));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let (Some(name), Some(email), Some(password)) = (name, email, password) else {
        return Err(AppError::Internal("validated fields missing".to_string()));
    };

    // Check if user already exists
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    // Hash password
    let password_hash = password_service
        .hash(&password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user
    let user = User::new(name, email, password_hash, present(req.avatar));
    let saved_user = state.users.insert(user).await?;

    // Generate token
    let token = token_service
        .generate_token(saved_user.id, &saved_user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}
