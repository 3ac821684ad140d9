//! Post handlers - the minimal feed surface.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use devlink_core::domain::Post;
use devlink_shared::dto::CreatePostRequest;
use devlink_shared::{FieldError, Message};

use super::present;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const POST_NOT_FOUND: &str = "Post not found";

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let Some(text) = present(body.into_inner().text) else {
        return Err(AppError::Validation(vec![FieldError::new(
            "text",
            "Text is required",
        )]));
    };

    // The author snapshot comes from the stored user, not the token
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let post = state.posts.insert(Post::new(&user, text)).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts - all posts, newest first.
pub async fn all(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{post_id}
pub async fn by_id(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path.into_inner())?;

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{post_id} - authors may only delete their own posts.
pub async fn remove(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path.into_inner())?;

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    if post.author_id != identity.user_id {
        return Err(AppError::Forbidden("User not authorized".to_string()));
    }

    state.posts.delete(post_id).await?;
    Ok(HttpResponse::Ok().json(Message::new("Post removed")))
}

/// A malformed id can match no post, so it is answered like an absent one.
fn parse_post_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(POST_NOT_FOUND.to_string()))
}
