//! Comment handlers - HTTP endpoints for comment submission and moderation
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

/// Request body for creating a comment
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub author: Option<String>,
    pub body: Option<String>,
}

/// List the approved comments for a post, oldest first
///
/// A nonexistent post yields an empty array, not a 404. Existence is only
/// checked when a comment is submitted.
pub async fn get_post_comments(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let comments = comment_repo::get_approved_comments(pool.get_ref(), *post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Submit a new comment on a post; it stays hidden until approved
pub async fn create_comment(
    pool: web::Data<SqlitePool>,
    post_id: web::Path<i64>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let (author, body) = match (&req.author, &req.body) {
        (Some(author), Some(body)) => (author, body),
        _ => return Err(AppError::BadRequest("Missing author or body".to_string())),
    };

    if post_repo::get_post_by_id(pool.get_ref(), *post_id).await?.is_none() {
        return Err(AppError::NotFound("Post not found".to_string()));
    }

    let comment = comment_repo::create_comment(pool.get_ref(), *post_id, author, body).await?;

    Ok(HttpResponse::Created().json(comment))
}

/// List all comments awaiting moderation, with their post titles
pub async fn pending_comments(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let comments = comment_repo::get_pending_comments(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Approve a comment, making it publicly visible
///
/// Approving an already-approved comment succeeds and changes nothing.
pub async fn approve_comment(
    pool: web::Data<SqlitePool>,
    comment_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let comment = comment_repo::approve_comment(pool.get_ref(), *comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Approved",
        "comment": comment,
    })))
}
