//! Post handlers - HTTP endpoints for post operations
use crate::db::post_repo;
use crate::error::{AppError, Result};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

/// Request body for creating a post
///
/// Fields are optional so an absent key surfaces as the validation error
/// rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// List all posts, newest first
pub async fn list_posts(pool: web::Data<SqlitePool>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<SqlitePool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let (title, body) = match (&req.title, &req.body) {
        (Some(title), Some(body)) => (title, body),
        _ => return Err(AppError::BadRequest("Missing title or body".to_string())),
    };

    let post = post_repo::create_post(pool.get_ref(), title, body).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", post.id)))
        .json(post))
}
