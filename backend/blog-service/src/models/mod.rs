//! Data models for the blog service.
//!
//! - `Post`: a top-level blog entry
//! - `Comment`: a reader-submitted reply to a post, hidden until approved
//! - `PendingComment`: a comment awaiting moderation, annotated with the
//!   title of the post it belongs to
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog post entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Comment entity
///
/// `approved` starts false and flips to true exactly once, through the
/// moderation endpoint. Only approved comments are publicly listed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

/// Read model for the moderation queue: a comment joined with its post's
/// title. The title is resolved at query time, never stored on the comment.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PendingComment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
    pub post_title: String,
}
