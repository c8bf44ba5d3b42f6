use crate::models::{Comment, PendingComment};
use chrono::Utc;
use sqlx::SqlitePool;

/// Create a new comment on a post, unapproved
///
/// The caller is responsible for checking that `post_id` exists; the
/// foreign key constraint is the backstop.
pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    author: &str,
    body: &str,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, author, body, created_at, approved)
        VALUES (?1, ?2, ?3, ?4, 0)
        RETURNING id, post_id, author, body, created_at, approved
        "#,
    )
    .bind(post_id)
    .bind(author)
    .bind(body)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get the approved comments for a post, oldest first
pub async fn get_approved_comments(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, author, body, created_at, approved
        FROM comments
        WHERE post_id = ?1 AND approved = 1
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Get all unapproved comments, each annotated with its post's title
pub async fn get_pending_comments(pool: &SqlitePool) -> Result<Vec<PendingComment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, PendingComment>(
        r#"
        SELECT c.id, c.post_id, c.author, c.body, c.created_at, c.approved,
               p.title AS post_title
        FROM comments c
        JOIN posts p ON p.id = c.post_id
        WHERE c.approved = 0
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Get a single comment by ID
pub async fn get_comment_by_id(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, author, body, created_at, approved
        FROM comments
        WHERE id = ?1
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Mark a comment as approved, returning the updated row
///
/// The write is re-applied on every call, so approving an already-approved
/// comment succeeds and leaves it approved. Returns `None` if the comment
/// does not exist.
pub async fn approve_comment(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET approved = 1
        WHERE id = ?1
        RETURNING id, post_id, author, body, created_at, approved
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}
