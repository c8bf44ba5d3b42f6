use crate::models::Post;
use chrono::Utc;
use sqlx::SqlitePool;

/// Create a new post
pub async fn create_post(pool: &SqlitePool, title: &str, body: &str) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, body, created_at)
        VALUES (?1, ?2, ?3)
        RETURNING id, title, body, created_at
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Get all posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, body, created_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Get a single post by ID
pub async fn get_post_by_id(pool: &SqlitePool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, body, created_at
        FROM posts
        WHERE id = ?1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}
