//! Database access layer.
//!
//! Provides pool construction, schema bootstrap, the first-run seed post,
//! and repository functions for posts and comments.
pub mod comment_repo;
pub mod post_repo;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Welcome post inserted on first run so the API is never observed empty.
const WELCOME_TITLE: &str = "Witamy na Blogu!";
const WELCOME_BODY: &str =
    "To jest pierwszy post. Dodaj komentarz, aby przetestować moderację.";

/// Open the SQLite database, creating the file if it does not exist.
///
/// Foreign keys are enabled on every connection; the comments table relies
/// on them for its ON DELETE CASCADE constraint.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create the `posts` and `comments` tables if they are missing.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(200) NOT NULL,
            body TEXT NOT NULL,
            created_at DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
            author VARCHAR(100) NOT NULL,
            body TEXT NOT NULL,
            created_at DATETIME NOT NULL,
            approved BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert the welcome post if the store holds no posts at all.
pub async fn seed_welcome_post(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let post_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    if post_count == 0 {
        let post = post_repo::create_post(pool, WELCOME_TITLE, WELCOME_BODY).await?;
        tracing::info!(post_id = post.id, "seeded welcome post");
    }

    Ok(())
}
