use blog_service::db::{self, comment_repo, post_repo};
use sqlx::SqlitePool;

async fn setup_pool() -> SqlitePool {
    // Single connection so every query sees the same in-memory database.
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("open in-memory database");
    db::ensure_schema(&pool).await.expect("create schema");
    pool
}

#[tokio::test]
async fn create_post_assigns_increasing_identifiers() {
    let pool = setup_pool().await;

    let first = post_repo::create_post(&pool, "Pierwszy", "treść").await.unwrap();
    let second = post_repo::create_post(&pool, "Drugi", "treść").await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.title, "Pierwszy");
}

#[tokio::test]
async fn get_post_by_id_returns_none_for_unknown_id() {
    let pool = setup_pool().await;

    let post = post_repo::create_post(&pool, "Post", "treść").await.unwrap();
    assert!(post_repo::get_post_by_id(&pool, post.id).await.unwrap().is_some());
    assert!(post_repo::get_post_by_id(&pool, post.id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn list_posts_orders_newest_first() {
    let pool = setup_pool().await;

    let older = post_repo::create_post(&pool, "Starszy", "treść").await.unwrap();
    let newer = post_repo::create_post(&pool, "Nowszy", "treść").await.unwrap();

    let posts = post_repo::list_posts(&pool).await.unwrap();
    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[tokio::test]
async fn seeding_only_happens_on_an_empty_store() {
    let pool = setup_pool().await;

    db::seed_welcome_post(&pool).await.unwrap();
    db::seed_welcome_post(&pool).await.unwrap();

    let posts = post_repo::list_posts(&pool).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Witamy na Blogu!");

    // A store that already has content is left alone.
    let pool = setup_pool().await;
    post_repo::create_post(&pool, "Własny post", "treść").await.unwrap();
    db::seed_welcome_post(&pool).await.unwrap();
    let posts = post_repo::list_posts(&pool).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Własny post");
}

#[tokio::test]
async fn new_comments_start_unapproved() {
    let pool = setup_pool().await;

    let post = post_repo::create_post(&pool, "Post", "treść").await.unwrap();
    let comment = comment_repo::create_comment(&pool, post.id, "Anna", "komentarz")
        .await
        .unwrap();

    assert!(!comment.approved);
    assert_eq!(comment.post_id, post.id);

    let fetched = comment_repo::get_comment_by_id(&pool, comment.id)
        .await
        .unwrap()
        .expect("comment exists");
    assert!(!fetched.approved);
    assert!(comment_repo::get_comment_by_id(&pool, comment.id + 1)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn approve_comment_persists_and_is_idempotent() {
    let pool = setup_pool().await;

    let post = post_repo::create_post(&pool, "Post", "treść").await.unwrap();
    let comment = comment_repo::create_comment(&pool, post.id, "Anna", "komentarz")
        .await
        .unwrap();

    let approved = comment_repo::approve_comment(&pool, comment.id)
        .await
        .unwrap()
        .expect("comment exists");
    assert!(approved.approved);

    let again = comment_repo::approve_comment(&pool, comment.id)
        .await
        .unwrap()
        .expect("comment still exists");
    assert!(again.approved);

    assert!(comment_repo::approve_comment(&pool, comment.id + 1)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn approved_listing_filters_and_keeps_creation_order() {
    let pool = setup_pool().await;

    let post = post_repo::create_post(&pool, "Post", "treść").await.unwrap();
    let first = comment_repo::create_comment(&pool, post.id, "Anna", "pierwszy")
        .await
        .unwrap();
    let second = comment_repo::create_comment(&pool, post.id, "Jan", "drugi")
        .await
        .unwrap();
    let third = comment_repo::create_comment(&pool, post.id, "Ola", "trzeci")
        .await
        .unwrap();

    // Approve out of creation order.
    comment_repo::approve_comment(&pool, third.id).await.unwrap();
    comment_repo::approve_comment(&pool, first.id).await.unwrap();

    let approved = comment_repo::get_approved_comments(&pool, post.id).await.unwrap();
    let ids: Vec<i64> = approved.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    let pending = comment_repo::get_pending_comments(&pool).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second.id);
    assert_eq!(pending[0].post_title, "Post");
}

#[tokio::test]
async fn deleting_a_post_cascades_to_its_comments() {
    let pool = setup_pool().await;

    let post = post_repo::create_post(&pool, "Post", "treść").await.unwrap();
    comment_repo::create_comment(&pool, post.id, "Anna", "pierwszy")
        .await
        .unwrap();
    comment_repo::create_comment(&pool, post.id, "Jan", "drugi")
        .await
        .unwrap();

    // No delete endpoint exists; the constraint itself guarantees that no
    // orphaned comments can survive a post deletion.
    sqlx::query("DELETE FROM posts WHERE id = ?1")
        .bind(post.id)
        .execute(&pool)
        .await
        .unwrap();

    let remaining = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn comments_cannot_reference_a_missing_post() {
    let pool = setup_pool().await;

    let result = comment_repo::create_comment(&pool, 9999, "Anna", "komentarz").await;
    assert!(matches!(result, Err(sqlx::Error::Database(_))));
}
