//! HTTP handlers for the blog API.
//!
//! This module contains handlers for:
//! - Posts: list and create blog posts
//! - Comments: submit comments, list approved ones, moderate pending ones
//! - Index: the static HTML page served at the root
pub mod comments;
pub mod index;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{approve_comment, create_comment, get_post_comments, pending_comments};
pub use index::serve_index;
pub use posts::{create_post, list_posts};

use actix_web::{web, Scope};

/// The `/api` route table, shared by the server binary and the tests.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(list_posts))
                        .route(web::post().to(create_post)),
                )
                .service(
                    web::resource("/{post_id}/comments")
                        .route(web::get().to(get_post_comments))
                        .route(web::post().to(create_comment)),
                ),
        )
        .service(
            web::scope("/comments")
                .route("/pending", web::get().to(pending_comments))
                .route("/{comment_id}/approve", web::post().to(approve_comment)),
        )
}
