//! Blog Service Library
//!
//! A small blog backend: posts, reader comments, and a moderation workflow
//! where comments stay hidden until explicitly approved.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers for the JSON API and the index page
//! - `models`: Data structures for posts and comments
//! - `db`: Database access layer and repositories
//! - `middleware`: HTTP middleware for response security headers
//! - `error`: Error types and handling
//! - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
