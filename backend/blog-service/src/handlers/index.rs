//! Index page handler
use crate::config::StaticFilesConfig;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use std::io::ErrorKind;
use std::path::Path;

/// Serve the static index page
///
/// The static directory itself is created once at startup, not here.
pub async fn serve_index(static_files: web::Data<StaticFilesConfig>) -> Result<HttpResponse> {
    let path = Path::new(&static_files.root).join("index.html");

    match tokio::fs::read(&path).await {
        Ok(contents) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(AppError::NotFound("Index page not found".to_string()))
        }
        Err(err) => Err(AppError::Internal(format!(
            "failed to read index page: {}",
            err
        ))),
    }
}
