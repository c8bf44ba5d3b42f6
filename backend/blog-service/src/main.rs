use actix_web::{middleware::Logger, web, App, HttpServer};
use blog_service::middleware::SecurityHeaders;
use blog_service::{db, handlers, Config};
use std::io;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));

    let db_pool = match db::connect(&config.database.url, config.database.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    db::ensure_schema(&db_pool).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to ensure database schema: {}", e),
        )
    })?;

    db::seed_welcome_post(&db_pool).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to seed welcome post: {}", e),
        )
    })?;

    tracing::info!("Connected to database at {}", config.database.url);

    // The index page is served out of this directory; create it once here,
    // request handlers assume it exists.
    std::fs::create_dir_all(&config.static_files.root)?;

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let static_files = web::Data::new(config.static_files.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(static_files.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .wrap(TracingLogger::default())
            .route("/", web::get().to(handlers::serve_index))
            .service(handlers::api_scope())
    })
    .bind(&bind_address)?
    .run()
    .await
}
