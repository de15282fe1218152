mod web;

use actix_files::Files;
use actix_web::{web::Data, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::path::PathBuf;

use kennedia_cms::db::Database;

use crate::web::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL environment variable is required");
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let upload_dir =
        PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()));

    let db = Database::new(&database_url)
        .await
        .unwrap_or_else(|e| panic!("Failed to connect to database: {e}"));

    std::fs::create_dir_all(&upload_dir)?;

    let state = AppState {
        pool: db.pool,
        upload_dir: upload_dir.clone(),
    };

    tracing::info!(%bind_addr, "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static"))
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
