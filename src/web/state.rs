use sqlx::PgPool;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Directory uploads land in; served back under `/uploads`.
    pub upload_dir: PathBuf,
}
