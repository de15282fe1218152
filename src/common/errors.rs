use thiserror::Error;

use crate::models::UserIden;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Slug already exists: {0}")]
    SlugConflict(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("No 'file' field in upload")]
    MissingFile,

    #[error("Empty file uploaded")]
    EmptyFile,

    #[error("File too large: {got} bytes (max {max})")]
    TooLarge { got: usize, max: usize },

    #[error("Unsupported content type '{0}'")]
    UnsupportedType(String),

    #[error("Malformed multipart payload: {0}")]
    Multipart(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Failed to store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User with {0} not found")]
    NotFound(UserIden),

    #[error("User with {0} already exists")]
    AlreadyExists(UserIden),

    #[error("Role not found or not assignable")]
    RoleNotAssignable,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContentError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
