use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use kennedia_cms::common::{ContentError, MediaError, UserError};

/// Web-layer error. Every failing JSON endpoint answers with
/// `{"error": ..., "message": ...}` and nothing else.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("Payload too large: {0}")]
    TooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(format!("database error: {e}"))
    }
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::NotFound(what) => ApiError::NotFound(what),
            ContentError::SlugConflict(slug) => {
                ApiError::Conflict(format!("Slug already exists: {slug}"))
            }
            ContentError::Validation(msg) => ApiError::BadRequest(msg),
            ContentError::Database(e) => e.into(),
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::TooLarge { .. } => ApiError::TooLarge(e.to_string()),
            MediaError::MissingFile
            | MediaError::EmptyFile
            | MediaError::UnsupportedType(_)
            | MediaError::InvalidImage(_)
            | MediaError::Multipart(_) => ApiError::BadRequest(e.to_string()),
            MediaError::Io(e) => ApiError::Internal(e.to_string()),
            MediaError::Database(e) => e.into(),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound("user"),
            UserError::AlreadyExists(_) => ApiError::Conflict(e.to_string()),
            UserError::RoleNotAssignable | UserError::InvalidRequest(_) => {
                ApiError::BadRequest(e.to_string())
            }
            UserError::Database(e) => e.into(),
        }
    }
}

impl From<actix_multipart::MultipartError> for ApiError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        ApiError::BadRequest(format!("multipart error: {e}"))
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let body = |error: &str| json!({ "error": error, "message": self.to_string() });
        match self {
            ApiError::Unauthorized => HttpResponse::Unauthorized().json(body("Unauthorized")),
            ApiError::BadRequest(_) => HttpResponse::BadRequest().json(body("Bad Request")),
            ApiError::NotFound(_) => HttpResponse::NotFound().json(body("Not Found")),
            ApiError::Conflict(_) => HttpResponse::Conflict().json(body("Conflict")),
            ApiError::TooLarge(_) => {
                HttpResponse::PayloadTooLarge().json(body("Payload Too Large"))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal Server Error",
                    "message": "An unexpected error occurred. Please try again.",
                }))
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
