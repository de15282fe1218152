use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use sqlx::PgPool;
use uuid::Uuid;

use kennedia_cms::db;
use kennedia_cms::models::User;

use super::error::{ApiError, ApiResult};

pub const SESSION_COOKIE: &str = "kd_uid";
pub const THEME_COOKIE: &str = "theme";

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn current_user_id(req: &HttpRequest) -> Option<Uuid> {
    // MVP auth/session.
    // Priority: cookie -> request header -> env var.
    let cookie_val = req
        .cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(&s).ok());

    if cookie_val.is_some() {
        return cookie_val;
    }

    let header_val = req
        .headers()
        .get("X-Kennedia-User-Id")
        .or_else(|| req.headers().get("X-User-Id"))
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(s).ok());

    header_val.or_else(|| {
        std::env::var("KENNEDIA_USER_ID")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .and_then(|s| Uuid::parse_str(&s).ok())
    })
}

/// Every `/api` admin route goes through this; anonymous calls get the
/// JSON 401 instead of a redirect.
pub async fn require_admin(pool: &PgPool, req: &HttpRequest) -> ApiResult<User> {
    let uid = current_user_id(req).ok_or(ApiError::Unauthorized)?;
    db::get_user(pool, &uid.into())
        .await
        .map_err(|_| ApiError::Unauthorized)
}

/// Whether the visitor's theme cookie asks for the dark asset set.
pub fn prefers_dark(req: &HttpRequest) -> bool {
    req.cookie(THEME_COOKIE)
        .is_some_and(|c| c.value().eq_ignore_ascii_case("dark"))
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
