use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpResponse};

use kennedia_cms::common::enveloped;
use kennedia_cms::db;
use kennedia_cms::services::password;

use super::super::error::{ApiError, ApiResult};
use super::super::forms::LoginForm;
use super::super::helpers::SESSION_COOKIE;
use super::super::state::AppState;

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Json<LoginForm>,
) -> ApiResult<HttpResponse> {
    let email = form.email.trim().to_string();
    if email.is_empty() || form.password.is_empty() {
        return Err(ApiError::bad_request("Missing email or password"));
    }

    // A missing user and a wrong password answer identically.
    let user = db::get_user(&state.pool, &email.into())
        .await
        .map_err(|_| ApiError::Unauthorized)?;

    let ok = password::verify(&form.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("password verification error: {e}")))?;
    if !ok {
        return Err(ApiError::Unauthorized);
    }

    tracing::info!(user = %user.id, "admin login");

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(user.id.to_string()))
        .json(enveloped(user)))
}

#[post("/api/auth/logout")]
pub async fn logout() -> HttpResponse {
    let mut cookie = session_cookie(String::new());
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(enveloped(serde_json::json!({ "loggedOut": true })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login).service(logout);
}
