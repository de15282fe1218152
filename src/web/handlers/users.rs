use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use kennedia_cms::common::{enveloped, UserError};
use kennedia_cms::db;
use kennedia_cms::models::{UserCreate, UserIden};
use kennedia_cms::services::password;

use super::super::error::{ApiError, ApiResult};
use super::super::forms::CreateUserForm;
use super::super::helpers::require_admin;
use super::super::state::AppState;

#[get("/api/users")]
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let users = db::list_users(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(users)))
}

#[post("/api/users")]
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<CreateUserForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let form = form.into_inner();

    form.validate().map_err(ApiError::BadRequest)?;

    // Only roles the panel exposes are assignable; hidden roles 400.
    let role = db::get_assignable_role(&state.pool, form.role_id).await?;

    // The insert only guards the email key; a taken username must 409 too.
    let username = form.username.trim().to_string();
    match db::get_user(&state.pool, &UserIden::Username(username.clone())).await {
        Ok(_) => {
            return Err(UserError::AlreadyExists(UserIden::Username(username)).into());
        }
        Err(UserError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    let password_hash = password::hash(&form.password)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

    let data = UserCreate {
        name: form.name.trim().to_string(),
        username,
        email: form.email.trim().to_lowercase(),
        phone: form.phone.filter(|p| !p.trim().is_empty()),
        password_hash,
        role_id: role.id,
    };

    let user = db::create_user(&state.pool, &data).await?;
    tracing::info!(id = %user.id, role = %role.name, "user created");
    Ok(HttpResponse::Created().json(enveloped(user)))
}

#[delete("/api/users/{id}")]
pub async fn remove(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let admin = require_admin(&state.pool, &req).await?;
    let id = path.into_inner();

    if admin.id == id {
        return Err(ApiError::bad_request("You cannot delete your own account"));
    }

    match db::delete_user(&state.pool, id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(UserError::NotFound(_)) => Err(ApiError::NotFound("user")),
        Err(e) => Err(e.into()),
    }
}

#[get("/api/roles")]
pub async fn list_roles(state: web::Data<AppState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let roles = db::list_assignable_roles(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(roles)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(remove)
        .service(list_roles);
}
