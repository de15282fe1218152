use actix_web::{delete, get, patch, post, put, web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use kennedia_cms::common::{enveloped, ContentError};
use kennedia_cms::db;
use kennedia_cms::models::HeroBuckets;

use super::super::error::{ApiError, ApiResult};
use super::super::forms::{ActiveToggleForm, HeroSectionForm, HeroSectionUpdateForm, HomepageToggleForm};
use super::super::helpers::require_admin;
use super::super::state::AppState;

/// Every id referenced by the buckets must exist in the media store.
async fn check_bucket_ids(pool: &PgPool, buckets: &HeroBuckets) -> ApiResult<()> {
    let mut ids: Vec<i64> = Vec::new();
    ids.extend_from_slice(&buckets.background_all);
    ids.extend_from_slice(&buckets.background_light);
    ids.extend_from_slice(&buckets.background_dark);
    ids.extend_from_slice(&buckets.sub_all);
    ids.extend_from_slice(&buckets.sub_light);
    ids.extend_from_slice(&buckets.sub_dark);

    let missing = db::missing_media_ids(pool, &ids).await?;
    if !missing.is_empty() {
        return Err(ContentError::validation(format!(
            "Unknown media ids: {missing:?}"
        ))
        .into());
    }
    Ok(())
}

#[get("/api/hero-sections")]
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let sections = db::list_hero_sections(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(sections)))
}

#[get("/api/hero-sections/{id}")]
pub async fn get(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let section = db::get_hero_section(&state.pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("hero section"))?;
    Ok(HttpResponse::Ok().json(enveloped(section)))
}

#[post("/api/hero-sections")]
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<HeroSectionForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let form = form.into_inner();

    let title = form.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    // Buckets of the inactive theme mode are dropped no matter what the
    // payload still carried for them.
    let buckets = form.buckets.into_buckets().normalized(form.theme_mode);
    check_bucket_ids(&state.pool, &buckets).await?;

    let data = kennedia_cms::models::HeroSectionCreate {
        title,
        subtitle: form.subtitle,
        cta_text: form.cta_text,
        cta_link: form.cta_link,
        theme_mode: form.theme_mode,
        is_active: form.is_active,
        show_on_homepage: form.show_on_homepage,
        buckets,
    };

    let section = db::create_hero_section(&state.pool, &data).await?;
    Ok(HttpResponse::Created().json(enveloped(section)))
}

#[put("/api/hero-sections/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<HeroSectionUpdateForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let id = path.into_inner();
    let form = form.into_inner();

    let existing = db::get_hero_section(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("hero section"))?;

    let theme_mode = form.theme_mode.unwrap_or(existing.theme_mode);

    // Edit keeps pre-existing ids in place and appends newly uploaded
    // ones, then the inactive mode's buckets are cleared.
    let buckets = if form.buckets.is_provided() {
        let merged = form
            .buckets
            .into_buckets()
            .merged_onto(&existing.buckets())
            .normalized(theme_mode);
        check_bucket_ids(&state.pool, &merged).await?;
        Some(merged)
    } else if form.theme_mode.is_some() {
        Some(existing.buckets().normalized(theme_mode))
    } else {
        None
    };

    let data = kennedia_cms::models::HeroSectionUpdate {
        title: form.title,
        subtitle: form.subtitle,
        cta_text: form.cta_text,
        cta_link: form.cta_link,
        theme_mode: form.theme_mode,
        is_active: form.is_active,
        show_on_homepage: form.show_on_homepage,
        buckets,
    };

    let section = db::update_hero_section(&state.pool, id, &data)
        .await?
        .ok_or(ApiError::NotFound("hero section"))?;
    Ok(HttpResponse::Ok().json(enveloped(section)))
}

#[patch("/api/hero-sections/{id}/active")]
pub async fn toggle_active(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<ActiveToggleForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let section = db::set_hero_section_active(&state.pool, path.into_inner(), form.is_active)
        .await?
        .ok_or(ApiError::NotFound("hero section"))?;
    Ok(HttpResponse::Ok().json(enveloped(section)))
}

#[patch("/api/hero-sections/{id}/homepage")]
pub async fn toggle_homepage(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<HomepageToggleForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let section =
        db::set_hero_section_homepage(&state.pool, path.into_inner(), form.show_on_homepage)
            .await?
            .ok_or(ApiError::NotFound("hero section"))?;
    Ok(HttpResponse::Ok().json(enveloped(section)))
}

#[delete("/api/hero-sections/{id}")]
pub async fn remove(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    if !db::delete_hero_section(&state.pool, path.into_inner()).await? {
        return Err(ApiError::NotFound("hero section"));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(get)
        .service(create)
        .service(update)
        .service(toggle_active)
        .service(toggle_homepage)
        .service(remove);
}
