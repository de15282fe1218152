use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use kennedia_cms::common::{enveloped, ContentError};
use kennedia_cms::db;
use kennedia_cms::models::{AboutMediaItem, AboutUsCreate, AboutUsUpdate, RecognitionCreate, VentureCreate};

use super::super::error::{ApiError, ApiResult};
use super::super::forms::{AboutUsForm, AboutUsUpdateForm, RecognitionForm, VentureForm};
use super::super::helpers::require_admin;
use super::super::state::AppState;

/// Every media entry must be complete (uploads resolved to an id, links
/// carrying a URL) and uploaded ids must exist.
async fn check_media_items(pool: &PgPool, items: &[AboutMediaItem]) -> ApiResult<()> {
    for item in items {
        if !item.is_resolved() {
            return Err(ContentError::validation(
                "Each media entry needs an uploaded file or a URL",
            )
            .into());
        }
    }

    let ids: Vec<i64> = items.iter().filter_map(|i| i.media_id).collect();
    let missing = db::missing_media_ids(pool, &ids).await?;
    if !missing.is_empty() {
        return Err(ContentError::validation(format!("Unknown media ids: {missing:?}")).into());
    }
    Ok(())
}

async fn check_logo_id(pool: &PgPool, media_id: Option<i64>) -> ApiResult<()> {
    if let Some(id) = media_id {
        if db::get_media(pool, id).await?.is_none() {
            return Err(ContentError::validation(format!("Unknown media id: {id}")).into());
        }
    }
    Ok(())
}

async fn require_about(pool: &PgPool, id: Uuid) -> ApiResult<()> {
    if db::get_about_us(pool, id).await?.is_none() {
        return Err(ApiError::NotFound("about section"));
    }
    Ok(())
}

#[get("/api/about")]
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let sections = db::list_about_us(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(sections)))
}

#[get("/api/about/{id}")]
pub async fn get(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let section = db::get_about_us(&state.pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("about section"))?;
    Ok(HttpResponse::Ok().json(enveloped(section)))
}

#[post("/api/about")]
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<AboutUsForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let form = form.into_inner();

    if form.heading.trim().is_empty() {
        return Err(ApiError::bad_request("Heading is required"));
    }
    check_media_items(&state.pool, &form.media).await?;

    let data = AboutUsCreate {
        heading: form.heading.trim().to_string(),
        body: form.body,
        video_embed_url: form.video_embed_url,
        video_embed_title: form.video_embed_title,
        media: form.media,
    };

    let section = db::create_about_us(&state.pool, &data).await?;
    Ok(HttpResponse::Created().json(enveloped(section)))
}

#[put("/api/about/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<AboutUsUpdateForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let form = form.into_inner();

    if let Some(media) = &form.media {
        check_media_items(&state.pool, media).await?;
    }

    let data = AboutUsUpdate {
        heading: form.heading,
        body: form.body,
        video_embed_url: form.video_embed_url,
        video_embed_title: form.video_embed_title,
        media: form.media,
    };

    let section = db::update_about_us(&state.pool, path.into_inner(), &data)
        .await?
        .ok_or(ApiError::NotFound("about section"))?;
    Ok(HttpResponse::Ok().json(enveloped(section)))
}

#[get("/api/about/{id}/ventures")]
pub async fn list_ventures(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let about_id = path.into_inner();
    require_about(&state.pool, about_id).await?;
    let ventures = db::list_ventures(&state.pool, about_id).await?;
    Ok(HttpResponse::Ok().json(enveloped(ventures)))
}

#[post("/api/about/{id}/ventures")]
pub async fn create_venture(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<VentureForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let about_id = path.into_inner();
    require_about(&state.pool, about_id).await?;

    let logo_media_id = form.logo_media_id();
    let form = form.into_inner();
    if form.name.trim().is_empty() {
        return Err(ApiError::bad_request("Venture name is required"));
    }
    check_logo_id(&state.pool, logo_media_id).await?;

    let data = VentureCreate {
        about_id,
        name: form.name.trim().to_string(),
        logo_media_id,
    };

    let venture = db::create_venture(&state.pool, &data).await?;
    Ok(HttpResponse::Created().json(enveloped(venture)))
}

#[delete("/api/ventures/{id}")]
pub async fn remove_venture(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    if !db::delete_venture(&state.pool, path.into_inner()).await? {
        return Err(ApiError::NotFound("venture"));
    }
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/about/{id}/recognitions")]
pub async fn list_recognitions(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let about_id = path.into_inner();
    require_about(&state.pool, about_id).await?;
    let recognitions = db::list_recognitions(&state.pool, about_id).await?;
    Ok(HttpResponse::Ok().json(enveloped(recognitions)))
}

#[post("/api/about/{id}/recognitions")]
pub async fn create_recognition(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<RecognitionForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let about_id = path.into_inner();
    require_about(&state.pool, about_id).await?;

    let form = form.into_inner();
    if form.title.trim().is_empty() {
        return Err(ApiError::bad_request("Recognition title is required"));
    }

    let data = RecognitionCreate {
        about_id,
        title: form.title.trim().to_string(),
        subtitle: form.subtitle,
        value: form.value,
    };

    let recognition = db::create_recognition(&state.pool, &data).await?;
    Ok(HttpResponse::Created().json(enveloped(recognition)))
}

#[delete("/api/recognitions/{id}")]
pub async fn remove_recognition(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    if !db::delete_recognition(&state.pool, path.into_inner()).await? {
        return Err(ApiError::NotFound("recognition"));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(get)
        .service(create)
        .service(update)
        .service(list_ventures)
        .service(create_venture)
        .service(remove_venture)
        .service(list_recognitions)
        .service(create_recognition)
        .service(remove_recognition);
}
