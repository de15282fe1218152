use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use kennedia_cms::common::{enveloped, ContentError, PageRequest, Paginated};
use kennedia_cms::db;
use kennedia_cms::models::{EventCreate, EventUpdate, MediaSource};
use kennedia_cms::services::slug::slugify;

use super::super::error::{ApiError, ApiResult};
use super::super::forms::{EventForm, EventUpdateForm, ListQuery};
use super::super::helpers::{is_unique_violation, require_admin};
use super::super::state::AppState;

/// An image slot is either an uploaded id or an external URL; payloads
/// carrying both are rejected, and uploaded ids must exist.
async fn check_image(pool: &PgPool, image: &MediaSource) -> ApiResult<()> {
    if !image.is_empty() && !image.is_valid() {
        return Err(ContentError::validation(
            "Event image must use either an uploaded file or an external URL, not both",
        )
        .into());
    }
    if let Some(id) = image.media_id {
        if db::get_media(pool, id).await?.is_none() {
            return Err(ContentError::validation(format!("Unknown media id: {id}")).into());
        }
    }
    Ok(())
}

#[get("/api/events")]
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;

    let page = PageRequest::new(query.page, query.per_page);
    let q = query.search();

    let items = db::list_events(&state.pool, q, page.per_page as i64, page.offset() as i64).await?;
    let total = db::count_events(&state.pool, q).await? as usize;

    Ok(HttpResponse::Ok().json(enveloped(Paginated::new(items, page, total))))
}

#[get("/api/events/{id}")]
pub async fn get(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let event = db::get_event(&state.pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("event"))?;
    Ok(HttpResponse::Ok().json(enveloped(event)))
}

#[post("/api/events")]
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<EventForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let form = form.into_inner();

    if form.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let slug = form.resolved_slug();
    if slug.is_empty() {
        return Err(ApiError::bad_request("Title must produce a non-empty slug"));
    }

    check_image(&state.pool, &form.image).await?;

    let data = EventCreate {
        title: form.title.trim().to_string(),
        slug: slug.clone(),
        location_id: form.location_id,
        property_type_id: form.property_type_id,
        date: form.date,
        description: form.description,
        status: form.status,
        cta_text: form.cta_text,
        cta_link: form.cta_link,
        image: form.image,
    };

    let event = db::create_event(&state.pool, &data).await.map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::from(ContentError::SlugConflict(slug))
        } else {
            e.into()
        }
    })?;
    Ok(HttpResponse::Created().json(enveloped(event)))
}

#[put("/api/events/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<EventUpdateForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let id = path.into_inner();
    let form = form.into_inner();

    if let Some(image) = &form.image {
        check_image(&state.pool, image).await?;
    }

    // A new title without an explicit slug re-derives the slug.
    let slug = match (&form.slug, &form.title) {
        (Some(slug), _) => Some(slug.trim().to_string()),
        (None, Some(title)) => Some(slugify(title)),
        (None, None) => None,
    };

    let data = EventUpdate {
        title: form.title,
        slug: slug.clone(),
        location_id: form.location_id,
        property_type_id: form.property_type_id,
        date: form.date,
        description: form.description,
        status: form.status,
        cta_text: form.cta_text,
        cta_link: form.cta_link,
        image: form.image,
    };

    let event = db::update_event(&state.pool, id, &data)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::from(ContentError::SlugConflict(slug.unwrap_or_default()))
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or(ApiError::NotFound("event"))?;
    Ok(HttpResponse::Ok().json(enveloped(event)))
}

#[delete("/api/events/{id}")]
pub async fn remove(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    if !db::delete_event(&state.pool, path.into_inner()).await? {
        return Err(ApiError::NotFound("event"));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(get)
        .service(create)
        .service(update)
        .service(remove);
}
