use actix_web::{delete, get, patch, post, put, web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use kennedia_cms::common::{enveloped, ContentError, PageRequest, Paginated};
use kennedia_cms::db;
use kennedia_cms::models::{NewsItem, NewsItemCreate, NewsItemUpdate};
use kennedia_cms::services::slug::slugify;

use super::super::error::{ApiError, ApiResult};
use super::super::forms::{ActiveToggleForm, ListQuery, NewsItemForm, NewsItemUpdateForm};
use super::super::helpers::{is_unique_violation, require_admin};
use super::super::state::AppState;

/// A news item normally requires a title; an image stored with the banner
/// flag carries the headline itself, which waives the requirement.
async fn resolve_title(
    pool: &PgPool,
    title: Option<&str>,
    media_id: Option<i64>,
) -> ApiResult<String> {
    let title = title.map(str::trim).unwrap_or_default();
    if !title.is_empty() {
        return Ok(title.to_string());
    }

    let is_banner = match media_id {
        Some(id) => db::get_media(pool, id)
            .await?
            .ok_or_else(|| {
                ApiError::from(ContentError::validation(format!("Unknown media id: {id}")))
            })?
            .is_banner,
        None => false,
    };

    if is_banner {
        Ok(String::new())
    } else {
        Err(ApiError::bad_request(
            "Title is required unless the image is a banner",
        ))
    }
}

fn derived_slug(title: &str, media_id: Option<i64>) -> String {
    if title.is_empty() {
        // Banner items have no headline to slug; key off the image instead.
        format!("banner-{}", media_id.unwrap_or_default())
    } else {
        slugify(title)
    }
}

#[get("/api/news")]
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;

    let page = PageRequest::new(query.page, query.per_page);
    let q = query.search();
    let sort = query
        .sort_column(NewsItem::sortable_columns())
        .map_err(ApiError::BadRequest)?;

    let items = db::list_news_items(
        &state.pool,
        q,
        sort,
        page.per_page as i64,
        page.offset() as i64,
    )
    .await?;
    let total = db::count_news_items(&state.pool, q).await? as usize;

    Ok(HttpResponse::Ok().json(enveloped(Paginated::new(items, page, total))))
}

#[get("/api/news/{id}")]
pub async fn get(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let item = db::get_news_item(&state.pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("news item"))?;
    Ok(HttpResponse::Ok().json(enveloped(item)))
}

#[post("/api/news")]
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<NewsItemForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let media_id = form.media_id();
    let form = form.into_inner();

    let title = resolve_title(&state.pool, form.title.as_deref(), media_id).await?;
    let slug = match form.slug.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => derived_slug(&title, media_id),
    };

    let data = NewsItemCreate {
        category: form.category,
        title,
        slug: slug.clone(),
        description: form.description,
        long_description: form.long_description,
        badge_type_id: form.badge_type_id,
        author_name: form.author_name,
        author_bio: form.author_bio,
        read_time: form.read_time,
        tags: form.tags,
        published_on: form.published_on,
        media_id,
        is_active: form.is_active,
    };

    let item = db::create_news_item(&state.pool, &data).await.map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::from(ContentError::SlugConflict(slug))
        } else {
            e.into()
        }
    })?;
    Ok(HttpResponse::Created().json(enveloped(item)))
}

#[put("/api/news/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<NewsItemUpdateForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let id = path.into_inner();
    let media_change = form.media_change();
    let form = form.into_inner();

    // Only a newly attached id needs to exist; a clear binds no id at all.
    if let Some(id) = media_change.flatten() {
        if db::get_media(&state.pool, id).await?.is_none() {
            return Err(ContentError::validation(format!("Unknown media id: {id}")).into());
        }
    }

    let slug = match (&form.slug, &form.title) {
        (Some(slug), _) => Some(slug.trim().to_string()),
        (None, Some(title)) if !title.trim().is_empty() => Some(slugify(title)),
        _ => None,
    };

    let data = NewsItemUpdate {
        category: form.category,
        title: form.title,
        slug: slug.clone(),
        description: form.description,
        long_description: form.long_description,
        badge_type_id: form.badge_type_id,
        author_name: form.author_name,
        author_bio: form.author_bio,
        read_time: form.read_time,
        tags: form.tags,
        published_on: form.published_on,
        media_id: media_change,
    };

    let item = db::update_news_item(&state.pool, id, &data)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::from(ContentError::SlugConflict(slug.unwrap_or_default()))
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or(ApiError::NotFound("news item"))?;
    Ok(HttpResponse::Ok().json(enveloped(item)))
}

#[patch("/api/news/{id}/active")]
pub async fn toggle_active(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<ActiveToggleForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let item = db::set_news_item_active(&state.pool, path.into_inner(), form.is_active)
        .await?
        .ok_or(ApiError::NotFound("news item"))?;
    Ok(HttpResponse::Ok().json(enveloped(item)))
}

#[delete("/api/news/{id}")]
pub async fn remove(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    if !db::delete_news_item(&state.pool, path.into_inner()).await? {
        return Err(ApiError::NotFound("news item"));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(get)
        .service(create)
        .service(update)
        .service(toggle_active)
        .service(remove);
}
