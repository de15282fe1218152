use actix_web::{delete, get, patch, post, put, web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use kennedia_cms::common::{enveloped, ContentError, PageRequest, Paginated};
use kennedia_cms::db;
use kennedia_cms::models::{DailyOffer, DailyOfferCreate, DailyOfferUpdate, DisplayLocation};
use kennedia_cms::services::hours::format_available_hours;
use kennedia_cms::services::offers::resolve_property_type;

use super::super::error::{ApiError, ApiResult};
use super::super::forms::{ActiveToggleForm, DailyOfferForm, DailyOfferUpdateForm, ListQuery};
use super::super::helpers::require_admin;
use super::super::state::AppState;

/// "HH:MM" pair -> stored "hh:MM AM - hh:MM PM" window. An omitted pair
/// resolves to `None` (leave the stored window alone on update), a blank
/// pair to `Some(None)` (clear it). Partial input is rejected, as is an
/// inverted or malformed window.
fn resolve_hours(open: Option<&str>, close: Option<&str>) -> ApiResult<Option<Option<String>>> {
    let open = open.map(str::trim);
    let close = close.map(str::trim);

    match (open, close) {
        (None, None) => Ok(None),
        (Some(""), Some("")) => Ok(Some(None)),
        (Some(open), Some(close)) => format_available_hours(open, close)
            .map(|window| Some(Some(window)))
            .ok_or_else(|| ApiError::bad_request("Invalid available hours window")),
        _ => Err(ApiError::bad_request(
            "Both opening and closing time are required",
        )),
    }
}

/// BOTH-location offers are always filed under the catalogue's "both"
/// property type, overriding the selected property's own type.
async fn resolve_offer_type(
    pool: &PgPool,
    display_location: DisplayLocation,
    type_id: Option<Uuid>,
    type_name: Option<String>,
) -> ApiResult<(Option<Uuid>, Option<String>)> {
    let selected = match (type_id, type_name) {
        (Some(id), Some(name)) => Some((id, name)),
        _ => None,
    };

    let types = db::list_property_types(pool).await?;
    Ok(match resolve_property_type(display_location, selected, &types) {
        Some((id, name)) => (Some(id), Some(name)),
        None => (None, None),
    })
}

async fn check_media_id(pool: &PgPool, media_id: Option<i64>) -> ApiResult<()> {
    if let Some(id) = media_id {
        if db::get_media(pool, id).await?.is_none() {
            return Err(ContentError::validation(format!("Unknown media id: {id}")).into());
        }
    }
    Ok(())
}

#[get("/api/daily-offers")]
pub async fn list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;

    let page = PageRequest::new(query.page, query.per_page);
    let q = query.search();
    let sort = query
        .sort_column(DailyOffer::sortable_columns())
        .map_err(ApiError::BadRequest)?;

    let items = db::list_daily_offers(
        &state.pool,
        q,
        sort,
        page.per_page as i64,
        page.offset() as i64,
    )
    .await?;
    let total = db::count_daily_offers(&state.pool, q).await? as usize;

    Ok(HttpResponse::Ok().json(enveloped(Paginated::new(items, page, total))))
}

#[get("/api/daily-offers/{id}")]
pub async fn get(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let offer = db::get_daily_offer(&state.pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("daily offer"))?;
    Ok(HttpResponse::Ok().json(enveloped(offer)))
}

#[post("/api/daily-offers")]
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<DailyOfferForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let media_id = form.media_id();
    let form = form.into_inner();

    if form.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }
    if form.description.trim().is_empty() {
        return Err(ApiError::bad_request("Description is required"));
    }

    let available_hours =
        resolve_hours(form.open_time.as_deref(), form.close_time.as_deref())?.flatten();
    check_media_id(&state.pool, media_id).await?;
    let (property_type_id, property_type) = resolve_offer_type(
        &state.pool,
        form.display_location,
        form.property_type_id,
        form.property_type,
    )
    .await?;

    let data = DailyOfferCreate {
        title: form.title.trim().to_string(),
        description: form.description,
        long_description: form.long_description,
        coupon_code: form.coupon_code,
        cta_text: form.cta_text,
        cta_link: form.cta_link,
        property_id: form.property_id,
        property_name: form.property_name,
        property_type_id,
        property_type,
        available_hours,
        expires_on: form.expires_on,
        media_id,
        is_active: form.is_active,
        display_location: form.display_location,
    };

    let offer = db::create_daily_offer(&state.pool, &data).await?;
    Ok(HttpResponse::Created().json(enveloped(offer)))
}

#[put("/api/daily-offers/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<DailyOfferUpdateForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let id = path.into_inner();
    let media_change = form.media_change();
    let form = form.into_inner();

    let existing = db::get_daily_offer(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("daily offer"))?;

    let available_hours = resolve_hours(form.open_time.as_deref(), form.close_time.as_deref())?;
    // Only a newly attached id needs to exist; a clear binds no id at all.
    check_media_id(&state.pool, media_change.flatten()).await?;

    let display_location = form.display_location.unwrap_or(existing.display_location);
    let (property_type_id, property_type) = resolve_offer_type(
        &state.pool,
        display_location,
        form.property_type_id.or(existing.property_type_id),
        form.property_type.or(existing.property_type),
    )
    .await?;

    let data = DailyOfferUpdate {
        title: form.title,
        description: form.description,
        long_description: form.long_description,
        coupon_code: form.coupon_code,
        cta_text: form.cta_text,
        cta_link: form.cta_link,
        property_id: form.property_id,
        property_name: form.property_name,
        property_type_id,
        property_type,
        available_hours,
        expires_on: form.expires_on,
        media_id: media_change,
        display_location: form.display_location,
    };

    let offer = db::update_daily_offer(&state.pool, id, &data)
        .await?
        .ok_or(ApiError::NotFound("daily offer"))?;
    Ok(HttpResponse::Ok().json(enveloped(offer)))
}

#[patch("/api/daily-offers/{id}/active")]
pub async fn toggle_active(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<ActiveToggleForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let offer = db::set_daily_offer_active(&state.pool, path.into_inner(), form.is_active)
        .await?
        .ok_or(ApiError::NotFound("daily offer"))?;
    Ok(HttpResponse::Ok().json(enveloped(offer)))
}

#[delete("/api/daily-offers/{id}")]
pub async fn remove(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    if !db::delete_daily_offer(&state.pool, path.into_inner()).await? {
        return Err(ApiError::NotFound("daily offer"));
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

#[cfg(test)]
mod tests {
    use super::resolve_hours;

    #[test]
    fn test_resolve_hours_omitted_keeps_blank_clears() {
        assert_eq!(resolve_hours(None, None).unwrap(), None);
        assert_eq!(resolve_hours(Some(""), Some("")).unwrap(), Some(None));
        assert_eq!(resolve_hours(Some("  "), Some("")).unwrap(), Some(None));
    }

    #[test]
    fn test_resolve_hours_formats_full_pair() {
        assert_eq!(
            resolve_hours(Some("09:00"), Some("17:30")).unwrap(),
            Some(Some("09:00 AM - 05:30 PM".to_string())),
        );
    }

    #[test]
    fn test_resolve_hours_rejects_partial_and_inverted_windows() {
        assert!(resolve_hours(Some("09:00"), None).is_err());
        assert!(resolve_hours(None, Some("17:00")).is_err());
        assert!(resolve_hours(Some("18:00"), Some("09:00")).is_err());
    }
}
