use actix_web::{get, patch, post, put, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use kennedia_cms::common::{enveloped, ContentError, PageRequest, Paginated};
use kennedia_cms::db;
use kennedia_cms::models::{PropertyListingCreate, PropertyListingUpdate};

use super::super::error::{ApiError, ApiResult};
use super::super::forms::{
    ActiveToggleForm, ListQuery, LocationForm, PropertyForm, PropertyListingForm,
    PropertyListingUpdateForm,
};
use super::super::helpers::require_admin;
use super::super::state::AppState;

#[get("/api/property-types")]
pub async fn list_property_types(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let types = db::list_property_types(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(types)))
}

#[get("/api/locations")]
pub async fn list_locations(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let locations = db::list_locations(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(locations)))
}

#[post("/api/locations")]
pub async fn create_location(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<LocationForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Location name is required"));
    }
    let location = db::create_location(&state.pool, name, form.city.as_deref()).await?;
    Ok(HttpResponse::Created().json(enveloped(location)))
}

#[get("/api/amenities")]
pub async fn list_amenities(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let amenities = db::list_amenities(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(amenities)))
}

#[get("/api/properties")]
pub async fn list_properties(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let properties = db::list_properties(&state.pool).await?;
    Ok(HttpResponse::Ok().json(enveloped(properties)))
}

#[post("/api/properties")]
pub async fn create_property(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<PropertyForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("Property name is required"));
    }
    let property =
        db::create_property(&state.pool, name, form.property_type_id, form.location_id).await?;
    Ok(HttpResponse::Created().json(enveloped(property)))
}

#[get("/api/property-listings")]
pub async fn list_listings(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;

    let page = PageRequest::new(query.page, query.per_page);
    let q = query.search();

    let items =
        db::list_property_listings(&state.pool, q, page.per_page as i64, page.offset() as i64)
            .await?;
    let total = db::count_property_listings(&state.pool, q).await? as usize;

    Ok(HttpResponse::Ok().json(enveloped(Paginated::new(items, page, total))))
}

#[get("/api/property-listings/{id}")]
pub async fn get_listing(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let listing = db::get_property_listing(&state.pool, path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("property listing"))?;
    Ok(HttpResponse::Ok().json(enveloped(listing)))
}

#[post("/api/property-listings")]
pub async fn create_listing(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<PropertyListingForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let form = form.into_inner();

    if form.heading.trim().is_empty() {
        return Err(ApiError::bad_request("Heading is required"));
    }
    if db::get_property(&state.pool, form.property_id).await?.is_none() {
        return Err(ContentError::validation(format!(
            "Unknown property id: {}",
            form.property_id
        ))
        .into());
    }

    let data = PropertyListingCreate {
        property_id: form.property_id,
        admin_user_id: form.admin_user_id,
        heading: form.heading.trim().to_string(),
        subtitle: form.subtitle,
        address: form.address,
        tagline: form.tagline,
        rating: form.rating,
        capacity: form.capacity,
        price: form.price,
        amenity_ids: form.amenity_ids,
        is_active: form.is_active,
    };

    let listing = db::create_property_listing(&state.pool, &data).await?;
    Ok(HttpResponse::Created().json(enveloped(listing)))
}

#[put("/api/property-listings/{id}")]
pub async fn update_listing(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<PropertyListingUpdateForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let form = form.into_inner();

    let data = PropertyListingUpdate {
        admin_user_id: form.admin_user_id,
        heading: form.heading,
        subtitle: form.subtitle,
        address: form.address,
        tagline: form.tagline,
        rating: form.rating,
        capacity: form.capacity,
        price: form.price,
        amenity_ids: form.amenity_ids,
    };

    let listing = db::update_property_listing(&state.pool, path.into_inner(), &data)
        .await?
        .ok_or(ApiError::NotFound("property listing"))?;
    Ok(HttpResponse::Ok().json(enveloped(listing)))
}

#[patch("/api/property-listings/{id}/active")]
pub async fn toggle_listing_active(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<ActiveToggleForm>,
) -> ApiResult<HttpResponse> {
    require_admin(&state.pool, &req).await?;
    let listing = db::set_property_listing_active(&state.pool, path.into_inner(), form.is_active)
        .await?
        .ok_or(ApiError::NotFound("property listing"))?;
    Ok(HttpResponse::Ok().json(enveloped(listing)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_property_types)
        .service(list_locations)
        .service(create_location)
        .service(list_amenities)
        .service(list_properties)
        .service(create_property)
        .service(list_listings)
        .service(get_listing)
        .service(create_listing)
        .service(update_listing)
        .service(toggle_listing_active);
}
