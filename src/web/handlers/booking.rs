use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use kennedia_cms::db;
use kennedia_cms::models::BookingStep;
use kennedia_cms::site::content::BRAND_NAME;
use kennedia_cms::site::nav::main_nav;

use super::super::error::ApiResult;
use super::super::forms::BookingForm;
use super::super::helpers::{is_htmx, prefers_dark, render};
use super::super::state::AppState;
use super::super::templates::{BookingPageTemplate, BookingStepTemplate, LocationView};

async fn location_views(pool: &PgPool) -> Result<Vec<LocationView>, sqlx::Error> {
    let locations = db::list_locations(pool).await?;
    Ok(locations
        .into_iter()
        .map(|l| LocationView {
            id: l.id.to_string(),
            name: l.name,
        })
        .collect())
}

#[get("/book")]
pub async fn booking_page(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let locations = location_views(&state.pool).await?;
    Ok(render(BookingPageTemplate {
        nav: main_nav(),
        dark: prefers_dark(&req),
        brand: BRAND_NAME,
        locations,
    }))
}

async fn step_fragment(
    pool: &PgPool,
    step: BookingStep,
    location: Option<String>,
) -> Result<HttpResponse, sqlx::Error> {
    // The location select only exists on step one.
    let locations = if step == BookingStep::SelectLocation {
        location_views(pool).await?
    } else {
        Vec::new()
    };

    Ok(render(BookingStepTemplate {
        step: step.number(),
        label: step.label(),
        terminal: step.is_terminal(),
        location: location.unwrap_or_default(),
        locations,
    }))
}

/// A wizard post without the htmx header (scripting off, or a stale form)
/// gets the full page again instead of a bare fragment.
fn back_to_booking() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/book"))
        .finish()
}

#[post("/book/next")]
pub async fn next_step(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<BookingForm>,
) -> ApiResult<HttpResponse> {
    if !is_htmx(&req) {
        return Ok(back_to_booking());
    }
    let form = form.into_inner();
    // Out-of-range step numbers restart the wizard rather than erroring.
    let step = BookingStep::from_number(form.step).unwrap_or_default().next();
    Ok(step_fragment(&state.pool, step, form.location).await?)
}

#[post("/book/back")]
pub async fn previous_step(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<BookingForm>,
) -> ApiResult<HttpResponse> {
    if !is_htmx(&req) {
        return Ok(back_to_booking());
    }
    let form = form.into_inner();
    let step = BookingStep::from_number(form.step).unwrap_or_default().back();
    Ok(step_fragment(&state.pool, step, form.location).await?)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(booking_page)
        .service(next_step)
        .service(previous_step);
}
