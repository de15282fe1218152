use std::collections::HashMap;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{get, http::header, web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use kennedia_cms::db;
use kennedia_cms::models::{AboutMediaKind, DailyOffer, EventStatus, NewsItem};
use kennedia_cms::services::carousel::Carousel;
use kennedia_cms::site::content::{self, AWARDS, BRAND_NAME, BRAND_TAGLINE, PRESENCE, VERTICALS};
use kennedia_cms::site::nav::main_nav;

use super::super::forms::CarouselQuery;
use super::super::helpers::{prefers_dark, render, THEME_COOKIE};
use super::super::state::AppState;
use super::super::templates::{
    AboutPageTemplate, AboutView, EventCard, EventsPageTemplate, HeroSlideTemplate, HeroSlideView,
    HomeTemplate, ListingCard, NewsCard, OfferCard, RecognitionView, ReviewsPageTemplate,
    SectionTemplate, VentureView,
};

/// A failed store read degrades the section to empty instead of failing
/// the whole page.
fn or_empty<T>(result: Result<Vec<T>, sqlx::Error>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("failed to load {what}: {e}");
        Vec::new()
    })
}

/// Url of every referenced media row, keyed by id. Missing rows simply
/// drop out; the pages degrade to text.
async fn media_urls(pool: &PgPool, ids: &[i64]) -> HashMap<i64, String> {
    let items = or_empty(db::get_media_many(pool, ids).await, "media urls");
    items.into_iter().map(|m| (m.id, m.url)).collect()
}

/// The homepage hero slide for one carousel position. The first active
/// homepage section drives the carousel; its theme-appropriate background
/// bucket supplies the slides.
async fn hero_slide(
    pool: &PgPool,
    dark: bool,
    current: usize,
    advance: bool,
    paused: bool,
) -> Option<HeroSlideView> {
    let sections = or_empty(
        db::list_homepage_hero_sections(pool).await,
        "hero sections",
    );
    let section = sections.into_iter().next()?;

    let ids = section.background_for_theme(dark).to_vec();
    // A section without backgrounds still renders its copy as one slide.
    let len = ids.len().max(1);

    let mut carousel = Carousel::with_active(len, current);
    if advance && !paused {
        carousel.tick();
    }
    let index = carousel.active();

    let background_url = match ids.get(index) {
        Some(id) => match db::get_media(pool, *id).await {
            Ok(media) => media.map(|m| m.url).unwrap_or_default(),
            Err(e) => {
                tracing::warn!("failed to load hero background: {e}");
                String::new()
            }
        },
        None => String::new(),
    };

    Some(HeroSlideView {
        index,
        len,
        title: section.title,
        subtitle: section.subtitle.unwrap_or_default(),
        cta_text: section.cta_text.unwrap_or_default(),
        cta_link: section.cta_link.unwrap_or_default(),
        background_url,
        paused,
    })
}

fn offer_cards(offers: Vec<DailyOffer>, urls: &HashMap<i64, String>) -> Vec<OfferCard> {
    offers
        .into_iter()
        .map(|o| OfferCard {
            title: o.title,
            description: o.description,
            coupon_code: o.coupon_code.unwrap_or_default(),
            available_hours: o.available_hours.unwrap_or_default(),
            cta_text: o.cta_text.unwrap_or_default(),
            cta_link: o.cta_link.unwrap_or_default(),
            image_url: o
                .media_id
                .and_then(|id| urls.get(&id).cloned())
                .unwrap_or_default(),
        })
        .collect()
}

fn news_cards(items: Vec<NewsItem>, urls: &HashMap<i64, String>) -> Vec<NewsCard> {
    items
        .into_iter()
        .map(|n| NewsCard {
            tags: n.tag_list(),
            title: n.title,
            category: n.category.as_str().to_string(),
            published_on: n
                .published_on
                .map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_default(),
            read_time: n.read_time.unwrap_or_default(),
            image_url: n
                .media_id
                .and_then(|id| urls.get(&id).cloned())
                .unwrap_or_default(),
        })
        .collect()
}

fn status_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Active => "On now",
        EventStatus::ComingSoon => "Coming soon",
        EventStatus::SoldOut => "Sold out",
        EventStatus::Inactive => "",
    }
}

#[get("/")]
pub async fn home(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let dark = prefers_dark(&req);

    let slide = hero_slide(&state.pool, dark, 0, false, false).await;
    let offers = or_empty(db::list_homepage_offers(&state.pool).await, "offers");
    let news = or_empty(db::list_active_news(&state.pool, 3).await, "news");

    let mut media_ids: Vec<i64> = offers.iter().filter_map(|o| o.media_id).collect();
    media_ids.extend(news.iter().filter_map(|n| n.media_id));
    let urls = media_urls(&state.pool, &media_ids).await;

    render(HomeTemplate {
        nav: main_nav(),
        dark,
        brand: BRAND_NAME,
        tagline: BRAND_TAGLINE,
        slide,
        offers: offer_cards(offers, &urls),
        verticals: VERTICALS,
        presence: PRESENCE,
        awards: AWARDS,
        news: news_cards(news, &urls),
    })
}

#[get("/fragments/hero")]
pub async fn hero_fragment(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<CarouselQuery>,
) -> HttpResponse {
    let dark = prefers_dark(&req);
    let slide = hero_slide(&state.pool, dark, query.current, true, query.paused).await;
    render(HeroSlideTemplate { slide })
}

/// A section page: fixed copy plus the active listings of the matching
/// property type and the offers surfaced on property pages.
async fn section_page(
    state: &AppState,
    req: &HttpRequest,
    slug: &'static str,
    type_name: Option<&str>,
) -> HttpResponse {
    let page = content::section_page(slug).unwrap_or(&content::SECTION_PAGES[0]);

    let listings = match type_name {
        Some(name) => or_empty(
            db::list_active_listings_for_type(&state.pool, name).await,
            "listings",
        ),
        None => Vec::new(),
    };
    let offers = or_empty(db::list_property_offers(&state.pool).await, "offers");

    let media_ids: Vec<i64> = offers.iter().filter_map(|o| o.media_id).collect();
    let urls = media_urls(&state.pool, &media_ids).await;

    let listings = listings
        .into_iter()
        .map(|l| ListingCard {
            heading: l.heading,
            subtitle: l.subtitle.unwrap_or_default(),
            address: l.address.unwrap_or_default(),
            tagline: l.tagline.unwrap_or_default(),
            rating: l.rating.map(|r| format!("{r:.1}")).unwrap_or_default(),
        })
        .collect();

    render(SectionTemplate {
        nav: main_nav(),
        dark: prefers_dark(req),
        brand: BRAND_NAME,
        title: page.title,
        intro: page.intro,
        listings,
        offers: offer_cards(offers, &urls),
    })
}

#[get("/hotels")]
pub async fn hotels(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    section_page(&state, &req, "hotels", Some("hotel")).await
}

#[get("/cafes")]
pub async fn cafes(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    section_page(&state, &req, "cafes", Some("cafe")).await
}

#[get("/bars")]
pub async fn bars(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    section_page(&state, &req, "bars", Some("bar")).await
}

#[get("/entertainment")]
pub async fn entertainment(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    section_page(&state, &req, "entertainment", None).await
}

#[get("/events")]
pub async fn events_page(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let page = content::section_page("events").unwrap_or(&content::SECTION_PAGES[0]);
    let events = or_empty(db::list_public_events(&state.pool).await, "events");

    let media_ids: Vec<i64> = events.iter().filter_map(|e| e.media_id).collect();
    let urls = media_urls(&state.pool, &media_ids).await;

    let events = events
        .into_iter()
        .map(|e| EventCard {
            image_url: e
                .media_id
                .and_then(|id| urls.get(&id).cloned())
                .or(e.image_url)
                .unwrap_or_default(),
            title: e.title,
            slug: e.slug,
            date: e
                .date
                .map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_default(),
            description: e.description.unwrap_or_default(),
            status: status_label(e.status).to_string(),
            cta_text: e.cta_text.unwrap_or_default(),
            cta_link: e.cta_link.unwrap_or_default(),
        })
        .collect();

    render(EventsPageTemplate {
        nav: main_nav(),
        dark: prefers_dark(&req),
        brand: BRAND_NAME,
        title: page.title,
        intro: page.intro,
        events,
    })
}

#[get("/about")]
pub async fn about_page(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let page = content::section_page("about").unwrap_or(&content::SECTION_PAGES[0]);

    let latest = db::latest_about_us(&state.pool).await.unwrap_or_else(|e| {
        tracing::warn!("failed to load about section: {e}");
        None
    });

    let (about, ventures, recognitions) = match latest {
        Some(about) => {
            let ventures = or_empty(db::list_ventures(&state.pool, about.id).await, "ventures");
            let recognitions = or_empty(
                db::list_recognitions(&state.pool, about.id).await,
                "recognitions",
            );

            let mut media_ids: Vec<i64> =
                about.media.0.iter().filter_map(|m| m.media_id).collect();
            media_ids.extend(ventures.iter().filter_map(|v| v.logo_media_id));
            let urls = media_urls(&state.pool, &media_ids).await;

            let image_urls = about
                .media
                .0
                .iter()
                .filter(|m| m.kind == AboutMediaKind::Image)
                .filter_map(|m| m.media_id)
                .filter_map(|id| urls.get(&id).cloned())
                .collect();

            let view = AboutView {
                heading: about.heading,
                body: about.body.unwrap_or_default(),
                video_embed_url: about.video_embed_url.unwrap_or_default(),
                video_embed_title: about.video_embed_title.unwrap_or_default(),
                image_urls,
            };

            let ventures = ventures
                .into_iter()
                .map(|v| VentureView {
                    logo_url: v
                        .logo_media_id
                        .and_then(|id| urls.get(&id).cloned())
                        .unwrap_or_default(),
                    name: v.name,
                })
                .collect();

            let recognitions = recognitions
                .into_iter()
                .map(|r| RecognitionView {
                    title: r.title,
                    subtitle: r.subtitle.unwrap_or_default(),
                    value: r.value.unwrap_or_default(),
                })
                .collect();

            (Some(view), ventures, recognitions)
        }
        None => (None, Vec::new(), Vec::new()),
    };

    render(AboutPageTemplate {
        nav: main_nav(),
        dark: prefers_dark(&req),
        brand: BRAND_NAME,
        title: page.title,
        intro: page.intro,
        about,
        ventures,
        recognitions,
    })
}

#[get("/reviews")]
pub async fn reviews_page(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let page = content::section_page("reviews").unwrap_or(&content::SECTION_PAGES[0]);

    let news = or_empty(db::list_active_news(&state.pool, 12).await, "news");
    let media_ids: Vec<i64> = news.iter().filter_map(|n| n.media_id).collect();
    let urls = media_urls(&state.pool, &media_ids).await;

    render(ReviewsPageTemplate {
        nav: main_nav(),
        dark: prefers_dark(&req),
        brand: BRAND_NAME,
        title: page.title,
        intro: page.intro,
        awards: AWARDS,
        news: news_cards(news, &urls),
    })
}

#[get("/theme/{mode}")]
pub async fn set_theme(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    let mode = match path.into_inner().as_str() {
        "dark" => "dark",
        _ => "light",
    };

    let cookie = Cookie::build(THEME_COOKIE, mode)
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .finish();

    let back = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_string();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, back))
        .cookie(cookie)
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(hero_fragment)
        .service(hotels)
        .service(cafes)
        .service(bars)
        .service(entertainment)
        .service(events_page)
        .service(about_page)
        .service(reviews_page)
        .service(set_theme);
}
