use askama::Template;

use kennedia_cms::site::content::{Award, PresenceTile, Vertical};
use kennedia_cms::site::nav::NavItem;

/// One hero slide, flattened for the template. Empty strings stand in for
/// absent copy so the fragments stay free of nested Option matches.
#[derive(Debug, Clone)]
pub struct HeroSlideView {
    pub index: usize,
    pub len: usize,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub background_url: String,
    pub paused: bool,
}

#[derive(Debug, Clone)]
pub struct OfferCard {
    pub title: String,
    pub description: String,
    pub coupon_code: String,
    pub available_hours: String,
    pub cta_text: String,
    pub cta_link: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct NewsCard {
    pub title: String,
    pub category: String,
    pub published_on: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct EventCard {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub description: String,
    pub status: String,
    pub cta_text: String,
    pub cta_link: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct ListingCard {
    pub heading: String,
    pub subtitle: String,
    pub address: String,
    pub tagline: String,
    pub rating: String,
}

#[derive(Debug, Clone)]
pub struct AboutView {
    pub heading: String,
    pub body: String,
    pub video_embed_url: String,
    pub video_embed_title: String,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct VentureView {
    pub name: String,
    pub logo_url: String,
}

#[derive(Debug, Clone)]
pub struct RecognitionView {
    pub title: String,
    pub subtitle: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct LocationView {
    pub id: String,
    pub name: String,
}

#[derive(Template)]
#[template(path = "public/index.html")]
pub struct HomeTemplate {
    pub nav: Vec<NavItem>,
    pub dark: bool,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub slide: Option<HeroSlideView>,
    pub offers: Vec<OfferCard>,
    pub verticals: &'static [Vertical],
    pub presence: &'static [PresenceTile],
    pub awards: &'static [Award],
    pub news: Vec<NewsCard>,
}

#[derive(Template)]
#[template(path = "public/section.html")]
pub struct SectionTemplate {
    pub nav: Vec<NavItem>,
    pub dark: bool,
    pub brand: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub listings: Vec<ListingCard>,
    pub offers: Vec<OfferCard>,
}

#[derive(Template)]
#[template(path = "public/events.html")]
pub struct EventsPageTemplate {
    pub nav: Vec<NavItem>,
    pub dark: bool,
    pub brand: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub events: Vec<EventCard>,
}

#[derive(Template)]
#[template(path = "public/about.html")]
pub struct AboutPageTemplate {
    pub nav: Vec<NavItem>,
    pub dark: bool,
    pub brand: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub about: Option<AboutView>,
    pub ventures: Vec<VentureView>,
    pub recognitions: Vec<RecognitionView>,
}

#[derive(Template)]
#[template(path = "public/reviews.html")]
pub struct ReviewsPageTemplate {
    pub nav: Vec<NavItem>,
    pub dark: bool,
    pub brand: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub awards: &'static [Award],
    pub news: Vec<NewsCard>,
}

#[derive(Template)]
#[template(path = "public/booking.html")]
pub struct BookingPageTemplate {
    pub nav: Vec<NavItem>,
    pub dark: bool,
    pub brand: &'static str,
    pub locations: Vec<LocationView>,
}

#[derive(Template)]
#[template(path = "fragments/hero_slide.html")]
pub struct HeroSlideTemplate {
    pub slide: Option<HeroSlideView>,
}

#[derive(Template)]
#[template(path = "fragments/booking_step.html")]
pub struct BookingStepTemplate {
    pub step: u8,
    pub label: &'static str,
    pub terminal: bool,
    pub location: String,
    pub locations: Vec<LocationView>,
}
