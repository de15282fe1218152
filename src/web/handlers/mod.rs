pub mod about;
pub mod auth;
pub mod booking;
pub mod daily_offers;
pub mod events;
pub mod hero_sections;
pub mod media;
pub mod news;
pub mod properties;
pub mod public;
pub mod users;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    booking::configure(cfg);
    auth::configure(cfg);
    media::configure(cfg);
    hero_sections::configure(cfg);
    daily_offers::configure(cfg);
    events::configure(cfg);
    news::configure(cfg);
    properties::configure(cfg);
    about::configure(cfg);
    users::configure(cfg);
}
