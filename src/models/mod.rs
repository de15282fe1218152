pub use about::*;
pub use booking::*;
pub use daily_offer::*;
pub use event::*;
pub use hero_section::*;
pub use media::*;
pub use news::*;
pub use property::*;
pub use user::*;

mod about;
mod booking;
mod daily_offer;
mod event;
mod hero_section;
mod media;
mod news;
mod property;
mod user;
