pub use about::*;
pub use daily_offers::*;
pub use db::*;
pub use events::*;
pub use hero_sections::*;
pub use media::*;
pub use news::*;
pub use properties::*;
pub use users::*;

mod about;
mod daily_offers;
mod db;
mod events;
mod hero_sections;
mod media;
mod news;
mod properties;
mod users;
