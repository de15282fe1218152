use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::MediaSource;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Active,
    ComingSoon,
    SoldOut,
    Inactive,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::ComingSoon => "COMING_SOON",
            Self::SoldOut => "SOLD_OUT",
            Self::Inactive => "INACTIVE",
        }
    }

    pub fn is_public(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "COMING_SOON" => Ok(Self::ComingSoon),
            "SOLD_OUT" => Ok(Self::SoldOut),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(format!("invalid event status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub location_id: Option<Uuid>,
    pub property_type_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: EventStatus,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub media_id: Option<i64>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl Event {
    pub fn image(&self) -> MediaSource {
        MediaSource {
            media_id: self.media_id,
            external_url: self.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventCreate {
    pub title: String,
    pub slug: String,
    pub location_id: Option<Uuid>,
    pub property_type_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: EventStatus,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub image: MediaSource,
}

#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub location_id: Option<Uuid>,
    pub property_type_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: Option<EventStatus>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub image: Option<MediaSource>,
}
