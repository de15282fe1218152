use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AboutMediaKind {
    Image,
    Video,
    Link,
}

/// One free-form entry in the about-us media collection. An item uploaded
/// through the panel carries a `media_id`; pasted links carry only a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMediaItem {
    pub kind: AboutMediaKind,
    pub url: Option<String>,
    pub media_id: Option<i64>,
}

impl AboutMediaItem {
    /// Complete for submission: uploads must have resolved to an id,
    /// links/videos must carry a URL.
    pub fn is_resolved(&self) -> bool {
        match self.kind {
            AboutMediaKind::Image => self.media_id.is_some(),
            AboutMediaKind::Video => self.media_id.is_some() || self.url.is_some(),
            AboutMediaKind::Link => self.url.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AboutUs {
    pub id: Uuid,
    pub heading: String,
    pub body: Option<String>,
    pub video_embed_url: Option<String>,
    pub video_embed_title: Option<String>,
    pub media: Json<Vec<AboutMediaItem>>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AboutUsCreate {
    pub heading: String,
    pub body: Option<String>,
    pub video_embed_url: Option<String>,
    pub video_embed_title: Option<String>,
    pub media: Vec<AboutMediaItem>,
}

#[derive(Debug, Clone, Default)]
pub struct AboutUsUpdate {
    pub heading: Option<String>,
    pub body: Option<String>,
    pub video_embed_url: Option<String>,
    pub video_embed_title: Option<String>,
    pub media: Option<Vec<AboutMediaItem>>,
}

/// Business division shown under the about-us section; child of an
/// `AboutUs` record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venture {
    pub id: Uuid,
    pub about_id: Uuid,
    pub name: String,
    pub logo_media_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct VentureCreate {
    pub about_id: Uuid,
    pub name: String,
    pub logo_media_id: Option<i64>,
}

/// Award / recognition tile; child of an `AboutUs` record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recognition {
    pub id: Uuid,
    pub about_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub value: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecognitionCreate {
    pub about_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub value: Option<String>,
}
