use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

impl Default for MediaKind {
    fn default() -> Self {
        Self::Image
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IMAGE" => Ok(Self::Image),
            "VIDEO" => Ok(Self::Video),
            _ => Err(format!("invalid media kind: {}", s)),
        }
    }
}

/// An uploaded file. Ids are numeric because that is what the panel's
/// payloads substitute into media slots.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MediaItem {
    pub id: i64,
    pub url: String,
    pub kind: MediaKind,
    pub alt: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_banner: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MediaItemCreate {
    pub url: String,
    pub kind: MediaKind,
    pub alt: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_banner: bool,
}

/// A single media slot that is satisfied either by an uploaded id or by an
/// external URL, never both. Switching paths nulls out the other side so a
/// stale value can never ride along into a submit payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaSource {
    pub media_id: Option<i64>,
    pub external_url: Option<String>,
}

impl MediaSource {
    pub fn from_media_id(id: i64) -> Self {
        Self {
            media_id: Some(id),
            external_url: None,
        }
    }

    pub fn from_external_url(url: impl Into<String>) -> Self {
        Self {
            media_id: None,
            external_url: Some(url.into()),
        }
    }

    pub fn set_media_id(&mut self, id: i64) {
        self.media_id = Some(id);
        self.external_url = None;
    }

    pub fn set_external_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url.trim().is_empty() {
            self.external_url = None;
            return;
        }
        self.external_url = Some(url);
        self.media_id = None;
    }

    /// Removing the slot's media must also drop the uploaded id.
    pub fn clear(&mut self) {
        self.media_id = None;
        self.external_url = None;
    }

    pub fn is_empty(&self) -> bool {
        self.media_id.is_none() && self.external_url.is_none()
    }

    /// True when exactly one path is populated. Payloads carrying both are
    /// rejected instead of picking a winner.
    pub fn is_valid(&self) -> bool {
        self.media_id.is_some() != self.external_url.is_some()
    }
}
