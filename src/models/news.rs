use chrono::{DateTime, NaiveDate, Utc};
use field_names::FieldNames;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum NewsCategory {
    Press,
    News,
    Announcement,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Press => "PRESS",
            Self::News => "NEWS",
            Self::Announcement => "ANNOUNCEMENT",
        }
    }
}

impl Default for NewsCategory {
    fn default() -> Self {
        Self::News
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NewsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRESS" => Ok(Self::Press),
            "NEWS" => Ok(Self::News),
            "ANNOUNCEMENT" => Ok(Self::Announcement),
            _ => Err(format!("invalid news category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, FieldNames)]
#[field_names(vis = "pub")]
pub struct NewsItem {
    pub id: Uuid,
    pub category: NewsCategory,
    /// Empty when the attached image was detected as a banner; the banner
    /// carries the headline itself in that case.
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub badge_type_id: Option<Uuid>,
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub read_time: Option<String>,
    /// Comma-separated, as entered in the panel.
    pub tags: Option<String>,
    pub published_on: Option<NaiveDate>,
    pub media_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl NewsItem {
    pub fn sortable_columns() -> &'static [&'static str] {
        &Self::FIELDS
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct NewsItemCreate {
    pub category: NewsCategory,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub badge_type_id: Option<Uuid>,
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub read_time: Option<String>,
    pub tags: Option<String>,
    pub published_on: Option<NaiveDate>,
    pub media_id: Option<i64>,
    pub is_active: bool,
}

/// Partial update. `media_id` is double-`Option`: `None` keeps the stored
/// image, `Some(None)` clears it, `Some(Some(_))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct NewsItemUpdate {
    pub category: Option<NewsCategory>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub badge_type_id: Option<Uuid>,
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub read_time: Option<String>,
    pub tags: Option<String>,
    pub published_on: Option<NaiveDate>,
    pub media_id: Option<Option<i64>>,
}
