use chrono::{DateTime, NaiveDate, Utc};
use field_names::FieldNames;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Where an offer is surfaced: the homepage, its property's page, or both.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayLocation {
    Home,
    Property,
    Both,
}

impl DisplayLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Property => "PROPERTY",
            Self::Both => "BOTH",
        }
    }

}

impl Default for DisplayLocation {
    fn default() -> Self {
        Self::Home
    }
}

impl std::fmt::Display for DisplayLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DisplayLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HOME" => Ok(Self::Home),
            "PROPERTY" => Ok(Self::Property),
            "BOTH" => Ok(Self::Both),
            _ => Err(format!("invalid display location: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, FieldNames)]
#[field_names(vis = "pub")]
pub struct DailyOffer {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub coupon_code: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub property_id: Option<Uuid>,
    pub property_name: Option<String>,
    pub property_type_id: Option<Uuid>,
    pub property_type: Option<String>,
    /// Formatted "hh:MM AM - hh:MM PM" window derived from two 24h inputs.
    pub available_hours: Option<String>,
    pub expires_on: Option<NaiveDate>,
    pub media_id: Option<i64>,
    pub is_active: bool,
    pub display_location: DisplayLocation,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl DailyOffer {
    pub fn sortable_columns() -> &'static [&'static str] {
        &Self::FIELDS
    }
}

#[derive(Debug, Clone)]
pub struct DailyOfferCreate {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub coupon_code: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub property_id: Option<Uuid>,
    pub property_name: Option<String>,
    pub property_type_id: Option<Uuid>,
    pub property_type: Option<String>,
    pub available_hours: Option<String>,
    pub expires_on: Option<NaiveDate>,
    pub media_id: Option<i64>,
    pub is_active: bool,
    pub display_location: DisplayLocation,
}

/// Partial update. The double-`Option` fields carry a third state: `None`
/// keeps the stored value, `Some(None)` clears it, `Some(Some(_))` replaces
/// it.
#[derive(Debug, Clone, Default)]
pub struct DailyOfferUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub coupon_code: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub property_id: Option<Uuid>,
    pub property_name: Option<String>,
    pub property_type_id: Option<Uuid>,
    pub property_type: Option<String>,
    pub available_hours: Option<Option<String>>,
    pub expires_on: Option<NaiveDate>,
    pub media_id: Option<Option<i64>>,
    pub display_location: Option<DisplayLocation>,
}
