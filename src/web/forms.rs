use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use kennedia_cms::common::{extract_id, extract_ids};
use kennedia_cms::models::{
    AboutMediaItem, DisplayLocation, EventStatus, HeroBuckets, MediaSource, NewsCategory,
    ThemeMode,
};
use kennedia_cms::services::slug::slugify;

use super::security::{validate_email, validate_phone, PasswordValidator};

fn default_true() -> bool {
    true
}

/// Distinguishes an omitted field from an explicit `null`: omitted stays
/// `None` via the container default, while any present value (null
/// included) lands in `Some`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(de).map(Some)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<usize>,
    #[serde(alias = "perPage")]
    pub per_page: Option<usize>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListQuery {
    pub fn search(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }

    /// Resolves `?sort=` against the entity's column whitelist. The returned
    /// name comes from the whitelist, never from the query string, so it is
    /// safe to splice into ORDER BY. Unknown columns and orders are rejected.
    pub fn sort_column<'a>(&self, allowed: &[&'a str]) -> Result<Option<(&'a str, bool)>, String> {
        let requested = match self.sort.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(None),
        };

        let column = allowed
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(requested))
            .ok_or_else(|| format!("Unknown sort column: {requested}"))?;

        let ascending = match self.order.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(o) if o.eq_ignore_ascii_case("asc") => true,
            Some(o) if o.eq_ignore_ascii_case("desc") => false,
            Some(o) => return Err(format!("Unknown sort order: {o}")),
        };

        Ok(Some((column, ascending)))
    }
}

/// Hero media buckets as they arrive on the wire. The canonical field names
/// are the `backgroundMedia*` family; the legacy `background*` spellings are
/// accepted as aliases. Elements may be bare ids or legacy
/// `{url, type, mediaId}` objects.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroBucketsForm {
    #[serde(alias = "backgroundAll")]
    pub background_media_all: Option<Vec<Value>>,
    #[serde(alias = "backgroundLight")]
    pub background_media_light: Option<Vec<Value>>,
    #[serde(alias = "backgroundDark")]
    pub background_media_dark: Option<Vec<Value>>,
    #[serde(alias = "subAll")]
    pub sub_media_all: Option<Vec<Value>>,
    #[serde(alias = "subLight")]
    pub sub_media_light: Option<Vec<Value>>,
    #[serde(alias = "subDark")]
    pub sub_media_dark: Option<Vec<Value>>,
}

impl HeroBucketsForm {
    /// True when the payload touched any bucket at all; an update that
    /// omits every bucket leaves the stored ones alone.
    pub fn is_provided(&self) -> bool {
        self.background_media_all.is_some()
            || self.background_media_light.is_some()
            || self.background_media_dark.is_some()
            || self.sub_media_all.is_some()
            || self.sub_media_light.is_some()
            || self.sub_media_dark.is_some()
    }

    pub fn into_buckets(self) -> HeroBuckets {
        fn ids(values: Option<Vec<Value>>) -> Vec<i64> {
            values.map(|v| extract_ids(&v)).unwrap_or_default()
        }

        HeroBuckets {
            background_all: ids(self.background_media_all),
            background_light: ids(self.background_media_light),
            background_dark: ids(self.background_media_dark),
            sub_all: ids(self.sub_media_all),
            sub_light: ids(self.sub_media_light),
            sub_dark: ids(self.sub_media_dark),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionForm {
    pub title: String,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub show_on_homepage: bool,
    #[serde(flatten)]
    pub buckets: HeroBucketsForm,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionUpdateForm {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub theme_mode: Option<ThemeMode>,
    pub is_active: Option<bool>,
    pub show_on_homepage: Option<bool>,
    #[serde(flatten)]
    pub buckets: HeroBucketsForm,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOfferForm {
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
    /// 24h "HH:MM" pair from the panel's time pickers.
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub expires_on: Option<NaiveDate>,
    pub media: Option<Value>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub display_location: DisplayLocation,
}

impl DailyOfferForm {
    pub fn media_id(&self) -> Option<i64> {
        self.media.as_ref().and_then(extract_id)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyOfferUpdateForm {
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
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub expires_on: Option<NaiveDate>,
    #[serde(deserialize_with = "double_option")]
    pub media: Option<Option<Value>>,
    pub display_location: Option<DisplayLocation>,
}

impl DailyOfferUpdateForm {
    /// `None` leaves the stored media untouched; `Some(None)` clears it.
    pub fn media_change(&self) -> Option<Option<i64>> {
        self.media
            .as_ref()
            .map(|m| m.as_ref().and_then(extract_id))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    pub location_id: Option<Uuid>,
    pub property_type_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    #[serde(default)]
    pub image: MediaSource,
}

impl EventForm {
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => slugify(&self.title),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventUpdateForm {
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItemForm {
    #[serde(default)]
    pub category: NewsCategory,
    /// Optional only when the attached image is a stored banner.
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
    pub media: Option<Value>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl NewsItemForm {
    pub fn media_id(&self) -> Option<i64> {
        self.media.as_ref().and_then(extract_id)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsItemUpdateForm {
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
    #[serde(deserialize_with = "double_option")]
    pub media: Option<Option<Value>>,
}

impl NewsItemUpdateForm {
    /// `None` leaves the stored media untouched; `Some(None)` clears it.
    pub fn media_change(&self) -> Option<Option<i64>> {
        self.media
            .as_ref()
            .map(|m| m.as_ref().and_then(extract_id))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationForm {
    pub name: String,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyForm {
    pub name: String,
    pub property_type_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListingForm {
    pub property_id: Uuid,
    pub admin_user_id: Option<Uuid>,
    pub heading: String,
    pub subtitle: Option<String>,
    pub address: Option<String>,
    pub tagline: Option<String>,
    pub rating: Option<f64>,
    pub capacity: Option<i32>,
    pub price: Option<i64>,
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyListingUpdateForm {
    pub admin_user_id: Option<Uuid>,
    pub heading: Option<String>,
    pub subtitle: Option<String>,
    pub address: Option<String>,
    pub tagline: Option<String>,
    pub rating: Option<f64>,
    pub capacity: Option<i32>,
    pub price: Option<i64>,
    pub amenity_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsForm {
    pub heading: String,
    pub body: Option<String>,
    pub video_embed_url: Option<String>,
    pub video_embed_title: Option<String>,
    #[serde(default)]
    pub media: Vec<AboutMediaItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutUsUpdateForm {
    pub heading: Option<String>,
    pub body: Option<String>,
    pub video_embed_url: Option<String>,
    pub video_embed_title: Option<String>,
    pub media: Option<Vec<AboutMediaItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentureForm {
    pub name: String,
    pub logo: Option<Value>,
}

impl VentureForm {
    pub fn logo_media_id(&self) -> Option<i64> {
        self.logo.as_ref().and_then(extract_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionForm {
    pub title: String,
    pub subtitle: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub role_id: Uuid,
}

impl CreateUserForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.username.trim().is_empty() {
            return Err("Username is required".into());
        }
        if !validate_email(&self.email) {
            return Err("Invalid email address".into());
        }
        if let Some(phone) = self.phone.as_deref() {
            if !phone.trim().is_empty() && !validate_phone(phone) {
                return Err("Invalid phone number".into());
            }
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".into());
        }
        PasswordValidator::validate(&self.password)
    }
}

/// Body of the `PATCH .../{id}/active` toggles. The response carries the
/// authoritative record so an optimistic client can reconcile.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveToggleForm {
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageToggleForm {
    pub show_on_homepage: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Booking wizard state travels in the form body; nothing persists.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub step: u8,
    pub location: Option<String>,
}

/// Query for the stateless hero-carousel fragment endpoint.
#[derive(Debug, Deserialize)]
pub struct CarouselQuery {
    #[serde(default)]
    pub current: usize,
    #[serde(default)]
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offer_update_distinguishes_omitted_media_from_null() {
        let form: DailyOfferUpdateForm = serde_json::from_value(json!({})).unwrap();
        assert_eq!(form.media_change(), None);

        let form: DailyOfferUpdateForm =
            serde_json::from_value(json!({"media": null})).unwrap();
        assert_eq!(form.media_change(), Some(None));

        let form: DailyOfferUpdateForm =
            serde_json::from_value(json!({"media": 42})).unwrap();
        assert_eq!(form.media_change(), Some(Some(42)));
    }

    #[test]
    fn test_news_update_clears_media_on_explicit_null() {
        let form: NewsItemUpdateForm =
            serde_json::from_value(json!({"title": "Renamed", "media": null})).unwrap();
        assert_eq!(form.media_change(), Some(None));

        let form: NewsItemUpdateForm =
            serde_json::from_value(json!({"media": {"data": {"id": 9}}})).unwrap();
        assert_eq!(form.media_change(), Some(Some(9)));
    }

    #[test]
    fn test_sort_column_enforces_whitelist() {
        let allowed = &["title", "created_at"];

        let query = ListQuery::default();
        assert_eq!(query.sort_column(allowed), Ok(None));

        let query = ListQuery {
            sort: Some("title".into()),
            ..ListQuery::default()
        };
        assert_eq!(query.sort_column(allowed), Ok(Some(("title", false))));

        let query = ListQuery {
            sort: Some("Created_At".into()),
            order: Some("asc".into()),
            ..ListQuery::default()
        };
        assert_eq!(query.sort_column(allowed), Ok(Some(("created_at", true))));

        let query = ListQuery {
            sort: Some("password_hash; DROP TABLE users".into()),
            ..ListQuery::default()
        };
        assert!(query.sort_column(allowed).is_err());

        let query = ListQuery {
            sort: Some("title".into()),
            order: Some("sideways".into()),
            ..ListQuery::default()
        };
        assert!(query.sort_column(allowed).is_err());
    }
}
