use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Lookup row for the property-type dropdowns (hotel, cafe, bar and the
/// special "both" type used by offer resolution).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyType {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub property_type_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A property's display listing: links a property to the admin user who
/// manages it and carries the public copy shown on property cards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    pub id: Uuid,
    pub property_id: Uuid,
    pub admin_user_id: Option<Uuid>,
    pub heading: String,
    pub subtitle: Option<String>,
    pub address: Option<String>,
    pub tagline: Option<String>,
    pub rating: Option<f64>,
    pub capacity: Option<i32>,
    pub price: Option<i64>,
    pub amenity_ids: Json<Vec<Uuid>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PropertyListingCreate {
    pub property_id: Uuid,
    pub admin_user_id: Option<Uuid>,
    pub heading: String,
    pub subtitle: Option<String>,
    pub address: Option<String>,
    pub tagline: Option<String>,
    pub rating: Option<f64>,
    pub capacity: Option<i32>,
    pub price: Option<i64>,
    pub amenity_ids: Vec<Uuid>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PropertyListingUpdate {
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
