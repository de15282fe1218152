use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    Amenity, Location, Property, PropertyListing, PropertyListingCreate, PropertyListingUpdate,
    PropertyType,
};

pub async fn list_property_types(pool: &PgPool) -> Result<Vec<PropertyType>, sqlx::Error> {
    sqlx::query_as::<_, PropertyType>(r#"SELECT * FROM property_types ORDER BY name"#)
        .fetch_all(pool)
        .await
}

pub async fn list_locations(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(r#"SELECT * FROM locations ORDER BY name"#)
        .fetch_all(pool)
        .await
}

pub async fn create_location(
    pool: &PgPool,
    name: &str,
    city: Option<&str>,
) -> Result<Location, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        r#"INSERT INTO locations (name, city) VALUES ($1, $2) RETURNING *"#,
    )
    .bind(name)
    .bind(city)
    .fetch_one(pool)
    .await
}

pub async fn list_amenities(pool: &PgPool) -> Result<Vec<Amenity>, sqlx::Error> {
    sqlx::query_as::<_, Amenity>(r#"SELECT * FROM amenities ORDER BY name"#)
        .fetch_all(pool)
        .await
}

pub async fn list_properties(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(r#"SELECT * FROM properties ORDER BY name"#)
        .fetch_all(pool)
        .await
}

pub async fn get_property(pool: &PgPool, id: Uuid) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(r#"SELECT * FROM properties WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_property(
    pool: &PgPool,
    name: &str,
    property_type_id: Option<Uuid>,
    location_id: Option<Uuid>,
) -> Result<Property, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (name, property_type_id, location_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(property_type_id)
    .bind(location_id)
    .fetch_one(pool)
    .await
}

pub async fn create_property_listing(
    pool: &PgPool,
    data: &PropertyListingCreate,
) -> Result<PropertyListing, sqlx::Error> {
    sqlx::query_as::<_, PropertyListing>(
        r#"
        INSERT INTO property_listings (
            property_id, admin_user_id, heading, subtitle, address, tagline,
            rating, capacity, price, amenity_ids, is_active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(data.property_id)
    .bind(data.admin_user_id)
    .bind(&data.heading)
    .bind(data.subtitle.as_deref())
    .bind(data.address.as_deref())
    .bind(data.tagline.as_deref())
    .bind(data.rating)
    .bind(data.capacity)
    .bind(data.price)
    .bind(Json(&data.amenity_ids))
    .bind(data.is_active)
    .fetch_one(pool)
    .await
}

pub async fn list_property_listings(
    pool: &PgPool,
    q: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<PropertyListing>, sqlx::Error> {
    sqlx::query_as::<_, PropertyListing>(
        r#"
        SELECT *
        FROM property_listings
        WHERE ($1 = '' OR heading ILIKE '%' || $1 || '%')
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(q)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_property_listings(pool: &PgPool, q: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM property_listings
        WHERE ($1 = '' OR heading ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(q)
    .fetch_one(pool)
    .await
}

pub async fn get_property_listing(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<PropertyListing>, sqlx::Error> {
    sqlx::query_as::<_, PropertyListing>(r#"SELECT * FROM property_listings WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_property_listing(
    pool: &PgPool,
    id: Uuid,
    data: &PropertyListingUpdate,
) -> Result<Option<PropertyListing>, sqlx::Error> {
    sqlx::query_as::<_, PropertyListing>(
        r#"
        UPDATE property_listings
        SET
            admin_user_id = COALESCE($1, admin_user_id),
            heading = COALESCE($2, heading),
            subtitle = COALESCE($3, subtitle),
            address = COALESCE($4, address),
            tagline = COALESCE($5, tagline),
            rating = COALESCE($6, rating),
            capacity = COALESCE($7, capacity),
            price = COALESCE($8, price),
            amenity_ids = COALESCE($9, amenity_ids),
            edited_at = now()
        WHERE id = $10
        RETURNING *
        "#,
    )
    .bind(data.admin_user_id)
    .bind(data.heading.as_deref())
    .bind(data.subtitle.as_deref())
    .bind(data.address.as_deref())
    .bind(data.tagline.as_deref())
    .bind(data.rating)
    .bind(data.capacity)
    .bind(data.price)
    .bind(data.amenity_ids.as_ref().map(Json))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Active listings whose property belongs to the named type; backs the
/// public section pages.
pub async fn list_active_listings_for_type(
    pool: &PgPool,
    type_name: &str,
) -> Result<Vec<PropertyListing>, sqlx::Error> {
    sqlx::query_as::<_, PropertyListing>(
        r#"
        SELECT pl.*
        FROM property_listings pl
        JOIN properties p ON p.id = pl.property_id
        JOIN property_types pt ON pt.id = p.property_type_id
        WHERE pl.is_active AND lower(pt.name) = lower($1)
        ORDER BY pl.created_at
        "#,
    )
    .bind(type_name)
    .fetch_all(pool)
    .await
}

pub async fn set_property_listing_active(
    pool: &PgPool,
    id: Uuid,
    is_active: bool,
) -> Result<Option<PropertyListing>, sqlx::Error> {
    sqlx::query_as::<_, PropertyListing>(
        r#"
        UPDATE property_listings
        SET is_active = $1, edited_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(is_active)
    .bind(id)
    .fetch_optional(pool)
    .await
}
