use sqlx::PgPool;
use uuid::Uuid;

use super::db::order_by_clause;
use crate::models::{DailyOffer, DailyOfferCreate, DailyOfferUpdate};

pub async fn create_daily_offer(
    pool: &PgPool,
    data: &DailyOfferCreate,
) -> Result<DailyOffer, sqlx::Error> {
    sqlx::query_as::<_, DailyOffer>(
        r#"
        INSERT INTO daily_offers (
            title, description, long_description, coupon_code,
            cta_text, cta_link,
            property_id, property_name, property_type_id, property_type,
            available_hours, expires_on, media_id, is_active, display_location
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.long_description.as_deref())
    .bind(data.coupon_code.as_deref())
    .bind(data.cta_text.as_deref())
    .bind(data.cta_link.as_deref())
    .bind(data.property_id)
    .bind(data.property_name.as_deref())
    .bind(data.property_type_id)
    .bind(data.property_type.as_deref())
    .bind(data.available_hours.as_deref())
    .bind(data.expires_on)
    .bind(data.media_id)
    .bind(data.is_active)
    .bind(data.display_location)
    .fetch_one(pool)
    .await
}

/// Paged admin list. Search matches title and coupon code,
/// case-insensitively.
pub async fn list_daily_offers(
    pool: &PgPool,
    q: &str,
    sort: Option<(&str, bool)>,
    limit: i64,
    offset: i64,
) -> Result<Vec<DailyOffer>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT *
        FROM daily_offers
        WHERE ($1 = '' OR title ILIKE '%' || $1 || '%' OR coupon_code ILIKE '%' || $1 || '%')
        ORDER BY {}
        LIMIT $2 OFFSET $3
        "#,
        order_by_clause(sort, "created_at DESC"),
    );

    sqlx::query_as::<_, DailyOffer>(&sql)
        .bind(q)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn count_daily_offers(pool: &PgPool, q: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM daily_offers
        WHERE ($1 = '' OR title ILIKE '%' || $1 || '%' OR coupon_code ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(q)
    .fetch_one(pool)
    .await
}

/// Offers the homepage shows: active, surfaced on HOME or BOTH, not expired.
pub async fn list_homepage_offers(pool: &PgPool) -> Result<Vec<DailyOffer>, sqlx::Error> {
    sqlx::query_as::<_, DailyOffer>(
        r#"
        SELECT *
        FROM daily_offers
        WHERE is_active
          AND display_location IN ('HOME', 'BOTH')
          AND (expires_on IS NULL OR expires_on >= CURRENT_DATE)
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Offers a property page shows: active, surfaced on PROPERTY or BOTH,
/// not expired.
pub async fn list_property_offers(pool: &PgPool) -> Result<Vec<DailyOffer>, sqlx::Error> {
    sqlx::query_as::<_, DailyOffer>(
        r#"
        SELECT *
        FROM daily_offers
        WHERE is_active
          AND display_location IN ('PROPERTY', 'BOTH')
          AND (expires_on IS NULL OR expires_on >= CURRENT_DATE)
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_daily_offer(pool: &PgPool, id: Uuid) -> Result<Option<DailyOffer>, sqlx::Error> {
    sqlx::query_as::<_, DailyOffer>(r#"SELECT * FROM daily_offers WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_daily_offer(
    pool: &PgPool,
    id: Uuid,
    data: &DailyOfferUpdate,
) -> Result<Option<DailyOffer>, sqlx::Error> {
    // COALESCE cannot null a column, so the clearable fields go through a
    // provided/value sentinel pair instead: an explicit clear writes NULL,
    // an omitted field keeps the stored value.
    let set_hours = data.available_hours.is_some();
    let hours = data.available_hours.as_ref().and_then(|h| h.as_deref());
    let set_media = data.media_id.is_some();
    let media_id = data.media_id.flatten();

    sqlx::query_as::<_, DailyOffer>(
        r#"
        UPDATE daily_offers
        SET
            title = COALESCE($1, title),
            description = COALESCE($2, description),
            long_description = COALESCE($3, long_description),
            coupon_code = COALESCE($4, coupon_code),
            cta_text = COALESCE($5, cta_text),
            cta_link = COALESCE($6, cta_link),
            property_id = COALESCE($7, property_id),
            property_name = COALESCE($8, property_name),
            property_type_id = COALESCE($9, property_type_id),
            property_type = COALESCE($10, property_type),
            available_hours = CASE WHEN $11 THEN $12 ELSE available_hours END,
            expires_on = COALESCE($13, expires_on),
            media_id = CASE WHEN $14 THEN $15 ELSE media_id END,
            display_location = COALESCE($16, display_location),
            edited_at = now()
        WHERE id = $17
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(data.description.as_deref())
    .bind(data.long_description.as_deref())
    .bind(data.coupon_code.as_deref())
    .bind(data.cta_text.as_deref())
    .bind(data.cta_link.as_deref())
    .bind(data.property_id)
    .bind(data.property_name.as_deref())
    .bind(data.property_type_id)
    .bind(data.property_type.as_deref())
    .bind(set_hours)
    .bind(hours)
    .bind(data.expires_on)
    .bind(set_media)
    .bind(media_id)
    .bind(data.display_location)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn set_daily_offer_active(
    pool: &PgPool,
    id: Uuid,
    is_active: bool,
) -> Result<Option<DailyOffer>, sqlx::Error> {
    sqlx::query_as::<_, DailyOffer>(
        r#"
        UPDATE daily_offers
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

pub async fn delete_daily_offer(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM daily_offers WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
