use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Event, EventCreate, EventUpdate};

pub async fn create_event(pool: &PgPool, data: &EventCreate) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (
            title, slug, location_id, property_type_id, date, description,
            status, cta_text, cta_link, media_id, image_url
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.slug)
    .bind(data.location_id)
    .bind(data.property_type_id)
    .bind(data.date)
    .bind(data.description.as_deref())
    .bind(data.status)
    .bind(data.cta_text.as_deref())
    .bind(data.cta_link.as_deref())
    .bind(data.image.media_id)
    .bind(data.image.external_url.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn list_events(
    pool: &PgPool,
    q: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT *
        FROM events
        WHERE ($1 = '' OR title ILIKE '%' || $1 || '%')
        ORDER BY date DESC NULLS LAST, created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(q)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_events(pool: &PgPool, q: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM events WHERE ($1 = '' OR title ILIKE '%' || $1 || '%')"#,
    )
    .bind(q)
    .fetch_one(pool)
    .await
}

/// Events the public site shows; INACTIVE stays admin-only.
pub async fn list_public_events(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT *
        FROM events
        WHERE status <> 'INACTIVE'
        ORDER BY date ASC NULLS LAST
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_event(
    pool: &PgPool,
    id: Uuid,
    data: &EventUpdate,
) -> Result<Option<Event>, sqlx::Error> {
    // The image paths are written together: passing an image replaces both
    // columns so the stale path can never survive a switch.
    let (set_image, media_id, image_url) = match &data.image {
        Some(src) => (true, src.media_id, src.external_url.clone()),
        None => (false, None, None),
    };

    sqlx::query_as::<_, Event>(
        r#"
        UPDATE events
        SET
            title = COALESCE($1, title),
            slug = COALESCE($2, slug),
            location_id = COALESCE($3, location_id),
            property_type_id = COALESCE($4, property_type_id),
            date = COALESCE($5, date),
            description = COALESCE($6, description),
            status = COALESCE($7, status),
            cta_text = COALESCE($8, cta_text),
            cta_link = COALESCE($9, cta_link),
            media_id = CASE WHEN $10 THEN $11 ELSE media_id END,
            image_url = CASE WHEN $10 THEN $12 ELSE image_url END,
            edited_at = now()
        WHERE id = $13
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(data.slug.as_deref())
    .bind(data.location_id)
    .bind(data.property_type_id)
    .bind(data.date)
    .bind(data.description.as_deref())
    .bind(data.status)
    .bind(data.cta_text.as_deref())
    .bind(data.cta_link.as_deref())
    .bind(set_image)
    .bind(media_id)
    .bind(image_url.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM events WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
