use sqlx::PgPool;

use crate::models::{MediaItem, MediaItemCreate};

pub async fn create_media(pool: &PgPool, data: &MediaItemCreate) -> Result<MediaItem, sqlx::Error> {
    sqlx::query_as::<_, MediaItem>(
        r#"
        INSERT INTO media_items (url, kind, alt, width, height, is_banner)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&data.url)
    .bind(data.kind)
    .bind(data.alt.as_deref())
    .bind(data.width)
    .bind(data.height)
    .bind(data.is_banner)
    .fetch_one(pool)
    .await
}

pub async fn get_media(pool: &PgPool, id: i64) -> Result<Option<MediaItem>, sqlx::Error> {
    sqlx::query_as::<_, MediaItem>(r#"SELECT * FROM media_items WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_media_many(pool: &PgPool, ids: &[i64]) -> Result<Vec<MediaItem>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    sqlx::query_as::<_, MediaItem>(
        r#"SELECT * FROM media_items WHERE id = ANY($1) ORDER BY created_at"#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await
}

/// Ids referenced by a payload that do not exist in the store. A record is
/// not valid for submission while this is non-empty.
pub async fn missing_media_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<i64>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let known: Vec<i64> =
        sqlx::query_scalar(r#"SELECT id FROM media_items WHERE id = ANY($1)"#)
            .bind(ids)
            .fetch_all(pool)
            .await?;

    Ok(ids
        .iter()
        .copied()
        .filter(|id| !known.contains(id))
        .collect())
}
