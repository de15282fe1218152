use sqlx::PgPool;
use uuid::Uuid;

use super::db::order_by_clause;
use crate::models::{NewsItem, NewsItemCreate, NewsItemUpdate};

pub async fn create_news_item(
    pool: &PgPool,
    data: &NewsItemCreate,
) -> Result<NewsItem, sqlx::Error> {
    sqlx::query_as::<_, NewsItem>(
        r#"
        INSERT INTO news_items (
            category, title, slug, description, long_description,
            badge_type_id, author_name, author_bio, read_time, tags,
            published_on, media_id, is_active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(data.category)
    .bind(&data.title)
    .bind(&data.slug)
    .bind(data.description.as_deref())
    .bind(data.long_description.as_deref())
    .bind(data.badge_type_id)
    .bind(data.author_name.as_deref())
    .bind(data.author_bio.as_deref())
    .bind(data.read_time.as_deref())
    .bind(data.tags.as_deref())
    .bind(data.published_on)
    .bind(data.media_id)
    .bind(data.is_active)
    .fetch_one(pool)
    .await
}

pub async fn list_news_items(
    pool: &PgPool,
    q: &str,
    sort: Option<(&str, bool)>,
    limit: i64,
    offset: i64,
) -> Result<Vec<NewsItem>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT *
        FROM news_items
        WHERE ($1 = '' OR title ILIKE '%' || $1 || '%' OR author_name ILIKE '%' || $1 || '%')
        ORDER BY {}
        LIMIT $2 OFFSET $3
        "#,
        order_by_clause(sort, "published_on DESC NULLS LAST, created_at DESC"),
    );

    sqlx::query_as::<_, NewsItem>(&sql)
        .bind(q)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn count_news_items(pool: &PgPool, q: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM news_items
        WHERE ($1 = '' OR title ILIKE '%' || $1 || '%' OR author_name ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(q)
    .fetch_one(pool)
    .await
}

pub async fn list_active_news(pool: &PgPool, limit: i64) -> Result<Vec<NewsItem>, sqlx::Error> {
    sqlx::query_as::<_, NewsItem>(
        r#"
        SELECT *
        FROM news_items
        WHERE is_active
        ORDER BY published_on DESC NULLS LAST, created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_news_item(pool: &PgPool, id: Uuid) -> Result<Option<NewsItem>, sqlx::Error> {
    sqlx::query_as::<_, NewsItem>(r#"SELECT * FROM news_items WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_news_item(
    pool: &PgPool,
    id: Uuid,
    data: &NewsItemUpdate,
) -> Result<Option<NewsItem>, sqlx::Error> {
    // COALESCE cannot null a column; the image goes through a
    // provided/value sentinel pair so an explicit clear writes NULL.
    let set_media = data.media_id.is_some();
    let media_id = data.media_id.flatten();

    sqlx::query_as::<_, NewsItem>(
        r#"
        UPDATE news_items
        SET
            category = COALESCE($1, category),
            title = COALESCE($2, title),
            slug = COALESCE($3, slug),
            description = COALESCE($4, description),
            long_description = COALESCE($5, long_description),
            badge_type_id = COALESCE($6, badge_type_id),
            author_name = COALESCE($7, author_name),
            author_bio = COALESCE($8, author_bio),
            read_time = COALESCE($9, read_time),
            tags = COALESCE($10, tags),
            published_on = COALESCE($11, published_on),
            media_id = CASE WHEN $12 THEN $13 ELSE media_id END,
            edited_at = now()
        WHERE id = $14
        RETURNING *
        "#,
    )
    .bind(data.category)
    .bind(data.title.as_deref())
    .bind(data.slug.as_deref())
    .bind(data.description.as_deref())
    .bind(data.long_description.as_deref())
    .bind(data.badge_type_id)
    .bind(data.author_name.as_deref())
    .bind(data.author_bio.as_deref())
    .bind(data.read_time.as_deref())
    .bind(data.tags.as_deref())
    .bind(data.published_on)
    .bind(set_media)
    .bind(media_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn set_news_item_active(
    pool: &PgPool,
    id: Uuid,
    is_active: bool,
) -> Result<Option<NewsItem>, sqlx::Error> {
    sqlx::query_as::<_, NewsItem>(
        r#"
        UPDATE news_items
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

pub async fn delete_news_item(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM news_items WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
