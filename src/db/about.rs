use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    AboutUs, AboutUsCreate, AboutUsUpdate, Recognition, RecognitionCreate, Venture, VentureCreate,
};

pub async fn create_about_us(pool: &PgPool, data: &AboutUsCreate) -> Result<AboutUs, sqlx::Error> {
    sqlx::query_as::<_, AboutUs>(
        r#"
        INSERT INTO about_us (heading, body, video_embed_url, video_embed_title, media)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&data.heading)
    .bind(data.body.as_deref())
    .bind(data.video_embed_url.as_deref())
    .bind(data.video_embed_title.as_deref())
    .bind(Json(&data.media))
    .fetch_one(pool)
    .await
}

pub async fn list_about_us(pool: &PgPool) -> Result<Vec<AboutUs>, sqlx::Error> {
    sqlx::query_as::<_, AboutUs>(r#"SELECT * FROM about_us ORDER BY created_at DESC"#)
        .fetch_all(pool)
        .await
}

/// The section the public about page renders; the most recent record wins.
pub async fn latest_about_us(pool: &PgPool) -> Result<Option<AboutUs>, sqlx::Error> {
    sqlx::query_as::<_, AboutUs>(
        r#"SELECT * FROM about_us ORDER BY created_at DESC LIMIT 1"#,
    )
    .fetch_optional(pool)
    .await
}

pub async fn get_about_us(pool: &PgPool, id: Uuid) -> Result<Option<AboutUs>, sqlx::Error> {
    sqlx::query_as::<_, AboutUs>(r#"SELECT * FROM about_us WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_about_us(
    pool: &PgPool,
    id: Uuid,
    data: &AboutUsUpdate,
) -> Result<Option<AboutUs>, sqlx::Error> {
    sqlx::query_as::<_, AboutUs>(
        r#"
        UPDATE about_us
        SET
            heading = COALESCE($1, heading),
            body = COALESCE($2, body),
            video_embed_url = COALESCE($3, video_embed_url),
            video_embed_title = COALESCE($4, video_embed_title),
            media = COALESCE($5, media),
            edited_at = now()
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(data.heading.as_deref())
    .bind(data.body.as_deref())
    .bind(data.video_embed_url.as_deref())
    .bind(data.video_embed_title.as_deref())
    .bind(data.media.as_ref().map(Json))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_venture(pool: &PgPool, data: &VentureCreate) -> Result<Venture, sqlx::Error> {
    sqlx::query_as::<_, Venture>(
        r#"
        INSERT INTO ventures (about_id, name, logo_media_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.about_id)
    .bind(&data.name)
    .bind(data.logo_media_id)
    .fetch_one(pool)
    .await
}

pub async fn list_ventures(pool: &PgPool, about_id: Uuid) -> Result<Vec<Venture>, sqlx::Error> {
    sqlx::query_as::<_, Venture>(
        r#"SELECT * FROM ventures WHERE about_id = $1 ORDER BY created_at"#,
    )
    .bind(about_id)
    .fetch_all(pool)
    .await
}

pub async fn delete_venture(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM ventures WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn create_recognition(
    pool: &PgPool,
    data: &RecognitionCreate,
) -> Result<Recognition, sqlx::Error> {
    sqlx::query_as::<_, Recognition>(
        r#"
        INSERT INTO recognitions (about_id, title, subtitle, value)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.about_id)
    .bind(&data.title)
    .bind(data.subtitle.as_deref())
    .bind(data.value.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn list_recognitions(
    pool: &PgPool,
    about_id: Uuid,
) -> Result<Vec<Recognition>, sqlx::Error> {
    sqlx::query_as::<_, Recognition>(
        r#"SELECT * FROM recognitions WHERE about_id = $1 ORDER BY created_at"#,
    )
    .bind(about_id)
    .fetch_all(pool)
    .await
}

pub async fn delete_recognition(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM recognitions WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
