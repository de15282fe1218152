use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{HeroBuckets, HeroSection, HeroSectionCreate, HeroSectionUpdate};

pub async fn create_hero_section(
    pool: &PgPool,
    data: &HeroSectionCreate,
) -> Result<HeroSection, sqlx::Error> {
    sqlx::query_as::<_, HeroSection>(
        r#"
        INSERT INTO hero_sections (
            title, subtitle, cta_text, cta_link, theme_mode,
            is_active, show_on_homepage,
            background_all, background_light, background_dark,
            sub_all, sub_light, sub_dark
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(data.subtitle.as_deref())
    .bind(data.cta_text.as_deref())
    .bind(data.cta_link.as_deref())
    .bind(data.theme_mode)
    .bind(data.is_active)
    .bind(data.show_on_homepage)
    .bind(Json(&data.buckets.background_all))
    .bind(Json(&data.buckets.background_light))
    .bind(Json(&data.buckets.background_dark))
    .bind(Json(&data.buckets.sub_all))
    .bind(Json(&data.buckets.sub_light))
    .bind(Json(&data.buckets.sub_dark))
    .fetch_one(pool)
    .await
}

pub async fn list_hero_sections(pool: &PgPool) -> Result<Vec<HeroSection>, sqlx::Error> {
    sqlx::query_as::<_, HeroSection>(
        r#"SELECT * FROM hero_sections ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .await
}

/// Sections the homepage renders: active and flagged for the homepage.
pub async fn list_homepage_hero_sections(
    pool: &PgPool,
) -> Result<Vec<HeroSection>, sqlx::Error> {
    sqlx::query_as::<_, HeroSection>(
        r#"
        SELECT *
        FROM hero_sections
        WHERE is_active AND show_on_homepage
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_hero_section(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<HeroSection>, sqlx::Error> {
    sqlx::query_as::<_, HeroSection>(r#"SELECT * FROM hero_sections WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_hero_section(
    pool: &PgPool,
    id: Uuid,
    data: &HeroSectionUpdate,
) -> Result<Option<HeroSection>, sqlx::Error> {
    let buckets: Option<&HeroBuckets> = data.buckets.as_ref();
    sqlx::query_as::<_, HeroSection>(
        r#"
        UPDATE hero_sections
        SET
            title = COALESCE($1, title),
            subtitle = COALESCE($2, subtitle),
            cta_text = COALESCE($3, cta_text),
            cta_link = COALESCE($4, cta_link),
            theme_mode = COALESCE($5, theme_mode),
            is_active = COALESCE($6, is_active),
            show_on_homepage = COALESCE($7, show_on_homepage),
            background_all = COALESCE($8, background_all),
            background_light = COALESCE($9, background_light),
            background_dark = COALESCE($10, background_dark),
            sub_all = COALESCE($11, sub_all),
            sub_light = COALESCE($12, sub_light),
            sub_dark = COALESCE($13, sub_dark),
            edited_at = now()
        WHERE id = $14
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(data.subtitle.as_deref())
    .bind(data.cta_text.as_deref())
    .bind(data.cta_link.as_deref())
    .bind(data.theme_mode)
    .bind(data.is_active)
    .bind(data.show_on_homepage)
    .bind(buckets.map(|b| Json(&b.background_all)))
    .bind(buckets.map(|b| Json(&b.background_light)))
    .bind(buckets.map(|b| Json(&b.background_dark)))
    .bind(buckets.map(|b| Json(&b.sub_all)))
    .bind(buckets.map(|b| Json(&b.sub_light)))
    .bind(buckets.map(|b| Json(&b.sub_dark)))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn set_hero_section_active(
    pool: &PgPool,
    id: Uuid,
    is_active: bool,
) -> Result<Option<HeroSection>, sqlx::Error> {
    sqlx::query_as::<_, HeroSection>(
        r#"
        UPDATE hero_sections
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

pub async fn set_hero_section_homepage(
    pool: &PgPool,
    id: Uuid,
    show_on_homepage: bool,
) -> Result<Option<HeroSection>, sqlx::Error> {
    sqlx::query_as::<_, HeroSection>(
        r#"
        UPDATE hero_sections
        SET show_on_homepage = $1, edited_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(show_on_homepage)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_hero_section(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM hero_sections WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
