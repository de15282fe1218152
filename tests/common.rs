#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use kennedia_cms::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_property_type(name: &str) -> PropertyType {
    PropertyType {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_type_catalogue() -> Vec<PropertyType> {
    vec![
        get_property_type("hotel"),
        get_property_type("cafe"),
        get_property_type("bar"),
        get_property_type("both"),
    ]
}

pub fn get_hero_section(theme_mode: ThemeMode, buckets: HeroBuckets) -> HeroSection {
    HeroSection {
        id: Uuid::new_v4(),
        title: "Summer at Kennedia".to_string(),
        subtitle: Some("Long evenings, longer stays".to_string()),
        cta_text: Some("Book now".to_string()),
        cta_link: Some("/book".to_string()),
        theme_mode,
        is_active: true,
        show_on_homepage: true,
        background_all: Json(buckets.background_all),
        background_light: Json(buckets.background_light),
        background_dark: Json(buckets.background_dark),
        sub_all: Json(buckets.sub_all),
        sub_light: Json(buckets.sub_light),
        sub_dark: Json(buckets.sub_dark),
        created_at: parse_time("2026-01-04 22:15:06+00"),
        edited_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_buckets(background_all: &[i64], background_light: &[i64]) -> HeroBuckets {
    HeroBuckets {
        background_all: background_all.to_vec(),
        background_light: background_light.to_vec(),
        ..HeroBuckets::default()
    }
}

pub fn get_news_item(tags: Option<&str>) -> NewsItem {
    NewsItem {
        id: Uuid::new_v4(),
        category: NewsCategory::News,
        title: "Harbour terrace opens".to_string(),
        slug: "harbour-terrace-opens".to_string(),
        description: None,
        long_description: None,
        badge_type_id: None,
        author_name: None,
        author_bio: None,
        read_time: None,
        tags: tags.map(str::to_string),
        published_on: None,
        media_id: None,
        is_active: true,
        created_at: parse_time("2026-01-04 22:15:06+00"),
        edited_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_media_item(id: i64, width: u32, height: u32, is_banner: bool) -> MediaItem {
    MediaItem {
        id,
        url: format!("/uploads/{id}.jpg"),
        kind: MediaKind::Image,
        alt: None,
        width: Some(width as i32),
        height: Some(height as i32),
        is_banner,
        created_at: parse_time("2026-01-04 22:15:06+00"),
    }
}
