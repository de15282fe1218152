mod common;

#[cfg(test)]
pub mod content_tests {
    use serde_json::json;

    use super::common::*;

    use kennedia_cms::common::{extract_id, extract_ids};
    use kennedia_cms::models::{DisplayLocation, MediaSource};
    use kennedia_cms::services::banner;
    use kennedia_cms::services::hours::{format_available_hours, to_12h, to_24h};
    use kennedia_cms::services::offers::resolve_property_type;
    use kennedia_cms::services::slug::slugify;

    #[test]
    fn test_slugify_strips_punctuation_and_collapses_spaces() {
        assert_eq!(slugify("Summer Wine Festival!!"), "summer-wine-festival");
        assert_eq!(slugify("  Jazz   at the  Rooftop "), "jazz-at-the-rooftop");
        assert_eq!(slugify("Tbilisi — Supper Club"), "tbilisi-supper-club");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("New Year's Eve: 2027");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slugify_keeps_existing_hyphens_and_underscores() {
        assert_eq!(slugify("pre-made_slug"), "pre-made_slug");
        assert_eq!(slugify("a - - b"), "a-b");
    }

    #[test]
    fn test_slugify_empty_for_symbol_only_title() {
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn test_tag_list_splits_and_trims() {
        let item = get_news_item(Some("wine, rooftop , , late-night"));
        assert_eq!(item.tag_list(), vec!["wine", "rooftop", "late-night"]);

        assert!(get_news_item(None).tag_list().is_empty());
        assert!(get_news_item(Some("  ,  ")).tag_list().is_empty());
    }

    #[test]
    fn test_to_12h_boundaries() {
        assert_eq!(to_12h("00:00").as_deref(), Some("12:00 AM"));
        assert_eq!(to_12h("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(to_12h("13:00").as_deref(), Some("01:00 PM"));
        assert_eq!(to_12h("23:59").as_deref(), Some("11:59 PM"));
    }

    #[test]
    fn test_hours_round_trip() {
        for t in ["00:00", "06:30", "12:00", "13:45", "23:59"] {
            let twelve = to_12h(t).expect("valid 24h input");
            assert_eq!(to_24h(&twelve).as_deref(), Some(t));
        }
    }

    #[test]
    fn test_format_available_hours() {
        assert_eq!(
            format_available_hours("09:00", "23:30").as_deref(),
            Some("09:00 AM - 11:30 PM")
        );
    }

    #[test]
    fn test_format_available_hours_rejects_inverted_window() {
        assert_eq!(format_available_hours("18:00", "09:00"), None);
        assert_eq!(format_available_hours("09:00", "09:00"), None);
    }

    #[test]
    fn test_format_available_hours_rejects_malformed_input() {
        assert_eq!(format_available_hours("9am", "23:00"), None);
        assert_eq!(format_available_hours("09:00", "25:00"), None);
    }

    #[test]
    fn test_banner_exact_dimensions() {
        assert!(banner::is_banner(1080, 1920));
        assert!(banner::is_banner(720, 1280));
    }

    #[test]
    fn test_banner_ratio_within_tolerance() {
        // 9:16 within a hundredth.
        assert!(banner::is_banner(900, 1600));
        assert!(banner::is_banner(905, 1600));
    }

    #[test]
    fn test_banner_rejects_landscape_and_short_images() {
        assert!(!banner::is_banner(800, 600));
        assert!(!banner::is_banner(1920, 1080));
        // Right ratio but below the height floor.
        assert!(!banner::is_banner(360, 640));
        assert!(!banner::is_banner(0, 1920));
    }

    #[test]
    fn test_media_source_is_exclusive() {
        let mut src = MediaSource::from_external_url("https://cdn.example/img.jpg");
        assert!(src.is_valid());

        src.set_media_id(7);
        assert_eq!(src.media_id, Some(7));
        assert_eq!(src.external_url, None);
        assert!(src.is_valid());

        src.set_external_url("https://cdn.example/other.jpg");
        assert_eq!(src.media_id, None);
        assert!(src.is_valid());

        src.clear();
        assert!(src.is_empty());
        assert!(!src.is_valid());
    }

    #[test]
    fn test_media_source_both_sides_invalid() {
        let src = MediaSource {
            media_id: Some(1),
            external_url: Some("https://cdn.example/img.jpg".to_string()),
        };
        assert!(!src.is_valid());
    }

    #[test]
    fn test_resolve_property_type_both_overrides_selection() {
        let types = get_type_catalogue();
        let hotel = types[0].clone();

        let resolved = resolve_property_type(
            DisplayLocation::Both,
            Some((hotel.id, hotel.name.clone())),
            &types,
        )
        .expect("catalogue carries a 'both' type");

        assert_eq!(resolved.1, "both");
        assert_ne!(resolved.0, hotel.id);
    }

    #[test]
    fn test_resolve_property_type_passes_selection_through() {
        let types = get_type_catalogue();
        let cafe = types[1].clone();

        let resolved = resolve_property_type(
            DisplayLocation::Property,
            Some((cafe.id, cafe.name.clone())),
            &types,
        );
        assert_eq!(resolved, Some((cafe.id, "cafe".to_string())));

        let none = resolve_property_type(DisplayLocation::Home, None, &types);
        assert_eq!(none, None);
    }

    #[test]
    fn test_resolve_property_type_both_falls_back_without_catalogue_entry() {
        let types = vec![get_property_type("hotel")];
        let hotel = types[0].clone();

        let resolved = resolve_property_type(
            DisplayLocation::Both,
            Some((hotel.id, hotel.name.clone())),
            &types,
        );
        assert_eq!(resolved, Some((hotel.id, "hotel".to_string())));
    }

    #[test]
    fn test_extract_id_probe_order() {
        assert_eq!(extract_id(&json!(42)), Some(42));
        assert_eq!(extract_id(&json!({"id": 1})), Some(1));
        assert_eq!(extract_id(&json!({"mediaId": 2})), Some(2));
        assert_eq!(extract_id(&json!({"data": {"id": 3}})), Some(3));
        assert_eq!(extract_id(&json!({"data": {"data": {"id": 4}}})), Some(4));
        assert_eq!(extract_id(&json!({"response": {"id": 5}})), Some(5));

        // The earliest defined probe wins.
        assert_eq!(extract_id(&json!({"id": 1, "data": {"id": 3}})), Some(1));
        assert_eq!(extract_id(&json!({"url": "/uploads/a.jpg"})), None);
    }

    #[test]
    fn test_extract_ids_drops_unrecoverable_elements() {
        let values = vec![
            json!(10),
            json!({"url": "/uploads/a.jpg", "type": "IMAGE", "mediaId": 11}),
            json!({"url": "https://cdn.example/external.jpg"}),
            json!({"data": {"data": {"id": 12}}}),
        ];
        assert_eq!(extract_ids(&values), vec![10, 11, 12]);
    }
}
