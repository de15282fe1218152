mod common;

#[cfg(test)]
pub mod site_tests {
    use super::common::*;

    use kennedia_cms::models::{BookingStep, HeroBuckets, ThemeMode};
    use kennedia_cms::services::carousel::Carousel;
    use kennedia_cms::site::nav::{main_nav, NavItem};

    #[test]
    fn test_carousel_full_cycle() {
        let mut carousel = Carousel::new(4);
        let mut seen = vec![carousel.active()];
        for _ in 0..4 {
            carousel.tick();
            seen.push(carousel.active());
        }
        // Four ticks over four slides come back around.
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_carousel_pause_blocks_ticks() {
        let mut carousel = Carousel::new(3);
        carousel.tick();
        carousel.pause();
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.active(), 1);

        carousel.resume();
        carousel.tick();
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn test_carousel_select_wraps_and_pauses() {
        let mut carousel = Carousel::new(3);
        carousel.select(7);
        assert_eq!(carousel.active(), 1);
        assert!(carousel.is_paused());

        carousel.tick();
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn test_carousel_single_slide_never_advances() {
        let mut carousel = Carousel::new(1);
        carousel.tick();
        assert_eq!(carousel.active(), 0);

        let mut empty = Carousel::new(0);
        empty.tick();
        empty.select(3);
        assert_eq!(empty.active(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_carousel_with_active_normalizes_index() {
        assert_eq!(Carousel::with_active(4, 9).active(), 1);
        assert_eq!(Carousel::with_active(0, 9).active(), 0);
    }

    #[test]
    fn test_booking_steps_are_linear() {
        let start = BookingStep::default();
        assert_eq!(start, BookingStep::SelectLocation);
        assert_eq!(start.number(), 1);

        let review = start.next();
        let checkout = review.next();
        assert_eq!(review, BookingStep::Review);
        assert_eq!(checkout, BookingStep::Checkout);
        assert!(checkout.is_terminal());

        // Saturation at both ends.
        assert_eq!(checkout.next(), BookingStep::Checkout);
        assert_eq!(start.back(), BookingStep::SelectLocation);

        assert_eq!(checkout.back(), BookingStep::Review);
        assert_eq!(review.back(), BookingStep::SelectLocation);
    }

    #[test]
    fn test_booking_step_numbers_round_trip() {
        for n in 1..=3 {
            let step = BookingStep::from_number(n).expect("valid step number");
            assert_eq!(step.number(), n);
        }
        assert_eq!(BookingStep::from_number(0), None);
        assert_eq!(BookingStep::from_number(4), None);
    }

    #[test]
    fn test_main_nav_covers_every_section() {
        let nav = main_nav();

        let mut hrefs: Vec<&str> = Vec::new();
        for item in &nav {
            match item {
                NavItem::Link(link) => hrefs.push(link.href),
                NavItem::Dropdown(dropdown) => {
                    hrefs.extend(dropdown.items.iter().map(|l| l.href));
                }
                NavItem::Mega(mega) => {
                    for column in &mega.columns {
                        hrefs.extend(column.links.iter().map(|l| l.href));
                    }
                }
            }
        }

        for expected in [
            "/", "/hotels", "/cafes", "/bars", "/events", "/entertainment", "/about", "/reviews",
        ] {
            assert!(hrefs.contains(&expected), "missing nav entry: {expected}");
        }
    }

    #[test]
    fn test_buckets_normalized_for_all_mode_drops_split_sets() {
        let buckets = HeroBuckets {
            background_all: vec![1, 2],
            background_light: vec![3],
            background_dark: vec![4],
            sub_all: vec![5],
            sub_light: vec![6],
            sub_dark: vec![7],
        };

        let normalized = buckets.normalized(ThemeMode::All);
        assert_eq!(normalized.background_all, vec![1, 2]);
        assert!(normalized.background_light.is_empty());
        assert!(normalized.background_dark.is_empty());
        assert_eq!(normalized.sub_all, vec![5]);
        assert!(normalized.sub_light.is_empty());
        assert!(normalized.sub_dark.is_empty());
    }

    #[test]
    fn test_buckets_normalized_for_split_mode_drops_all_sets() {
        let buckets = HeroBuckets {
            background_all: vec![1],
            background_light: vec![2],
            background_dark: vec![3],
            sub_all: vec![4],
            sub_light: vec![5],
            sub_dark: vec![6],
        };

        let normalized = buckets.normalized(ThemeMode::Split);
        assert!(normalized.background_all.is_empty());
        assert!(normalized.sub_all.is_empty());
        assert_eq!(normalized.background_light, vec![2]);
        assert_eq!(normalized.background_dark, vec![3]);
    }

    #[test]
    fn test_buckets_merge_keeps_existing_order_and_appends_new() {
        let existing = get_buckets(&[1, 2, 3], &[]);
        let incoming = get_buckets(&[3, 4, 1, 5], &[9]);

        let merged = incoming.merged_onto(&existing);
        assert_eq!(merged.background_all, vec![1, 2, 3, 4, 5]);
        assert_eq!(merged.background_light, vec![9]);
    }

    #[test]
    fn test_background_for_theme_follows_mode() {
        let all = get_hero_section(ThemeMode::All, get_buckets(&[1, 2], &[7]));
        assert_eq!(all.background_for_theme(false), &[1, 2]);
        assert_eq!(all.background_for_theme(true), &[1, 2]);

        let split_buckets = HeroBuckets {
            background_light: vec![10],
            background_dark: vec![20],
            ..HeroBuckets::default()
        };
        let split = get_hero_section(ThemeMode::Split, split_buckets);
        assert_eq!(split.background_for_theme(false), &[10]);
        assert_eq!(split.background_for_theme(true), &[20]);
    }

    #[test]
    fn test_banner_media_builder_matches_detection() {
        let banner = get_media_item(1, 1080, 1920, true);
        let regular = get_media_item(2, 1200, 800, false);
        assert!(banner.is_banner);
        assert!(!regular.is_banner);
    }
}
