mod common;

#[cfg(test)]
pub mod pagination_tests {
    use serde_json::json;

    use kennedia_cms::common::{
        enveloped, page_window, PageItem, PageRequest, Paginated, DEFAULT_PER_PAGE, MAX_PER_PAGE,
    };

    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_page_request_defaults_and_clamping() {
        let req = PageRequest::new(None, None);
        assert_eq!(req.page, 0);
        assert_eq!(req.per_page, DEFAULT_PER_PAGE);

        let req = PageRequest::new(Some(3), Some(0));
        assert_eq!(req.per_page, 1);

        let req = PageRequest::new(Some(3), Some(10_000));
        assert_eq!(req.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_page_request_offset_and_total_pages() {
        let req = PageRequest::new(Some(4), Some(25));
        assert_eq!(req.offset(), 100);
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(25), 1);
        assert_eq!(req.total_pages(26), 2);
        assert_eq!(req.total_pages(101), 5);
    }

    #[test]
    fn test_page_window_short_lists_render_in_full() {
        assert_eq!(page_window(0, 0), vec![]);
        assert_eq!(page_window(1, 0), vec![Page(0)]);
        assert_eq!(
            page_window(5, 4),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn test_page_window_near_start() {
        for current in 0..=2 {
            assert_eq!(
                page_window(12, current),
                vec![Page(0), Page(1), Page(2), Page(3), Ellipsis, Page(11)],
            );
        }
    }

    #[test]
    fn test_page_window_in_the_middle() {
        assert_eq!(
            page_window(12, 6),
            vec![
                Page(0),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(11),
            ],
        );
    }

    #[test]
    fn test_page_window_near_end() {
        for current in 9..=11 {
            assert_eq!(
                page_window(12, current),
                vec![
                    Page(0),
                    Ellipsis,
                    Page(7),
                    Page(8),
                    Page(9),
                    Page(10),
                    Page(11),
                ],
            );
        }
    }

    #[test]
    fn test_page_window_always_anchors_first_and_last() {
        for current in 0..20 {
            let window = page_window(20, current);
            assert_eq!(window.first(), Some(&Page(0)));
            assert_eq!(window.last(), Some(&Page(19)));
            assert!(window.contains(&Page(current)));
        }
    }

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(enveloped(json!({"id": 7}))).unwrap();
        assert_eq!(body, json!({"data": {"id": 7}}));
    }

    #[test]
    fn test_paginated_serializes_window_with_ellipsis_marker() {
        let req = PageRequest::new(Some(6), Some(10));
        let page = Paginated::new(vec![1, 2, 3], req, 120);
        let body = serde_json::to_value(&page).unwrap();

        assert_eq!(body["page"], 6);
        assert_eq!(body["per_page"], 10);
        assert_eq!(body["total"], 120);
        assert_eq!(body["total_pages"], 12);
        assert_eq!(body["window"], json!([0, "...", 5, 6, 7, "...", 11]));
    }
}
