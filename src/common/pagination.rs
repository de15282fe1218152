use serde::ser::{Serialize, Serializer};

/// One slot in the page-number strip rendered under admin lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n as u64),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Page numbers are zero-based, matching the admin panel's controls.
///
/// Short lists are shown in full; longer ones collapse the far side(s)
/// behind an ellipsis while keeping the current page's neighbours visible.
pub fn page_window(total_pages: usize, current: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages == 0 {
        return Vec::new();
    }

    let last = total_pages - 1;
    if total_pages <= 5 {
        return (0..total_pages).map(Page).collect();
    }

    if current <= 2 {
        return vec![Page(0), Page(1), Page(2), Page(3), Ellipsis, Page(last)];
    }

    if current >= last - 2 {
        let mut out = vec![Page(0), Ellipsis];
        out.extend((last - 4..=last).map(Page));
        return out;
    }

    vec![
        Page(0),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(last),
    ]
}

/// Pagination maths shared by every admin list endpoint.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

pub const DEFAULT_PER_PAGE: usize = 10;
pub const MAX_PER_PAGE: usize = 100;

impl PageRequest {
    pub fn new(page: Option<usize>, per_page: Option<usize>) -> Self {
        Self {
            page: page.unwrap_or(0),
            per_page: per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> usize {
        self.page * self.per_page
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.per_page)
    }
}

/// List envelope carried inside `{"data": ...}` on admin list responses.
#[derive(Debug, serde::Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub window: Vec<PageItem>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, req: PageRequest, total: usize) -> Self {
        let total_pages = req.total_pages(total);
        Self {
            items,
            page: req.page,
            per_page: req.per_page,
            total,
            total_pages,
            window: page_window(total_pages, req.page),
        }
    }
}
