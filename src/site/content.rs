//! Static marketing copy for the public site. Everything here is fixed
//! brand content; anything staff can edit lives in the database instead.

pub const BRAND_NAME: &str = "Kennedia";
pub const BRAND_TAGLINE: &str = "Hotels, cafes and bars with a story worth staying for";

/// A business vertical tile on the homepage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertical {
    pub name: &'static str,
    pub blurb: &'static str,
    pub href: &'static str,
}

pub const VERTICALS: &[Vertical] = &[
    Vertical {
        name: "Hotels",
        blurb: "Boutique stays in the heart of every city we call home.",
        href: "/hotels",
    },
    Vertical {
        name: "Cafes",
        blurb: "Slow mornings, single-origin roasts, patisserie made in house.",
        href: "/cafes",
    },
    Vertical {
        name: "Bars",
        blurb: "Late-night listening bars and rooftop terraces.",
        href: "/bars",
    },
    Vertical {
        name: "Events",
        blurb: "Residencies, tastings and festivals across our venues.",
        href: "/events",
    },
    Vertical {
        name: "Entertainment",
        blurb: "Live music and curated evenings, every week.",
        href: "/entertainment",
    },
];

/// An "our presence" tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceTile {
    pub city: &'static str,
    pub country: &'static str,
    pub venues: u32,
}

pub const PRESENCE: &[PresenceTile] = &[
    PresenceTile { city: "Lisbon", country: "Portugal", venues: 4 },
    PresenceTile { city: "Barcelona", country: "Spain", venues: 3 },
    PresenceTile { city: "Marrakech", country: "Morocco", venues: 2 },
    PresenceTile { city: "Tbilisi", country: "Georgia", venues: 2 },
];

/// Ratings-and-awards strip content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u32,
}

pub const AWARDS: &[Award] = &[
    Award { title: "Best Boutique Group", issuer: "Iberia Hospitality Awards", year: 2024 },
    Award { title: "Top 50 Cafes", issuer: "European Coffee Guide", year: 2025 },
    Award { title: "Travellers' Choice", issuer: "Guest review aggregate", year: 2025 },
];

/// A section page's fixed copy (the store contributes the dynamic rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
}

pub const SECTION_PAGES: &[SectionPage] = &[
    SectionPage {
        slug: "hotels",
        title: "Our Hotels",
        intro: "Rooms and suites designed around the neighbourhoods they live in.",
    },
    SectionPage {
        slug: "cafes",
        title: "Our Cafes",
        intro: "Daytime spaces for coffee, brunch and long conversations.",
    },
    SectionPage {
        slug: "bars",
        title: "Our Bars",
        intro: "From vermuterias to rooftop cocktail rooms.",
    },
    SectionPage {
        slug: "events",
        title: "Events",
        intro: "What is on across the group this season.",
    },
    SectionPage {
        slug: "entertainment",
        title: "Entertainment",
        intro: "Resident DJs, live jazz and supper clubs.",
    },
    SectionPage {
        slug: "about",
        title: "Our Story",
        intro: "Two decades of rooms, roasts and late nights.",
    },
    SectionPage {
        slug: "reviews",
        title: "Reviews",
        intro: "What our guests say, unedited.",
    },
];

pub fn section_page(slug: &str) -> Option<&'static SectionPage> {
    SECTION_PAGES.iter().find(|p| p.slug == slug)
}
