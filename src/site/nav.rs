//! Navigation shell data. Items are a tagged union so the navbar template
//! matches exhaustively instead of duck-typing heterogeneous shapes.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDropdown {
    pub label: &'static str,
    pub items: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavColumn {
    pub heading: &'static str,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMega {
    pub label: &'static str,
    pub columns: Vec<NavColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Dropdown(NavDropdown),
    Mega(NavMega),
}

pub fn main_nav() -> Vec<NavItem> {
    vec![
        NavItem::Link(NavLink { label: "Home", href: "/" }),
        NavItem::Mega(NavMega {
            label: "Destinations",
            columns: vec![
                NavColumn {
                    heading: "Stay",
                    links: vec![NavLink { label: "Hotels", href: "/hotels" }],
                },
                NavColumn {
                    heading: "Eat & drink",
                    links: vec![
                        NavLink { label: "Cafes", href: "/cafes" },
                        NavLink { label: "Bars", href: "/bars" },
                    ],
                },
            ],
        }),
        NavItem::Dropdown(NavDropdown {
            label: "What's on",
            items: vec![
                NavLink { label: "Events", href: "/events" },
                NavLink { label: "Entertainment", href: "/entertainment" },
            ],
        }),
        NavItem::Link(NavLink { label: "About", href: "/about" }),
        NavItem::Link(NavLink { label: "Reviews", href: "/reviews" }),
    ]
}
