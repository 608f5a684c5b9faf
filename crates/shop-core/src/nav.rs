//! Header navigation
//!
//! The cart link carries the distinct item count, e.g. `Cart (2)`.

use serde::Serialize;

/// Link in the store header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text
    pub label: String,
    /// Absolute href including the basename
    pub href: String,
}

/// Brand link target: the store home page
#[inline]
#[must_use]
pub fn brand_href(basename: &str) -> String {
    if basename.is_empty() {
        "/".to_string()
    } else {
        basename.to_string()
    }
}

/// Cart link text for a given distinct count
#[must_use]
pub fn cart_label(distinct_count: usize) -> String {
    if distinct_count == 0 {
        "Cart".to_string()
    } else {
        format!("Cart ({distinct_count})")
    }
}

/// Header links in display order
#[must_use]
pub fn nav_links(basename: &str, distinct_count: usize) -> Vec<NavLink> {
    let base = basename.trim_end_matches('/');
    [
        ("Catalog".to_string(), "catalog"),
        ("Delivery".to_string(), "delivery"),
        ("Contacts".to_string(), "contacts"),
        (cart_label(distinct_count), "cart"),
    ]
    .into_iter()
    .map(|(label, page)| NavLink {
        label,
        href: format!("{base}/{page}"),
    })
    .collect()
}
