//! Plain-text rendering of storefront views

use shop_catalog::Product;
use shop_core::{CartSummary, CatalogRow, NavLink};
use std::fmt::Write as _;

pub(crate) const IN_CART: &str = "Item in cart";
pub(crate) const EMPTY_CART: &str = "Cart is empty. Please select products in the catalog.";

pub(crate) fn price(value: f64) -> String {
    format!("${value}")
}

pub(crate) fn catalog(rows: &[CatalogRow]) -> String {
    let mut out = String::from("Catalog\n");
    for row in rows {
        let _ = write!(
            out,
            "  #{:<4} {:<32} {:>10}",
            row.product.id.get(),
            row.product.name,
            price(row.product.price)
        );
        if row.in_cart {
            let _ = write!(out, "  [{IN_CART}]");
        }
        out.push('\n');
    }
    out
}

pub(crate) fn product(product: &Product, in_cart: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "{}", product.description);
    let _ = writeln!(out, "Price:    {}", price(product.price));
    let _ = writeln!(out, "Color:    {}", product.color);
    let _ = writeln!(out, "Material: {}", product.material);
    if in_cart {
        let _ = writeln!(out, "{IN_CART}");
    }
    out
}

pub(crate) fn cart(summary: &CartSummary) -> String {
    if summary.is_empty() {
        return format!("Shopping cart\n{EMPTY_CART}\n");
    }

    let mut out = String::from("Shopping cart\n");
    let _ = writeln!(
        out,
        "  {:<3} {:<32} {:>10} {:>6} {:>12}",
        "#", "Product", "Price", "Count", "Total"
    );
    for row in &summary.rows {
        let _ = writeln!(
            out,
            "  {:<3} {:<32} {:>10} {:>6} {:>12}",
            row.position,
            row.name,
            price(row.price),
            row.quantity,
            price(row.total)
        );
    }
    let _ = writeln!(out, "Order price: {}", price(summary.grand_total));
    out
}

pub(crate) fn nav(brand: &str, links: &[NavLink]) -> String {
    let mut out = format!("Kogtetochka store -> {brand}\n");
    for link in links {
        let _ = writeln!(out, "  {:<12} {}", link.label, link.href);
    }
    out
}
