//! Shopping-cart core: the selection ledger and the pricing aggregator.

pub mod pricing;
pub mod selection;

pub use pricing::{CartLine, OrderSummary, compute_totals, format_money};
pub use selection::SelectionLedger;

use crate::catalog::CatalogProvider;
use crate::models::VendorId;

/// Joins the ledger with the catalog to produce displayable cart lines.
///
/// The cart screen renders exactly what the vendor screen selected; there
/// is no separate cart list. Items the catalog does not know about are
/// skipped rather than surfaced as errors.
pub fn cart_lines(
    catalog: &dyn CatalogProvider,
    vendor: VendorId,
    ledger: &SelectionLedger,
) -> Vec<CartLine> {
    let Some(vendor) = catalog.vendor(vendor) else {
        return Vec::new();
    };
    ledger
        .lines()
        .filter_map(|(id, quantity)| {
            vendor.menu.item(id).map(|item| CartLine {
                item_id: id,
                name: item.name.clone(),
                vendor: vendor.name.clone(),
                price: item.price,
                quantity,
            })
        })
        .collect()
}
