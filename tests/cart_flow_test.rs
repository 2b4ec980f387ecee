//! End-to-end cart flow: selection ledger joined with the catalog,
//! priced by the aggregator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use campus_eats::cart::{SelectionLedger, cart_lines, compute_totals, format_money};
use campus_eats::catalog::{CatalogProvider, StaticCatalog};
use campus_eats::models::{MenuCategory, MenuItem, Vendor, VendorId, VendorMenu};

#[test]
fn ledger_plus_catalog_prices_the_original_sample_cart() {
    let catalog = StaticCatalog::load().unwrap();
    let mut ledger = SelectionLedger::new();

    // Two cheeseburgers, fries, and a milkshake from Burger Junction
    ledger.increment(101);
    ledger.increment(101);
    ledger.increment(201);
    ledger.increment(302);

    let lines = cart_lines(&catalog, 1, &ledger);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.vendor == "Burger Junction"));

    let summary = compute_totals(&lines, dec!(1.99));
    assert_eq!(summary.subtotal, dec!(24.46));
    assert_eq!(summary.total, dec!(26.45));
    assert_eq!(format_money("$", summary.total), "$26.45");
}

#[test]
fn decrement_flows_through_to_totals() {
    let catalog = StaticCatalog::load().unwrap();
    let mut ledger = SelectionLedger::new();

    ledger.increment(101);
    ledger.increment(101);
    ledger.decrement(101);

    let lines = cart_lines(&catalog, 1, &ledger);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 1);
    assert_eq!(
        compute_totals(&lines, Decimal::ZERO).subtotal,
        dec!(7.99)
    );
}

#[test]
fn unknown_items_are_skipped_in_cart_lines() {
    let catalog = StaticCatalog::load().unwrap();
    let mut ledger = SelectionLedger::new();
    ledger.increment(101);
    ledger.increment(999); // not in any Burger Junction category

    let lines = cart_lines(&catalog, 1, &ledger);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].item_id, 101);
}

#[test]
fn unknown_vendor_yields_no_lines() {
    let catalog = StaticCatalog::load().unwrap();
    let mut ledger = SelectionLedger::new();
    ledger.increment(101);
    assert!(cart_lines(&catalog, 99, &ledger).is_empty());
}

/// A minimal provider proving the cart core only depends on the trait.
struct SingleVendorCatalog {
    vendor: Vendor,
}

impl SingleVendorCatalog {
    fn new() -> Self {
        let menu = VendorMenu {
            categories: vec![MenuCategory {
                name: "Drinks".to_string(),
                items: vec![MenuItem {
                    id: 7,
                    name: "Cold Brew".to_string(),
                    description: "Slow-steeped overnight".to_string(),
                    price: dec!(3.75),
                    image: "cold-brew.png".to_string(),
                    popular: true,
                }],
            }],
        };
        Self {
            vendor: Vendor {
                id: 42,
                name: "Test Stand".to_string(),
                description: "Fixtures only".to_string(),
                image: "stand.png".to_string(),
                rating: dec!(5.0),
                delivery_time: "1 min".to_string(),
                menu,
            },
        }
    }
}

impl CatalogProvider for SingleVendorCatalog {
    fn vendors(&self) -> &[Vendor] {
        std::slice::from_ref(&self.vendor)
    }

    fn vendor(&self, id: VendorId) -> Option<&Vendor> {
        (id == self.vendor.id).then_some(&self.vendor)
    }

    fn menu(&self, vendor: VendorId) -> Option<&VendorMenu> {
        self.vendor(vendor).map(|v| &v.menu)
    }

    fn item(&self, vendor: VendorId, item: u32) -> Option<&MenuItem> {
        self.menu(vendor).and_then(|m| m.item(item))
    }
}

#[test]
fn cart_core_works_against_any_provider() {
    let catalog = SingleVendorCatalog::new();
    let mut ledger = SelectionLedger::new();
    ledger.increment(7);
    ledger.increment(7);

    let lines = cart_lines(&catalog, 42, &ledger);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].name, "Cold Brew");

    let summary = compute_totals(&lines, dec!(0.50));
    assert_eq!(summary.subtotal, dec!(7.50));
    assert_eq!(summary.total, dec!(8.00));
}
