//! Tests for the embedded mock catalog and order-history fixtures.

use rust_decimal_macros::dec;

use campus_eats::catalog::{CatalogProvider, OrderHistoryProvider, StaticCatalog};
use campus_eats::models::{OrderStatus, PaymentMethod};

#[test]
fn catalog_fixture_loads() {
    let catalog = StaticCatalog::load().expect("embedded catalog should deserialize");
    assert_eq!(catalog.vendors().len(), 6);
}

#[test]
fn vendor_listing_matches_food_court() {
    let catalog = StaticCatalog::load().unwrap();
    let names: Vec<&str> = catalog.vendors().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Burger Junction",
            "Pizza Palace",
            "Sushi Station",
            "Taco Fiesta",
            "Salad Bar",
            "Coffee Corner",
        ]
    );
}

#[test]
fn burger_junction_menu_categories() {
    let catalog = StaticCatalog::load().unwrap();
    let menu = catalog.menu(1).expect("Burger Junction has a menu");
    let categories: Vec<&str> = menu.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(categories, vec!["Burgers", "Sides", "Drinks"]);
}

#[test]
fn menu_item_lookup_spans_categories() {
    let catalog = StaticCatalog::load().unwrap();

    let burger = catalog.item(1, 101).expect("item 101 exists");
    assert_eq!(burger.name, "Classic Cheeseburger");
    assert_eq!(burger.price, dec!(7.99));
    assert!(burger.popular);

    let fries = catalog.item(1, 201).expect("item 201 exists");
    assert_eq!(fries.name, "French Fries");
    assert_eq!(fries.price, dec!(3.49));

    let milkshake = catalog.item(1, 302).expect("item 302 exists");
    assert_eq!(milkshake.price, dec!(4.99));
    assert!(milkshake.popular);
}

#[test]
fn unknown_lookups_return_none() {
    let catalog = StaticCatalog::load().unwrap();
    assert!(catalog.vendor(99).is_none());
    assert!(catalog.menu(99).is_none());
    assert!(catalog.item(1, 999).is_none());
    // Item ids are scoped to their vendor
    assert!(catalog.item(2, 101).is_none());
}

#[test]
fn vendors_without_menu_data_have_empty_menus() {
    let catalog = StaticCatalog::load().unwrap();
    let taco_fiesta = catalog.vendor(4).unwrap();
    assert!(taco_fiesta.menu.is_empty());
}

#[test]
fn order_history_fixture_loads() {
    let catalog = StaticCatalog::load().unwrap();
    let orders = catalog.orders();
    assert_eq!(orders.len(), 3);

    let latest = &orders[0];
    assert_eq!(latest.id, "ORD-1234");
    assert_eq!(latest.vendor, "Burger Junction");
    assert_eq!(latest.total, dec!(24.46));
    assert_eq!(latest.status, OrderStatus::Ready);
    assert_eq!(latest.payment_method, PaymentMethod::Prepaid);
    assert_eq!(latest.items.len(), 3);
    assert_eq!(latest.items[0].quantity, 2);

    let oldest = &orders[2];
    assert_eq!(oldest.id, "ORD-1232");
    assert_eq!(oldest.status, OrderStatus::Completed);
    assert_eq!(oldest.payment_method, PaymentMethod::Prepaid);
}

#[test]
fn payment_and_status_labels() {
    assert_eq!(PaymentMethod::Prepaid.label(), "Online Payment");
    assert_eq!(PaymentMethod::PayOnDelivery.label(), "Pay on Delivery");
    assert_eq!(OrderStatus::Ready.label(), "Ready for Pickup");
    assert_eq!(OrderStatus::Cancelled.label(), "Cancelled");
}
