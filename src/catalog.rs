//! Mock data providers for vendors, menus, and order history.
//!
//! The static tables behind these traits stand in for a real catalog and
//! order service; the rest of the crate only talks to the traits, so a
//! live backend could be substituted without touching the cart core or
//! the screens.

use serde::Deserialize;

use crate::Result;
use crate::models::{ItemId, MenuItem, Order, Vendor, VendorId, VendorMenu};

/// Read access to the vendor catalog.
pub trait CatalogProvider {
    /// All vendors in listing order.
    fn vendors(&self) -> &[Vendor];

    /// Looks up a vendor by id.
    fn vendor(&self, id: VendorId) -> Option<&Vendor>;

    /// The menu of a vendor, if the vendor exists.
    fn menu(&self, vendor: VendorId) -> Option<&VendorMenu>;

    /// Looks up a single menu item by (vendor, item) id.
    fn item(&self, vendor: VendorId, item: ItemId) -> Option<&MenuItem>;
}

/// Read access to past orders.
pub trait OrderHistoryProvider {
    /// Past orders, most recent first.
    fn orders(&self) -> &[Order];
}

/// Combined data access the application needs.
pub trait DataProvider: CatalogProvider + OrderHistoryProvider {}

impl<T: CatalogProvider + OrderHistoryProvider> DataProvider for T {}

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const ORDERS_JSON: &str = include_str!("../data/orders.json");

#[derive(Deserialize)]
struct CatalogFile {
    vendors: Vec<Vendor>,
}

#[derive(Deserialize)]
struct OrdersFile {
    orders: Vec<Order>,
}

/// In-memory catalog backed by the embedded mock tables.
pub struct StaticCatalog {
    vendors: Vec<Vendor>,
    orders: Vec<Order>,
}

impl StaticCatalog {
    /// Parses the embedded JSON fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Data`](crate::CampusError::Data) if a fixture
    /// fails to deserialize.
    pub fn load() -> Result<Self> {
        let catalog: CatalogFile = serde_json::from_str(CATALOG_JSON)?;
        let orders: OrdersFile = serde_json::from_str(ORDERS_JSON)?;
        Ok(Self {
            vendors: catalog.vendors,
            orders: orders.orders,
        })
    }
}

impl CatalogProvider for StaticCatalog {
    fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    fn vendor(&self, id: VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    fn menu(&self, vendor: VendorId) -> Option<&VendorMenu> {
        self.vendor(vendor).map(|v| &v.menu)
    }

    fn item(&self, vendor: VendorId, item: ItemId) -> Option<&MenuItem> {
        self.menu(vendor).and_then(|m| m.item(item))
    }
}

impl OrderHistoryProvider for StaticCatalog {
    fn orders(&self) -> &[Order] {
        &self.orders
    }
}
