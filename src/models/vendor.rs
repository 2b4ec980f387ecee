//! Vendor records for the food-court listing.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::menu::VendorMenu;

/// Identifier of a vendor in the food court.
pub type VendorId = u32;

/// A food-court vendor as shown on the home screen.
#[derive(Clone, Debug, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rating: Decimal,
    pub delivery_time: String,
    /// Menu data; vendors without one render an empty-menu notice.
    #[serde(default)]
    pub menu: VendorMenu,
}
