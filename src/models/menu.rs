//! Menu catalog types: items grouped into named categories.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Identifier of a menu item, unique within its vendor.
pub type ItemId = u32;

/// A purchasable catalog entry belonging to a vendor.
#[derive(Clone, Debug, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Unit price in exact decimal currency.
    pub price: Decimal,
    pub image: String,
    pub popular: bool,
}

/// A named menu section with its items in display order.
#[derive(Clone, Debug, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// A vendor's full menu as an ordered list of categories.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VendorMenu {
    pub categories: Vec<MenuCategory>,
}

impl VendorMenu {
    /// Looks up an item anywhere in the menu.
    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.id == id)
    }

    /// Returns whether the vendor has published any menu data.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
