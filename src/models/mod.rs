//! Typed models for the catalog and order-history mock data.

pub mod menu;
pub mod order;
pub mod vendor;

pub use menu::{ItemId, MenuCategory, MenuItem, VendorMenu};
pub use order::{Order, OrderStatus, OrderedItem, PaymentMethod};
pub use vendor::{Vendor, VendorId};
