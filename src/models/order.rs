//! Historical order records shown on the orders screen.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Lifecycle state of a past order.
///
/// These are read-only records; no transitions are modeled.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Returns the badge text for the status.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready for Pickup",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// How an order was, or will be, paid.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Prepaid,
    PayOnDelivery,
}

impl PaymentMethod {
    /// Returns the display label for the method.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Prepaid => "Online Payment",
            PaymentMethod::PayOnDelivery => "Pay on Delivery",
        }
    }

    /// Phrase used in the checkout confirmation toast.
    pub fn confirmation_phrase(&self) -> &'static str {
        match self {
            PaymentMethod::Prepaid => "online payment",
            PaymentMethod::PayOnDelivery => "pay on delivery",
        }
    }

    /// Switches to the other method.
    pub fn toggle(&mut self) {
        *self = match self {
            PaymentMethod::Prepaid => PaymentMethod::PayOnDelivery,
            PaymentMethod::PayOnDelivery => PaymentMethod::Prepaid,
        };
    }
}

/// A line inside a historical order.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderedItem {
    pub name: String,
    pub quantity: u32,
}

/// A read-only past order.
#[derive(Clone, Debug, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: String,
    pub time: String,
    pub vendor: String,
    pub items: Vec<OrderedItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
}
