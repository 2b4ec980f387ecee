//! Campus Eats terminal client.
//!
//! A TUI food-ordering app for the university food court: browse vendor
//! menus, build a cart with per-item quantity controls, and walk through
//! a simulated checkout. All data is in-memory mock data; there is no
//! backend, persistence, or network.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod tui;

pub use error::{CampusError, Result};
