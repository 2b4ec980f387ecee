//! Terminal user interface for the Campus Eats client.
//!
//! Provides a Ratatui-based TUI for browsing vendor menus, building a
//! cart, and walking through a simulated checkout.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod screens;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
