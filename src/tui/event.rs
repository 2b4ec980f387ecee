//! Event handling for the TUI.
//!
//! All state mutation happens synchronously inside [`update`]; nothing in
//! the app suspends or runs concurrently with a key handler.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::models::{ItemId, VendorId};

use super::app::{App, Mode, Screen};
use super::input::TextInput;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Quit => app.should_quit = true,
    }
}

/// Handles input events.
fn handle_input(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => {}
        Event::Tick => app.clear_stale_toast(),
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Global keys
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => {
            app.should_quit = true;
            return;
        }
        KeyCode::Esc => {
            if app.screen != Screen::Home {
                app.go_to(Screen::Home);
            }
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Home => handle_home_keys(app, key),
        Screen::Vendor(vendor) => handle_vendor_keys(app, key, vendor),
        Screen::Cart => handle_cart_keys(app, key),
        Screen::Orders => handle_orders_keys(app, key),
        Screen::Account => handle_account_keys(app, key),
    }
}

/// Handles keys for the home (vendor listing) screen.
fn handle_home_keys(app: &mut App, key: KeyEvent) {
    let vendor_count = app.catalog.vendors().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.home.selected + 1 < vendor_count {
                app.home.selected += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.home.selected = app.home.selected.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(id) = app.catalog.vendors().get(app.home.selected).map(|v| v.id) {
                app.open_vendor(id);
            }
        }
        KeyCode::Char('c') => app.go_to(Screen::Cart),
        KeyCode::Char('o') => app.go_to(Screen::Orders),
        KeyCode::Char('a') => app.go_to(Screen::Account),
        _ => {}
    }
}

/// Handles keys for a vendor menu screen.
fn handle_vendor_keys(app: &mut App, key: KeyEvent, vendor: VendorId) {
    let category_count = app
        .catalog
        .menu(vendor)
        .map(|m| m.categories.len())
        .unwrap_or(0);
    let item_count = active_category_len(app, vendor);

    match key.code {
        // Category tabs
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            if category_count > 0 {
                app.vendor.active_category = (app.vendor.active_category + 1) % category_count;
                app.vendor.selected_item = 0;
            }
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            if category_count > 0 {
                app.vendor.active_category = app
                    .vendor
                    .active_category
                    .checked_sub(1)
                    .unwrap_or(category_count - 1);
                app.vendor.selected_item = 0;
            }
        }

        // Item selection
        KeyCode::Char('j') | KeyCode::Down => {
            if app.vendor.selected_item + 1 < item_count {
                app.vendor.selected_item += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.vendor.selected_item = app.vendor.selected_item.saturating_sub(1);
        }

        // Quantity controls
        KeyCode::Char('+') | KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(item) = selected_item_id(app, vendor) {
                app.add_item(item);
            }
        }
        KeyCode::Char('-') => {
            if let Some(item) = selected_item_id(app, vendor) {
                app.remove_item(item);
            }
        }

        KeyCode::Char('c') => app.go_to(Screen::Cart),
        _ => {}
    }
}

/// Handles keys for the cart/checkout screen.
fn handle_cart_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let field_count = app.cart.fields().len();
            if app.cart.focus + 1 < field_count {
                app.cart.focus += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cart.focus = app.cart.focus.saturating_sub(1);
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => app.cart.toggle_payment(),
        KeyCode::Char('i') => app.mode = Mode::Insert,
        KeyCode::Enter => app.place_order(),
        _ => {}
    }
}

/// Handles keys for the order-history screen.
fn handle_orders_keys(app: &mut App, key: KeyEvent) {
    let order_count = app.catalog.orders().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.orders.selected + 1 < order_count {
                app.orders.selected += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.orders.selected = app.orders.selected.saturating_sub(1);
        }
        KeyCode::Enter => app.confirm_pickup(),
        _ => {}
    }
}

/// Handles keys for the account (login/signup) screen.
fn handle_account_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.account.toggle_tab(),
        KeyCode::Char('j') | KeyCode::Down => {
            let field_count = app.account.fields().len();
            if app.account.focus + 1 < field_count {
                app.account.focus += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.account.focus = app.account.focus.saturating_sub(1);
        }
        KeyCode::Char('i') => app.mode = Mode::Insert,
        KeyCode::Enter => app.submit_account_form(),
        _ => {}
    }
}

/// Handles keys in insert mode (typing into the focused field).
fn handle_insert_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Normal,
        _ => {
            if let Some(input) = focused_input(app) {
                input.handle_key(key);
            }
        }
    }
}

/// Resolves the text field that insert-mode keys should edit.
fn focused_input(app: &mut App) -> Option<&mut TextInput> {
    match app.screen {
        Screen::Cart => {
            let field = app.cart.focused_field();
            Some(app.cart.field_input(field))
        }
        Screen::Account => {
            let field = app.account.focused_field();
            Some(app.account.field_input(field))
        }
        _ => None,
    }
}

/// Number of items in the vendor's active category.
fn active_category_len(app: &App, vendor: VendorId) -> usize {
    app.catalog
        .menu(vendor)
        .and_then(|m| m.categories.get(app.vendor.active_category))
        .map(|c| c.items.len())
        .unwrap_or(0)
}

/// Item id under the cursor on the vendor screen.
fn selected_item_id(app: &App, vendor: VendorId) -> Option<ItemId> {
    app.catalog
        .menu(vendor)?
        .categories
        .get(app.vendor.active_category)?
        .items
        .get(app.vendor.selected_item)
        .map(|i| i.id)
}
