//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, Screen};
use super::screens::{account, cart, home, orders, vendor};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Home => home::render(frame, app),
        Screen::Vendor(id) => vendor::render(frame, app, id),
        Screen::Cart => cart::render(frame, app),
        Screen::Orders => orders::render(frame, app),
        Screen::Account => account::render(frame, app),
    }
}
