//! Screen layouts and rendering.

pub mod account;
pub mod cart;
pub mod home;
pub mod orders;
pub mod vendor;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

/// Renders the one-line keybindings help at the bottom of a screen.
pub(crate) fn render_help(frame: &mut Frame, area: Rect, text: &str) {
    let para = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
