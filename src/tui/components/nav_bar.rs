//! Top navigation bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Screen};

/// Fixed navigation entries with their shortcut keys.
const ENTRIES: &[(&str, Screen)] = &[
    ("Home", Screen::Home),
    ("Cart", Screen::Cart),
    ("Orders", Screen::Orders),
    ("Account", Screen::Account),
];

/// Renders the navigation bar with the app title and cart count.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![
        Span::styled(
            " Campus Eats ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (title, screen) in ENTRIES {
        // A vendor menu counts as part of Home for highlighting purposes
        let is_active = app.screen == *screen
            || (matches!(app.screen, Screen::Vendor(_)) && *screen == Screen::Home);

        let label = if *screen == Screen::Cart {
            format!(" {} ({}) ", title, app.ledger.total_selected())
        } else {
            format!(" {title} ")
        };

        let style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let para = Paragraph::new(Line::from(spans));
    frame.render_widget(para, area);
}
