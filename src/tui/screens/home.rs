//! Home screen: the food-court vendor listing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;
use crate::tui::components::{nav_bar, status_bar};

use super::render_help;

/// Renders the home screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Status bar
            Constraint::Length(2), // Hero banner
            Constraint::Min(6),    // Vendor list
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    nav_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);
    render_banner(frame, main_layout[2]);
    render_vendors(frame, main_layout[3], app);
    render_help(
        frame,
        main_layout[4],
        " j/k select │ Enter view menu │ c cart │ o orders │ a account │ q quit",
    );
}

/// Renders the hero banner.
fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Hungry? Order food from your favorite campus vendors",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Get your food delivered or pick it up when it's ready",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the vendor cards.
fn render_vendors(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Food Court Vendors ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, vendor) in app.catalog.vendors().iter().enumerate() {
        let is_selected = i == app.home.selected;

        let name_style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", vendor.name), name_style),
            Span::styled(
                format!("  ⭐ {}  🕒 {}", vendor.rating, vendor.delivery_time),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", vendor.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
