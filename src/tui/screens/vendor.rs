//! Vendor menu screen with cart-quantity controls.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::cart::format_money;
use crate::models::{Vendor, VendorId};
use crate::tui::app::App;
use crate::tui::components::{nav_bar, status_bar};

use super::render_help;

/// Renders a vendor menu screen.
pub fn render(frame: &mut Frame, app: &App, vendor_id: VendorId) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Status bar
            Constraint::Length(2), // Vendor header
            Constraint::Length(1), // Category tabs
            Constraint::Min(6),    // Menu items
            Constraint::Length(1), // Floating cart summary
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    nav_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    let Some(vendor) = app.catalog.vendor(vendor_id) else {
        frame.render_widget(
            Paragraph::new("Vendor not found").style(Style::default().fg(Color::Red)),
            main_layout[2],
        );
        return;
    };

    render_header(frame, main_layout[2], vendor);
    render_category_tabs(frame, main_layout[3], app, vendor);
    render_items(frame, main_layout[4], app, vendor);
    render_cart_summary(frame, main_layout[5], app);
    render_help(
        frame,
        main_layout[6],
        " Tab category │ j/k select │ +/Enter add │ - remove │ c view cart │ Esc back",
    );
}

/// Renders the vendor banner with rating and delivery time.
fn render_header(frame: &mut Frame, area: Rect, vendor: &Vendor) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", vendor.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ⭐ {} ", vendor.rating),
                Style::default().fg(Color::LightYellow),
            ),
            Span::styled(
                format!(" 🕒 {} ", vendor.delivery_time),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", vendor.description),
            Style::default().fg(Color::Gray),
        )),
    ];
    let para = Paragraph::new(lines).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

/// Renders the category tab row.
fn render_category_tabs(frame: &mut Frame, area: Rect, app: &App, vendor: &Vendor) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, category) in vendor.menu.categories.iter().enumerate() {
        let style = if i == app.vendor.active_category {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", category.name), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the items of the active category with quantity controls.
fn render_items(frame: &mut Frame, area: Rect, app: &App, vendor: &Vendor) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if vendor.menu.is_empty() {
        frame.render_widget(
            Paragraph::new(" This vendor has not published a menu yet")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let Some(category) = vendor.menu.categories.get(app.vendor.active_category) else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in category.items.iter().enumerate() {
        let is_selected = i == app.vendor.selected_item;
        let quantity = app.ledger.quantity_of(item.id);

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

        let mut spans = vec![
            Span::styled(format!(" {} ", item.name), name_style),
            Span::styled(
                format!("  {}", format_money(&app.config.currency, item.price)),
                Style::default().fg(Color::LightYellow),
            ),
        ];
        if item.popular {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                " Popular ",
                Style::default().fg(Color::Black).bg(Color::LightYellow),
            ));
        }
        if quantity > 0 {
            spans.push(Span::styled(
                format!("  [-] {quantity} [+]"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("   {}", item.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the floating "items selected" bar, shown iff the cart is non-empty.
fn render_cart_summary(frame: &mut Frame, area: Rect, app: &App) {
    if app.ledger.is_empty() {
        return;
    }
    let count = app.ledger.total_selected();
    let text = format!(
        " {count} item{} selected — press c to view cart ",
        if count == 1 { "" } else { "s" }
    );
    let para = Paragraph::new(text).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(para, area);
}
