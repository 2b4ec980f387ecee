//! Order-history screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::cart::format_money;
use crate::models::OrderStatus;
use crate::tui::app::App;
use crate::tui::components::{nav_bar, status_bar};

use super::render_help;

/// Renders the order-history screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Order list
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    nav_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);
    render_orders(frame, main_layout[2], app);
    render_help(
        frame,
        main_layout[3],
        " j/k select │ Enter confirm pickup (ready orders) │ Esc back",
    );
}

/// Renders the list of past orders.
fn render_orders(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Your Orders ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let currency = &app.config.currency;
    let mut lines: Vec<Line> = Vec::new();
    for (i, order) in app.catalog.orders().iter().enumerate() {
        let is_selected = i == app.orders.selected;

        let id_style = if is_selected {
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
            Span::styled(format!(" {} ", order.id), id_style),
            Span::styled(
                format!("  {} at {} — {}", order.date, order.time, order.vendor),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
            status_badge(order.status),
        ]));

        let items = order
            .items
            .iter()
            .map(|i| format!("{}x {}", i.quantity, i.name))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(Span::styled(
            format!("   {items}"),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} — {}",
                format_money(currency, order.total),
                order.payment_method.label()
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Builds the colored status badge for an order.
fn status_badge(status: OrderStatus) -> Span<'static> {
    let style = match status {
        OrderStatus::Preparing => Style::default().fg(Color::Black).bg(Color::Yellow),
        OrderStatus::Ready => Style::default().fg(Color::Black).bg(Color::Green),
        OrderStatus::Completed => Style::default().fg(Color::Black).bg(Color::Gray),
        OrderStatus::Cancelled => Style::default().fg(Color::White).bg(Color::Red),
    };
    Span::styled(format!(" {} ", status.label()), style)
}
