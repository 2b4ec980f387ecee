//! Cart and checkout screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::cart::{compute_totals, format_money};
use crate::models::PaymentMethod;
use crate::tui::app::{App, CartField};
use crate::tui::components::{form_field, nav_bar, status_bar};

use super::render_help;

/// Renders the cart/checkout screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Status bar
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    nav_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    // Content: cart lines + delivery form | order summary + payment
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[2]);

    render_lines_and_form(frame, content[0], app);
    render_summary(frame, content[1], app);

    render_help(
        frame,
        main_layout[3],
        " j/k field │ i edit │ p payment method │ Enter place order │ Esc back",
    );
}

/// Renders the cart lines and the delivery-information form.
fn render_lines_and_form(frame: &mut Frame, area: Rect, app: &App) {
    let lines_height = (app.cart_lines().len() as u16 + 3).max(5);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(lines_height), Constraint::Min(6)])
        .split(area);

    render_cart_lines(frame, layout[0], app);
    render_delivery_form(frame, layout[1], app);
}

/// Renders the cart contents.
fn render_cart_lines(frame: &mut Frame, area: Rect, app: &App) {
    let cart_lines = app.cart_lines();
    let title = format!(" Your Cart ({} items) ", app.ledger.total_selected());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cart_lines.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                " Your cart is empty",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                " Press Esc to browse vendors",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let currency = &app.config.currency;
    let mut lines: Vec<Line> = Vec::new();
    for line in &cart_lines {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", line.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("from {} ", line.vendor),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(
                    " {} × {} = {}",
                    format_money(currency, line.price),
                    line.quantity,
                    format_money(currency, line.line_total()),
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the delivery-information fields.
fn render_delivery_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Delivery Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let delivery_fields = [
        CartField::Name,
        CartField::Phone,
        CartField::Location,
        CartField::Notes,
    ];
    let focused = app.cart.focused_field();
    for (i, field) in delivery_fields.iter().enumerate() {
        let row = Rect {
            y: inner.y + i as u16,
            height: 1,
            ..inner
        };
        if row.y >= inner.y + inner.height {
            break;
        }
        form_field::render(
            frame,
            row,
            field.label(),
            app.cart.field(*field),
            *field == focused,
            app.mode,
        );
    }
}

/// Renders the order summary, payment radio, and card sub-form.
fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = compute_totals(&app.cart_lines(), app.config.delivery_fee);
    let currency = &app.config.currency;

    let money = |amount| format_money(currency, amount);
    let mut lines = vec![
        Line::from(vec![
            Span::raw(" Subtotal      "),
            Span::styled(money(summary.subtotal), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw(" Delivery Fee  "),
            Span::styled(
                money(summary.delivery_fee),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Total         ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                money(summary.total),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            " Payment Method",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        radio_line("Pay Online", app.cart.payment == PaymentMethod::Prepaid),
        radio_line(
            "Pay on Delivery",
            app.cart.payment == PaymentMethod::PayOnDelivery,
        ),
    ];

    // Card sub-form only applies to online payment
    if app.cart.payment == PaymentMethod::Prepaid {
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if app.cart.payment == PaymentMethod::Prepaid {
        let card_fields = [CartField::CardNumber, CartField::Expiry, CartField::Cvv];
        let focused = app.cart.focused_field();
        for (i, field) in card_fields.iter().enumerate() {
            let row = Rect {
                y: inner.y + 8 + i as u16,
                height: 1,
                ..inner
            };
            if row.y >= inner.y + inner.height {
                break;
            }
            form_field::render(
                frame,
                row,
                field.label(),
                app.cart.field(*field),
                *field == focused,
                app.mode,
            );
        }
    }
}

/// Builds a radio-button line.
fn radio_line(label: &str, selected: bool) -> Line<'_> {
    let mark = if selected { "(•)" } else { "( )" };
    let style = if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(format!(" {mark} {label}"), style))
}
