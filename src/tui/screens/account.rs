//! Account screen: login and signup forms.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{AccountTab, App};
use crate::tui::components::{form_field, nav_bar, status_bar};

use super::render_help;

/// Renders the account screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Login / Sign Up tabs
            Constraint::Min(8),    // Form
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    nav_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);
    render_tabs(frame, main_layout[2], app);
    render_form(frame, main_layout[3], app);
    render_help(
        frame,
        main_layout[4],
        " Tab switch form │ j/k field │ i edit │ Enter submit │ Esc back",
    );
}

/// Renders the Login / Sign Up tab row.
fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for tab in [AccountTab::Login, AccountTab::Signup] {
        let style = if tab == app.account.tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the active form's fields.
fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let (title, subtitle) = match app.account.tab {
        AccountTab::Login => (
            " Login to your account ",
            "Enter your email and password to access your account",
        ),
        AccountTab::Signup => (
            " Create an account ",
            "Sign up to start ordering food from campus vendors",
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let subtitle_row = Rect {
        height: 1,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(format!(" {subtitle}")).style(Style::default().fg(Color::DarkGray)),
        subtitle_row,
    );

    let focused = app.account.focused_field();
    for (i, field) in app.account.fields().iter().enumerate() {
        let row = Rect {
            y: inner.y + 2 + i as u16,
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
            app.account.field(*field),
            *field == focused,
            app.mode,
        );
    }

    if app.account.tab == AccountTab::Signup {
        let terms_y = inner.y + 3 + app.account.fields().len() as u16;
        if terms_y < inner.y + inner.height {
            let row = Rect {
                y: terms_y,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(" By signing up, you agree to our Terms of Service")
                    .style(Style::default().fg(Color::DarkGray)),
                row,
            );
        }
    }
}
