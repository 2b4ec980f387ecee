//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Mode};

/// Renders the status bar: input mode, active toast, and cart summary.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mode_span = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Mode::Insert => Span::styled(
            " INSERT ",
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
    };

    let toast_span = if let Some(ref toast) = app.toast {
        Span::styled(
            format!(" {}: {} ", toast.title, toast.body),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::raw("")
    };

    let items = app.ledger.total_selected();
    let cart_info = format!(" {items} item{} ", if items == 1 { "" } else { "s" });

    let spans = vec![
        mode_span,
        Span::raw("│"),
        toast_span,
        Span::raw(format!(
            "{:>width$}",
            cart_info,
            width = area.width.saturating_sub(30) as usize
        )),
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
