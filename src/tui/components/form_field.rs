//! Labeled text-field rendering shared by the checkout and account forms.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::Mode;
use crate::tui::input::TextInput;

/// Display width reserved for the field label.
const LABEL_WIDTH: u16 = 22;

/// Renders a one-line labeled field; the terminal cursor is placed in the
/// field while it is being edited.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    mode: Mode,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let marker = if focused { "▸ " } else { "  " };
    let spans = vec![
        Span::styled(
            format!("{marker}{label:<width$}", width = LABEL_WIDTH as usize - 2),
            label_style,
        ),
        Span::raw(input.display()),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if focused && mode == Mode::Insert {
        frame.set_cursor_position((area.x + LABEL_WIDTH + input.cursor_col(), area.y));
    }
}
