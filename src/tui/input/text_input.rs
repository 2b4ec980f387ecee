//! Editable single-line text fields for the checkout and account forms.

use crossterm::event::{KeyCode, KeyEvent};
use unicode_width::UnicodeWidthStr;

/// State for a single-line text input field.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position as a byte index into `content`.
    cursor: usize,
    /// Masked fields render bullets instead of their content.
    masked: bool,
}

impl TextInput {
    /// Creates a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input whose content renders masked (passwords, CVV).
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    /// Applies an editing key to the field. Returns `false` for keys the
    /// field does not handle so the caller can interpret them itself.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.content.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
                    self.content.remove(idx);
                    self.cursor = idx;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.content.len() {
                    self.content.remove(self.cursor);
                }
                true
            }
            KeyCode::Left => {
                if let Some((idx, _)) = self.content[..self.cursor].char_indices().next_back() {
                    self.cursor = idx;
                }
                true
            }
            KeyCode::Right => {
                if let Some(c) = self.content[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.content.len();
                true
            }
            _ => false,
        }
    }

    /// Text to render: the content itself, or bullets when masked.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.content.chars().count())
        } else {
            self.content.clone()
        }
    }

    /// Column offset of the cursor in display cells.
    pub fn cursor_col(&self) -> u16 {
        if self.masked {
            self.content[..self.cursor].chars().count() as u16
        } else {
            self.content[..self.cursor].width() as u16
        }
    }

    /// Returns the current content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Takes the content and resets the input.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.handle_key(KeyEvent::from(code))
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::new();
        type_str(&mut input, "alice");
        assert_eq!(input.as_str(), "alice");
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Char('@'));
        assert_eq!(input.as_str(), "@alice");
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = TextInput::new();
        type_str(&mut input, "abc");
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.as_str(), "ab");
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Delete);
        assert_eq!(input.as_str(), "b");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut input = TextInput::new();
        press(&mut input, KeyCode::Backspace);
        assert!(input.is_empty());
    }

    #[test]
    fn masked_display_hides_content() {
        let mut input = TextInput::masked();
        type_str(&mut input, "secret");
        assert_eq!(input.display(), "••••••");
        assert_eq!(input.as_str(), "secret");
        assert_eq!(input.cursor_col(), 6);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut input = TextInput::new();
        type_str(&mut input, "café");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.as_str(), "caé");
    }

    #[test]
    fn take_resets_the_field() {
        let mut input = TextInput::new();
        type_str(&mut input, "hello");
        assert_eq!(input.take(), "hello");
        assert!(input.is_empty());
        assert_eq!(input.cursor_col(), 0);
    }

    #[test]
    fn unhandled_keys_are_reported() {
        let mut input = TextInput::new();
        assert!(!press(&mut input, KeyCode::Enter));
        assert!(!press(&mut input, KeyCode::Esc));
    }
}
