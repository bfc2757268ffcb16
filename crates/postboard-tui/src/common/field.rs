//! Key handling shared by every text input (login form, composer, editor).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies an editing key to `buffer`.
///
/// Returns `true` if the key was consumed. Enter only inserts a newline in
/// multiline fields; everywhere else it is left to the caller.
pub fn apply_edit_key(buffer: &mut String, key: KeyEvent, multiline: bool) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => {
            buffer.clear();
            true
        }
        KeyCode::Char('w') if ctrl => {
            delete_word(buffer);
            true
        }
        KeyCode::Char(c) if !ctrl => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        KeyCode::Enter if multiline => {
            buffer.push('\n');
            true
        }
        _ => false,
    }
}

fn delete_word(buffer: &mut String) {
    let trimmed_len = buffer.trim_end().len();
    buffer.truncate(trimmed_len);
    let cut = buffer
        .rfind(char::is_whitespace)
        .map_or(0, |idx| idx + 1);
    buffer.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut buf = String::new();
        assert!(apply_edit_key(&mut buf, key(KeyCode::Char('h')), false));
        assert!(apply_edit_key(&mut buf, key(KeyCode::Char('i')), false));
        assert!(apply_edit_key(&mut buf, key(KeyCode::Backspace), false));
        assert_eq!(buf, "h");
    }

    #[test]
    fn test_enter_only_in_multiline() {
        let mut buf = "a".to_string();
        assert!(!apply_edit_key(&mut buf, key(KeyCode::Enter), false));
        assert!(apply_edit_key(&mut buf, key(KeyCode::Enter), true));
        assert_eq!(buf, "a\n");
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let mut buf = "hello big world  ".to_string();
        apply_edit_key(&mut buf, ctrl('w'), false);
        assert_eq!(buf, "hello big ");
        apply_edit_key(&mut buf, ctrl('u'), false);
        assert_eq!(buf, "");
        assert!(!apply_edit_key(&mut buf, ctrl('s'), false));
    }
}
