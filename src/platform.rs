//! Platform-specific configuration

use crossterm::event::{KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// AltGr characters are reported as Ctrl+Alt on Windows and are text, not
/// shortcuts
pub fn is_altgr(key: &KeyEvent) -> bool {
    key.modifiers
        .contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Whether `key` carries the shortcut modifier (Ctrl works everywhere)
pub fn has_shortcut_modifier(key: &KeyEvent) -> bool {
    !is_altgr(key)
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | SHORTCUT_MODIFIER)
}

/// Shortcut hints for the status bar
#[cfg(target_os = "macos")]
pub const NEXT_SHORTCUT: &str = "Cmd+N";
#[cfg(not(target_os = "macos"))]
pub const NEXT_SHORTCUT: &str = "^N";

#[cfg(target_os = "macos")]
pub const BACK_SHORTCUT: &str = "Cmd+B";
#[cfg(not(target_os = "macos"))]
pub const BACK_SHORTCUT: &str = "^B";

/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "^S";

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_ctrl_is_shortcut_modifier() {
        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(has_shortcut_modifier(&key));
    }

    #[test]
    fn test_plain_key_is_not_shortcut() {
        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(!has_shortcut_modifier(&key));
        let key = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT);
        assert!(!has_shortcut_modifier(&key));
    }

    #[test]
    fn test_altgr_char_is_not_shortcut() {
        let key = KeyEvent::new(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );
        assert!(is_altgr(&key));
        assert!(!has_shortcut_modifier(&key));
    }
}
