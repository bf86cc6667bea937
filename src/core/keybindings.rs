//! Navigation keybindings.

/// Down arrow as sent by terminals in normal cursor-key mode.
pub const KEY_DOWN: &str = "\x1b[B";
/// Up arrow as sent by terminals in normal cursor-key mode.
pub const KEY_UP: &str = "\x1b[A";
pub const KEY_CTRL_N: &str = "\x0e";
pub const KEY_CTRL_P: &str = "\x10";
pub const KEY_ESCAPE: &str = "\x1b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneAction {
    CursorDown,
    CursorUp,
    Quit,
    /// Not bound; forwarded to the caller's handler.
    Unbound,
}

pub const DEFAULT_PANE_KEYBINDINGS: &[(PaneAction, &[&str])] = &[
    (PaneAction::CursorDown, &["j", KEY_CTRL_N, KEY_DOWN]),
    (PaneAction::CursorUp, &["k", KEY_CTRL_P, KEY_UP]),
    (PaneAction::Quit, &["q", KEY_ESCAPE]),
];

impl PaneAction {
    /// Action bound to a key token. Tokens match exactly; there are no prefixes.
    pub fn for_key(key: &str) -> Self {
        DEFAULT_PANE_KEYBINDINGS
            .iter()
            .find(|(_, keys)| keys.contains(&key))
            .map_or(PaneAction::Unbound, |(action, _)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::PaneAction;

    #[test]
    fn arrows_and_vi_keys_navigate() {
        assert_eq!(PaneAction::for_key("j"), PaneAction::CursorDown);
        assert_eq!(PaneAction::for_key("\x0e"), PaneAction::CursorDown);
        assert_eq!(PaneAction::for_key("\x1b[B"), PaneAction::CursorDown);
        assert_eq!(PaneAction::for_key("k"), PaneAction::CursorUp);
        assert_eq!(PaneAction::for_key("\x10"), PaneAction::CursorUp);
        assert_eq!(PaneAction::for_key("\x1b[A"), PaneAction::CursorUp);
    }

    #[test]
    fn bare_escape_quits_but_longer_sequences_do_not() {
        assert_eq!(PaneAction::for_key("\x1b"), PaneAction::Quit);
        assert_eq!(PaneAction::for_key("q"), PaneAction::Quit);
        assert_eq!(PaneAction::for_key("\x1b[C"), PaneAction::Unbound);
        assert_eq!(PaneAction::for_key("\x1bq"), PaneAction::Unbound);
    }

    #[test]
    fn uppercase_is_not_bound() {
        assert_eq!(PaneAction::for_key("J"), PaneAction::Unbound);
        assert_eq!(PaneAction::for_key("Q"), PaneAction::Unbound);
        assert_eq!(PaneAction::for_key(""), PaneAction::Unbound);
    }
}
