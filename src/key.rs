//! Type-safe key bindings with help text.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the short help text shown to users. Components expose their
//! bindings through the [`KeyMap`] trait.
//!
//! ```rust
//! use bubbletea_segmented::key::{new_binding, with_help, with_keys_str};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["right", "l"]),
//!     with_help("→/l", "next tab"),
//! ]);
//! assert_eq!(next.keys().len(), 2);
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Held modifiers.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Whether this press matches the given code and modifiers.
    ///
    /// Shift is ignored for character keys because terminals already report
    /// the shifted character.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.code != code {
            return false;
        }
        match code {
            KeyCode::Char(_) => {
                self.modifiers.difference(KeyModifiers::SHIFT)
                    == modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.modifiers == modifiers,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Parses a key description such as `"left"`, `"G"` or `"ctrl+f"`.
///
/// Returns `None` for names it does not know.
pub fn parse_key(s: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        // crossterm reports shift+tab as BackTab with SHIFT held
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyPress { code, modifiers })
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// An option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

impl Binding {
    /// Creates a binding from key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active and has keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg.key, msg.modifiers))
    }
}

/// Builds a binding from options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: bind the given key descriptions. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Option: set the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Option: start disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Exposes a component's bindings for help views.
pub trait KeyMap {
    /// Bindings for the one-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("left"), Some(KeyPress::from(KeyCode::Left)));
        assert_eq!(parse_key("end"), Some(KeyPress::from(KeyCode::End)));
        assert_eq!(parse_key("h"), Some(KeyPress::from(KeyCode::Char('h'))));
        assert_eq!(parse_key("bogus"), None);
    }

    #[test]
    fn test_parse_modifiers() {
        let p = parse_key("ctrl+f").unwrap();
        assert_eq!(p.code, KeyCode::Char('f'));
        assert_eq!(p.modifiers, KeyModifiers::CONTROL);

        let p = parse_key("shift+tab").unwrap();
        assert_eq!(p.code, KeyCode::BackTab);
        assert_eq!(p.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_binding_matches() {
        let b = new_binding(vec![with_keys_str(&["right", "l"]), with_help("→/l", "next")]);
        assert!(b.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('l'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Right, KeyModifiers::CONTROL)));
        assert_eq!(b.help().desc, "next");
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let b = new_binding(vec![with_keys_str(&["G"])]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["tab"]), with_disabled()]);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Tab, KeyModifiers::NONE)));
        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Home]);
        let b = Binding::new(vec![(KeyCode::Char('g'), KeyModifiers::NONE)]);
        assert!(matches(&key(KeyCode::Char('g'), KeyModifiers::NONE), &[&a, &b]));
        assert!(!matches(&key(KeyCode::End, KeyModifiers::NONE), &[&a, &b]));
    }
}
