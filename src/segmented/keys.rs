//! Keyboard bindings for the segmented control.

use crate::key::{self, KeyMap as KeyMapTrait};

/// Key bindings that move the selection while the control is focused.
///
/// A key press goes through the same path as a mouse press: the delegate
/// hears "will press", the item is selected with animation, then the action
/// and "did press" fire.
#[derive(Debug, Clone)]
pub struct SegmentedKeyMap {
    /// Select the item to the left.
    pub prev: key::Binding,
    /// Select the item to the right.
    pub next: key::Binding,
    /// Select the first item.
    pub first: key::Binding,
    /// Select the last item.
    pub last: key::Binding,
}

impl Default for SegmentedKeyMap {
    fn default() -> Self {
        Self {
            prev: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "shift+tab"]),
                key::with_help("←/h", "prev tab"),
            ]),
            next: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "tab"]),
                key::with_help("→/l", "next tab"),
            ]),
            first: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first tab"),
            ]),
            last: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last tab"),
            ]),
        }
    }
}

impl KeyMapTrait for SegmentedKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev, &self.next]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev, &self.next], vec![&self.first, &self.last]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_default_bindings() {
        let km = SegmentedKeyMap::default();
        let right = KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        };
        let back_tab = KeyMsg {
            key: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        };
        assert!(km.next.matches(&right));
        assert!(!km.prev.matches(&right));
        assert!(km.prev.matches(&back_tab));
    }

    #[test]
    fn test_help_groups() {
        let km = SegmentedKeyMap::default();
        assert_eq!(km.short_help().len(), 2);
        let full = km.full_help();
        assert_eq!(full.len(), 2);
        assert_eq!(full[1][0].help().desc, "first tab");
    }
}
