//! A single selectable label inside the segmented control.

use bubbletea_rs::Msg;
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::appearance::TextAttributes;

static LAST_ITEM_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of an item, unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    fn next() -> Self {
        Self(LAST_ITEM_ID.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Selection state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    /// The item is the control's current selection.
    Selected,
    /// Any other item.
    #[default]
    Unselected,
}

/// Horizontal placement of the label inside its item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelAlignment {
    /// Against the left edge.
    Leading,
    /// Centered.
    #[default]
    Center,
    /// Against the right edge.
    Trailing,
}

/// Content and styling of an item. Assigning a new one refreshes the item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStyle {
    /// Label text.
    pub text: String,
    /// Label styling.
    pub attributes: TextAttributes,
    /// Columns reserved after the item in label-sized layouts.
    pub trailing_spacing: usize,
    /// Item background.
    pub background: Option<String>,
    /// Whether this is the selected item.
    pub state: ItemState,
}

/// Called with the item's id when a press begins or ends. The returned
/// message is delivered to the item's owner.
pub type ItemAction = Arc<dyn Fn(ItemId) -> Msg + Send + Sync>;

/// One label of the segmented control.
///
/// The item knows nothing about its owner. Press handling is injected at
/// construction as two actions that turn the item's id into a message.
#[derive(Clone)]
pub struct Item {
    id: ItemId,
    style: ItemStyle,
    alignment: LabelAlignment,
    will_press: Option<ItemAction>,
    did_press: Option<ItemAction>,

    label_style: Style,
    label_width: usize,
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("style", &self.style)
            .field("alignment", &self.alignment)
            .field("label_width", &self.label_width)
            .finish_non_exhaustive()
    }
}

impl Item {
    /// Creates an item with press actions.
    pub fn new(
        style: ItemStyle,
        alignment: LabelAlignment,
        will_press: Option<ItemAction>,
        did_press: Option<ItemAction>,
    ) -> Self {
        let mut item = Self {
            id: ItemId::next(),
            style: ItemStyle::default(),
            alignment,
            will_press,
            did_press,
            label_style: Style::new(),
            label_width: 0,
        };
        item.set_style(style);
        item
    }

    /// The item's identity.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Current content and styling.
    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    /// Replaces content and styling and refreshes the cached label style.
    pub fn set_style(&mut self, style: ItemStyle) {
        self.style = style;
        self.refresh();
    }

    /// Label text.
    pub fn text(&self) -> &str {
        &self.style.text
    }

    /// Selection state.
    pub fn state(&self) -> ItemState {
        self.style.state
    }

    /// Whether the item is shown as selected.
    pub fn is_selected(&self) -> bool {
        self.style.state == ItemState::Selected
    }

    /// Label placement.
    pub fn alignment(&self) -> LabelAlignment {
        self.alignment
    }

    /// Changes label placement.
    pub fn set_alignment(&mut self, alignment: LabelAlignment) {
        self.alignment = alignment;
    }

    /// Display width of the label in cells.
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Width the item asks for when sized by its label.
    pub fn intrinsic_width(&self) -> usize {
        self.label_width.saturating_add(self.style.trailing_spacing)
    }

    /// Lipgloss style of the label.
    pub fn label_style(&self) -> &Style {
        &self.label_style
    }

    /// Signals that a press started on this item.
    pub fn touch_began(&self) -> Option<Msg> {
        self.will_press.as_ref().map(|action| action(self.id))
    }

    /// Signals that a press on this item ended.
    pub fn touch_ended(&self) -> Option<Msg> {
        self.did_press.as_ref().map(|action| action(self.id))
    }

    /// Label text cut to at most `max_width` cells, ending in `…` when cut.
    pub fn render_label(&self, max_width: usize) -> String {
        truncate(&self.style.text, max_width)
    }

    fn refresh(&mut self) {
        self.label_width = UnicodeWidthStr::width(self.style.text.as_str());
        let mut style = self.style.attributes.to_style();
        if self.style.attributes.background.is_none() {
            if let Some(bg) = &self.style.background {
                style = style.background(Color::from(bg.as_str()));
            }
        }
        self.label_style = style;
    }
}

const ELLIPSIS: &str = "…";

fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push_str(ELLIPSIS);
    out
}
