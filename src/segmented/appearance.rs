//! Appearance configuration for the segmented control.
//!
//! An [`Appearance`] holds every visual parameter of the control. It is
//! plain data: build one, tweak fields, and hand it to the control, which
//! re-renders on [`Model::set_appearance`](super::Model::set_appearance).
//! Appearances serialize with serde, so themes can live in TOML files:
//!
//! ```rust
//! use bubbletea_segmented::segmented::{Appearance, Distribution};
//!
//! let theme = r##"
//! selector_color = "#FF5F87"
//! selector_offset_from_label = 0
//! distribution = "evenly_spaced"
//!
//! [selected_text]
//! foreground = "#FF5F87"
//! bold = true
//! "##;
//!
//! let appearance = Appearance::from_toml_str(theme).unwrap();
//! assert_eq!(appearance.selector_color, "#FF5F87");
//! assert_eq!(appearance.selector_offset_from_label, Some(0));
//! assert_eq!(appearance.distribution, Distribution::EvenlySpaced);
//! // Fields missing from the file keep their defaults.
//! assert_eq!(appearance.bottom_line_height, 1);
//! ```

use super::item::ItemState;
use crate::error::Result;
use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};

/// Text styling for a label in one selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttributes {
    /// Text color.
    pub foreground: Option<String>,
    /// Color behind the label text only.
    pub background: Option<String>,
    /// Bold weight.
    pub bold: bool,
    /// Italic.
    pub italic: bool,
    /// Underlined.
    pub underline: bool,
    /// Dimmed.
    pub faint: bool,
}

impl TextAttributes {
    /// Builds the lipgloss style for these attributes.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new().inline(true);
        if let Some(fg) = &self.foreground {
            style = style.foreground(Color::from(fg.as_str()));
        }
        if let Some(bg) = &self.background {
            style = style.background(Color::from(bg.as_str()));
        }
        if self.bold {
            style = style.bold(true);
        }
        if self.italic {
            style = style.italic(true);
        }
        if self.underline {
            style = style.underline(true);
        }
        if self.faint {
            style = style.faint(true);
        }
        style
    }
}

/// How items share the horizontal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// The width is divided evenly among the items.
    #[default]
    Fill,
    /// Items take their label width plus trailing spacing, packed from the
    /// left. Content wider than the control scrolls.
    Scrolling,
    /// Items take their label width and are spread across the full width
    /// with equal gaps between them.
    EvenlySpaced,
}

/// Where the selector sits when it is not offset from the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorAnchor {
    /// Flush with the bottom edge of the control, over the bottom line.
    #[default]
    ControlBottom,
    /// Flush with the bottom of the item area, just above the bottom line.
    ContentBottom,
}

/// Visual configuration of a segmented control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Background of the control and of unselected items.
    pub background_color: Option<String>,
    /// Background of the selected item.
    pub selected_background_color: Option<String>,

    /// Label styling when unselected.
    pub unselected_text: TextAttributes,
    /// Label styling when selected.
    pub selected_text: TextAttributes,

    /// Color of the bottom divider.
    pub bottom_line_color: String,
    /// Color of the selector bar.
    pub selector_color: String,
    /// Rows taken by the bottom divider. Zero hides it.
    pub bottom_line_height: usize,
    /// Rows taken by the selector bar. Zero hides it.
    pub selector_height: usize,
    /// Glyph used to draw the bottom divider.
    pub bottom_line_char: char,
    /// Glyph used to draw the selector bar.
    pub selector_char: char,
    /// Blank rows above the items.
    pub item_top_padding: usize,

    /// Rows between the bottom of the label and the top of the selector.
    ///
    /// When `None` the selector is placed according to
    /// [`selector_anchor`](Self::selector_anchor).
    pub selector_offset_from_label: Option<usize>,
    /// Bottom edge the selector follows when there is no label offset.
    pub selector_anchor: SelectorAnchor,
    /// When true the selector spans the whole item; otherwise only the label.
    pub selector_spans_full_item_width: bool,
    /// When true the first label hugs the left edge and the last label hugs
    /// the right edge instead of being centered.
    pub labels_on_ends_float_to_edges: bool,

    /// Columns after each item except the last, for label-sized layouts.
    pub title_spacing: usize,
    /// How items share the width.
    pub distribution: Distribution,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background_color: None,
            selected_background_color: None,
            unselected_text: TextAttributes::default(),
            selected_text: TextAttributes {
                bold: true,
                ..TextAttributes::default()
            },
            bottom_line_color: "0".to_string(),
            selector_color: "0".to_string(),
            bottom_line_height: 1,
            selector_height: 1,
            bottom_line_char: '─',
            selector_char: '━',
            item_top_padding: 0,
            selector_offset_from_label: None,
            selector_anchor: SelectorAnchor::ControlBottom,
            selector_spans_full_item_width: true,
            labels_on_ends_float_to_edges: false,
            title_spacing: 2,
            distribution: Distribution::Fill,
        }
    }
}

impl Appearance {
    /// Parses an appearance from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Writes the appearance out as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Label attributes for the given state.
    pub fn text_attributes(&self, state: ItemState) -> &TextAttributes {
        match state {
            ItemState::Selected => &self.selected_text,
            ItemState::Unselected => &self.unselected_text,
        }
    }

    /// Item background for the given state.
    pub fn item_background(&self, state: ItemState) -> Option<&String> {
        match state {
            ItemState::Selected => self.selected_background_color.as_ref(),
            ItemState::Unselected => self.background_color.as_ref(),
        }
    }

    /// Style for the bottom divider.
    pub fn bottom_line_style(&self) -> Style {
        self.line_style(&self.bottom_line_color)
    }

    /// Style for the selector bar.
    pub fn selector_style(&self) -> Style {
        self.line_style(&self.selector_color)
    }

    /// Style for blank background cells.
    pub fn background_style(&self, background: Option<&String>) -> Style {
        let style = Style::new().inline(true);
        match background {
            Some(bg) => style.background(Color::from(bg.as_str())),
            None => style,
        }
    }

    fn line_style(&self, color: &str) -> Style {
        let style = Style::new().inline(true).foreground(Color::from(color));
        match &self.background_color {
            Some(bg) => style.background(Color::from(bg.as_str())),
            None => style,
        }
    }
}

/// The whole configuration record of a control: titles plus appearance.
///
/// The control always holds exactly `titles.len()` items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Item titles, in display order.
    pub titles: Vec<String>,
    /// Visual configuration.
    pub appearance: Appearance,
}

impl ViewState {
    /// A view state with default appearance.
    pub fn new<S: Into<String>>(titles: impl IntoIterator<Item = S>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            appearance: Appearance::default(),
        }
    }

    /// Replaces the appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }
}
