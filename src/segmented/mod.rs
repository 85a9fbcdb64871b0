//! Segmented tab control.
//!
//! A row of selectable labels with a selector bar under the selected one and
//! a divider along the bottom. The control lays the labels out across its
//! width, tracks the selection, animates the selector when the selection
//! changes, and reports presses to the host through a [`Delegate`] and an
//! optional [`Action`].
//!
//! ```text
//!    Inbox       Sent       Drafts
//! ━━━━━━━━━━──────────────────────
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use bubbletea_segmented::geometry::Rect;
//! use bubbletea_segmented::segmented::{self, Appearance, Distribution};
//!
//! let mut tabs = segmented::new(Rect::sized(32, 2), ["Inbox", "Sent", "Drafts"])
//!     .with_action(|_control, index| log::debug!("selected {index}"));
//!
//! let mut appearance = Appearance::default();
//! appearance.selector_color = "#FF5F87".to_string();
//! appearance.distribution = Distribution::EvenlySpaced;
//! tabs.set_appearance(appearance);
//!
//! tabs.select_item(1, false).unwrap();
//! assert_eq!(tabs.selected_index(), 1);
//! assert_eq!(tabs.view().lines().count(), 2);
//! ```
//!
//! # Layout modes
//!
//! - [`Distribution::Fill`] divides the width evenly between items.
//! - [`Distribution::Scrolling`] sizes items by their labels and scrolls the
//!   selected item into view when the row is wider than the control.
//! - [`Distribution::EvenlySpaced`] sizes items by their labels and spreads
//!   them edge to edge with equal gaps.

mod appearance;
mod delegate;
mod item;
mod keys;
mod layout;
mod model;
mod render;


pub use appearance::{Appearance, Distribution, SelectorAnchor, TextAttributes, ViewState};
pub use delegate::{Action, Delegate};
pub use item::{Item, ItemAction, ItemId, ItemState, ItemStyle, LabelAlignment};
pub use keys::SegmentedKeyMap;
pub use layout::{scroll_to_reveal, Layout};
pub use model::{new, FrameMsg, ItemPressMsg, Model, PressPhase, Reconfigured};
