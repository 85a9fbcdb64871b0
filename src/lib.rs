#![warn(missing_docs)]

//! # bubbletea-segmented
//!
//! A segmented tab control for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs): a row of
//! selectable labels, an animated selector bar under the selected label, and
//! a divider line along the bottom.
//!
//! ## Overview
//!
//! The control follows the Elm Architecture like every bubbletea-rs
//! component: forward messages to `update()`, return the command it hands
//! back, and call `view()` when drawing. Selection changes can be animated;
//! the animation is driven by frame messages the control schedules for
//! itself.
//!
//! ## Features
//!
//! - **Three layout modes**: fill the width, label-sized with scrolling, or
//!   label-sized and evenly spaced
//! - **Animated selector** with spring-style motion
//! - **Mouse and keyboard** presses with a delegate and an action callback
//! - **Themes** loaded from TOML through serde
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_segmented::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     tabs: SegmentedControl,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut tabs = segmented_new(Rect::sized(48, 2), ["Overview", "Logs", "Settings"]);
//!         let focus_cmd = tabs.focus();
//!         (Self { tabs }, focus_cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.tabs.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n\nShowing tab {}", self.tabs.view(), self.tabs.selected_index())
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: item
//! rebuilds and layout passes at debug level, rejected selections at warn
//! level. Install any logger in the host application to see them.

pub mod error;
pub mod geometry;
pub mod key;
pub mod segmented;
pub mod spring;

use bubbletea_rs::Cmd;

/// Components that can take keyboard focus.
///
/// A focused component reacts to key messages; a blurred one ignores them.
/// Hosts with several components move focus between them with
/// [`focus`](Component::focus) and [`blur`](Component::blur).
///
/// ```rust
/// use bubbletea_segmented::prelude::*;
///
/// let mut tabs = segmented_new(Rect::sized(20, 2), ["A", "B"]);
/// assert!(!tabs.focused());
///
/// let _cmd = tabs.focus();
/// assert!(tabs.focused());
///
/// tabs.blur();
/// assert!(!tabs.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus.
    ///
    /// May return a command to run when focus is gained.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use error::{Error, Result};
pub use geometry::Rect;
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys_str, Binding, Help as KeyHelp,
    KeyMap, KeyPress,
};
pub use segmented::{
    new as segmented_new, Appearance, Delegate as SegmentedDelegate,
    Distribution as SegmentedDistribution, Model as SegmentedControl, SegmentedKeyMap,
    SelectorAnchor, TextAttributes, ViewState,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_segmented::prelude::*;
/// ```
pub mod prelude {
    pub use crate::geometry::Rect;
    pub use crate::key::{
        matches, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::segmented::{
        new as segmented_new, Action as SegmentedAction, Appearance,
        Delegate as SegmentedDelegate, Distribution as SegmentedDistribution,
        ItemPressMsg, Model as SegmentedControl, PressPhase, Reconfigured, SegmentedKeyMap,
        SelectorAnchor, TextAttributes, ViewState,
    };
    pub use crate::Component;
}
