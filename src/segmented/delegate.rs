//! Press notifications for the host.
//!
//! A control reports presses through two independent, optional sinks: a
//! [`Delegate`] with separate "will press" and "did press" hooks, and an
//! [`Action`] closure that runs once a press has selected an item. On a
//! press the order is always:
//!
//! 1. `Delegate::will_press_item` when the press starts,
//! 2. the item is selected (selector animation starts),
//! 3. the action,
//! 4. `Delegate::did_press_item`.

use super::model::Model;

/// Receives press notifications from a segmented control.
///
/// `control` is the [`Model::id`] of the notifying control so one delegate
/// can serve several controls.
pub trait Delegate: Send {
    /// A press started on the item at `index`.
    fn will_press_item(&mut self, control: usize, index: usize) {
        let _ = (control, index);
    }

    /// A press on the item at `index` completed and the item is now selected.
    fn did_press_item(&mut self, control: usize, index: usize) {
        let _ = (control, index);
    }
}

/// Runs after a press has selected the item at the given index.
pub type Action = Box<dyn FnMut(&Model, usize) + Send>;
