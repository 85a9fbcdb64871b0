//! The segmented control model.

use super::appearance::{Appearance, Distribution, ViewState};
use super::delegate::{Action, Delegate};
use super::item::{Item, ItemAction, ItemId, ItemState, ItemStyle, LabelAlignment};
use super::keys::SegmentedKeyMap;
use super::layout::{scroll_to_reveal, Layout};
use super::render::Scene;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::spring::{self, Spring};
use crate::Component;
use bubbletea_rs::{tick, Cmd, KeyMsg, Model as BubbleTeaModel, MouseMsg, Msg};
use crossterm::event::{MouseButton, MouseEventKind};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Drives one step of the selector animation.
///
/// Frames carry the control's id and an animation tag; frames from another
/// control or from a superseded animation are ignored.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    pub(crate) id: usize,
    pub(crate) tag: usize,
}

/// Which half of a press an [`ItemPressMsg`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    /// The pointer went down on the item.
    Began,
    /// The pointer was released after pressing the item.
    Ended,
}

/// Emitted by an item's press actions and handled by the owning control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPressMsg {
    /// Id of the control that built the item.
    pub control: usize,
    /// The pressed item.
    pub item: ItemId,
    /// Press phase.
    pub phase: PressPhase,
}

/// What [`Model::apply_view_state`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconfigured {
    /// Items were kept and updated in place.
    Restyled,
    /// All items were destroyed and created again.
    Rebuilt,
}

fn press_action(control: usize, phase: PressPhase) -> ItemAction {
    Arc::new(move |item| Box::new(ItemPressMsg { control, item, phase }) as Msg)
}

/// A horizontal row of selectable labels with an animated selector bar and
/// a bottom divider.
///
/// # Examples
///
/// ```rust
/// use bubbletea_segmented::geometry::Rect;
/// use bubbletea_segmented::segmented::Model;
///
/// let mut tabs = Model::new(Rect::sized(30, 3), ["First", "Second", "Third"]);
/// assert_eq!(tabs.selected_index(), 0);
///
/// let _cmd = tabs.select_item(2, false).unwrap();
/// assert_eq!(tabs.selected_index(), 2);
/// assert!(tabs.items()[2].is_selected());
/// assert!(!tabs.items()[0].is_selected());
///
/// // Selecting past the end is reported and changes nothing.
/// assert!(tabs.select_item(7, false).is_err());
/// assert_eq!(tabs.selected_index(), 2);
/// ```
///
/// # Integration with bubbletea-rs
///
/// ```rust
/// use bubbletea_segmented::geometry::Rect;
/// use bubbletea_segmented::segmented::{self, Delegate};
/// use bubbletea_rs::{Cmd, Model, Msg};
///
/// struct Log;
///
/// impl Delegate for Log {
///     fn did_press_item(&mut self, _control: usize, index: usize) {
///         log::info!("tab {index} pressed");
///     }
/// }
///
/// struct App {
///     tabs: segmented::Model,
/// }
///
/// impl Model for App {
///     fn init() -> (Self, Option<Cmd>) {
///         let tabs = segmented::new(Rect::sized(40, 2), ["Inbox", "Sent", "Drafts"])
///             .with_delegate(Log);
///         (Self { tabs }, None)
///     }
///
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         self.tabs.update(&msg)
///     }
///
///     fn view(&self) -> String {
///         self.tabs.view()
///     }
/// }
/// ```
pub struct Model {
    id: usize,
    tag: usize,

    frame: Rect,
    view_state: ViewState,
    items: Vec<Item>,
    layout: Layout,
    selected_index: usize,
    pressed: Option<ItemId>,

    selector_x: Spring,
    selector_width: Spring,
    selector_y: usize,
    selector_height: usize,
    selector_visible: bool,
    scroll_offset: usize,
    stiffness: f64,

    focus: bool,
    /// Keyboard bindings used while focused.
    pub keymap: SegmentedKeyMap,

    delegate: Option<Box<dyn Delegate>>,
    action: Option<Action>,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("frame", &self.frame)
            .field("titles", &self.view_state.titles)
            .field("selected_index", &self.selected_index)
            .field("selector", &self.selector_frame())
            .field("scroll_offset", &self.scroll_offset)
            .field("focus", &self.focus)
            .field("has_delegate", &self.delegate.is_some())
            .field("has_action", &self.action.is_some())
            .finish_non_exhaustive()
    }
}

/// Creates a control with default appearance.
pub fn new<S: Into<String>>(frame: Rect, titles: impl IntoIterator<Item = S>) -> Model {
    Model::new(frame, titles)
}

impl Model {
    /// Creates a control in `frame` with one item per title and the default
    /// appearance. The first item starts selected.
    pub fn new<S: Into<String>>(frame: Rect, titles: impl IntoIterator<Item = S>) -> Self {
        Self::with_view_state(frame, ViewState::new(titles))
    }

    /// Creates a control from a full configuration record.
    pub fn with_view_state(frame: Rect, view_state: ViewState) -> Self {
        let mut m = Self {
            id: next_id(),
            tag: 0,
            frame,
            view_state,
            items: Vec::new(),
            layout: Layout::default(),
            selected_index: 0,
            pressed: None,
            selector_x: Spring::new(0.0),
            selector_width: Spring::new(0.0),
            selector_y: 0,
            selector_height: 0,
            selector_visible: false,
            scroll_offset: 0,
            stiffness: spring::stiffness_for(spring::DEFAULT_DURATION),
            focus: false,
            keymap: SegmentedKeyMap::default(),
            delegate: None,
            action: None,
        };
        m.rebuild_items();
        m.refresh();
        m
    }

    /// Sets the action run after every press.
    pub fn with_action(mut self, action: impl FnMut(&Model, usize) + Send + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Sets the press delegate.
    pub fn with_delegate(mut self, delegate: impl Delegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Replaces the appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.set_appearance(appearance);
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: SegmentedKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces or clears the action.
    pub fn set_action(&mut self, action: Option<Action>) {
        self.action = action;
    }

    /// Replaces or clears the delegate.
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn Delegate>>) {
        self.delegate = delegate;
    }

    /// Sets how long an animated selector move takes. Zero disables animation.
    pub fn set_animation_duration(&mut self, duration: std::time::Duration) {
        self.stiffness = spring::stiffness_for(duration);
    }

    /// Identity of this control, passed to delegates and carried by messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The whole configuration record.
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Current appearance.
    pub fn appearance(&self) -> &Appearance {
        &self.view_state.appearance
    }

    /// Current titles.
    pub fn titles(&self) -> &[String] {
        &self.view_state.titles
    }

    /// Index of the selected item. Zero when there are no items.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Frame of the item at `index`, in content coordinates.
    pub fn item_frame(&self, index: usize) -> Option<Rect> {
        self.layout.items.get(index).copied()
    }

    /// Frame of the label of the item at `index`, in content coordinates.
    pub fn label_frame(&self, index: usize) -> Option<Rect> {
        self.layout.labels.get(index).copied()
    }

    /// Position and size of the control.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Width of the laid out content. Larger than the control only when
    /// scrolling.
    pub fn content_width(&self) -> usize {
        self.layout.content_width
    }

    /// First visible content column.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The bottom divider, in control coordinates.
    pub fn bottom_line_frame(&self) -> Rect {
        self.layout.bottom_line
    }

    /// Where the selector is drawn right now, in content coordinates.
    /// `None` when there is nothing selected.
    pub fn selector_frame(&self) -> Option<Rect> {
        self.selector_visible.then(|| {
            Rect::new(
                self.selector_x.cells(),
                self.selector_y,
                self.selector_width.cells(),
                self.selector_height,
            )
        })
    }

    /// Where the selector is heading.
    pub fn selector_target(&self) -> Option<Rect> {
        self.layout
            .selector_frame(self.appearance(), self.selected_index, self.frame.height)
    }

    /// Whether the selector is mid-animation.
    pub fn is_animating(&self) -> bool {
        self.selector_x.is_animating() || self.selector_width.is_animating()
    }

    /// Index of the item with the given id.
    pub fn index_of(&self, id: ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(Error::UnknownItem(id))
    }

    /// Replaces the appearance, keeping the titles.
    pub fn set_appearance(&mut self, appearance: Appearance) -> Reconfigured {
        let view_state = ViewState {
            titles: self.view_state.titles.clone(),
            appearance,
        };
        self.apply_view_state(view_state)
    }

    /// Replaces the titles, keeping the appearance.
    pub fn set_titles<S: Into<String>>(&mut self, titles: impl IntoIterator<Item = S>) -> Reconfigured {
        let view_state = ViewState {
            titles: titles.into_iter().map(Into::into).collect(),
            appearance: self.view_state.appearance.clone(),
        };
        self.apply_view_state(view_state)
    }

    /// Replaces the whole configuration and redraws.
    ///
    /// Items are recreated only when the number of titles, the distribution
    /// or the floating-ends setting changed; otherwise they are updated in
    /// place. The selection is clamped to the new item range and reapplied
    /// without animation.
    pub fn apply_view_state(&mut self, view_state: ViewState) -> Reconfigured {
        let old = std::mem::replace(&mut self.view_state, view_state);
        let new = &self.view_state;

        let rebuild = old.titles.len() != new.titles.len()
            || old.appearance.distribution != new.appearance.distribution
            || old.appearance.labels_on_ends_float_to_edges
                != new.appearance.labels_on_ends_float_to_edges;

        let outcome = if rebuild {
            self.rebuild_items();
            Reconfigured::Rebuilt
        } else {
            let count = self.items.len();
            let floating = new.appearance.labels_on_ends_float_to_edges;
            for (index, item) in self.items.iter_mut().enumerate() {
                item.set_alignment(alignment_for(index, count, floating));
            }
            Reconfigured::Restyled
        };

        self.refresh();
        outcome
    }

    /// Moves the layout to a new position and size.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.relayout();
        self.place_selector(false);
    }

    /// Resizes the control in place.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.set_frame(Rect::new(self.frame.x, self.frame.y, width, height));
    }

    /// Selects the item at `index`.
    ///
    /// The item takes the selected style and all others the unselected
    /// style; the selector moves under it and, when scrolling, the item is
    /// scrolled into view. With `animated` the selector glides there and the
    /// returned command drives the animation frames.
    ///
    /// An index past the last item is rejected with
    /// [`Error::IndexOutOfRange`] and leaves the control unchanged.
    pub fn select_item(&mut self, index: usize, animated: bool) -> Result<Option<Cmd>> {
        let len = self.items.len();
        if index >= len {
            log::warn!("segmented control {}: ignoring selection of item {index} of {len}", self.id);
            return Err(Error::IndexOutOfRange { index, len });
        }

        self.selected_index = index;
        self.restyle_items();
        Ok(self.place_selector(animated))
    }

    /// Handles a press message produced by one of this control's items.
    ///
    /// Messages from other controls are ignored. A message naming an item
    /// this control does not hold yields [`Error::UnknownItem`].
    pub fn handle_item_press(&mut self, msg: &ItemPressMsg) -> Result<Option<Cmd>> {
        if msg.control != self.id {
            return Ok(None);
        }
        let index = self.index_of(msg.item)?;
        match msg.phase {
            PressPhase::Began => {
                self.notify_will_press(index);
                Ok(None)
            }
            PressPhase::Ended => self.complete_press(index),
        }
    }

    /// Processes a message and returns the next command, if any.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            return self.animate(frame);
        }

        if let Some(press) = msg.downcast_ref::<ItemPressMsg>() {
            return match self.handle_item_press(press) {
                Ok(cmd) => cmd,
                Err(err) => {
                    log::error!("segmented control {}: {err}", self.id);
                    None
                }
            };
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.handle_mouse(mouse);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        None
    }

    /// Renders the control.
    pub fn view(&self) -> String {
        Scene {
            appearance: self.appearance(),
            items: &self.items,
            layout: &self.layout,
            selector: self.selector_frame(),
            scroll_offset: self.scroll_offset,
            width: self.frame.width,
            height: self.frame.height,
        }
        .render()
    }

    fn rebuild_items(&mut self) {
        let count = self.view_state.titles.len();
        let floating = self.view_state.appearance.labels_on_ends_float_to_edges;
        log::debug!("segmented control {}: building {count} items", self.id);

        self.pressed = None;
        self.items = self
            .view_state
            .titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                Item::new(
                    ItemStyle {
                        text: title.clone(),
                        ..ItemStyle::default()
                    },
                    alignment_for(index, count, floating),
                    Some(press_action(self.id, PressPhase::Began)),
                    Some(press_action(self.id, PressPhase::Ended)),
                )
            })
            .collect();
    }

    /// Restyles, lays out and reselects after a configuration change.
    fn refresh(&mut self) {
        let len = self.items.len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
        self.restyle_items();
        self.relayout();
        self.place_selector(false);
    }

    fn restyle_items(&mut self) {
        let appearance = &self.view_state.appearance;
        let last = self.items.len().saturating_sub(1);
        let spaced = appearance.distribution != Distribution::EvenlySpaced;

        for (index, (item, title)) in self
            .items
            .iter_mut()
            .zip(&self.view_state.titles)
            .enumerate()
        {
            let state = if index == self.selected_index {
                ItemState::Selected
            } else {
                ItemState::Unselected
            };
            let trailing_spacing = if spaced && index != last {
                appearance.title_spacing
            } else {
                0
            };
            item.set_style(ItemStyle {
                text: title.clone(),
                attributes: appearance.text_attributes(state).clone(),
                trailing_spacing,
                background: appearance.item_background(state).cloned(),
                state,
            });
        }
    }

    fn relayout(&mut self) {
        self.layout = Layout::compute(
            &self.view_state.appearance,
            &self.items,
            self.frame.width,
            self.frame.height,
        );
        // only the scrolling layout keeps an offset
        self.scroll_offset = if self.view_state.appearance.distribution == Distribution::Scrolling {
            let max_offset = self.layout.content_width.saturating_sub(self.frame.width);
            self.scroll_offset.min(max_offset)
        } else {
            0
        };
        log::debug!(
            "segmented control {}: laid out {} items over {} columns",
            self.id,
            self.items.len(),
            self.layout.content_width
        );
    }

    /// Moves the selector under the selected item and scrolls it into view.
    fn place_selector(&mut self, animated: bool) -> Option<Cmd> {
        // any animation in flight is superseded
        self.tag += 1;

        let Some(target) = self.selector_target() else {
            self.selector_visible = false;
            return None;
        };

        if self.view_state.appearance.distribution == Distribution::Scrolling {
            if let Some(item) = self.item_frame(self.selected_index) {
                self.scroll_offset = scroll_to_reveal(
                    self.scroll_offset,
                    self.frame.width,
                    self.layout.content_width,
                    item,
                );
            }
        }

        self.selector_y = target.y;
        self.selector_height = target.height;

        if !animated || !self.selector_visible || self.stiffness <= 0.0 {
            self.selector_x.snap_to(target.x as f64);
            self.selector_width.snap_to(target.width as f64);
            self.selector_visible = true;
            return None;
        }

        self.selector_x.set_target(target.x as f64);
        self.selector_width.set_target(target.width as f64);
        if self.is_animating() {
            Some(self.next_frame())
        } else {
            None
        }
    }

    fn animate(&mut self, frame: &FrameMsg) -> Option<Cmd> {
        if frame.id != self.id || frame.tag != self.tag || !self.is_animating() {
            return None;
        }

        let dt = spring::frame_duration().as_secs_f64();
        self.selector_x
            .step(dt, self.stiffness, spring::DEFAULT_DAMPING_RATIO);
        self.selector_width
            .step(dt, self.stiffness, spring::DEFAULT_DAMPING_RATIO);

        self.is_animating().then(|| self.next_frame())
    }

    #[cfg(test)]
    pub(crate) fn frame_msg(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        tick(spring::frame_duration(), move |_| {
            Box::new(FrameMsg { id, tag }) as Msg
        })
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) -> Option<Cmd> {
        let (x, y) = (mouse.x as usize, mouse.y as usize);
        match mouse.button {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.frame.contains(x, y) {
                    return None;
                }
                let content_x = (x - self.frame.x).saturating_add(self.scroll_offset);
                let index = self.layout.hit_test(content_x, y - self.frame.y)?;
                let item = self.items.get(index)?;
                self.pressed = Some(item.id());
                let msg = item.touch_began()?;
                self.update(&msg)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let id = self.pressed.take()?;
                let msg = self
                    .items
                    .iter()
                    .find(|item| item.id() == id)
                    .and_then(Item::touch_ended)?;
                self.update(&msg)
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if !self.focus || self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        let current = self.selected_index;
        let target = if self.keymap.prev.matches(key) {
            current.saturating_sub(1)
        } else if self.keymap.next.matches(key) {
            (current + 1).min(last)
        } else if self.keymap.first.matches(key) {
            0
        } else if self.keymap.last.matches(key) {
            last
        } else {
            return None;
        };

        if target == current {
            return None;
        }

        self.notify_will_press(target);
        match self.complete_press(target) {
            Ok(cmd) => cmd,
            Err(err) => {
                log::error!("segmented control {}: {err}", self.id);
                None
            }
        }
    }

    fn notify_will_press(&mut self, index: usize) {
        let id = self.id;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_press_item(id, index);
        }
    }

    /// Selects the pressed item, then runs the action and the delegate.
    fn complete_press(&mut self, index: usize) -> Result<Option<Cmd>> {
        let cmd = self.select_item(index, true)?;

        if let Some(mut action) = self.action.take() {
            action(self, index);
            self.action = Some(action);
        }

        let id = self.id;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_press_item(id, index);
        }
        Ok(cmd)
    }
}

fn alignment_for(index: usize, count: usize, floating: bool) -> LabelAlignment {
    if !floating || count < 2 {
        return LabelAlignment::Center;
    }
    if index == 0 {
        LabelAlignment::Leading
    } else if index == count - 1 {
        LabelAlignment::Trailing
    } else {
        LabelAlignment::Center
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
        self.pressed = None;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Rect::sized(80, 2), Vec::<String>::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, &msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
