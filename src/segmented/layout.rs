//! Geometry of the segmented control.
//!
//! Everything here is a pure function of the appearance, the items and the
//! control size. Horizontal coordinates are in content space: in
//! [`Distribution::Scrolling`] the content can be wider than the control and
//! the renderer shifts it by the scroll offset. Item frames never include
//! trailing spacing; the spacing is the gap to the next frame.

use super::appearance::{Appearance, Distribution, SelectorAnchor};
use super::item::{Item, LabelAlignment};
use crate::geometry::Rect;

/// Computed frames for one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Frame of each item, in item order.
    pub items: Vec<Rect>,
    /// Frame of each item's label, in item order.
    pub labels: Vec<Rect>,
    /// Width of all items including gaps. Never less than the control width.
    pub content_width: usize,
    /// The bottom divider, in control coordinates.
    pub bottom_line: Rect,
}

impl Layout {
    /// Lays out `items` in a control of `width` x `height` cells.
    pub fn compute(appearance: &Appearance, items: &[Item], width: usize, height: usize) -> Self {
        let y = appearance.item_top_padding.min(height);
        let item_height = height - y;

        let spans = match appearance.distribution {
            Distribution::Fill => fill_spans(items.len(), width),
            Distribution::Scrolling => packed_spans(items),
            Distribution::EvenlySpaced => evenly_spaced_spans(items, width),
        };

        let content_width = spans
            .last()
            .map(|&(x, w)| x.saturating_add(w))
            .unwrap_or(0)
            .max(width);

        let item_frames: Vec<Rect> = spans
            .iter()
            .map(|&(x, w)| Rect::new(x, y, w, item_height))
            .collect();

        let labels = items
            .iter()
            .zip(&item_frames)
            .map(|(item, frame)| label_frame(item, frame))
            .collect();

        let line_height = appearance.bottom_line_height.min(height);
        let bottom_line = Rect::new(0, height - line_height, width, line_height);

        Self {
            items: item_frames,
            labels,
            content_width,
            bottom_line,
        }
    }

    /// Index of the item under content column `x` and row `y`.
    pub fn hit_test(&self, x: usize, y: usize) -> Option<usize> {
        self.items.iter().position(|frame| frame.contains(x, y))
    }

    /// Where the selector belongs for item `index`, or `None` if there is no
    /// such item.
    pub fn selector_frame(&self, appearance: &Appearance, index: usize, height: usize) -> Option<Rect> {
        let item = self.items.get(index)?;
        let label = self.labels.get(index)?;

        let horizontal = if appearance.selector_spans_full_item_width {
            item
        } else {
            label
        };

        let selector_height = appearance.selector_height.min(height);
        let y = match appearance.selector_offset_from_label {
            Some(offset) => label.bottom().saturating_add(offset),
            None => match appearance.selector_anchor {
                SelectorAnchor::ControlBottom => height - selector_height,
                SelectorAnchor::ContentBottom => height
                    .saturating_sub(appearance.bottom_line_height)
                    .saturating_sub(selector_height),
            },
        };

        Some(Rect::new(horizontal.x, y, horizontal.width, selector_height))
    }
}

/// Splits `width` into `count` slots; the leftmost slots absorb the remainder.
fn fill_spans(count: usize, width: usize) -> Vec<(usize, usize)> {
    if count == 0 {
        return Vec::new();
    }
    let base = width / count;
    let remainder = width % count;

    let mut x = 0;
    (0..count)
        .map(|i| {
            let w = base + usize::from(i < remainder);
            let span = (x, w);
            x += w;
            span
        })
        .collect()
}

fn packed_spans(items: &[Item]) -> Vec<(usize, usize)> {
    let mut x: usize = 0;
    items
        .iter()
        .map(|item| {
            let span = (x, item.label_width());
            x = x.saturating_add(item.intrinsic_width());
            span
        })
        .collect()
}

fn evenly_spaced_spans(items: &[Item], width: usize) -> Vec<(usize, usize)> {
    let total: usize = items.iter().map(Item::label_width).sum();
    let free = width.saturating_sub(total);

    if items.len() == 1 {
        return vec![(free / 2, items[0].label_width())];
    }

    let gaps = items.len().saturating_sub(1).max(1);
    let gap = free / gaps;
    let extra = free % gaps;

    let mut x: usize = 0;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let span = (x, item.label_width());
            x = x
                .saturating_add(item.label_width())
                .saturating_add(gap + usize::from(i < extra));
            span
        })
        .collect()
}

fn label_frame(item: &Item, frame: &Rect) -> Rect {
    if frame.height == 0 {
        return Rect::new(frame.x, frame.y, 0, 0);
    }
    let width = item.label_width().min(frame.width);
    let free = frame.width - width;
    let x = match item.alignment() {
        LabelAlignment::Leading => frame.x,
        LabelAlignment::Center => frame.x.saturating_add(free / 2),
        LabelAlignment::Trailing => frame.x.saturating_add(free),
    };
    let y = frame.y + (frame.height - 1) / 2;
    Rect::new(x, y, width, 1)
}

/// Scroll offset that shows `target` inside a viewport of `viewport_width`
/// columns, moving as little as possible from `current`.
pub fn scroll_to_reveal(
    current: usize,
    viewport_width: usize,
    content_width: usize,
    target: Rect,
) -> usize {
    let max_offset = content_width.saturating_sub(viewport_width);
    let viewport = Rect::new(current, 0, viewport_width, 1);
    let offset = if viewport.contains_columns(target.x, target.right()) {
        current
    } else if target.x < current || target.width > viewport_width {
        target.x
    } else {
        target.right() - viewport_width
    };
    offset.min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmented::item::ItemStyle;

    fn items(titles: &[&str], spacing: usize) -> Vec<Item> {
        let last = titles.len().saturating_sub(1);
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Item::new(
                    ItemStyle {
                        text: t.to_string(),
                        trailing_spacing: if i == last { 0 } else { spacing },
                        ..ItemStyle::default()
                    },
                    LabelAlignment::Center,
                    None,
                    None,
                )
            })
            .collect()
    }

    fn xs(layout: &Layout) -> Vec<(usize, usize)> {
        layout.items.iter().map(|r| (r.x, r.width)).collect()
    }

    #[test]
    fn test_fill_divides_width() {
        let a = Appearance::default();
        let l = Layout::compute(&a, &items(&["A", "B", "C"], 2), 30, 3);
        assert_eq!(xs(&l), vec![(0, 10), (10, 10), (20, 10)]);
        assert_eq!(l.content_width, 30);
    }

    #[test]
    fn test_fill_spreads_remainder_left() {
        let a = Appearance::default();
        let l = Layout::compute(&a, &items(&["A", "B", "C"], 2), 11, 3);
        assert_eq!(xs(&l), vec![(0, 4), (4, 4), (8, 3)]);
    }

    #[test]
    fn test_huge_spacing_saturates() {
        let a = Appearance {
            distribution: Distribution::Scrolling,
            ..Appearance::default()
        };
        let l = Layout::compute(&a, &items(&["A", "B", "C", "D"], usize::MAX / 2), 12, 3);
        assert_eq!(l.items[1].x, usize::MAX / 2 + 1);
        assert_eq!(l.items[2].x, usize::MAX);
        assert_eq!(l.items[3].x, usize::MAX);
        assert_eq!(l.content_width, usize::MAX);
        assert_eq!(l.hit_test(0, 1), Some(0));
    }

    #[test]
    fn test_fill_empty() {
        let a = Appearance::default();
        let l = Layout::compute(&a, &[], 20, 3);
        assert!(l.items.is_empty());
        assert_eq!(l.content_width, 20);
        assert_eq!(l.hit_test(3, 1), None);
    }

    #[test]
    fn test_scrolling_packs_labels_with_spacing() {
        let a = Appearance {
            distribution: Distribution::Scrolling,
            ..Appearance::default()
        };
        let l = Layout::compute(&a, &items(&["One", "Three", "Seven"], 2), 10, 3);
        assert_eq!(xs(&l), vec![(0, 3), (5, 5), (12, 5)]);
        assert_eq!(l.content_width, 17);
        // gap between items is not part of any item
        assert_eq!(l.hit_test(3, 1), None);
        assert_eq!(l.hit_test(5, 1), Some(1));
    }

    #[test]
    fn test_evenly_spaced_pins_ends() {
        let a = Appearance {
            distribution: Distribution::EvenlySpaced,
            ..Appearance::default()
        };
        let l = Layout::compute(&a, &items(&["AA", "BB", "CC"], 0), 20, 3);
        // 14 free columns over 2 gaps
        assert_eq!(xs(&l), vec![(0, 2), (9, 2), (18, 2)]);
        assert_eq!(l.items[2].right(), 20);
    }

    #[test]
    fn test_evenly_spaced_single_item_centered() {
        let a = Appearance {
            distribution: Distribution::EvenlySpaced,
            ..Appearance::default()
        };
        let l = Layout::compute(&a, &items(&["Only"], 0), 10, 3);
        assert_eq!(xs(&l), vec![(3, 4)]);
    }

    #[test]
    fn test_vertical_layout_and_label_centering() {
        let a = Appearance {
            item_top_padding: 1,
            ..Appearance::default()
        };
        let l = Layout::compute(&a, &items(&["Tab", "Other"], 0), 20, 4);
        assert_eq!(l.items[0], Rect::new(0, 1, 10, 3));
        // label centered in the 10-column slot and the 3-row item
        assert_eq!(l.labels[0], Rect::new(3, 2, 3, 1));
        assert_eq!(l.bottom_line, Rect::new(0, 3, 20, 1));
    }

    #[test]
    fn test_label_alignment() {
        let a = Appearance::default();
        let mut its = items(&["ab", "cd", "ef"], 0);
        its[0].set_alignment(LabelAlignment::Leading);
        its[2].set_alignment(LabelAlignment::Trailing);
        let l = Layout::compute(&a, &its, 30, 1);
        assert_eq!(l.labels[0].x, 0);
        assert_eq!(l.labels[1].x, 14);
        assert_eq!(l.labels[2].x, 28);
    }

    #[test]
    fn test_selector_frame_rules() {
        let mut a = Appearance::default();
        let its = items(&["Tab", "Other"], 0);
        let l = Layout::compute(&a, &its, 20, 3);

        // full item width, anchored on the control bottom
        assert_eq!(l.selector_frame(&a, 1, 3), Some(Rect::new(10, 2, 10, 1)));

        // label width
        a.selector_spans_full_item_width = false;
        assert_eq!(l.selector_frame(&a, 0, 3), Some(Rect::new(3, 2, 3, 1)));

        // above the divider
        a.selector_anchor = SelectorAnchor::ContentBottom;
        assert_eq!(l.selector_frame(&a, 0, 3), Some(Rect::new(3, 1, 3, 1)));

        // offset from the label wins over the anchor
        a.selector_offset_from_label = Some(0);
        assert_eq!(l.selector_frame(&a, 0, 3), Some(Rect::new(3, 2, 3, 1)));

        assert_eq!(l.selector_frame(&a, 2, 3), None);
    }

    #[test]
    fn test_scroll_to_reveal() {
        // already visible
        assert_eq!(scroll_to_reveal(0, 10, 30, Rect::new(2, 0, 5, 1)), 0);
        // off to the right
        assert_eq!(scroll_to_reveal(0, 10, 30, Rect::new(12, 0, 5, 1)), 7);
        // off to the left
        assert_eq!(scroll_to_reveal(15, 10, 30, Rect::new(4, 0, 5, 1)), 4);
        // clamped to the end of the content
        assert_eq!(scroll_to_reveal(0, 10, 18, Rect::new(16, 0, 5, 1)), 8);
        // wider than the viewport shows its start
        assert_eq!(scroll_to_reveal(0, 10, 40, Rect::new(20, 0, 15, 1)), 20);
    }
}
