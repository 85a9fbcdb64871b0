//! Draws the segmented control onto a cell canvas and styles it with lipgloss.

use super::appearance::Appearance;
use super::item::Item;
use super::layout::Layout;
use crate::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// What occupies one terminal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    /// Empty space over the item with this index, or over the control.
    Blank(Option<usize>),
    /// One grapheme of the label of the item with this index.
    Glyph(usize, String),
    /// Right half of a wide grapheme.
    Continuation,
    Selector,
    Line,
}

/// Cells that share a style and are rendered in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Blank(Option<usize>),
    Label(usize),
    Selector,
    Line,
}

/// Everything the renderer reads.
pub(super) struct Scene<'a> {
    pub appearance: &'a Appearance,
    pub items: &'a [Item],
    pub layout: &'a Layout,
    /// Current (possibly mid-animation) selector frame, in content space.
    pub selector: Option<Rect>,
    pub scroll_offset: usize,
    pub width: usize,
    pub height: usize,
}

impl Scene<'_> {
    /// Renders `height` lines of `width` cells each.
    pub(super) fn render(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }

        let mut canvas = vec![vec![Cell::Blank(None); self.width]; self.height];
        self.paint_items(&mut canvas);
        self.paint_bottom_line(&mut canvas);
        self.paint_labels(&mut canvas);
        self.paint_selector(&mut canvas);

        canvas
            .iter()
            .map(|row| self.render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Maps a content column to a canvas column if it is on screen.
    fn column(&self, content_x: usize) -> Option<usize> {
        content_x
            .checked_sub(self.scroll_offset)
            .filter(|&c| c < self.width)
    }

    fn paint_items(&self, canvas: &mut [Vec<Cell>]) {
        for (index, frame) in self.layout.items.iter().enumerate() {
            for row in canvas.iter_mut().take(frame.bottom()).skip(frame.y) {
                for x in frame.x..frame.right() {
                    if let Some(col) = self.column(x) {
                        row[col] = Cell::Blank(Some(index));
                    }
                }
            }
        }
    }

    fn paint_bottom_line(&self, canvas: &mut [Vec<Cell>]) {
        let line = self.layout.bottom_line;
        for row in canvas.iter_mut().take(line.bottom()).skip(line.y) {
            for cell in row.iter_mut().take(line.right()).skip(line.x) {
                *cell = Cell::Line;
            }
        }
    }

    fn paint_labels(&self, canvas: &mut [Vec<Cell>]) {
        for (index, (item, frame)) in self.items.iter().zip(&self.layout.labels).enumerate() {
            let Some(row) = canvas.get_mut(frame.y) else {
                continue;
            };
            if frame.width == 0 {
                continue;
            }

            let text = item.render_label(frame.width);
            let mut x = frame.x;
            for g in text.graphemes(true) {
                let w = UnicodeWidthStr::width(g);
                if w == 0 {
                    continue;
                }
                let start = self.column(x);
                let end = x.checked_add(w - 1).and_then(|e| self.column(e));
                match (start, end) {
                    (Some(col), Some(_)) => {
                        row[col] = Cell::Glyph(index, g.to_string());
                        for c in 1..w {
                            row[col + c] = Cell::Continuation;
                        }
                    }
                    // wide grapheme cut by the viewport edge
                    _ => {
                        for c in x..x.saturating_add(w) {
                            if let Some(col) = self.column(c) {
                                row[col] = Cell::Blank(Some(index));
                            }
                        }
                    }
                }
                x = x.saturating_add(w);
            }
        }
    }

    fn paint_selector(&self, canvas: &mut [Vec<Cell>]) {
        let Some(frame) = self.selector else {
            return;
        };
        for row in canvas.iter_mut().take(frame.bottom()).skip(frame.y) {
            for x in frame.x..frame.right() {
                if let Some(col) = self.column(x) {
                    row[col] = Cell::Selector;
                }
            }
        }
    }

    fn render_row(&self, row: &[Cell]) -> String {
        let mut out = String::new();
        let mut current: Option<(Run, String)> = None;

        for cell in row {
            let (run, text) = match cell {
                Cell::Continuation => continue,
                Cell::Blank(owner) => (Run::Blank(*owner), " ".to_string()),
                Cell::Glyph(index, g) => (Run::Label(*index), g.clone()),
                Cell::Selector => (Run::Selector, self.appearance.selector_char.to_string()),
                Cell::Line => (Run::Line, self.appearance.bottom_line_char.to_string()),
            };

            match current.as_mut() {
                Some((r, buf)) if *r == run => buf.push_str(&text),
                _ => {
                    if let Some((r, buf)) = current.take() {
                        out.push_str(&self.style_run(r, &buf));
                    }
                    current = Some((run, text));
                }
            }
        }

        if let Some((r, buf)) = current {
            out.push_str(&self.style_run(r, &buf));
        }
        out
    }

    fn style_run(&self, run: Run, text: &str) -> String {
        let background = |owner: Option<usize>| {
            owner
                .and_then(|i| self.items.get(i))
                .and_then(|item| item.style().background.as_ref())
                .or(self.appearance.background_color.as_ref())
        };

        match run {
            Run::Blank(owner) => match background(owner) {
                Some(bg) => self.appearance.background_style(Some(bg)).render(text),
                None => text.to_string(),
            },
            Run::Label(index) => match self.items.get(index) {
                Some(item) => item.label_style().render(text),
                None => text.to_string(),
            },
            Run::Selector => self.appearance.selector_style().render(text),
            Run::Line => self.appearance.bottom_line_style().render(text),
        }
    }
}
