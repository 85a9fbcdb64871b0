//! Cell-grid rectangles used for layout.

/// A rectangle on the terminal cell grid.
///
/// Coordinates are in columns (`x`, `width`) and rows (`y`, `height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left column.
    pub x: usize,
    /// Top row.
    pub y: usize,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin with the given size.
    pub const fn sized(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One past the rightmost column, saturating at `usize::MAX`.
    pub fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the cell at (`x`, `y`) lies inside the rectangle.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the column span `[start, end)` lies fully inside this rectangle's columns.
    pub fn contains_columns(&self, start: usize, end: usize) -> bool {
        start >= self.x && end <= self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(2, 1, 5, 3);
        assert_eq!(r.right(), 7);
        assert_eq!(r.bottom(), 4);
        assert_eq!(Rect::new(usize::MAX, usize::MAX, 3, 3).right(), usize::MAX);
        assert_eq!(Rect::new(usize::MAX, usize::MAX, 3, 3).bottom(), usize::MAX);
        assert!(!r.is_empty());
        assert!(Rect::sized(0, 3).is_empty());
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(2, 1, 5, 3);
        assert!(r.contains(2, 1));
        assert!(r.contains(6, 3));
        assert!(!r.contains(7, 1));
        assert!(!r.contains(2, 4));
        assert!(!r.contains(1, 1));
    }

    #[test]
    fn test_contains_columns() {
        let r = Rect::new(10, 0, 20, 1);
        assert!(r.contains_columns(10, 30));
        assert!(r.contains_columns(15, 16));
        assert!(!r.contains_columns(9, 12));
        assert!(!r.contains_columns(25, 31));
    }
}
