//! The grid model: dimensions plus a per-cell walkability flag.
//!
//! Cells are stored row-major, so the cell at `(x, y)` lives at index
//! `x + y * width`. A [`WalkMask`] is plain owned data: searches borrow it
//! immutably, and callers that want to share one across threads wrap it in an
//! `Arc`.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Walkable / blocked flags for every cell of a `width × height` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkMask {
    bounds: Range,
    cells: Vec<bool>,
}

impl WalkMask {
    /// Glyph for a walkable cell in [`from_rows`](Self::from_rows).
    pub const FLOOR: char = '.';
    /// Glyph for a blocked cell in [`from_rows`](Self::from_rows).
    pub const WALL: char = '#';

    /// Create a fully walkable grid.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            bounds: Range::sized(width, height),
            cells: vec![true; len],
        })
    }

    /// Create a grid from a row-major walkability vector.
    pub fn from_cells(width: i32, height: i32, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = checked_len(width, height)?;
        if cells.len() != expected {
            return Err(GridError::MaskLength {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            bounds: Range::sized(width, height),
            cells,
        })
    }

    /// Create a grid by asking `f` whether each point is walkable.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Point) -> bool,
    ) -> Result<Self, GridError> {
        checked_len(width, height)?;
        let bounds = Range::sized(width, height);
        let cells = bounds.iter().map(&mut f).collect();
        Ok(Self { bounds, cells })
    }

    /// Parse hand-authored rows, top row first. `.` is walkable, `#` is blocked.
    ///
    /// ```
    /// use gridpath_core::{Point, WalkMask};
    ///
    /// let mask = WalkMask::from_rows(&["..#", "..."]).unwrap();
    /// assert!(!mask.is_walkable(Point::new(2, 0)));
    /// assert!(mask.is_walkable(Point::new(2, 1)));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let actual = row.chars().count();
            if actual != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                match glyph {
                    Self::FLOOR => cells.push(true),
                    Self::WALL => cells.push(false),
                    _ => return Err(GridError::UnknownGlyph { glyph, x, y }),
                }
            }
        }
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(rows.len()).unwrap_or(i32::MAX);
        Self::from_cells(width, height, cells)
    }

    /// The grid rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid (0 inclusive, width/height exclusive).
    #[inline]
    pub fn is_inside(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Mark a cell walkable or blocked. Points outside the grid are ignored.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = walkable;
        }
    }

    /// Flat index `x + y * width`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.x as usize + p.y as usize * self.bounds.width() as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Count of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major walkability flags.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

fn checked_len(width: i32, height: i32) -> Result<usize, GridError> {
    if width <= 0 || height <= 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_fully_walkable() {
        let m = WalkMask::new(4, 3).unwrap();
        assert_eq!(m.len(), 12);
        assert_eq!(m.walkable_count(), 12);
        assert_eq!(m.bounds(), Range::sized(4, 3));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            WalkMask::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(WalkMask::new(3, -1).is_err());
        assert!(WalkMask::from_fn(-2, 2, |_| true).is_err());
    }

    #[test]
    fn from_cells_checks_length() {
        let err = WalkMask::from_cells(2, 2, vec![true; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::MaskLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn inside_is_half_open() {
        let m = WalkMask::new(5, 5).unwrap();
        assert!(m.is_inside(Point::new(0, 0)));
        assert!(m.is_inside(Point::new(4, 4)));
        assert!(!m.is_inside(Point::new(5, 0)));
        assert!(!m.is_inside(Point::new(0, 5)));
        assert!(!m.is_inside(Point::new(-1, 2)));
    }

    #[test]
    fn index_round_trip() {
        let m = WalkMask::new(7, 3).unwrap();
        let p = Point::new(5, 2);
        let i = m.index(p).unwrap();
        assert_eq!(i, 5 + 2 * 7);
        assert_eq!(m.point(i), p);
        assert_eq!(m.index(Point::new(7, 0)), None);
    }

    #[test]
    fn from_rows_parses_glyphs() {
        let m = WalkMask::from_rows(&["#..", ".#.", "..#"]).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 3);
        assert_eq!(m.walkable_count(), 6);
        assert!(!m.is_walkable(Point::new(0, 0)));
        assert!(!m.is_walkable(Point::new(1, 1)));
        assert!(m.is_walkable(Point::new(1, 0)));
    }

    #[test]
    fn from_rows_errors() {
        assert_eq!(
            WalkMask::from_rows(&["...", ".."]),
            Err(GridError::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            WalkMask::from_rows(&[".x."]),
            Err(GridError::UnknownGlyph {
                glyph: 'x',
                x: 1,
                y: 0
            })
        );
        let empty: [&str; 0] = [];
        assert!(matches!(
            WalkMask::from_rows(&empty),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn set_walkable_ignores_outside() {
        let mut m = WalkMask::new(2, 2).unwrap();
        m.set_walkable(Point::new(1, 1), false);
        m.set_walkable(Point::new(9, 9), false);
        assert!(!m.is_walkable(Point::new(1, 1)));
        assert!(!m.is_walkable(Point::new(9, 9)));
        assert_eq!(m.walkable_count(), 3);
    }

    #[test]
    fn from_fn_is_row_major() {
        let m = WalkMask::from_fn(3, 2, |p| p.x != 1).unwrap();
        assert_eq!(m.cells(), &[true, false, true, true, false, true]);
    }
}
