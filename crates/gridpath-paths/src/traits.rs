use gridpath_core::{Point, Range, WalkMask};

/// Read-only view of a grid as seen by the search engine.
pub trait Passable {
    /// The searchable rectangle. Node storage is sized to `bounds().len()`.
    fn bounds(&self) -> Range;

    /// Whether an agent may enter `p`. Must be `false` outside [`bounds`](Self::bounds).
    fn is_walkable(&self, p: Point) -> bool;
}

impl Passable for WalkMask {
    #[inline]
    fn bounds(&self) -> Range {
        WalkMask::bounds(self)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        WalkMask::is_walkable(self, p)
    }
}

impl<T: Passable + ?Sized> Passable for &T {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }
}
