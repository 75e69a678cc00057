use gridpath_core::Point;

use crate::error::{Result, SearchError};

/// Ordered set of relative offsets that defines which cells are adjacent.
///
/// The engine expands neighbors in template order, so the order is part of
/// the result: two templates with the same offsets in a different order may
/// return different (equal-cost) paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborTemplate {
    offsets: Vec<Point>,
}

impl NeighborTemplate {
    const CARDINAL: [Point; 4] = [
        Point::new(0, -1),
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(-1, 0),
    ];

    // Axial coordinates: the two extra diagonals run along the same axis.
    const HEX: [Point; 6] = [
        Point::new(1, 0),
        Point::new(1, -1),
        Point::new(0, -1),
        Point::new(-1, 0),
        Point::new(-1, 1),
        Point::new(0, 1),
    ];

    /// Build a custom template.
    ///
    /// Duplicate offsets are dropped (the first occurrence keeps its place).
    /// An empty template or a `(0, 0)` offset is rejected.
    pub fn new(offsets: impl IntoIterator<Item = Point>) -> Result<Self> {
        let mut kept: Vec<Point> = Vec::new();
        for off in offsets {
            if off == Point::ZERO {
                return Err(SearchError::InvalidTemplate(
                    "offset (0, 0) would make a cell its own neighbor".into(),
                ));
            }
            if !kept.contains(&off) {
                kept.push(off);
            }
        }
        if kept.is_empty() {
            return Err(SearchError::InvalidTemplate("no offsets".into()));
        }
        Ok(Self { offsets: kept })
    }

    /// 4-directional: up, right, down, left.
    pub fn cardinal() -> Self {
        Self {
            offsets: Self::CARDINAL.to_vec(),
        }
    }

    /// 8-directional, row by row from the top-left neighbor.
    pub fn octile() -> Self {
        let mut offsets = Vec::with_capacity(8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                offsets.push(Point::new(dx, dy));
            }
        }
        Self { offsets }
    }

    /// 6-directional hex adjacency for a grid stored in axial coordinates.
    pub fn hex() -> Self {
        Self {
            offsets: Self::HEX.to_vec(),
        }
    }

    #[inline]
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false` for a constructed template.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether moving by `offset` is a single step under this template.
    #[inline]
    pub fn contains(&self, offset: Point) -> bool {
        self.offsets.contains(&offset)
    }

    /// Candidate neighbors of `p`, in template order, not bounds-checked.
    /// Offsets that would leave the `i32` coordinate space are skipped.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.offsets.iter().filter_map(move |&d| p.checked_add(d))
    }
}

impl Default for NeighborTemplate {
    fn default() -> Self {
        TemplateKind::default().template()
    }
}

/// Built-in templates, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TemplateKind {
    Cardinal,
    #[default]
    Octile,
    Hex,
}

impl TemplateKind {
    pub fn template(self) -> NeighborTemplate {
        match self {
            Self::Cardinal => NeighborTemplate::cardinal(),
            Self::Octile => NeighborTemplate::octile(),
            Self::Hex => NeighborTemplate::hex(),
        }
    }
}

impl From<TemplateKind> for NeighborTemplate {
    fn from(kind: TemplateKind) -> Self {
        kind.template()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kind_is_snake_case() {
        assert_eq!(serde_json::to_string(&TemplateKind::Cardinal).unwrap(), r#""cardinal""#);
        let k: TemplateKind = serde_json::from_str(r#""hex""#).unwrap();
        assert_eq!(k, TemplateKind::Hex);
    }
}
