use gridpath_core::Point;

/// A route from start to target, both included. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathFields")
)]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

/// Deserialized `Path` before the non-empty check.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathFields {
    points: Vec<Point>,
    cost: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<PathFields> for Path {
    type Error = &'static str;

    fn try_from(raw: PathFields) -> Result<Self, Self::Error> {
        if raw.points.is_empty() {
            return Err("a path holds at least its start point");
        }
        Ok(Self {
            points: raw.points,
            cost: raw.cost,
        })
    }
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!points.is_empty());
        Self { points, cost }
    }

    /// Coordinates in walking order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Sum of step costs along the path. Zero when start equals target.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a found path holds at least the start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Relative moves between consecutive cells.
    pub fn steps(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.windows(2).map(|w| w[1] - w[0])
    }
}

/// The normal terminal states of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found(Path),
    /// The target cannot be reached from the start with this grid and template.
    NoPath,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }

    #[inline]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let found = SearchOutcome::Found(Path::new(vec![Point::new(0, 0), Point::new(1, 0)], 1));
        let json = serde_json::to_string(&found).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, found);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(serde_json::from_str::<Path>(r#"{"points":[],"cost":0}"#).is_err());
        assert!(serde_json::from_str::<SearchOutcome>(r#"{"Found":{"points":[],"cost":0}}"#).is_err());

        let single: Path = serde_json::from_str(r#"{"points":[{"x":2,"y":3}],"cost":0}"#).unwrap();
        assert_eq!(single.start(), single.target());
    }
}
