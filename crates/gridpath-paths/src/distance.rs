use gridpath_core::Point;

/// Step cost and heuristic between two cells: `min(dx, dy) + |dx - dy|`.
///
/// Algebraically this is Chebyshev distance. It is a metric, so using it as
/// both the per-edge cost and the estimate keeps the heuristic consistent for
/// any neighbor template.
#[inline]
pub fn step_cost(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_diff(b);
    dx.min(dy) + (dx - dy).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_diff(b);
    dx.max(dy)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_diff(b);
    dx + dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_cost_matches_chebyshev() {
        let origin = Point::new(3, -2);
        for y in -6..6 {
            for x in -6..6 {
                let p = Point::new(x, y);
                assert_eq!(step_cost(origin, p), chebyshev(origin, p), "at {p}");
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(step_cost(Point::ZERO, Point::ZERO), 0);
        assert_eq!(step_cost(Point::ZERO, Point::new(1, 1)), 1);
        assert_eq!(step_cost(Point::ZERO, Point::new(19, 19)), 19);
        assert_eq!(step_cost(Point::new(0, 4), Point::new(3, 0)), 4);
        assert_eq!(manhattan(Point::new(0, 4), Point::new(3, 0)), 7);
    }

    #[test]
    fn symmetric_and_triangle() {
        let a = Point::new(0, 0);
        let b = Point::new(5, 2);
        let c = Point::new(1, 7);
        assert_eq!(step_cost(a, b), step_cost(b, a));
        assert!(step_cost(a, c) <= step_cost(a, b) + step_cost(b, c));
    }
}
