use crate::geometry::Segment;
use crate::math::{cross_2d, Point2};

/// A triangle given by three vertices in any winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    /// Creates a new triangle.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Edges `a→b`, `b→c`, `c→a`.
    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// Signed area: positive for counter-clockwise, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        cross_2d(&(self.b - self.a), &(self.c - self.a)) * 0.5
    }

    /// Checks whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2, eps: f64) -> bool {
        let d0 = cross_2d(&(self.b - self.a), &(point - self.a));
        let d1 = cross_2d(&(self.c - self.b), &(point - self.b));
        let d2 = cross_2d(&(self.a - self.c), &(point - self.c));
        let has_neg = d0 < -eps || d1 < -eps || d2 < -eps;
        let has_pos = d0 > eps || d1 > eps || d2 > eps;
        !(has_neg && has_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ccw() -> Triangle {
        Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        )
    }

    #[test]
    fn signed_area_follows_winding() {
        let t = ccw();
        assert!((t.signed_area() - 6.0).abs() < 1e-12);
        let cw = Triangle::new(t.a, t.c, t.b);
        assert!((cw.signed_area() + 6.0).abs() < 1e-12);
    }

    #[test]
    fn contains_interior_edge_and_outside() {
        let t = ccw();
        assert!(t.contains(&Point2::new(1.0, 1.0), 1e-10));
        assert!(t.contains(&Point2::new(2.0, 0.0), 1e-10));
        assert!(!t.contains(&Point2::new(3.0, 3.0), 1e-10));
        let cw = Triangle::new(t.a, t.c, t.b);
        assert!(cw.contains(&Point2::new(1.0, 1.0), 1e-10));
    }

    #[test]
    fn edges_close_the_loop() {
        let e = ccw().edges();
        assert_eq!(e[0].p1, e[1].p0);
        assert_eq!(e[2].p1, e[0].p0);
    }
}
