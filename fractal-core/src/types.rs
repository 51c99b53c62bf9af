use glam::Vec2;

/// A point in the plane.
///
/// Bulk segment data is stored as a flat `[Point2]` where indices `2i`
/// and `2i + 1` are the start and end of segment `i`.
pub type Point2 = Vec2;

/// A directed line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// The unit segment from `(0, 0)` to `(1, 0)`.
    pub fn unit() -> Self {
        Self::new(Vec2::ZERO, Vec2::X)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn to_points(self) -> [Point2; 2] {
        [self.start, self.end]
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_segment_spans_x_axis() {
        let s = Segment::unit();
        assert_eq!(s.to_points(), [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert!(!s.is_degenerate());
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        let p = Vec2::new(2.5, -1.0);
        assert!(Segment::new(p, p).is_degenerate());
    }
}
