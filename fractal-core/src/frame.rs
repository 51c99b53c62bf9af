//! Local affine frames built from a segment's endpoints.

use crate::types::Point2;
use glam::Vec2;

/// A local 2-D coordinate frame attached to one segment.
///
/// For a segment `p0 -> p1` the frame has:
///
/// - origin `p0`,
/// - U-axis `p1 - p0` (not normalized, so `u = 1` reaches `p1`),
/// - V-axis `perp(U) = (-U.y, U.x)`, i.e. U rotated by +90°.
///
/// Frames are cheap values built on demand for each segment and never
/// shared between segments.
///
/// When `p0 == p1` both axes are zero and every local point maps onto
/// `p0`. This is an accepted edge case, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFrame {
    origin: Point2,
    end: Point2,
    u_axis: Vec2,
    v_axis: Vec2,
}

impl LineFrame {
    /// Builds the frame for the segment `p0 -> p1`.
    ///
    /// ### Parameters
    /// - `p0` - Segment start; becomes the frame origin.
    /// - `p1` - Segment end; reached at local coordinates `(1, 0)`.
    #[inline]
    pub fn new(p0: Point2, p1: Point2) -> Self {
        let u_axis = p1 - p0;
        Self {
            origin: p0,
            end: p1,
            u_axis,
            v_axis: u_axis.perp(),
        }
    }

    /// Maps local coordinates `(u, v)` to a world-space point.
    ///
    /// The result equals `origin + u * U + v * V`. It is evaluated in the
    /// two-point form `origin * (1 - u) + end * u + v * V`, which makes
    /// `(0, 0)` and `(1, 0)` land exactly on the segment endpoints.
    /// Adjacent subdivided segments therefore share bit-identical points.
    /// A degenerate frame returns `origin` for every input.
    ///
    /// ### Parameters
    /// - `u` - Coordinate along the segment (`0` at start, `1` at end).
    /// - `v` - Coordinate along the left-hand perpendicular, in units of
    ///   the segment length.
    ///
    /// ### Returns
    /// The world-space point.
    #[inline]
    pub fn map_local(&self, u: f32, v: f32) -> Point2 {
        if self.is_degenerate() {
            return self.origin;
        }
        self.origin * (1.0 - u) + self.end * u + self.v_axis * v
    }

    /// Same as [`LineFrame::map_local`] with the coordinates packed in a vector.
    #[inline]
    pub fn map(&self, local: Vec2) -> Point2 {
        self.map_local(local.x, local.y)
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn u_axis(&self) -> Vec2 {
        self.u_axis
    }

    pub fn v_axis(&self) -> Vec2 {
        self.v_axis
    }

    /// Returns `true` if the frame has zero area (start equals end).
    pub fn is_degenerate(&self) -> bool {
        self.u_axis == Vec2::ZERO
    }
}
