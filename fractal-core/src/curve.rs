//! Turning a packed segment array into a renderable polyline.

use crate::{
    error::{FractalError, FractalResult},
    types::Point2,
};
use glam::Vec2;

/// An ordered vertex chain with line connectivity.
///
/// Built from a packed segment array whose consecutive segments share
/// endpoints: the shared copy of every joint is dropped, leaving the first
/// point followed by each segment's end point.
///
/// `field` carries one scalar per vertex for renderers that require a
/// point field. It is always `1.0` and has no geometric meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point2>,
    lines: Vec<[u32; 2]>,
    field: Vec<f32>,
}

impl Polyline {
    /// Extracts the vertex chain from packed segments.
    ///
    /// The input is read strictly left to right. Coincidence of adjacent
    /// segment endpoints is assumed, not checked.
    ///
    /// # Errors
    ///
    /// - [`FractalError::MalformedInput`] if `points` has odd length.
    /// - [`FractalError::OutputTooLarge`] if the chain has more vertices
    ///   than a `u32` line index can address.
    pub fn from_segments(points: &[Point2]) -> FractalResult<Self> {
        if points.len() % 2 != 0 {
            return Err(FractalError::malformed(points.len()));
        }
        Self::from_even(points)
    }

    // Callers guarantee an even length.
    pub(crate) fn from_even(points: &[Point2]) -> FractalResult<Self> {
        let Some(&first) = points.first() else {
            return Ok(Self::default());
        };
        let line_count = line_count(points.len())?;

        let mut vertices = Vec::with_capacity(points.len() / 2 + 1);
        vertices.push(first);
        vertices.extend(points.iter().skip(1).step_by(2).copied());

        let lines = (0..line_count).map(|i| [i, i + 1]).collect();
        let field = vec![1.0; vertices.len()];

        Ok(Self {
            vertices,
            lines,
            field,
        })
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Index pairs of consecutive vertices.
    pub fn lines(&self) -> &[[u32; 2]] {
        &self.lines
    }

    pub fn field(&self) -> &[f32] {
        &self.field
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sum of the lengths of all lines.
    pub fn length(&self) -> f32 {
        self.vertices
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Axis-aligned `(min, max)` corners, or `None` for an empty polyline.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

/// Number of lines for `points_len` packed points. The last vertex index
/// equals the line count, so it must fit in a `u32`.
fn line_count(points_len: usize) -> FractalResult<u32> {
    let segments = points_len / 2;
    u32::try_from(segments).map_err(|_| FractalError::OutputTooLarge {
        input_len: points_len,
        projected: segments.saturating_add(1),
        max: (u32::MAX as usize).saturating_add(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn koch_once() -> Vec<Vec2> {
        vec![
            v(0.0, 0.0),
            v(0.33, 0.0),
            v(0.33, 0.0),
            v(0.50, 0.29),
            v(0.50, 0.29),
            v(0.67, 0.0),
            v(0.67, 0.0),
            v(1.0, 0.0),
        ]
    }

    #[test]
    fn drops_shared_joints() {
        let line = Polyline::from_segments(&koch_once()).unwrap();

        assert_eq!(
            line.vertices(),
            &[v(0.0, 0.0), v(0.33, 0.0), v(0.50, 0.29), v(0.67, 0.0), v(1.0, 0.0)]
        );
        assert_eq!(line.lines(), &[[0, 1], [1, 2], [2, 3], [3, 4]]);
    }

    #[test]
    fn field_is_constant_per_vertex() {
        let line = Polyline::from_segments(&koch_once()).unwrap();
        assert_eq!(line.field().len(), line.len());
        assert!(line.field().iter().all(|&f| f == 1.0));
    }

    #[test]
    fn single_segment_gives_one_line() {
        let line = Polyline::from_segments(&[v(1.0, 1.0), v(2.0, 3.0)]).unwrap();
        assert_eq!(line.vertices(), &[v(1.0, 1.0), v(2.0, 3.0)]);
        assert_eq!(line.lines(), &[[0, 1]]);
    }

    #[test]
    fn empty_input_gives_empty_polyline() {
        let line = Polyline::from_segments(&[]).unwrap();
        assert!(line.is_empty());
        assert!(line.lines().is_empty());
        assert_eq!(line.bounds(), None);
        assert_eq!(line.length(), 0.0);
    }

    #[test]
    fn odd_input_is_rejected() {
        let err = Polyline::from_segments(&[v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)]).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn line_indices_must_fit_in_u32() {
        let max = u32::MAX as usize;

        assert_eq!(line_count(8), Ok(4));
        assert_eq!(line_count(2 * max), Ok(u32::MAX));
        assert!(line_count(2 * (max + 1)).unwrap_err().is_output_too_large());
    }

    #[test]
    fn length_and_bounds() {
        let line = Polyline::from_segments(&[
            v(0.0, 0.0),
            v(3.0, 4.0),
            v(3.0, 4.0),
            v(3.0, -1.0),
        ])
        .unwrap();

        assert_relative_eq!(line.length(), 10.0);
        assert_eq!(line.bounds(), Some((v(0.0, -1.0), v(3.0, 4.0))));
    }
}
