//! Subdivision rules: how one segment turns into K segments.
//!
//! A rule is a fixed table of K segments written in the local frame of
//! the segment being replaced (see [`crate::frame::LineFrame`]). The
//! table must be *closed*:
//!
//! - consecutive entries share an endpoint, so the replacement is one
//!   connected chain;
//! - the chain starts at `(0, 0)` and ends at `(1, 0)`, so every
//!   iteration keeps the endpoints of the segment it replaces.

use crate::error::{FractalError, FractalResult};
use glam::Vec2;

/// An immutable, validated subdivision table.
#[derive(Clone, Debug, PartialEq)]
pub struct SubdivisionRule {
    name: String,
    segments: Vec<[Vec2; 2]>,
}

impl SubdivisionRule {
    /// Builds a rule from explicit local-coordinate segment pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FractalError::InvalidRule`] if the table is empty, holds
    /// non-finite coordinates, is not connected, or does not run from
    /// `(0, 0)` to `(1, 0)`.
    pub fn new(name: impl Into<String>, segments: Vec<[Vec2; 2]>) -> FractalResult<Self> {
        validate_closure(&segments)?;
        Ok(Self {
            name: name.into(),
            segments,
        })
    }

    /// Builds a rule from a chain of local vertices.
    ///
    /// `vertices[i] -> vertices[i + 1]` becomes entry `i`, so a chain of
    /// `K + 1` vertices gives a rule with fan-out `K`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SubdivisionRule::new`]; a chain of fewer than
    /// two vertices is rejected as empty.
    pub fn from_polyline(name: impl Into<String>, vertices: &[Vec2]) -> FractalResult<Self> {
        let segments = vertices.windows(2).map(|w| [w[0], w[1]]).collect();
        Self::new(name, segments)
    }

    /// The Koch generator with two-digit constants:
    /// `0 -> 0.33 -> (0.50, 0.29) -> 0.67 -> 1`.
    pub fn koch() -> Self {
        Self::builtin(
            "koch",
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(0.33, 0.0),
                Vec2::new(0.50, 0.29),
                Vec2::new(0.67, 0.0),
                Vec2::new(1.0, 0.0),
            ],
        )
    }

    /// The Koch generator with exact thirds and an equilateral apex.
    pub fn koch_exact() -> Self {
        let apex = 3.0_f32.sqrt() / 6.0;
        Self::builtin(
            "koch-exact",
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0 / 3.0, 0.0),
                Vec2::new(0.5, apex),
                Vec2::new(2.0 / 3.0, 0.0),
                Vec2::new(1.0, 0.0),
            ],
        )
    }

    /// Quadratic Koch curve (type 1): a square bump on the middle third.
    pub fn quadratic_koch() -> Self {
        let third = 1.0 / 3.0;
        Self::builtin(
            "quadratic-koch",
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(third, 0.0),
                Vec2::new(third, third),
                Vec2::new(2.0 * third, third),
                Vec2::new(2.0 * third, 0.0),
                Vec2::new(1.0, 0.0),
            ],
        )
    }

    /// Lévy C curve: each segment becomes the two legs of a right isosceles triangle.
    pub fn levy_c() -> Self {
        Self::builtin(
            "levy-c",
            &[Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.0)],
        )
    }

    /// Fan-out 1 rule that copies every segment unchanged.
    pub fn identity() -> Self {
        Self::builtin("identity", &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)])
    }

    // Built-in tables are closed by construction.
    fn builtin(name: &str, vertices: &[Vec2]) -> Self {
        Self {
            name: name.to_owned(),
            segments: vertices.windows(2).map(|w| [w[0], w[1]]).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of output segments per input segment (K).
    #[inline]
    pub fn fanout(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[[Vec2; 2]] {
        &self.segments
    }

    /// All `2K` local points in output order: start and end of entry 0,
    /// then entry 1, and so on.
    #[inline]
    pub fn local_points(&self) -> &[Vec2] {
        self.segments.as_flattened()
    }
}

impl Default for SubdivisionRule {
    fn default() -> Self {
        Self::koch()
    }
}

fn validate_closure(segments: &[[Vec2; 2]]) -> FractalResult<()> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return Err(FractalError::invalid_rule("rule has no segments"));
    };

    if let Some(i) = segments.iter().position(|s| !s[0].is_finite() || !s[1].is_finite()) {
        return Err(FractalError::invalid_rule(format!(
            "entry {i} has non-finite coordinates"
        )));
    }

    if first[0] != Vec2::ZERO {
        return Err(FractalError::invalid_rule(format!(
            "chain starts at {} instead of (0, 0)",
            first[0]
        )));
    }
    if last[1] != Vec2::X {
        return Err(FractalError::invalid_rule(format!(
            "chain ends at {} instead of (1, 0)",
            last[1]
        )));
    }

    for (i, pair) in segments.windows(2).enumerate() {
        if pair[0][1] != pair[1][0] {
            return Err(FractalError::invalid_rule(format!(
                "entries {} and {} are not connected ({} != {})",
                i,
                i + 1,
                pair[0][1],
                pair[1][0]
            )));
        }
    }

    Ok(())
}
