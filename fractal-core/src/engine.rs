//! One subdivision pass over a packed segment array.
//!
//! Every input segment `i` owns the output block of `2K` points starting
//! at `2K * i`. A segment's work reads only its own two input points and
//! writes only its own block, so the pass is a plain parallel map and its
//! output does not depend on how the work was scheduled.

use crate::{
    config::Config,
    error::{FractalError, FractalResult},
    frame::LineFrame,
    rule::SubdivisionRule,
    types::Point2,
};
use glam::Vec2;
use rayon::prelude::*;

/// Applies a fixed [`SubdivisionRule`] to packed segment arrays.
#[derive(Clone, Debug)]
pub struct SubdivisionEngine {
    rule: SubdivisionRule,
    cfg: Config,
}

impl SubdivisionEngine {
    pub fn new(rule: SubdivisionRule) -> Self {
        Self::with_config(rule, Config::default())
    }

    pub fn with_config(rule: SubdivisionRule, cfg: Config) -> Self {
        Self { rule, cfg }
    }

    pub fn rule(&self) -> &SubdivisionRule {
        &self.rule
    }

    pub fn fanout(&self) -> usize {
        self.rule.fanout()
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Number of points one pass produces from `input_len` points.
    ///
    /// # Errors
    ///
    /// - [`FractalError::MalformedInput`] if `input_len` is odd.
    /// - [`FractalError::OutputTooLarge`] if the result overflows or
    ///   exceeds [`Config::max_points`].
    pub fn output_len(&self, input_len: usize) -> FractalResult<usize> {
        if input_len % 2 != 0 {
            return Err(FractalError::malformed(input_len));
        }
        let projected = input_len.checked_mul(self.fanout());
        match projected {
            Some(n) if n <= self.cfg.max_points => Ok(n),
            _ => Err(FractalError::OutputTooLarge {
                input_len,
                projected: projected.unwrap_or(usize::MAX),
                max: self.cfg.max_points,
            }),
        }
    }

    /// Subdivides every segment of `points` into a freshly allocated array.
    ///
    /// ### Parameters
    /// - `points` - Packed segments; `points[2i]` and `points[2i + 1]` are
    ///   the start and end of segment `i`. Never modified.
    ///
    /// ### Returns
    /// `K` times as many segments, in input order, each segment's block
    /// in rule order.
    ///
    /// # Errors
    ///
    /// See [`SubdivisionEngine::output_len`]. Nothing is allocated on error.
    pub fn apply(&self, points: &[Point2]) -> FractalResult<Vec<Point2>> {
        let mut out = Vec::new();
        self.apply_into(points, &mut out)?;
        Ok(out)
    }

    /// Like [`SubdivisionEngine::apply`], but writes into `out`.
    ///
    /// `out` is cleared and resized to the output length, reusing its
    /// allocation when it is large enough. On error `out` is left untouched.
    ///
    /// # Errors
    ///
    /// See [`SubdivisionEngine::output_len`].
    pub fn apply_into(&self, points: &[Point2], out: &mut Vec<Point2>) -> FractalResult<()> {
        let out_len = self.output_len(points.len())?;

        out.clear();
        out.resize(out_len, Vec2::ZERO);

        let block = 2 * self.fanout();
        let local = self.rule.local_points();
        let segments = points.len() / 2;

        if self.cfg.parallel && segments >= self.cfg.min_parallel_segments {
            points
                .par_chunks_exact(2)
                .zip(out.par_chunks_exact_mut(block))
                .for_each(|(seg, dst)| subdivide_segment(seg[0], seg[1], local, dst));
        } else {
            points
                .chunks_exact(2)
                .zip(out.chunks_exact_mut(block))
                .for_each(|(seg, dst)| subdivide_segment(seg[0], seg[1], local, dst));
        }

        Ok(())
    }
}

/// Writes the rule's local points, mapped through the frame of `p0 -> p1`,
/// into `dst`. `dst` and `local` have the same length.
#[inline]
fn subdivide_segment(p0: Point2, p1: Point2, local: &[Vec2], dst: &mut [Point2]) {
    let frame = LineFrame::new(p0, p1);
    for (d, &l) in dst.iter_mut().zip(local) {
        *d = frame.map(l);
    }
}
