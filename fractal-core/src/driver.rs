//! Repeated subdivision of one initial segment.
//!
//! A run looks like:
//! 1. Validate the iteration count and check that the final array
//!    (`2 * K^n` points) fits in [`Config::max_points`](crate::config::Config).
//! 2. Seed the generation buffers with the initial segment.
//! 3. For each of the `n` iterations, run one full
//!    [`SubdivisionEngine`] pass from the current generation into the
//!    scratch buffer, then promote the scratch buffer. A pass only starts
//!    once the previous one has returned.
//! 4. Hand the final generation back in a [`FractalRun`].

use crate::{
    buffer::GenerationBuffers,
    curve::Polyline,
    engine::SubdivisionEngine,
    error::{FractalError, FractalResult},
    types::{Point2, Segment},
};
use log::{debug, info, warn};

/// Output of [`IterationDriver::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct FractalRun {
    /// Packed segments of the final generation (`2 * fanout^iterations` points).
    pub points: Vec<Point2>,
    pub iterations: u32,
    pub fanout: usize,
    pub initial: Segment,
}

impl FractalRun {
    pub fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    /// Number of zero-length segments in the final generation.
    pub fn degenerate_segments(&self) -> usize {
        self.points
            .chunks_exact(2)
            .filter(|s| s[0] == s[1])
            .count()
    }

    /// Deduplicated vertex chain for rendering.
    ///
    /// # Errors
    ///
    /// [`FractalError::OutputTooLarge`] if the vertices cannot be indexed
    /// with `u32` line cells.
    pub fn polyline(&self) -> FractalResult<Polyline> {
        Polyline::from_even(&self.points)
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

/// One entry of [`IterationDriver::sweep`].
#[derive(Clone, Debug, PartialEq)]
pub struct SweepEntry {
    pub iterations: i64,
    pub result: FractalResult<FractalRun>,
}

/// Feeds each engine pass's output into the next pass.
#[derive(Clone, Debug)]
pub struct IterationDriver {
    engine: SubdivisionEngine,
}

impl IterationDriver {
    pub fn new(engine: SubdivisionEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SubdivisionEngine {
        &self.engine
    }

    /// Point count after `iterations` passes starting from one segment.
    ///
    /// # Errors
    ///
    /// [`FractalError::OutputTooLarge`] if the count overflows or exceeds
    /// the engine's `max_points`.
    pub fn projected_len(&self, iterations: u32) -> FractalResult<usize> {
        let max = self.engine.config().max_points;
        let projected = self
            .engine
            .fanout()
            .checked_pow(iterations)
            .and_then(|n| n.checked_mul(2));
        match projected {
            Some(n) if n <= max => Ok(n),
            _ => Err(FractalError::OutputTooLarge {
                input_len: 2,
                projected: projected.unwrap_or(usize::MAX),
                max,
            }),
        }
    }

    /// Subdivides `initial` exactly `iterations` times.
    ///
    /// ### Parameters
    /// - `initial` - The generation-0 segment.
    /// - `iterations` - Number of passes; `0` returns `initial` unchanged.
    ///
    /// ### Returns
    /// A [`FractalRun`] whose `points` hold `fanout^iterations` segments
    /// laid end to end, starting at `initial.start` and ending at
    /// `initial.end`.
    ///
    /// # Errors
    ///
    /// - [`FractalError::InvalidIterationCount`] for a negative count.
    /// - [`FractalError::OutputTooLarge`] if the final array would not fit.
    ///
    /// Both are detected before the first pass, so a failed run never
    /// produces partial output.
    pub fn run(&self, initial: Segment, iterations: i64) -> FractalResult<FractalRun> {
        let passes =
            u32::try_from(iterations).map_err(|_| FractalError::InvalidIterationCount(iterations))?;
        let final_len = self.projected_len(passes)?;

        let mut buffers = GenerationBuffers::seeded(&initial.to_points());
        if passes > 0 {
            let previous_len = final_len / self.engine.fanout();
            buffers.reserve_for(final_len, previous_len, passes);
        }

        for _ in 0..passes {
            let (current, next) = buffers.split();
            self.engine.apply_into(current, next)?;
            buffers.advance();
            debug!(
                "{}: iteration {}/{}: {} segments",
                self.engine.rule().name(),
                buffers.generation(),
                passes,
                buffers.current().len() / 2
            );
        }

        let run = FractalRun {
            points: buffers.into_current(),
            iterations: passes,
            fanout: self.engine.fanout(),
            initial,
        };

        let degenerate = run.degenerate_segments();
        if degenerate > 0 {
            warn!(
                "{}: {} of {} segments are degenerate after {} iterations",
                self.engine.rule().name(),
                degenerate,
                run.segment_count(),
                passes
            );
        }

        Ok(run)
    }

    /// Runs every count in `counts` independently.
    ///
    /// A failing count is reported in its own entry and does not affect
    /// the others.
    ///
    /// ### Parameters
    /// - `initial` - The generation-0 segment shared by all runs.
    /// - `counts` - Iteration counts, in the order results are returned.
    ///
    /// ### Returns
    /// One [`SweepEntry`] per count.
    pub fn sweep<I>(&self, initial: Segment, counts: I) -> Vec<SweepEntry>
    where
        I: IntoIterator<Item = i64>,
    {
        counts
            .into_iter()
            .map(|iterations| {
                let result = self.run(initial, iterations);
                match &result {
                    Ok(run) => info!(
                        "sweep: {} iterations -> {} points",
                        iterations,
                        run.points.len()
                    ),
                    Err(err) => warn!("sweep: {} iterations failed: {}", iterations, err),
                }
                SweepEntry { iterations, result }
            })
            .collect()
    }
}
