//! Koch-family fractal curves by iterated line subdivision.
//!
//! Main components:
//! - [`frame`] — per-segment local coordinate frames.
//! - [`rule`] — subdivision tables (how one segment becomes K segments).
//! - [`engine`] — one data-parallel subdivision pass over a segment array.
//! - [`driver`] — repeated passes from one initial segment, and sweeps.
//! - [`buffer`] — the two generation buffers a run alternates between.
//! - [`curve`] — packed segments to a renderable polyline.
//! - [`config`] — engine settings and rule presets.
//! - [`error`] — error types.
//! - [`types`] — shared point and segment types.
//!
//! # Examples
//!
//! ```
//! use fractal_core::{
//!     driver::IterationDriver, engine::SubdivisionEngine, rule::SubdivisionRule,
//!     types::Segment,
//! };
//!
//! let driver = IterationDriver::new(SubdivisionEngine::new(SubdivisionRule::koch()));
//! let run = driver.run(Segment::unit(), 2)?;
//!
//! // 4^2 segments, 2 points each.
//! assert_eq!(run.points.len(), 32);
//! assert_eq!(run.polyline()?.len(), 17);
//! # Ok::<(), fractal_core::error::FractalError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod curve;
pub mod driver;
pub mod engine;
pub mod error;
pub mod frame;
pub mod rule;
pub mod types;
