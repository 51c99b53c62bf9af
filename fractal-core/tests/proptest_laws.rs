//! Property-based tests for the subdivision laws.
//!
//! These tests use proptest to generate random segments, rules and
//! iteration counts and check the invariants every run must satisfy.
//!
//! Run with: cargo test -p fractal-core -- proptest

use approx::assert_relative_eq;
use fractal_core::{
    config::{Config, RulePreset},
    driver::IterationDriver,
    engine::SubdivisionEngine,
    error::FractalError,
    rule::SubdivisionRule,
    types::Segment,
};
use glam::Vec2;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Vec2> {
    (-100.0..100.0f32, -100.0..100.0f32).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_segment() -> impl Strategy<Value = Segment> {
    (arb_point(), arb_point()).prop_map(|(a, b)| Segment::new(a, b))
}

fn arb_preset() -> impl Strategy<Value = RulePreset> {
    prop::sample::select(RulePreset::ALL.to_vec())
}

fn driver_for(preset: RulePreset) -> IterationDriver {
    IterationDriver::new(SubdivisionEngine::new(preset.rule()))
}

// =============================================================================
// Driver laws
// =============================================================================

proptest! {
    #[test]
    fn proptest_growth_law(seg in arb_segment(), preset in arb_preset(), n in 0u32..=4) {
        let driver = driver_for(preset);
        let k = driver.engine().fanout();
        let run = driver.run(seg, i64::from(n)).unwrap();

        prop_assert_eq!(run.points.len(), 2 * k.pow(n));
    }

    #[test]
    fn proptest_endpoints_preserved(seg in arb_segment(), preset in arb_preset(), n in 0u32..=4) {
        let run = driver_for(preset).run(seg, i64::from(n)).unwrap();

        prop_assert_eq!(run.points[0], seg.start);
        prop_assert_eq!(*run.points.last().unwrap(), seg.end);
    }

    #[test]
    fn proptest_segments_are_connected(seg in arb_segment(), preset in arb_preset(), n in 1u32..=4) {
        let run = driver_for(preset).run(seg, i64::from(n)).unwrap();
        let pts = &run.points;

        for j in (1..pts.len() - 1).step_by(2) {
            prop_assert_eq!(pts[j], pts[j + 1]);
        }
    }

    #[test]
    fn proptest_identity_law(seg in arb_segment(), preset in arb_preset()) {
        let run = driver_for(preset).run(seg, 0).unwrap();
        prop_assert_eq!(run.points, vec![seg.start, seg.end]);
    }

    #[test]
    fn proptest_negative_counts_rejected(seg in arb_segment(), n in i64::MIN..0) {
        let err = driver_for(RulePreset::Koch).run(seg, n).unwrap_err();
        prop_assert_eq!(err, FractalError::InvalidIterationCount(n));
    }

    #[test]
    fn proptest_degenerate_segment_collapses(
        x in -1.0e6..1.0e6f32,
        y in -1.0e6..1.0e6f32,
        n in 1u32..=4,
    ) {
        let p = Vec2::new(x, y);
        for preset in RulePreset::ALL {
            let run = driver_for(preset).run(Segment::new(p, p), i64::from(n)).unwrap();

            prop_assert!(run.points.iter().all(|&q| q == p), "{:?} left {}", preset, p);
            prop_assert_eq!(run.degenerate_segments(), run.segment_count());
        }
    }
}

// =============================================================================
// Engine laws
// =============================================================================

proptest! {
    #[test]
    fn proptest_parallel_matches_sequential(
        points in prop::collection::vec(arb_point(), 0..200).prop_map(|mut p| {
            if p.len() % 2 == 1 {
                p.pop();
            }
            p
        }),
        preset in arb_preset(),
    ) {
        let seq = SubdivisionEngine::with_config(preset.rule(), Config::sequential());
        let par = SubdivisionEngine::with_config(
            preset.rule(),
            Config { min_parallel_segments: 0, ..Config::default() },
        );

        let a = seq.apply(&points).unwrap();
        let b = par.apply(&points).unwrap();
        prop_assert_eq!(a.len(), points.len() * preset.rule().fanout());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_odd_length_rejected(len in (0usize..100).prop_map(|n| 2 * n + 1)) {
        let engine = SubdivisionEngine::new(SubdivisionRule::koch());
        let points = vec![Vec2::ONE; len];
        prop_assert_eq!(engine.apply(&points), Err(FractalError::MalformedInput { len }));
    }
}

// =============================================================================
// Fixed scenarios
// =============================================================================

#[test]
fn exact_koch_length_grows_by_four_thirds() {
    let driver = IterationDriver::new(SubdivisionEngine::new(SubdivisionRule::koch_exact()));

    for n in 0..=5 {
        let run = driver.run(Segment::unit(), n).unwrap();
        let expected = (4.0f32 / 3.0).powi(n as i32);
        assert_relative_eq!(run.polyline().unwrap().length(), expected, max_relative = 1e-4);
    }
}

#[test]
fn polyline_sizes_follow_fanout() {
    for preset in RulePreset::ALL {
        let driver = driver_for(preset);
        let k = driver.engine().fanout();
        let run = driver.run(Segment::unit(), 3).unwrap();
        let line = run.polyline().unwrap();

        assert_eq!(line.len(), k.pow(3) + 1);
        assert_eq!(line.lines().len(), k.pow(3));
        assert_eq!(line.field().len(), line.len());
    }
}

#[test]
fn reference_sweep_one_to_five() {
    let driver = driver_for(RulePreset::Koch);
    let entries = driver.sweep(Segment::unit(), 1..=5);

    for (entry, n) in entries.iter().zip(1u32..) {
        let run = entry.result.as_ref().unwrap();
        assert_eq!(run.points.len(), 2 * 4usize.pow(n));
        assert_eq!(run.points[0], Vec2::new(0.0, 0.0));
        assert_eq!(*run.points.last().unwrap(), Vec2::new(1.0, 0.0));
    }
}
