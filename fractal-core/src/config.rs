use crate::rule::SubdivisionRule;

/// Execution settings for [`crate::engine::SubdivisionEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Run passes on the rayon thread pool.
    pub parallel: bool,
    /// Passes with fewer input segments than this run sequentially.
    pub min_parallel_segments: usize,
    /// Largest point array a pass or a run may produce.
    pub max_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_segments: 1024,
            max_points: 1 << 26,
        }
    }
}

impl Config {
    /// Settings that never touch the thread pool.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Built-in rules selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RulePreset {
    #[default]
    Koch,
    KochExact,
    QuadraticKoch,
    LevyC,
    Identity,
}

impl RulePreset {
    pub const ALL: [RulePreset; 5] = [
        RulePreset::Koch,
        RulePreset::KochExact,
        RulePreset::QuadraticKoch,
        RulePreset::LevyC,
        RulePreset::Identity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RulePreset::Koch => "Koch (0.33 / 0.29)",
            RulePreset::KochExact => "Koch (exact)",
            RulePreset::QuadraticKoch => "Quadratic Koch",
            RulePreset::LevyC => "Lévy C",
            RulePreset::Identity => "Identity",
        }
    }

    pub fn rule(self) -> SubdivisionRule {
        match self {
            RulePreset::Koch => SubdivisionRule::koch(),
            RulePreset::KochExact => SubdivisionRule::koch_exact(),
            RulePreset::QuadraticKoch => SubdivisionRule::quadratic_koch(),
            RulePreset::LevyC => SubdivisionRule::levy_c(),
            RulePreset::Identity => SubdivisionRule::identity(),
        }
    }
}
