//! Interactive Koch-family curve viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the fractal state (rule
//! preset, iteration count, engine configuration, extracted polyline) and
//! implements [`eframe::App`] to render and control it through an egui UI.

use std::time::Instant;

use eframe::App;
use fractal_core::{
    config::{Config, RulePreset},
    curve::Polyline,
    driver::IterationDriver,
    engine::SubdivisionEngine,
    types::Segment,
};

use crate::camera::{Camera, MAX_ZOOM, MIN_ZOOM};

/// Highest iteration count the UI offers.
const MAX_ITERATIONS: u32 = 9;

/// Iteration counts run by the "Sweep" button.
const SWEEP_COUNTS: std::ops::RangeInclusive<i64> = 1..=5;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The fractal core: [`IterationDriver`], [`Config`], [`RulePreset`].
/// - UI state (camera, timing, last error).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The curve is recomputed only when the rule, the iteration count or
/// the configuration changes; every frame just draws the cached
/// [`Polyline`].
///
/// ### Fields
/// - `preset` - Rule currently shown.
/// - `iterations` - Number of subdivision passes.
/// - `cfg` - Engine configuration (parallelism, size limit).
/// - `initial` - Generation-0 segment.
///
/// - `curve` - Polyline extracted from the last successful run.
/// - `segments` - Segment count of the last successful run.
/// - `dirty` - Whether the curve must be recomputed before drawing.
///
/// - `camera` - Pan and zoom of the canvas.
/// - `canvas` - Drawing area of the last frame, used by "Fit".
///
/// - `last_run_ms` - Wall time of the last run, for display only.
/// - `last_error` - Message of the last failed run, shown in the status bar.
pub struct Viewer {
    preset: RulePreset,
    iterations: u32,
    cfg: Config,
    initial: Segment,

    curve: Polyline,
    segments: usize,
    dirty: bool,

    camera: Camera,
    canvas: Option<egui::Rect>,

    last_run_ms: f64,
    last_error: Option<String>,
}

impl Viewer {
    /// Creates a viewer showing the Koch curve after 3 iterations.
    ///
    /// The camera starts zoomed so the unit segment spans a good part of
    /// the default window, panned so the curve is centered.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to `eframe::run_native`.
    pub fn new() -> Self {
        let mut viewer = Self {
            preset: RulePreset::default(),
            iterations: 3,
            cfg: Config::default(),
            initial: Segment::unit(),
            curve: Polyline::default(),
            segments: 0,
            dirty: true,
            camera: Camera::new(500.0, egui::vec2(-250.0, 0.0)),
            canvas: None,
            last_run_ms: 0.0,
            last_error: None,
        };
        viewer.recompute();
        viewer
    }

    fn driver(&self) -> IterationDriver {
        IterationDriver::new(SubdivisionEngine::with_config(self.preset.rule(), self.cfg))
    }

    /// Runs the driver for the current settings and caches the polyline.
    ///
    /// On failure the previous curve stays on screen and the error message
    /// is kept for the status bar.
    fn recompute(&mut self) {
        let start = Instant::now();
        let result = self
            .driver()
            .run(self.initial, i64::from(self.iterations))
            .and_then(|run| Ok((run.polyline()?, run.segment_count())));
        match result {
            Ok((curve, segments)) => {
                self.curve = curve;
                self.segments = segments;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("run with {} iterations failed: {}", self.iterations, err);
                self.last_error = Some(err.to_string());
            }
        }
        self.last_run_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.dirty = false;
    }

    /// Runs every count in [`SWEEP_COUNTS`] and logs a one-line summary each.
    fn sweep(&mut self) {
        let entries = self.driver().sweep(self.initial, SWEEP_COUNTS);
        let failed = entries.iter().filter(|e| e.result.is_err()).count();
        for entry in &entries {
            if let Ok(Ok(line)) = entry.result.as_ref().map(|run| run.polyline()) {
                log::info!(
                    "{} x{}: {} vertices, length {:.4}",
                    self.preset.label(),
                    entry.iterations,
                    line.len(),
                    line.length()
                );
            }
        }
        self.last_error = (failed > 0).then(|| format!("{failed} sweep runs failed"));
    }

    /// Moves the iteration count by `delta`, clamped to the UI range.
    fn step_iterations(&mut self, delta: i32) {
        let next = self.iterations.saturating_add_signed(delta).min(MAX_ITERATIONS);
        if next != self.iterations {
            self.iterations = next;
            self.dirty = true;
        }
    }

    /// Centers the curve in `rect` and zooms so it fills most of it.
    fn fit_view(&mut self, rect: egui::Rect) {
        if let Some((lo, hi)) = self.curve.bounds() {
            self.camera.fit(lo, hi, rect);
        }
    }

    /// Builds the top panel UI (iteration controls, sweep, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀ Fewer").clicked() {
                    self.step_iterations(-1);
                }

                let changed = ui
                    .add(
                        egui::DragValue::new(&mut self.iterations)
                            .prefix("iterations = ")
                            .range(0..=MAX_ITERATIONS)
                            .speed(0.05),
                    )
                    .changed();
                if changed {
                    self.dirty = true;
                }

                if ui.button("More ▶").clicked() {
                    self.step_iterations(1);
                }

                ui.separator();

                if ui.button("Sweep 1..5").clicked() {
                    self.sweep();
                }

                if ui.button("Fit").clicked()
                    && let Some(rect) = self.canvas
                {
                    self.fit_view(rect);
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.camera.zoom, MIN_ZOOM..=MAX_ZOOM).logarithmic(true).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (segments, vertices, timing, errors).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("run = {:.2} ms", self.last_run_ms));
                ui.separator();
                ui.label(format!("vertices = {}", self.curve.len()));
                ui.label(format!("segments = {}", self.segments));
                if let Some(err) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, err.as_str());
                }
            });
        });
    }

    /// Builds the right-hand panel for the rule and engine settings.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Rule");
                for preset in RulePreset::ALL {
                    if ui
                        .selectable_label(self.preset == preset, preset.label())
                        .clicked()
                        && self.preset != preset
                    {
                        self.preset = preset;
                        self.dirty = true;
                    }
                }
                ui.label(format!("fan-out K = {}", self.preset.rule().fanout()));

                ui.separator();
                ui.label("Engine");
                if ui.checkbox(&mut self.cfg.parallel, "parallel").changed() {
                    self.dirty = true;
                }
                ui.horizontal(|ui| {
                    ui.label("min_parallel_segments:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut self.cfg.min_parallel_segments)
                                .range(0..=1_000_000)
                                .speed(16.0),
                        )
                        .changed()
                    {
                        self.dirty = true;
                    }
                });

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                    self.dirty = true;
                }
            });
    }

    /// Builds the central panel where the curve is drawn and navigated.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);
            self.canvas = Some(rect);

            // Pan with drag.
            if response.dragged() {
                self.camera.pan += response.drag_delta();
            }

            if response.double_clicked() {
                self.fit_view(rect);
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let anchor = response.hover_pos().unwrap_or(rect.center());
                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.camera.zoom_at(anchor, rect, factor);
            }

            let points: Vec<egui::Pos2> = self
                .curve
                .vertices()
                .iter()
                .map(|&p| self.camera.project(p, rect))
                .collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(1.0, egui::Color32::LIGHT_BLUE),
            ));

            // Mark the fixed endpoints.
            for p in [self.initial.start, self.initial.end] {
                painter.circle_filled(self.camera.project(p, rect), 3.0, egui::Color32::RED);
            }
        });
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// Controls are built first so a change made this frame is visible in
    /// the same frame's drawing.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        if self.dirty {
            self.recompute();
        }
        self.ui_central_panel(ctx);
    }
}
