//! 2-D camera for the curve canvas.

use glam::Vec2;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 1.0e5;

/// Uniform scale plus a pixel offset from the canvas center.
///
/// World y points up, screen y points down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Screen pixels per world unit.
    pub zoom: f32,
    /// Offset of the world origin from the canvas center, in pixels.
    pub pan: egui::Vec2,
}

impl Camera {
    pub fn new(zoom: f32, pan: egui::Vec2) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            pan,
        }
    }

    /// World position to a screen position inside `canvas`.
    pub fn project(&self, p: Vec2, canvas: egui::Rect) -> egui::Pos2 {
        canvas.center() + self.pan + egui::vec2(p.x, -p.y) * self.zoom
    }

    pub fn unproject(&self, pos: egui::Pos2, canvas: egui::Rect) -> Vec2 {
        let d = (pos - canvas.center() - self.pan) / self.zoom;
        Vec2::new(d.x, -d.y)
    }

    /// Scales the zoom by `factor` while keeping the world point under
    /// `anchor` on the same pixel.
    pub fn zoom_at(&mut self, anchor: egui::Pos2, canvas: egui::Rect, factor: f32) {
        let pinned = self.unproject(anchor, canvas);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan += anchor - self.project(pinned, canvas);
    }

    /// Frames the box `lo..hi` in `canvas`, leaving a 5% margin per side.
    pub fn fit(&mut self, lo: Vec2, hi: Vec2, canvas: egui::Rect) {
        let size = (hi - lo).max(Vec2::splat(1e-6));
        let zoom = (canvas.width() / size.x).min(canvas.height() / size.y) * 0.9;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);

        let mid = (lo + hi) * 0.5;
        self.pan = egui::vec2(-mid.x, mid.y) * self.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn origin_sits_at_center_plus_pan() {
        let cam = Camera::new(10.0, egui::vec2(4.0, -2.0));
        let c = canvas().center();

        assert_eq!(cam.project(Vec2::ZERO, canvas()), c + egui::vec2(4.0, -2.0));
        // +y in world is up on screen.
        assert_eq!(
            cam.project(Vec2::new(1.0, 1.0), canvas()),
            c + egui::vec2(14.0, -12.0)
        );
    }

    #[test]
    fn unproject_inverts_project() {
        let cam = Camera::new(37.5, egui::vec2(-120.0, 33.0));
        for p in [Vec2::new(0.25, -3.0), Vec2::new(-8.0, 0.5)] {
            let back = cam.unproject(cam.project(p, canvas()), canvas());
            assert!(back.abs_diff_eq(p, 1e-4), "{p} came back as {back}");
        }
    }

    #[test]
    fn zoom_at_pins_anchor() {
        let mut cam = Camera::new(500.0, egui::vec2(-250.0, 0.0));
        let anchor = egui::pos2(640.0, 210.0);
        let under = cam.unproject(anchor, canvas());

        cam.zoom_at(anchor, canvas(), 1.5);

        assert_eq!(cam.zoom, 750.0);
        let moved = cam.project(under, canvas()) - anchor;
        assert!(moved.length() < 1e-2, "anchor drifted by {moved:?}");
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::new(2.0, egui::Vec2::ZERO);
        cam.zoom_at(canvas().center(), canvas(), 0.1);
        assert_eq!(cam.zoom, MIN_ZOOM);
        assert_eq!(Camera::new(1.0e9, egui::Vec2::ZERO).zoom, MAX_ZOOM);
    }

    #[test]
    fn fit_centers_box() {
        let mut cam = Camera::new(1.0, egui::Vec2::ZERO);
        let (lo, hi) = (Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.29));
        cam.fit(lo, hi, canvas());

        assert!((cam.zoom - 720.0).abs() < 1e-3);
        let mid = cam.project((lo + hi) * 0.5, canvas());
        assert!((mid - canvas().center()).length() < 1e-3);
    }
}
