//! Application entry point for the Koch curve viewer.
//!
//! This binary sets up logging and eframe/egui and delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod camera;
mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Logging goes through `env_logger`, filtered by `RUST_LOG`
/// (e.g. `RUST_LOG=fractal_core=debug` prints one line per iteration).
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Koch Curves",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
