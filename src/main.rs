//! Line Chart Demo - interactive time-series chart with drag-to-select.
//!
//! Plots a small speed-over-time series and highlights the sample nearest to
//! the pointer while dragging, with a floating annotation of formatted values.

mod chart;
mod gui;
mod model;

use eframe::egui;
use gui::DemoApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Line Chart Demo"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Line Chart Demo",
        options,
        Box::new(|cc| {
            let app = DemoApp::new(cc)?;
            Ok(Box::new(app))
        }),
    )
}
