//! Demo Application
//! Hosts the interactive line chart inside a simple card layout and supplies
//! the demo series plus the two formatting callbacks.

use crate::chart::LineChart;
use crate::model::{LineChartPoint, PointError};
use egui::RichText;

const CARD_WIDTH: f32 = 560.0;

/// Main demo window: one framed card holding the chart.
pub struct DemoApp {
    chart: LineChart,
}

impl DemoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, PointError> {
        // Daily ship speed samples keyed by stringified Unix timestamp,
        // built through each of the three accepted literal shapes.
        let series = vec![
            LineChartPoint::from_pair(&["1730419200".into(), 10.into()])?,
            LineChartPoint::new("1730505600", 9.0),
            LineChartPoint::from_entries([("x", "1730592000".into()), ("y", 6.0.into())])?,
            LineChartPoint::new("1730678400", 8.0),
        ];

        let chart = LineChart::new(series)
            .y_format(|y| format!("Speed: {y} kn"))
            .x_format(|x| {
                x.parse::<i64>()
                    .ok()
                    .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
                    .map(|date| date.format("%m-%d").to_string())
                    .unwrap_or_default()
            });

        Ok(Self { chart })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                egui::Frame::none()
                    .rounding(8.0)
                    .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);

                        ui.label(RichText::new("Daily speed").size(16.0).strong());
                        ui.add_space(8.0);

                        self.chart.show(ui);

                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            ui.checkbox(
                                &mut self.chart.clear_on_drag_end,
                                "Clear highlight when the drag ends",
                            );
                        });

                        let status = match self.chart.selected_point() {
                            Some(point) => format!("Selected: {} kn at {}", point.y, point.x),
                            None => "Drag across the chart to inspect a sample".to_string(),
                        };
                        ui.label(RichText::new(status).size(12.0).weak());
                    });
            });
        });
    }
}
