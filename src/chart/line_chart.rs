//! Interactive Line Chart Widget
//! Draws a series as a connected line using egui_plot and lets the user drag
//! across the plot to highlight the nearest sample. The highlight is a
//! vertical rule, a marker, and a floating annotation with formatted values.

use crate::chart::scale;
use crate::model::LineChartPoint;
use egui::{Color32, FontId, Rect, Rounding, Stroke};
use egui_plot::{HPlacement, Line, Plot, PlotPoint, PlotPoints, PlotTransform, Points, VLine};

const CHART_HEIGHT: f32 = 260.0;
const LINE_WIDTH: f32 = 2.0;
const RULE_WIDTH: f32 = 1.0;
const MARKER_RADIUS: f32 = 4.0;
const LINE_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

const ANNOTATION_FONT_SIZE: f32 = 12.0;
const ANNOTATION_PADDING: f32 = 4.0;
const ANNOTATION_LINE_SPACING: f32 = 4.0;
const ANNOTATION_ROUNDING: f32 = 6.0;
const ANNOTATION_BORDER_WIDTH: f32 = 0.5;
const ANNOTATION_GAP: f32 = 8.0; // clearance between marker and panel

/// A single line chart with drag-to-select sample highlighting.
///
/// The series is plotted at integer x positions in input order; the x-axis
/// shows the samples' x-keys as tick labels. `selected_x` is the x-key of the
/// highlighted sample and is only written by the drag handler (or dropped when
/// a data replacement removes the key).
pub struct LineChart {
    data: Vec<LineChartPoint>,
    selected_x: Option<String>,
    y_format: Box<dyn Fn(f64) -> String>,
    x_format: Box<dyn Fn(&str) -> String>,
    /// Whether releasing the drag clears the highlight. Off by default, which
    /// keeps the last selection visible after the gesture ends.
    pub clear_on_drag_end: bool,
    height: f32,
    id_salt: String,
}

impl LineChart {
    /// A chart over `data` with default formatters: y values stringified,
    /// x-keys shown as-is. Empty data renders an empty plot and never selects.
    pub fn new(data: Vec<LineChartPoint>) -> Self {
        Self {
            data,
            selected_x: None,
            y_format: Box::new(|y| y.to_string()),
            x_format: Box::new(|x| x.to_string()),
            clear_on_drag_end: false,
            height: CHART_HEIGHT,
            id_salt: "line_chart".to_string(),
        }
    }

    /// Formatter for the annotation's y line.
    pub fn y_format(mut self, format: impl Fn(f64) -> String + 'static) -> Self {
        self.y_format = Box::new(format);
        self
    }

    /// Formatter for the annotation's x line.
    pub fn x_format(mut self, format: impl Fn(&str) -> String + 'static) -> Self {
        self.x_format = Box::new(format);
        self
    }

    #[allow(dead_code)]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Replace the series. A selection whose x-key is no longer present is
    /// dropped so the highlight can never point at a missing sample.
    #[allow(dead_code)]
    pub fn set_data(&mut self, data: Vec<LineChartPoint>) {
        self.data = data;
        if self
            .selected_x
            .as_deref()
            .is_some_and(|key| !self.data.iter().any(|p| p.x == key))
        {
            self.selected_x = None;
        }
    }

    /// The highlighted sample, if the current selection resolves.
    pub fn selected_point(&self) -> Option<&LineChartPoint> {
        self.selected().map(|(_, point)| point)
    }

    /// The annotation's two text lines for the current selection:
    /// formatted x over formatted y.
    pub fn annotation_lines(&self) -> Option<(String, String)> {
        let (_, point) = self.selected()?;
        Some(((self.x_format)(&point.x), (self.y_format)(point.y)))
    }

    /// Snap a plot-space x (as produced by the plot's pointer inversion) to
    /// the nearest sample and select it. A position outside the plottable
    /// band domain leaves the previous selection untouched.
    pub fn update_selection_from_pointer(&mut self, plot_x: f64) {
        if let Some(index) = scale::nearest_index(plot_x, self.data.len()) {
            self.selected_x = Some(self.data[index].x.clone());
        }
    }

    fn finish_drag(&mut self) {
        if self.clear_on_drag_end {
            self.selected_x = None;
        }
    }

    /// First sample matching the selected x-key, with its plot index.
    fn selected(&self) -> Option<(usize, &LineChartPoint)> {
        let key = self.selected_x.as_deref()?;
        self.data.iter().enumerate().find(|(_, p)| p.x == key)
    }

    /// Render the chart and process the drag gesture.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        // The host may have swapped the data since the last frame.
        if self
            .selected_x
            .as_deref()
            .is_some_and(|key| !self.data.iter().any(|p| p.x == key))
        {
            self.selected_x = None;
        }

        let labels: Vec<String> = self.data.iter().map(|p| p.x.clone()).collect();

        let response = Plot::new(self.id_salt.clone())
            .height(self.height)
            // Dragging drives selection, not panning.
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(false)
            .show_y(false)
            .clamp_grid(true)
            .y_axis_position(HPlacement::Left)
            // Suppress the default numeric ticks in favor of the x-key labels.
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if mark.value >= 0.0 && mark.value.fract() == 0.0 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let points: PlotPoints = self
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, p)| [i as f64, p.y])
                    .collect();
                plot_ui.line(Line::new(points).color(LINE_COLOR).width(LINE_WIDTH));

                if let Some((index, point)) = self.selected() {
                    plot_ui.vline(
                        VLine::new(index as f64)
                            .color(Color32::GRAY)
                            .width(RULE_WIDTH),
                    );
                    plot_ui.points(
                        Points::new(vec![[index as f64, point.y]])
                            .radius(MARKER_RADIUS)
                            .filled(true)
                            .color(LINE_COLOR),
                    );
                }

                // Plot-local pointer position, inverted back into data space.
                plot_ui.pointer_coordinate()
            });

        self.draw_annotation(ui, &response.transform);

        if response.response.drag_started() || response.response.dragged() {
            if let Some(coord) = response.inner {
                self.update_selection_from_pointer(coord.x);
            }
        }
        if response.response.drag_stopped() {
            self.finish_drag();
        }

        response.response
    }

    /// Paint the floating annotation panel above the highlighted marker.
    fn draw_annotation(&self, ui: &egui::Ui, transform: &PlotTransform) {
        let Some((index, point)) = self.selected() else {
            return;
        };
        let Some((x_text, y_text)) = self.annotation_lines() else {
            return;
        };

        let anchor = transform.position_from_point(&PlotPoint::new(index as f64, point.y));

        let painter = ui.painter();
        let font = FontId::proportional(ANNOTATION_FONT_SIZE);
        let text_color = ui.visuals().strong_text_color();
        let x_line = painter.layout_no_wrap(x_text, font.clone(), text_color);
        let y_line = painter.layout_no_wrap(y_text, font, text_color);

        let inner_width = x_line.size().x.max(y_line.size().x);
        let inner_height = x_line.size().y + ANNOTATION_LINE_SPACING + y_line.size().y;
        let panel = Rect::from_min_size(
            egui::pos2(
                anchor.x - inner_width / 2.0 - ANNOTATION_PADDING,
                anchor.y
                    - MARKER_RADIUS
                    - ANNOTATION_GAP
                    - inner_height
                    - 2.0 * ANNOTATION_PADDING,
            ),
            egui::vec2(
                inner_width + 2.0 * ANNOTATION_PADDING,
                inner_height + 2.0 * ANNOTATION_PADDING,
            ),
        );

        painter.rect(
            panel,
            Rounding::same(ANNOTATION_ROUNDING),
            Color32::from_rgb(120, 120, 120).gamma_multiply(0.4),
            Stroke::new(ANNOTATION_BORDER_WIDTH, Color32::WHITE.gamma_multiply(0.3)),
        );

        let text_origin = panel.min + egui::vec2(ANNOTATION_PADDING, ANNOTATION_PADDING);
        let second_line = text_origin + egui::vec2(0.0, x_line.size().y + ANNOTATION_LINE_SPACING);
        painter.galley(text_origin, x_line, text_color);
        painter.galley(second_line, y_line, text_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_series() -> Vec<LineChartPoint> {
        vec![
            LineChartPoint::new("1730419200", 10.0),
            LineChartPoint::new("1730505600", 9.0),
            LineChartPoint::new("1730592000", 6.0),
            LineChartPoint::new("1730678400", 8.0),
        ]
    }

    #[test]
    fn selection_starts_empty() {
        let chart = LineChart::new(demo_series());
        assert_eq!(chart.selected_x, None);
        assert!(chart.selected_point().is_none());
        assert!(chart.annotation_lines().is_none());
    }

    #[test]
    fn pointer_hit_selects_nearest_sample() {
        let mut chart = LineChart::new(demo_series());
        chart.update_selection_from_pointer(2.2);
        assert_eq!(chart.selected_x.as_deref(), Some("1730592000"));
        assert_eq!(chart.selected_point().map(|p| p.y), Some(6.0));
    }

    #[test]
    fn second_hit_replaces_the_selection() {
        let mut chart = LineChart::new(demo_series());
        chart.update_selection_from_pointer(2.2);
        chart.update_selection_from_pointer(0.9);
        assert_eq!(chart.selected_x.as_deref(), Some("1730505600"));
    }

    #[test]
    fn miss_leaves_selection_unchanged() {
        let mut chart = LineChart::new(demo_series());
        chart.update_selection_from_pointer(9.0);
        assert_eq!(chart.selected_x, None);

        chart.update_selection_from_pointer(2.0);
        chart.update_selection_from_pointer(-3.0);
        assert_eq!(chart.selected_x.as_deref(), Some("1730592000"));
    }

    #[test]
    fn empty_series_never_selects() {
        let mut chart = LineChart::new(Vec::new());
        chart.update_selection_from_pointer(0.0);
        assert_eq!(chart.selected_x, None);
    }

    #[test]
    fn drag_end_retains_selection_by_default() {
        let mut chart = LineChart::new(demo_series());
        chart.update_selection_from_pointer(1.0);
        chart.finish_drag();
        assert_eq!(chart.selected_x.as_deref(), Some("1730505600"));
    }

    #[test]
    fn drag_end_clears_selection_when_opted_in() {
        let mut chart = LineChart::new(demo_series());
        chart.clear_on_drag_end = true;
        chart.update_selection_from_pointer(1.0);
        chart.finish_drag();
        assert_eq!(chart.selected_x, None);
    }

    #[test]
    fn replacing_data_drops_a_stale_selection() {
        let mut chart = LineChart::new(demo_series());
        chart.update_selection_from_pointer(2.0);

        chart.set_data(vec![
            LineChartPoint::new("1730764800", 7.0),
            LineChartPoint::new("1730851200", 5.0),
        ]);
        assert_eq!(chart.selected_x, None);
    }

    #[test]
    fn replacing_data_keeps_a_surviving_selection() {
        let mut chart = LineChart::new(demo_series());
        chart.update_selection_from_pointer(2.0);

        chart.set_data(vec![
            LineChartPoint::new("1730592000", 6.5),
            LineChartPoint::new("1730678400", 8.0),
        ]);
        assert_eq!(chart.selected_x.as_deref(), Some("1730592000"));
        assert_eq!(chart.selected_point().map(|p| p.y), Some(6.5));
    }

    #[test]
    fn annotation_formats_the_selected_sample() {
        let mut chart = LineChart::new(demo_series())
            .x_format(|x| format!("day {x}"))
            .y_format(|y| format!("speed {y} kn"));
        chart.update_selection_from_pointer(2.0);

        assert_eq!(
            chart.annotation_lines(),
            Some(("day 1730592000".to_string(), "speed 6 kn".to_string()))
        );
    }
}
