//! Chart module - interactive line chart rendering and selection

mod line_chart;
mod scale;

pub use line_chart::LineChart;
