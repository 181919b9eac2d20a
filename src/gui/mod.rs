//! GUI module - demo screen hosting the chart

mod app;

pub use app::DemoApp;
