//! Model module - series data

mod point;

pub use point::{LineChartPoint, PointError, Scalar};
