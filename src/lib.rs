//! line-chart-rs: headless line-chart geometry engine.
//!
//! Plots are mapped into a viewport, optionally smoothed with a cardinal
//! spline, decorated with tick labels and gridlines chosen by caller-supplied
//! predicates, and handed to a pluggable `Renderer` as backend-agnostic
//! draw commands.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
