mod callbacks;
mod chart;
mod config;
mod frame_builder;
mod json_contract;
mod label_cache;
mod validation;

pub use callbacks::{IconProviderFn, LabelFormatterFn, TickPredicateFn};
pub use chart::{LineChart, PlotId};
pub use config::{LabelStyle, LineChartConfig};
pub use frame_builder::build_render_frame;
pub use json_contract::{CHART_GEOMETRY_JSON_SCHEMA_V1, ChartGeometryJsonContractV1};
pub use label_cache::LabelCacheStats;
