pub mod bounds;
pub mod geometry;
pub mod line_plot;
pub mod path;
pub mod point_store;
pub mod primitives;
pub mod scale;
pub mod smoothing;
pub mod ticks;
pub mod transition;
pub mod types;

pub use bounds::{data_bounds, effective_region, plots_bounds};
pub use geometry::{
    AxisLabel, Axis, ChartGeometry, DefaultTickLabeler, GeometryLayout, GridLine, IconHandle,
    NormalizedPoint, PlotGeometry, PlotStyle, TickLabeler, ValueLabelPosition, compute_geometry,
};
pub use line_plot::{DataPointMarkerStyle, LinePlot};
pub use path::{PathCommand, PlotPath};
pub use point_store::PointStore;
pub use scale::{LinearScale, guard_range};
pub use smoothing::{cardinal_spline_path, flatten_path};
pub use ticks::{GridStep, tick_values};
pub use transition::{GeometryTransition, ease_in_out_cubic};
pub use types::{DataPoint, EdgeInsets, PlotArea, ScreenPoint, ValueRange, ValueRegion, Viewport};
