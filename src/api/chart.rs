use std::cell::RefCell;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    Axis, ChartGeometry, GeometryLayout, GeometryTransition, IconHandle, LinePlot, ValueRange,
    ValueRegion, Viewport, compute_geometry, effective_region, guard_range,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::callbacks::{CallbackTickLabeler, ChartCallbacks};
use super::frame_builder::build_render_frame;
use super::label_cache::{LabelCache, LabelCacheStats};
use super::validation::{validate_config, validate_viewport, validate_visible_region};
use super::LineChartConfig;

/// Handle returned by [`LineChart::add_plot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlotId(u64);

impl PlotId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Chart container consumed by host applications.
///
/// `LineChart` owns the plots (insertion order is z-order), configuration and
/// host callbacks. Geometry is recomputed lazily after any data, size or
/// configuration change and handed to the renderer as a `RenderFrame`.
///
/// Not thread-safe: all calls are expected on the host's UI thread.
pub struct LineChart<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    config: LineChartConfig,
    callbacks: ChartCallbacks,
    plots: IndexMap<PlotId, LinePlot>,
    next_plot_id: u64,
    geometry: Option<ChartGeometry>,
    previous_geometry: Option<ChartGeometry>,
    animate_next: bool,
    transition: Option<GeometryTransition>,
    label_cache: RefCell<LabelCache>,
    recompute_count: u64,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, viewport: Viewport, config: LineChartConfig) -> ChartResult<Self> {
        let viewport = validate_viewport(viewport)?;
        let config = validate_config(config)?;

        Ok(Self {
            renderer,
            viewport,
            config,
            callbacks: ChartCallbacks::default(),
            plots: IndexMap::new(),
            next_plot_id: 0,
            geometry: None,
            previous_geometry: None,
            animate_next: false,
            transition: None,
            label_cache: RefCell::new(LabelCache::default()),
            recompute_count: 0,
        })
    }

    /// Appends a plot on top of existing ones. Nothing is drawn until the next render.
    pub fn add_plot(&mut self, plot: LinePlot) -> PlotId {
        let id = PlotId(self.next_plot_id);
        self.next_plot_id += 1;
        debug!(
            plot_id = id.0,
            name = plot.name(),
            points = plot.data().len(),
            "add plot"
        );
        self.plots.insert(id, plot);
        self.invalidate(true);
        id
    }

    /// Removes one plot, keeping the order of the others.
    pub fn remove_plot(&mut self, id: PlotId) -> Option<LinePlot> {
        let removed = self.plots.shift_remove(&id);
        if removed.is_some() {
            debug!(plot_id = id.0, "remove plot");
            self.invalidate(true);
        }
        removed
    }

    /// Drops every plot; the next render shows axes and grid only.
    pub fn clear_all_plots(&mut self) {
        let removed = self.plots.len();
        self.plots.clear();
        debug!(removed, "clear all plots");
        self.invalidate(true);
    }

    #[must_use]
    pub fn plot(&self, id: PlotId) -> Option<&LinePlot> {
        self.plots.get(&id)
    }

    /// Mutable access for restyling or swapping data; changes apply on the next recompute.
    ///
    /// Any successful call marks geometry stale and requests an animated
    /// transition, even when the plot is only read through the returned
    /// reference. Use [`LineChart::plot`] for read-only access.
    pub fn plot_mut(&mut self, id: PlotId) -> Option<&mut LinePlot> {
        if !self.plots.contains_key(&id) {
            return None;
        }
        self.invalidate(true);
        self.plots.get_mut(&id)
    }

    /// Plots in z-order.
    pub fn plots(&self) -> impl ExactSizeIterator<Item = (PlotId, &LinePlot)> + '_ {
        self.plots.iter().map(|(id, plot)| (*id, plot))
    }

    #[must_use]
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = validate_viewport(viewport)?;
        if viewport != self.viewport {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "viewport resized"
            );
            self.viewport = viewport;
            self.invalidate(false);
        }
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LineChartConfig) -> ChartResult<()> {
        self.config = validate_config(config)?;
        self.invalidate(false);
        Ok(())
    }

    /// Pins (`Some`) or releases (`None`) the mapped value range.
    pub fn set_visible_region(&mut self, region: Option<ValueRegion>) -> ChartResult<()> {
        self.config.visible_region = region.map(validate_visible_region).transpose()?;
        self.invalidate(true);
        Ok(())
    }

    /// Effective lower Y bound: explicit region, else the data minimum.
    #[must_use]
    pub fn min_vertical_bound(&self) -> f64 {
        self.effective_range(Axis::Y).min
    }

    /// Effective upper Y bound: explicit region, else the data maximum.
    #[must_use]
    pub fn max_vertical_bound(&self) -> f64 {
        self.effective_range(Axis::Y).max
    }

    #[must_use]
    pub fn min_horizontal_bound(&self) -> f64 {
        self.effective_range(Axis::X).min
    }

    #[must_use]
    pub fn max_horizontal_bound(&self) -> f64 {
        self.effective_range(Axis::X).max
    }

    pub fn set_label_formatter<F>(&mut self, axis: Axis, formatter: F)
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        let formatter = Some(Arc::new(formatter) as super::LabelFormatterFn);
        match axis {
            Axis::X => self.callbacks.x_label_formatter = formatter,
            Axis::Y => self.callbacks.y_label_formatter = formatter,
        }
        self.label_cache.borrow_mut().clear_axis(axis);
        self.invalidate(false);
    }

    pub fn clear_label_formatter(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.callbacks.x_label_formatter = None,
            Axis::Y => self.callbacks.y_label_formatter = None,
        }
        self.label_cache.borrow_mut().clear_axis(axis);
        self.invalidate(false);
    }

    /// Icon shown next to each value (Y) label; `None` results draw no icon.
    pub fn set_y_icon_provider<F>(&mut self, provider: F)
    where
        F: Fn(f64) -> Option<IconHandle> + Send + Sync + 'static,
    {
        self.callbacks.y_icon_provider = Some(Arc::new(provider));
        self.invalidate(false);
    }

    pub fn clear_y_icon_provider(&mut self) {
        self.callbacks.y_icon_provider = None;
        self.invalidate(false);
    }

    /// Decides per tick whether a label is emitted on `axis`.
    pub fn set_label_predicate<F>(&mut self, axis: Axis, predicate: F)
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        let predicate = Some(Arc::new(predicate) as super::TickPredicateFn);
        match axis {
            Axis::X => self.callbacks.x_label_predicate = predicate,
            Axis::Y => self.callbacks.y_label_predicate = predicate,
        }
        self.invalidate(false);
    }

    /// Decides per tick whether a gridline is emitted on `axis`.
    pub fn set_grid_predicate<F>(&mut self, axis: Axis, predicate: F)
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        let predicate = Some(Arc::new(predicate) as super::TickPredicateFn);
        match axis {
            Axis::X => self.callbacks.x_grid_predicate = predicate,
            Axis::Y => self.callbacks.y_grid_predicate = predicate,
        }
        self.invalidate(false);
    }

    pub fn clear_label_predicate(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.callbacks.x_label_predicate = None,
            Axis::Y => self.callbacks.y_label_predicate = None,
        }
        self.invalidate(false);
    }

    pub fn clear_grid_predicate(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.callbacks.x_grid_predicate = None,
            Axis::Y => self.callbacks.y_grid_predicate = None,
        }
        self.invalidate(false);
    }

    /// Current geometry snapshot, recomputed first when stale.
    pub fn geometry(&mut self) -> &ChartGeometry {
        let geometry = match self.geometry.take() {
            Some(geometry) => geometry,
            None => self.recompute(),
        };
        self.geometry.insert(geometry)
    }

    /// Forces a full recomputation and redraw, e.g. after the host changed
    /// something the chart cannot observe.
    pub fn reposition_plots(&mut self) -> ChartResult<()> {
        self.geometry = None;
        self.render()
    }

    /// Draws the final geometry, skipping any pending transition.
    pub fn render(&mut self) -> ChartResult<()> {
        let config = self.config;
        let frame = build_render_frame(self.geometry(), &config);
        self.transition = None;
        self.renderer.render(&frame)
    }

    /// Draws the transition frame `elapsed_secs` after the last data change.
    ///
    /// Returns `true` once the transition is finished (or when there is none),
    /// after which the host can stop scheduling frames.
    pub fn render_transition_frame(&mut self, elapsed_secs: f64) -> ChartResult<bool> {
        self.geometry();
        let config = self.config;
        let (tweened, finished) = match &self.transition {
            Some(transition) => {
                let progress = if config.animation_duration_secs > 0.0 {
                    elapsed_secs / config.animation_duration_secs
                } else {
                    1.0
                };
                let finished = !progress.is_finite() || progress >= 1.0;
                (Some(transition.frame_at(progress)), finished)
            }
            None => (None, true),
        };

        let frame = match &tweened {
            Some(geometry) => build_render_frame(geometry, &config),
            None => build_render_frame(self.geometry(), &config),
        };
        self.renderer.render(&frame)?;
        if finished {
            self.transition = None;
        }
        Ok(finished)
    }

    /// Whether a transition is waiting to be played by `render_transition_frame`.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || (self.animate_next && self.previous_geometry.is_some())
    }

    #[must_use]
    pub fn label_cache_stats(&self) -> LabelCacheStats {
        self.label_cache.borrow().stats()
    }

    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn layout(&self) -> GeometryLayout {
        GeometryLayout {
            viewport: self.viewport,
            margin: self.config.margin,
            visible_region: self.config.visible_region,
            x_grid_step: self.config.x_grid_step,
            y_grid_step: self.config.y_grid_step,
            value_label_position: self.config.value_label_position,
            label_padding_px: self.config.label_padding_px,
        }
    }

    fn effective_range(&self, axis: Axis) -> ValueRange {
        let region = effective_region(self.config.visible_region, self.plots.values());
        match axis {
            Axis::X => guard_range(region.x),
            Axis::Y => guard_range(region.y),
        }
    }

    /// Marks geometry stale. `animate` requests a tween from the last snapshot.
    fn invalidate(&mut self, animate: bool) {
        if let Some(geometry) = self.geometry.take() {
            self.previous_geometry = Some(geometry);
        }
        self.animate_next |= animate;
    }

    fn recompute(&mut self) -> ChartGeometry {
        let plots: Vec<&LinePlot> = self.plots.values().collect();
        let layout = self.layout();
        let labeler = CallbackTickLabeler {
            callbacks: &self.callbacks,
            cache: &self.label_cache,
        };
        let geometry = compute_geometry(&plots, &layout, &labeler);
        self.recompute_count += 1;

        let previous = self.previous_geometry.take();
        let animate = std::mem::take(&mut self.animate_next);
        self.transition = match previous {
            Some(previous) if animate && self.config.animation_duration_secs > 0.0 => {
                let transition = GeometryTransition::new(previous, geometry.clone());
                if !transition.is_interpolated() {
                    debug!("plot shapes changed, transition cuts over");
                }
                Some(transition)
            }
            _ => None,
        };

        trace!(
            recompute_count = self.recompute_count,
            plots = geometry.plots.len(),
            animated = self.transition.is_some(),
            "recomputed geometry"
        );
        geometry
    }
}
