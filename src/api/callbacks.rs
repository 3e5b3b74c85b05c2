use std::cell::RefCell;
use std::sync::Arc;

use crate::core::primitives::format_numeric_label;
use crate::core::{Axis, IconHandle, TickLabeler};

use super::label_cache::{LabelCache, LabelCacheKey};

pub type LabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
pub type IconProviderFn = Arc<dyn Fn(f64) -> Option<IconHandle> + Send + Sync + 'static>;
pub type TickPredicateFn = Arc<dyn Fn(f64) -> bool + Send + Sync + 'static>;

/// Host callbacks consulted for every tick. All optional.
#[derive(Clone, Default)]
pub(super) struct ChartCallbacks {
    pub(super) x_label_formatter: Option<LabelFormatterFn>,
    pub(super) y_label_formatter: Option<LabelFormatterFn>,
    pub(super) y_icon_provider: Option<IconProviderFn>,
    pub(super) x_label_predicate: Option<TickPredicateFn>,
    pub(super) x_grid_predicate: Option<TickPredicateFn>,
    pub(super) y_label_predicate: Option<TickPredicateFn>,
    pub(super) y_grid_predicate: Option<TickPredicateFn>,
}

impl ChartCallbacks {
    fn formatter(&self, axis: Axis) -> Option<&LabelFormatterFn> {
        match axis {
            Axis::X => self.x_label_formatter.as_ref(),
            Axis::Y => self.y_label_formatter.as_ref(),
        }
    }

    fn label_predicate(&self, axis: Axis) -> Option<&TickPredicateFn> {
        match axis {
            Axis::X => self.x_label_predicate.as_ref(),
            Axis::Y => self.y_label_predicate.as_ref(),
        }
    }

    fn grid_predicate(&self, axis: Axis) -> Option<&TickPredicateFn> {
        match axis {
            Axis::X => self.x_grid_predicate.as_ref(),
            Axis::Y => self.y_grid_predicate.as_ref(),
        }
    }
}

/// Adapts stored callbacks to the geometry pass, memoizing label text.
pub(super) struct CallbackTickLabeler<'a> {
    pub(super) callbacks: &'a ChartCallbacks,
    pub(super) cache: &'a RefCell<LabelCache>,
}

impl TickLabeler for CallbackTickLabeler<'_> {
    fn should_draw_label(&self, axis: Axis, value: f64) -> bool {
        self.callbacks
            .label_predicate(axis)
            .is_none_or(|predicate| predicate(value))
    }

    fn should_draw_grid(&self, axis: Axis, value: f64) -> bool {
        self.callbacks
            .grid_predicate(axis)
            .is_none_or(|predicate| predicate(value))
    }

    fn label_text(&self, axis: Axis, value: f64) -> String {
        let key = LabelCacheKey::new(axis, value);
        if let Some(cached) = self.cache.borrow_mut().get(key) {
            return cached;
        }

        let text = match self.callbacks.formatter(axis) {
            Some(formatter) => formatter(value),
            None => format_numeric_label(value),
        };
        self.cache.borrow_mut().insert(key, text.clone());
        text
    }

    fn icon(&self, axis: Axis, value: f64) -> Option<IconHandle> {
        match axis {
            Axis::X => None,
            Axis::Y => self
                .callbacks
                .y_icon_provider
                .as_ref()
                .and_then(|provider| provider(value)),
        }
    }
}
