use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::ChartError;

/// Fixed-length point buffer for one plot.
///
/// The length is chosen at construction and never changes. Owners fill the
/// buffer through [`PointStore::points_mut`] before handing it to a
/// [`LinePlot`](crate::core::LinePlot), which only exposes shared access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointStore {
    points: Box<[DataPoint]>,
}

impl PointStore {
    /// Allocates exactly `count` points at the origin.
    #[must_use]
    pub fn with_point_count(count: usize) -> Self {
        Self {
            points: vec![DataPoint::default(); count].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            points: points.into_boxed_slice(),
        }
    }

    /// Convenience for evenly indexed series: `x = index`, `y = value`.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(index as f64, *value))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<DataPoint> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DataPoint> + '_ {
        self.points.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[DataPoint] {
        &self.points
    }

    /// Fixed-length write access for the owner.
    pub fn points_mut(&mut self) -> &mut [DataPoint] {
        &mut self.points
    }
}

impl Index<usize> for PointStore {
    type Output = DataPoint;

    /// Panics when `index >= len()`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<DataPoint> for PointStore {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl TryFrom<i64> for PointStore {
    type Error = ChartError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        let count = usize::try_from(count).map_err(|_| ChartError::InvalidPointCount(count))?;
        Ok(Self::with_point_count(count))
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
