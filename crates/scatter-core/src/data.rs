// File: crates/scatter-core/src/data.rs
// Summary: Point and data set model for the scatter plot.
// Notes:
// - A DataSet is shared-immutable. Regeneration replaces the whole set;
//   nothing here hands out mutable access to the points.

use std::ops::Index;
use std::sync::Arc;

/// Which coordinate of a point a scale reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSelector {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn get(&self, axis: AxisSelector) -> f64 {
        match axis {
            AxisSelector::X => self.x,
            AxisSelector::Y => self.y,
        }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered, fixed-length sequence of points. Cloning is cheap (shared buffer).
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    points: Arc<[DataPoint]>,
}

impl DataSet {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points: points.into() }
    }

    pub fn empty() -> Self {
        Self { points: Arc::new([]) }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// Largest value along `axis`, or `None` for an empty set.
    pub fn max_along(&self, axis: AxisSelector) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.get(axis))
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }

    /// True when both sets share the same underlying buffer.
    pub fn ptr_eq(&self, other: &DataSet) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}

impl Default for DataSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<usize> for DataSet {
    type Output = DataPoint;

    fn index(&self, i: usize) -> &DataPoint {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<DataPoint> for DataSet {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl From<Vec<(f64, f64)>> for DataSet {
    fn from(v: Vec<(f64, f64)>) -> Self {
        v.into_iter().map(DataPoint::from).collect()
    }
}
