//! The relation metric and its trait surfaces.
//!
//! The directional weight from [`min_weight`] is a quasimetric: mapping `a`
//! into `b` need not cost the same as mapping `b` into `a` when the column
//! counts differ. Taking the larger of the two directions yields a symmetric
//! distance that also satisfies the triangle inequality.

use tracing::debug;

use crate::config::MetricConfig;
use crate::error::Result;
use crate::relation::BitRelation;
use crate::search::min_weight_with;

/// A symmetric distance metric.
pub trait SymmetricMetric<T: ?Sized> {
    /// Distance type (or a fallible wrapper of it).
    type Output;

    /// Compute the (symmetric) distance between `a` and `b`.
    fn distance(&self, a: &T, b: &T) -> Self::Output;
}

/// A directed distance (quasimetric), where symmetry need not hold.
pub trait Quasimetric<T: ?Sized> {
    /// Distance type (or a fallible wrapper of it).
    type Output;

    /// Compute the directed distance from `source` to `target`.
    fn reachability(&self, source: &T, target: &T) -> Self::Output;
}

/// Distance between two relations: `max(min_weight(r1, r2), min_weight(r2, r1))`.
///
/// ```
/// use relmetric::{rel_metric, BitRelation};
///
/// let a = BitRelation::new(32, 1, vec![0x0000_0001]);
/// let b = BitRelation::new(32, 1, vec![0x0000_0000]);
/// assert_eq!(rel_metric(&a, &b).unwrap(), 1);
/// assert_eq!(rel_metric(&a, &a).unwrap(), 0);
/// ```
pub fn rel_metric(r1: &BitRelation, r2: &BitRelation) -> Result<usize> {
    RelationMetric::default().distance(r1, r2)
}

/// The relation metric bundled with its search limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelationMetric {
    config: MetricConfig,
}

impl RelationMetric {
    /// Metric that searches under `config`.
    pub fn new(config: MetricConfig) -> Self {
        Self { config }
    }

    /// Search limits in effect.
    pub fn config(&self) -> &MetricConfig {
        &self.config
    }
}

impl Quasimetric<BitRelation> for RelationMetric {
    type Output = Result<usize>;

    fn reachability(&self, source: &BitRelation, target: &BitRelation) -> Result<usize> {
        min_weight_with(&self.config, source, target)
    }
}

impl SymmetricMetric<BitRelation> for RelationMetric {
    type Output = Result<usize>;

    fn distance(&self, a: &BitRelation, b: &BitRelation) -> Result<usize> {
        let forward = self.reachability(a, b)?;
        let backward = self.reachability(b, a)?;
        debug!(forward, backward, "relation metric");
        Ok(forward.max(backward))
    }
}
