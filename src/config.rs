//! Search limits.

/// Options for [`min_weight_with`](crate::min_weight_with) and
/// [`RelationMetric`](crate::RelationMetric).
///
/// The search is exhaustive and exponential in column counts, so callers that
/// accept untrusted relations should cap the number of candidate mappings.
///
/// ```
/// use relmetric::MetricConfig;
///
/// let config = MetricConfig::default().with_max_candidates(1 << 20);
/// assert_eq!(config.max_candidates, Some(1 << 20));
/// assert_eq!(MetricConfig::default().max_candidates, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricConfig {
    /// Largest mapping space a single directional search may enumerate.
    /// `None` means unlimited.
    pub max_candidates: Option<u128>,
}

impl MetricConfig {
    /// Unlimited search.
    pub const UNLIMITED: Self = Self {
        max_candidates: None,
    };

    /// Reject searches over more than `limit` mappings.
    #[must_use]
    pub fn with_max_candidates(mut self, limit: u128) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    /// Whether a space of `len` mappings (`None` = overflowed) is allowed.
    pub(crate) fn admits(&self, len: Option<u128>) -> bool {
        match (self.max_candidates, len) {
            (None, _) => true,
            (Some(limit), Some(len)) => len <= limit,
            (Some(_), None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_admits_everything() {
        assert!(MetricConfig::UNLIMITED.admits(Some(u128::MAX)));
        assert!(MetricConfig::UNLIMITED.admits(None));
    }

    #[test]
    fn test_limit_inclusive() {
        let config = MetricConfig::default().with_max_candidates(9);
        assert!(config.admits(Some(9)));
        assert!(!config.admits(Some(10)));
        assert!(!config.admits(None));
    }
}
