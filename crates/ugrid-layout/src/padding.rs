// ABOUTME: Tiered padding lookup table.
// ABOUTME: Maps a size band (threshold, next threshold] to a fixed padding value.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TierError {
    #[error("Tier {index} has a non-finite threshold or padding")]
    NonFinite { index: usize },

    #[error("Tier thresholds must strictly increase: tier {index} has {threshold} after {previous}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        threshold: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PaddingTier {
    /// Sizes strictly above this value use `padding`
    threshold: f64,
    padding: f64,
}

/// Immutable step function from size to padding.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddingTiers {
    tiers: Vec<PaddingTier>,
}

impl PaddingTiers {
    /// Build from (threshold, padding) pairs that are already in ascending order
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self, TierError> {
        let mut tiers = Vec::with_capacity(pairs.len());
        for (index, (threshold, padding)) in pairs.into_iter().enumerate() {
            if !threshold.is_finite() || !padding.is_finite() {
                return Err(TierError::NonFinite { index });
            }
            if let Some(prev) = tiers.last().map(|t: &PaddingTier| t.threshold) {
                if threshold <= prev {
                    return Err(TierError::NotIncreasing {
                        index,
                        previous: prev,
                        threshold,
                    });
                }
            }
            tiers.push(PaddingTier { threshold, padding });
        }
        Ok(Self { tiers })
    }

    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self, TierError> {
        Self::new(pairs.iter().map(|p| (p[0], p[1])).collect())
    }

    /// Padding of the largest threshold strictly below `size`.
    ///
    /// A size equal to a threshold belongs to the band below it, so bands are
    /// (threshold_i, threshold_i+1]. Returns None at or below the first threshold.
    pub fn lookup(&self, size: f64) -> Option<f64> {
        let mut found = None;
        for tier in &self.tiers {
            if tier.threshold < size {
                found = Some(tier.padding);
            } else {
                break;
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> PaddingTiers {
        PaddingTiers::new(vec![
            (50.0, 1.0),
            (100.0, 5.0),
            (200.0, 10.0),
            (300.0, 15.0),
            (850.0, 50.0),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_reference_bands() {
        let tiers = reference();
        assert_eq!(tiers.lookup(60.0), Some(1.0));
        assert_eq!(tiers.lookup(100.0), Some(1.0));
        assert_eq!(tiers.lookup(101.0), Some(5.0));
        assert_eq!(tiers.lookup(850.0), Some(15.0));
        assert_eq!(tiers.lookup(851.0), Some(50.0));
        assert_eq!(tiers.lookup(10.0), None);
    }

    #[test]
    fn threshold_itself_is_excluded() {
        let tiers = reference();
        assert_eq!(tiers.lookup(50.0), None);
        assert_eq!(tiers.lookup(50.001), Some(1.0));
    }

    #[test]
    fn lookup_is_monotonic() {
        let tiers = reference();
        let mut last = f64::NEG_INFINITY;
        let mut size = 0.0;
        while size < 2000.0 {
            let value = tiers.lookup(size).unwrap_or(f64::NEG_INFINITY);
            assert!(value >= last, "padding dropped at size {}", size);
            last = value;
            size += 0.5;
        }
    }

    #[test]
    fn rejects_unsorted_thresholds() {
        let err = PaddingTiers::new(vec![(100.0, 5.0), (50.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            TierError::NotIncreasing {
                index: 1,
                previous: 100.0,
                threshold: 50.0
            }
        );
    }

    #[test]
    fn rejects_duplicate_thresholds() {
        assert!(matches!(
            PaddingTiers::new(vec![(50.0, 1.0), (50.0, 2.0)]),
            Err(TierError::NotIncreasing { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            PaddingTiers::new(vec![(f64::NAN, 1.0)]),
            Err(TierError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn empty_table_never_matches() {
        let tiers = PaddingTiers::new(Vec::new()).unwrap();
        assert!(tiers.is_empty());
        assert_eq!(tiers.lookup(1_000_000.0), None);
    }

    #[test]
    fn from_config_pairs() {
        let tiers = PaddingTiers::from_pairs(&[[10.0, 2.0], [20.0, 4.0]]).unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers.lookup(15.0), Some(2.0));
    }
}
