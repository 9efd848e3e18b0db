//! Asset combinations with allocations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Percent;
use crate::error::{CoreError, CoreResult};
use crate::registry::AssetRegistry;

/// Tolerance when checking that allocations sum to 100%.
pub const ALLOCATION_TOLERANCE: f64 = 1e-9;

/// A choice of assets and their allocations.
///
/// Invariants, checked on construction:
/// - at least one asset
/// - one percentage per asset, each within `[0, 1]`
/// - percentages sum to 100% within [`ALLOCATION_TOLERANCE`]
/// - no asset name appears twice
///
/// Deserialization goes through [`Combination::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCombination")]
pub struct Combination {
    assets: Vec<String>,
    percentages: Vec<Percent>,
}

impl Combination {
    /// Creates a validated combination.
    pub fn new(assets: Vec<String>, percentages: Vec<Percent>) -> CoreResult<Self> {
        if assets.len() != percentages.len() {
            return Err(CoreError::LengthMismatch {
                assets: assets.len(),
                percentages: percentages.len(),
            });
        }
        if assets.is_empty() {
            return Err(CoreError::EmptyCombination);
        }
        for (i, name) in assets.iter().enumerate() {
            if assets[..i].contains(name) {
                return Err(CoreError::duplicate_asset(name.clone()));
            }
        }
        for (name, p) in assets.iter().zip(&percentages) {
            if !p.is_allocation() {
                return Err(CoreError::InvalidPercent {
                    name: name.clone(),
                    value: p.value(),
                });
            }
        }
        let total: Percent = percentages.iter().sum();
        if (total.value() - 1.0).abs() > ALLOCATION_TOLERANCE {
            return Err(CoreError::AllocationSum {
                total: total.value(),
            });
        }
        Ok(Self {
            assets,
            percentages,
        })
    }

    /// Creates a combination allocating `1/k` to each of `k` assets.
    pub fn equal_weight(assets: Vec<String>) -> CoreResult<Self> {
        if assets.is_empty() {
            return Err(CoreError::EmptyCombination);
        }
        let weight = Percent::new(1.0 / assets.len() as f64);
        let percentages = vec![weight; assets.len()];
        Self::new(assets, percentages)
    }

    /// A single asset held at 100%.
    pub fn single(asset: impl Into<String>) -> Self {
        Self {
            assets: vec![asset.into()],
            percentages: vec![Percent::HUNDRED],
        }
    }

    /// Asset names, in canonical order.
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Allocations, parallel to [`assets`](Self::assets).
    pub fn percentages(&self) -> &[Percent] {
        &self.percentages
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterates `(name, allocation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Percent)> + '_ {
        self.assets
            .iter()
            .map(String::as_str)
            .zip(self.percentages.iter().copied())
    }

    /// Checks every asset name against the registry.
    pub fn validate_against(&self, registry: &AssetRegistry) -> CoreResult<()> {
        for name in &self.assets {
            registry.asset(name)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawCombination {
    assets: Vec<String>,
    percentages: Vec<Percent>,
}

impl TryFrom<RawCombination> for Combination {
    type Error = CoreError;

    fn try_from(raw: RawCombination) -> CoreResult<Self> {
        Self::new(raw.assets, raw.percentages)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, p)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{name} {p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_new_valid() {
        let c = Combination::new(
            names(&["A", "B"]),
            vec![Percent::new(0.6), Percent::new(0.4)],
        )
        .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.to_string(), "A 60% B 40%");
    }

    #[test]
    fn test_length_mismatch() {
        let err = Combination::new(names(&["A", "B"]), vec![Percent::HUNDRED]).unwrap_err();
        assert_eq!(
            err,
            CoreError::LengthMismatch {
                assets: 2,
                percentages: 1
            }
        );
    }

    #[test]
    fn test_sum_must_be_one() {
        let err = Combination::new(
            names(&["A", "B"]),
            vec![Percent::new(0.5), Percent::new(0.4)],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::AllocationSum { .. }));
    }

    #[test]
    fn test_sum_within_tolerance() {
        let c = Combination::new(
            names(&["A", "B", "C"]),
            vec![Percent::new(0.33), Percent::new(0.33), Percent::new(0.34)],
        );
        assert!(c.is_ok());
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = Combination::new(
            names(&["A", "A"]),
            vec![Percent::new(0.5), Percent::new(0.5)],
        )
        .unwrap_err();
        assert_eq!(err, CoreError::duplicate_asset("A"));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            Combination::new(vec![], vec![]).unwrap_err(),
            CoreError::EmptyCombination
        );
        assert_eq!(
            Combination::equal_weight(vec![]).unwrap_err(),
            CoreError::EmptyCombination
        );
    }

    #[test]
    fn test_equal_weight() {
        let c = Combination::equal_weight(names(&["A", "B", "C", "D", "E"])).unwrap();
        assert!(c.percentages().iter().all(|p| *p == Percent::new(0.2)));
    }

    #[test]
    fn test_single() {
        let c = Combination::single("A");
        assert_eq!(c.assets(), &["A".to_string()]);
        assert_eq!(c.percentages(), &[Percent::HUNDRED]);
    }

    #[test]
    fn test_deserialize_validates() {
        let c = Combination::new(
            names(&["A", "B"]),
            vec![Percent::new(0.6), Percent::new(0.4)],
        )
        .unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<Combination>(&json).unwrap(), c);

        for bad in [
            r#"{"assets":[],"percentages":[]}"#,
            r#"{"assets":["A","A"],"percentages":[0.5,0.5]}"#,
            r#"{"assets":["A","B"],"percentages":[0.5,0.4]}"#,
            r#"{"assets":["A"],"percentages":[0.5,0.5]}"#,
        ] {
            let err = serde_json::from_str::<Combination>(bad).unwrap_err();
            assert!(err.is_data(), "{bad}: {err}");
        }
    }
}
