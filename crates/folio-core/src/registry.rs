//! Read-only registry of assets keyed by name.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Asset;

/// Mapping from asset name to [`Asset`].
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across worker threads by reference without synchronisation.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    assets: HashMap<String, Asset>,
    /// Names in lexicographic order, the canonical enumeration order.
    names: Vec<String>,
}

impl AssetRegistry {
    /// Builds a registry, rejecting duplicate names.
    pub fn from_assets(assets: impl IntoIterator<Item = Asset>) -> CoreResult<Self> {
        let mut map = HashMap::new();
        for asset in assets {
            let name = asset.name().to_string();
            if map.contains_key(&name) {
                return Err(CoreError::duplicate_asset(name));
            }
            map.insert(name, asset);
        }

        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();

        log::debug!("asset registry built with {} assets", names.len());
        Ok(Self { assets: map, names })
    }

    /// Looks up an asset by name.
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    /// Looks up an asset by name, failing when it is missing.
    pub fn asset(&self, name: &str) -> CoreResult<&Asset> {
        self.assets
            .get(name)
            .ok_or_else(|| CoreError::unknown_asset(name))
    }

    /// Returns true if the registry holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if there are no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Asset names in lexicographic order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Assets in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> + '_ {
        self.names.iter().map(move |n| &self.assets[n])
    }

    /// Latest first year among the named assets.
    pub fn latest_first_year<S: AsRef<str>>(&self, names: &[S]) -> CoreResult<i32> {
        let mut latest = i32::MIN;
        for name in names {
            latest = latest.max(self.asset(name.as_ref())?.first_year());
        }
        if latest == i32::MIN {
            return Err(CoreError::EmptyCombination);
        }
        Ok(latest)
    }

    /// Return series of the named assets, trimmed to start at their latest
    /// common first year.
    ///
    /// All slices borrow from the registry and have identical length as long
    /// as the assets share a last year.
    pub fn aligned_returns<S: AsRef<str>>(&self, names: &[S]) -> CoreResult<Vec<&[f64]>> {
        let mut out = Vec::with_capacity(names.len());
        self.aligned_returns_into(names, &mut out)?;
        Ok(out)
    }

    /// Like [`aligned_returns`](Self::aligned_returns) but writes into a
    /// reusable buffer and returns the common start year.
    pub fn aligned_returns_into<'a, S: AsRef<str>>(
        &'a self,
        names: &[S],
        out: &mut Vec<&'a [f64]>,
    ) -> CoreResult<i32> {
        out.clear();
        let start = self.latest_first_year(names)?;
        for name in names {
            let asset = self.asset(name.as_ref())?;
            let slice = asset.returns_from(start).ok_or_else(|| {
                CoreError::invalid_asset(
                    asset.name(),
                    format!("history ends in {} before {start}", asset.last_year()),
                )
            })?;
            out.push(slice);
        }
        Ok(start)
    }
}
