//! Asset return series.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An immutable named series of annual real returns.
///
/// Returns are in percentage points and cover `first_year..=last_year`
/// without gaps. Every return is above −100%, so growth never reaches
/// zero. Deserialization goes through [`Asset::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAsset")]
pub struct Asset {
    name: String,
    symbol: String,
    first_year: i32,
    last_year: i32,
    returns: Vec<f64>,
}

impl Asset {
    /// Creates an asset whose history starts in `first_year`.
    ///
    /// The last year is derived from the number of returns.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        first_year: i32,
        returns: Vec<f64>,
    ) -> CoreResult<Self> {
        let name = name.into().trim().to_string();
        let symbol = symbol.into().trim().to_string();

        if name.is_empty() {
            return Err(CoreError::invalid_asset(name, "empty name"));
        }
        if symbol.is_empty() {
            return Err(CoreError::invalid_asset(name, "empty symbol"));
        }
        if returns.is_empty() {
            return Err(CoreError::invalid_asset(name, "no returns"));
        }
        if let Some(i) = returns.iter().position(|r| !r.is_finite()) {
            return Err(CoreError::invalid_asset(
                name,
                format!("non-finite return for {}", first_year + i as i32),
            ));
        }
        if let Some(i) = returns.iter().position(|&r| r <= -100.0) {
            return Err(CoreError::invalid_asset(
                name,
                format!(
                    "return of {}% for {} loses the whole balance",
                    returns[i],
                    first_year + i as i32
                ),
            ));
        }

        let last_year = first_year + returns.len() as i32 - 1;
        Ok(Self {
            name,
            symbol,
            first_year,
            last_year,
            returns,
        })
    }

    /// Unique asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker or other short symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// First year with a return.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year with a return.
    pub fn last_year(&self) -> i32 {
        self.last_year
    }

    /// Number of years of history.
    pub fn years(&self) -> usize {
        self.returns.len()
    }

    /// Annual returns, oldest first.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// Returns from `year` onwards, or `None` if `year` lies outside the history.
    pub fn returns_from(&self, year: i32) -> Option<&[f64]> {
        if year < self.first_year || year > self.last_year {
            return None;
        }
        Some(&self.returns[(year - self.first_year) as usize..])
    }
}

#[derive(Deserialize)]
struct RawAsset {
    name: String,
    symbol: String,
    first_year: i32,
    returns: Vec<f64>,
}

impl TryFrom<RawAsset> for Asset {
    type Error = CoreError;

    fn try_from(raw: RawAsset) -> CoreResult<Self> {
        Self::new(raw.name, raw.symbol, raw.first_year, raw.returns)
    }
}
