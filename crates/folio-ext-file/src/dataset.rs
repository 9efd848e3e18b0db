//! Tab-separated asset return datasets.
//!
//! Layout:
//!
//! ```text
//! Name    Symbol  1970    1971    1972    ...
//! TSM     VTSMX   -16.2   -11.8   -12.7   ...
//! SCV     VISVX                   -39.6   ...
//! ```
//!
//! The header's year columns must be consecutive. Asset rows follow until
//! the first blank line. Cells are annual returns in percentage points; an
//! asset whose history starts later leaves its leading cells empty. Every
//! asset must run through the dataset's last year.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use folio_core::{Asset, AssetRegistry};

use crate::error::{FileError, FileResult};

/// The dataset compiled into this crate.
pub const BUNDLED_DATASET: &str = include_str!("../data/asset_returns.tsv");

/// Options controlling which assets are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Minimum years of history per asset.
    pub min_years: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { min_years: 30 }
    }
}

impl LoadOptions {
    /// Set the minimum history length.
    #[must_use]
    pub fn with_min_years(mut self, years: usize) -> Self {
        self.min_years = years;
        self
    }
}

/// Loads a registry from a dataset file.
pub fn load_registry(path: impl AsRef<Path>, options: &LoadOptions) -> FileResult<AssetRegistry> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| FileError::io(path, e))?;
    let registry = parse_registry(&text, options)?;
    info!(path = %path.display(), assets = registry.len(), "Loaded asset dataset");
    Ok(registry)
}

/// Parses a registry from dataset text.
pub fn parse_registry(text: &str, options: &LoadOptions) -> FileResult<AssetRegistry> {
    let body = until_blank_line(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());
    let mut records = reader.records();

    let header = records.next().ok_or(FileError::MissingHeader)??;
    let years = HeaderYears::parse(&header)?;

    let mut assets = Vec::new();
    for record in records {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let asset = parse_row(&record, line, &years, options)?;
        debug!(
            name = asset.name(),
            first_year = asset.first_year(),
            years = asset.years(),
            "Parsed asset"
        );
        assets.push(asset);
    }

    Ok(AssetRegistry::from_assets(assets)?)
}

/// Registry built from [`BUNDLED_DATASET`] with default options.
pub fn bundled_registry() -> FileResult<AssetRegistry> {
    parse_registry(BUNDLED_DATASET, &LoadOptions::default())
}

/// The prefix of `text` before its first blank line.
fn until_blank_line(text: &str) -> &str {
    let mut end = 0;
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            break;
        }
        end += line.len();
    }
    &text[..end]
}

#[derive(Debug, Clone, Copy)]
struct HeaderYears {
    first: i32,
    count: usize,
}

impl HeaderYears {
    fn parse(header: &csv::StringRecord) -> FileResult<Self> {
        let mut cells: Vec<&str> = header.iter().skip(2).map(str::trim).collect();
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        if cells.is_empty() {
            return Err(FileError::MissingHeader);
        }

        let mut first = 0;
        for (i, cell) in cells.iter().enumerate() {
            let column = i + 3;
            let year: i32 = cell.parse().map_err(|_| FileError::InvalidYear {
                column,
                value: (*cell).to_string(),
            })?;
            if i == 0 {
                first = year;
            } else {
                let expected = first + i as i32;
                if year != expected {
                    return Err(FileError::YearSequence {
                        column,
                        expected,
                        found: year,
                    });
                }
            }
        }
        Ok(Self {
            first,
            count: cells.len(),
        })
    }

    fn year_at(self, offset: usize) -> i32 {
        self.first + offset as i32
    }

    fn last(self) -> i32 {
        self.year_at(self.count - 1)
    }
}

fn parse_row(
    record: &csv::StringRecord,
    line: u64,
    years: &HeaderYears,
    options: &LoadOptions,
) -> FileResult<Asset> {
    let name = record.get(0).map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(FileError::MissingName { line });
    }
    let symbol = record.get(1).map(str::trim).unwrap_or_default();
    if symbol.is_empty() {
        return Err(FileError::MissingSymbol {
            line,
            name: name.to_string(),
        });
    }

    let cells: Vec<&str> = record.iter().skip(2).map(str::trim).collect();
    let (Some(first), Some(last)) = (
        cells.iter().position(|c| !c.is_empty()),
        cells.iter().rposition(|c| !c.is_empty()),
    ) else {
        return Err(FileError::EmptyHistory {
            line,
            name: name.to_string(),
        });
    };
    if last >= years.count {
        return Err(FileError::TooManyValues {
            line,
            name: name.to_string(),
            cells: last + 1,
            years: years.count,
        });
    }

    let mut returns = Vec::with_capacity(last - first + 1);
    for (offset, cell) in cells[first..=last].iter().enumerate() {
        let year = years.year_at(first + offset);
        if cell.is_empty() {
            return Err(FileError::InteriorGap {
                line,
                name: name.to_string(),
                year,
            });
        }
        let value: f64 = cell.parse().map_err(|_| FileError::InvalidReturn {
            line,
            name: name.to_string(),
            year,
            value: (*cell).to_string(),
        })?;
        returns.push(value);
    }

    if years.year_at(last) != years.last() {
        return Err(FileError::LastYearMismatch {
            name: name.to_string(),
            last_year: years.year_at(last),
            expected: years.last(),
        });
    }
    if returns.len() < options.min_years {
        return Err(FileError::InsufficientYears {
            name: name.to_string(),
            years: returns.len(),
            required: options.min_years,
        });
    }

    Ok(Asset::new(name, symbol, years.year_at(first), returns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> LoadOptions {
        LoadOptions::default().with_min_years(2)
    }

    #[test]
    fn test_parse_basic() {
        let text = "Name\tSymbol\t2000\t2001\t2002\nAAA\tA1\t1.5\t-2\t3\nBBB\tB1\t\t4\t5\n";
        let registry = parse_registry(text, &small()).unwrap();
        assert_eq!(registry.names(), &["AAA", "BBB"]);

        let b = registry.asset("BBB").unwrap();
        assert_eq!(b.symbol(), "B1");
        assert_eq!(b.first_year(), 2001);
        assert_eq!(b.returns(), &[4.0, 5.0]);
    }

    #[test]
    fn test_stops_at_blank_line() {
        let text = "Name\tSymbol\t2000\t2001\nAAA\tA1\t1\t2\n\nnot\ta\tdataset\n";
        let registry = parse_registry(text, &small()).unwrap();
        assert_eq!(registry.len(), 1);

        let text = "Name\tSymbol\t2000\t2001\nAAA\tA1\t1\t2\n\t\t\t\nBBB\tB1\t1\t2\n";
        assert_eq!(parse_registry(text, &small()).unwrap().len(), 1);
    }

    #[test]
    fn test_trims_names() {
        let text = "Name\tSymbol\t2000\t2001\n  AAA \t A1 \t1\t2\n";
        let registry = parse_registry(text, &small()).unwrap();
        assert_eq!(registry.asset("AAA").unwrap().symbol(), "A1");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Name\tSymbol\t2000\t2001\r\nAAA\tA1\t1\t2\r\n\r\nBBB\tB1\t1\t2\r\n";
        let registry = parse_registry(text, &small()).unwrap();
        assert_eq!(registry.asset("AAA").unwrap().returns(), &[1.0, 2.0]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_bad_year_sequence() {
        let text = "Name\tSymbol\t2000\t2002\nAAA\tA1\t1\t2\n";
        let err = parse_registry(text, &small()).unwrap_err();
        assert!(matches!(
            err,
            FileError::YearSequence {
                column: 4,
                expected: 2001,
                found: 2002
            }
        ));
    }

    #[test]
    fn test_header_not_a_year() {
        let text = "Name\tSymbol\t2000\tnext\nAAA\tA1\t1\t2\n";
        assert!(matches!(
            parse_registry(text, &small()).unwrap_err(),
            FileError::InvalidYear { column: 4, .. }
        ));
        assert!(matches!(
            parse_registry("", &small()).unwrap_err(),
            FileError::MissingHeader
        ));
        assert!(matches!(
            parse_registry("Name\tSymbol\n", &small()).unwrap_err(),
            FileError::MissingHeader
        ));
    }

    #[test]
    fn test_missing_name_and_symbol() {
        let text = "Name\tSymbol\t2000\t2001\n\tA1\t1\t2\n";
        assert!(matches!(
            parse_registry(text, &small()).unwrap_err(),
            FileError::MissingName { line: 2 }
        ));
        let text = "Name\tSymbol\t2000\t2001\nAAA\t \t1\t2\n";
        assert!(matches!(
            parse_registry(text, &small()).unwrap_err(),
            FileError::MissingSymbol { line: 2, .. }
        ));
    }

    #[test]
    fn test_interior_gap_rejected() {
        let text = "Name\tSymbol\t2000\t2001\t2002\nAAA\tA1\t1\t\t3\n";
        let err = parse_registry(text, &small()).unwrap_err();
        assert!(matches!(err, FileError::InteriorGap { year: 2001, .. }));
    }

    #[test]
    fn test_history_must_reach_last_year() {
        let text = "Name\tSymbol\t2000\t2001\t2002\nAAA\tA1\t1\t2\t\n";
        let err = parse_registry(text, &small()).unwrap_err();
        assert!(matches!(
            err,
            FileError::LastYearMismatch {
                last_year: 2001,
                expected: 2002,
                ..
            }
        ));
    }

    #[test]
    fn test_insufficient_years() {
        let text = "Name\tSymbol\t2000\t2001\t2002\nAAA\tA1\t\t\t3\n";
        let err = parse_registry(text, &small()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "AAA: 1 years of history, need at least 2"
        );
    }

    #[test]
    fn test_invalid_number() {
        let text = "Name\tSymbol\t2000\t2001\nAAA\tA1\t1\tx\n";
        let err = parse_registry(text, &small()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: AAA 2001: 'x' is not a number");
    }

    #[test]
    fn test_duplicate_name() {
        let text = "Name\tSymbol\t2000\t2001\nAAA\tA1\t1\t2\nAAA\tA2\t3\t4\n";
        let err = parse_registry(text, &small()).unwrap_err();
        assert!(matches!(err, FileError::Core(_)));
        assert!(err.to_string().contains("AAA"));
    }

    #[test]
    fn test_too_many_values() {
        let text = "Name\tSymbol\t2000\t2001\nAAA\tA1\t1\t2\t3\n";
        assert!(matches!(
            parse_registry(text, &small()).unwrap_err(),
            FileError::TooManyValues { cells: 3, years: 2, .. }
        ));
    }

    #[test]
    fn test_bundled_dataset() {
        let registry = bundled_registry().unwrap();
        assert_eq!(registry.len(), 12);
        let tsm = registry.asset("TSM").unwrap();
        assert_eq!(tsm.first_year(), 1970);
        assert_eq!(tsm.last_year(), 2019);
        assert_eq!(registry.asset("EM").unwrap().first_year(), 1988);
        assert!(registry.iter().all(|a| a.last_year() == 2019));
    }
}
