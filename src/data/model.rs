use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// CSV columns the dashboard reads. Any other column in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "make",
    "year",
    "fuelCost08",
    "class_summary",
    "fuel_type_summary",
    "barrels08",
];

// ---------------------------------------------------------------------------
// Record – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single vehicle row. Empty numeric cells deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub make: String,
    pub year: i64,
    /// Annual fuel cost in dollars.
    #[serde(rename = "fuelCost08")]
    pub fuel_cost: Option<f64>,
    pub class_summary: String,
    pub fuel_type_summary: String,
    /// Annual petroleum consumption in barrels.
    #[serde(rename = "barrels08")]
    pub barrels: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest model year, or `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i64, i64)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Number of records per make, keyed alphabetically.
    pub fn make_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for rec in &self.records {
            *counts.entry(rec.make.as_str()).or_default() += 1;
        }
        counts
    }
}

// ---------------------------------------------------------------------------
// MakeChoice – an entry of the manufacturer multi-select
// ---------------------------------------------------------------------------

/// One option of the manufacturer selector. `All` sorts before every make.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MakeChoice {
    /// Sentinel that disables the make predicate.
    All,
    Make(String),
}

impl MakeChoice {
    pub fn make(name: impl Into<String>) -> Self {
        MakeChoice::Make(name.into())
    }
}

impl fmt::Display for MakeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MakeChoice::All => write!(f, "ALL"),
            MakeChoice::Make(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterDomain – valid values for the two filter controls
// ---------------------------------------------------------------------------

/// Options and bounds the filter widgets are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDomain {
    /// `ALL` followed by every distinct make, sorted.
    pub makes: Vec<MakeChoice>,
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
    /// Most frequent makes, most frequent first.
    pub default_makes: Vec<String>,
}

impl FilterDomain {
    /// Derive the filter domain. Frequency ties among the default makes are
    /// broken alphabetically.
    pub fn from_dataset(dataset: &Dataset, default_count: usize) -> Self {
        let counts = dataset.make_counts();

        let makes = std::iter::once(MakeChoice::All)
            .chain(counts.keys().map(|m| MakeChoice::make(*m)))
            .collect();

        let mut by_frequency: Vec<(&str, usize)> = counts.into_iter().collect();
        // Stable sort over alphabetical input keeps ties in name order.
        by_frequency.sort_by(|a, b| b.1.cmp(&a.1));
        let default_makes = by_frequency
            .into_iter()
            .take(default_count)
            .map(|(m, _)| m.to_string())
            .collect();

        let bounds = dataset.year_bounds();
        FilterDomain {
            makes,
            min_year: bounds.map(|(lo, _)| lo),
            max_year: bounds.map(|(_, hi)| hi),
            default_makes,
        }
    }
}
