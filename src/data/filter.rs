use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::model::{Dataset, MakeChoice, Record};

// ---------------------------------------------------------------------------
// Filter predicate: selected makes + year interval
// ---------------------------------------------------------------------------

/// What the user picked in the side panel.
///
/// An empty `makes` set without [`MakeChoice::All`] selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub makes: BTreeSet<MakeChoice>,
    /// Inclusive on both ends. `lo > hi` matches no year.
    pub years: RangeInclusive<i64>,
}

impl FilterSelection {
    pub fn new(makes: impl IntoIterator<Item = MakeChoice>, years: RangeInclusive<i64>) -> Self {
        FilterSelection {
            makes: makes.into_iter().collect(),
            years,
        }
    }

    /// Whether the `ALL` sentinel is part of the selection.
    pub fn includes_all(&self) -> bool {
        self.makes.contains(&MakeChoice::All)
    }

    /// Both predicates, joined with AND.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.years.contains(&record.year) {
            return false;
        }
        self.includes_all() || self.makes.contains(&MakeChoice::Make(record.make.clone()))
    }
}

// ---------------------------------------------------------------------------
// FilteredView – borrowed subset of the dataset
// ---------------------------------------------------------------------------

/// Records of a [`Dataset`] that passed a [`FilterSelection`], in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Positions of the matching records in the dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }
}

/// Apply `selection` to every record of `dataset`.
pub fn filter<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect();
    FilteredView { dataset, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::rec;

    fn sample() -> Dataset {
        Dataset::new(vec![
            rec("Toyota", 2014, Some(1000.0)),
            rec("Toyota", 2015, Some(1100.0)),
            rec("Honda", 2015, Some(1200.0)),
            rec("Ford", 2016, Some(1300.0)),
            rec("Toyota", 2015, None),
        ])
    }

    #[test]
    fn all_sentinel_ignores_make() {
        let ds = sample();
        let sel = FilterSelection::new([MakeChoice::All], 2015..=2015);
        assert_eq!(filter(&ds, &sel).indices(), &[1, 2, 4]);
    }

    #[test]
    fn all_sentinel_with_full_range_keeps_everything() {
        let ds = sample();
        let sel = FilterSelection::new(
            [MakeChoice::All, MakeChoice::make("Honda")],
            2014..=2016,
        );
        assert_eq!(filter(&ds, &sel).len(), ds.len());
    }

    #[test]
    fn make_and_year_are_conjunctive() {
        let ds = sample();
        let sel = FilterSelection::new([MakeChoice::make("Toyota")], 2015..=2015);
        let view = filter(&ds, &sel);
        assert_eq!(view.indices(), &[1, 4]);
        assert!(view.records().all(|r| r.make == "Toyota" && r.year == 2015));
    }

    #[test]
    fn empty_selection_yields_empty_view() {
        let ds = sample();
        let sel = FilterSelection::new([], 2000..=2030);
        assert!(filter(&ds, &sel).is_empty());
    }

    #[test]
    fn inverted_year_range_matches_nothing() {
        let ds = sample();
        #[allow(clippy::reversed_empty_ranges)]
        let sel = FilterSelection::new([MakeChoice::All], 2016..=2014);
        assert!(filter(&ds, &sel).is_empty());
    }

    #[test]
    fn unknown_make_matches_nothing() {
        let ds = sample();
        let sel = FilterSelection::new([MakeChoice::make("Lada")], 2000..=2030);
        assert!(filter(&ds, &sel).is_empty());
    }
}
