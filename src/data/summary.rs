use std::fmt;

use serde::Serialize;

use super::filter::FilteredView;

/// Rounded mean annual fuel cost of a [`FilteredView`].
///
/// `None` when the view holds no fuel-cost values; rendered as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetric(pub Option<f64>);

impl SummaryMetric {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        SummaryMetric(mean(view.records().filter_map(|r| r.fuel_cost)).map(f64::round_ties_even))
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

impl fmt::Display for SummaryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.1}"),
            None => write!(f, "NaN"),
        }
    }
}

/// Arithmetic mean, skipping NaN. `None` for no values.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter, FilterSelection};
    use crate::data::model::tests::rec;
    use crate::data::model::{Dataset, MakeChoice};

    fn metric_of(ds: &Dataset) -> SummaryMetric {
        let sel = FilterSelection::new([MakeChoice::All], i64::MIN..=i64::MAX);
        SummaryMetric::from_view(&filter(ds, &sel))
    }

    #[test]
    fn mean_skips_missing_costs() {
        let ds = Dataset::new(vec![
            rec("A", 2000, Some(1000.0)),
            rec("A", 2000, None),
            rec("A", 2000, Some(2001.0)),
        ]);
        assert_eq!(metric_of(&ds).value(), Some(1500.0));
    }

    #[test]
    fn rounds_half_to_even() {
        let ds = Dataset::new(vec![rec("A", 2000, Some(1000.0)), rec("A", 2000, Some(1001.0))]);
        assert_eq!(metric_of(&ds).value(), Some(1000.0));

        let ds = Dataset::new(vec![rec("A", 2000, Some(1001.0)), rec("A", 2000, Some(1002.0))]);
        assert_eq!(metric_of(&ds).value(), Some(1002.0));
    }

    #[test]
    fn empty_view_is_undefined() {
        let m = metric_of(&Dataset::default());
        assert_eq!(m.value(), None);
        assert_eq!(m.to_string(), "NaN");
    }

    #[test]
    fn view_without_costs_is_undefined() {
        let ds = Dataset::new(vec![rec("A", 2000, None)]);
        assert_eq!(metric_of(&ds).value(), None);
    }

    #[test]
    fn displays_like_a_float() {
        assert_eq!(SummaryMetric(Some(1850.0)).to_string(), "1850.0");
    }
}
