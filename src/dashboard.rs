use std::sync::Arc;

use serde::Serialize;

use crate::charts::{HistogramSpec, TickChartSpec};
use crate::config::DashboardConfig;
use crate::data::filter::{filter, FilterSelection};
use crate::data::model::{Dataset, FilterDomain, MakeChoice};
use crate::data::summary::SummaryMetric;

// ---------------------------------------------------------------------------
// Dashboard – the selection → results handler
// ---------------------------------------------------------------------------

/// Owns the loaded dataset and turns a [`FilterSelection`] into everything
/// the UI shows. Knows nothing about egui.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    domain: FilterDomain,
    histogram_bins: usize,
    tick_chart_width: f32,
}

/// Result of one selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardUpdate {
    pub selection: FilterSelection,
    /// The filtered view: dataset positions of matching records, in order.
    pub visible_indices: Vec<usize>,
    pub metric: SummaryMetric,
    pub histogram: HistogramSpec,
    pub ticks: TickChartSpec,
}

#[derive(Serialize)]
struct ChartPayload<'a> {
    average_fuel_cost: Option<f64>,
    histogram: &'a HistogramSpec,
    ticks: &'a TickChartSpec,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let domain = FilterDomain::from_dataset(&dataset, config.default_make_count);
        Dashboard {
            dataset,
            domain,
            histogram_bins: config.histogram_bins,
            tick_chart_width: config.tick_chart_width,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn domain(&self) -> &FilterDomain {
        &self.domain
    }

    /// Full year range of the data; `0..=0` for an empty dataset.
    pub fn year_bounds(&self) -> (i64, i64) {
        (
            self.domain.min_year.unwrap_or_default(),
            self.domain.max_year.unwrap_or_default(),
        )
    }

    /// Most frequent makes over the full year range.
    pub fn initial_selection(&self) -> FilterSelection {
        let (lo, hi) = self.year_bounds();
        FilterSelection::new(
            self.domain.default_makes.iter().map(MakeChoice::make),
            lo..=hi,
        )
    }

    pub fn on_selection(&self, selection: &FilterSelection) -> DashboardUpdate {
        let view = filter(&self.dataset, selection);
        let metric = SummaryMetric::from_view(&view);
        let histogram = HistogramSpec::build(&view, self.histogram_bins);
        let ticks = TickChartSpec::build(&view, self.tick_chart_width);

        log::debug!(
            "{} makes selected, years {}..={}: {} of {} records, average {metric}",
            selection.makes.len(),
            selection.years.start(),
            selection.years.end(),
            view.len(),
            self.dataset.len(),
        );

        DashboardUpdate {
            selection: selection.clone(),
            visible_indices: view.into_indices(),
            metric,
            histogram,
            ticks,
        }
    }
}

impl DashboardUpdate {
    /// Metric and both chart specs as pretty-printed JSON.
    pub fn charts_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ChartPayload {
            average_fuel_cost: self.metric.value(),
            histogram: &self.histogram,
            ticks: &self.ticks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::rec;

    fn dashboard() -> Dashboard {
        let mut records = Vec::new();
        for (i, make) in ["Ford", "Ford", "Ford", "BMW", "BMW", "Audi", "Kia", "Saab", "Fiat", "Fiat"]
            .into_iter()
            .enumerate()
        {
            records.push(rec(make, 2010 + i as i64, Some(1000.0 + 100.0 * i as f64)));
        }
        Dashboard::new(Arc::new(Dataset::new(records)), &DashboardConfig::default())
    }

    #[test]
    fn initial_selection_uses_top_five_and_full_range() {
        let dash = dashboard();
        let sel = dash.initial_selection();
        let expected: Vec<MakeChoice> = ["Audi", "BMW", "Fiat", "Ford", "Kia"]
            .into_iter()
            .map(MakeChoice::make)
            .collect();
        assert_eq!(sel.makes.into_iter().collect::<Vec<_>>(), expected);
        assert_eq!(sel.years, 2010..=2019);
    }

    #[test]
    fn update_carries_view_metric_and_charts() {
        let dash = dashboard();
        let sel = FilterSelection::new([MakeChoice::make("Ford")], 2010..=2011);
        let update = dash.on_selection(&sel);

        assert_eq!(update.visible_indices, vec![0, 1]);
        assert_eq!(update.metric.value(), Some(1050.0));
        assert_eq!(update.histogram.total(), 2);
        assert_eq!(update.ticks.total(), 2);
        assert_eq!(update.selection, sel);
    }

    #[test]
    fn same_selection_gives_same_update() {
        let dash = dashboard();
        let sel = dash.initial_selection();
        assert_eq!(dash.on_selection(&sel), dash.on_selection(&sel));
    }

    #[test]
    fn charts_json_reports_nan_metric_as_null() {
        let dash = dashboard();
        let update = dash.on_selection(&FilterSelection::new([], 2010..=2019));
        let json: serde_json::Value = serde_json::from_str(&update.charts_json().unwrap()).unwrap();
        assert!(json["average_fuel_cost"].is_null());
        assert_eq!(json["ticks"]["width"], 600.0);
    }
}
