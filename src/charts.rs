//! Renderer-independent chart specifications built from a [`FilteredView`].
//!
//! The egui front end draws these with `egui_plot`; they also serialize to
//! JSON for any other renderer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::FilteredView;

// ---------------------------------------------------------------------------
// Histogram of annual fuel cost, stacked by vehicle class
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSpec {
    pub title: String,
    pub x_label: String,
    /// `bins + 1` ascending edges; empty when there is nothing to plot.
    pub bin_edges: Vec<f64>,
    /// One stacked series per vehicle class, sorted by class name.
    pub series: Vec<HistogramSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub group: String,
    /// Count per bin, same length as `bin_edges.len() - 1`.
    pub counts: Vec<usize>,
}

impl HistogramSpec {
    /// Bin the fuel costs of `view` into `bins` equal-width bins spanning the
    /// observed range. The last bin includes its upper edge.
    pub fn build(view: &FilteredView<'_>, bins: usize) -> Self {
        let values: Vec<(&str, f64)> = view
            .records()
            .filter_map(|r| Some((r.class_summary.as_str(), r.fuel_cost?)))
            .filter(|(_, v)| !v.is_nan())
            .collect();

        let mut spec = HistogramSpec {
            title: "Fuel Cost Distribution".to_string(),
            x_label: "Annual Fuel Cost".to_string(),
            bin_edges: Vec::new(),
            series: Vec::new(),
        };
        if values.is_empty() || bins == 0 {
            return spec;
        }

        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
                (lo.min(v), hi.max(v))
            });
        let span = if hi > lo { hi - lo } else { 1.0 };
        let width = span / bins as f64;
        spec.bin_edges = (0..=bins).map(|i| lo + i as f64 * width).collect();

        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (group, v) in values {
            let bin = (((v - lo) / width).floor() as usize).min(bins - 1);
            groups.entry(group).or_insert_with(|| vec![0; bins])[bin] += 1;
        }
        spec.series = groups
            .into_iter()
            .map(|(group, counts)| HistogramSeries {
                group: group.to_string(),
                counts,
            })
            .collect();
        spec
    }

    pub fn bin_count(&self) -> usize {
        self.bin_edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match self.bin_edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    pub fn bin_center(&self, bin: usize) -> f64 {
        self.bin_edges[bin] + self.bin_width() / 2.0
    }

    /// Number of values binned across all series.
    pub fn total(&self) -> usize {
        self.series.iter().flat_map(|s| &s.counts).sum()
    }
}

// ---------------------------------------------------------------------------
// Tick chart of annual barrels, one row per fuel type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickChartSpec {
    pub x_label: String,
    pub y_label: String,
    pub width: f32,
    /// Rows sorted by fuel type.
    pub rows: Vec<TickRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickRow {
    pub category: String,
    /// Distinct values in ascending order.
    pub ticks: Vec<Tick>,
}

/// One tick mark and how many records share its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub count: usize,
}

impl TickChartSpec {
    pub fn build(view: &FilteredView<'_>, width: f32) -> Self {
        let mut by_fuel: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for rec in view.records() {
            if let Some(v) = rec.barrels.filter(|v| !v.is_nan()) {
                by_fuel.entry(rec.fuel_type_summary.as_str()).or_default().push(v);
            }
        }

        let rows = by_fuel
            .into_iter()
            .map(|(category, mut values)| {
                values.sort_by(f64::total_cmp);
                let mut ticks: Vec<Tick> = Vec::new();
                for v in values {
                    match ticks.last_mut() {
                        Some(last) if last.value == v => last.count += 1,
                        _ => ticks.push(Tick { value: v, count: 1 }),
                    }
                }
                TickRow {
                    category: category.to_string(),
                    ticks,
                }
            })
            .collect();

        TickChartSpec {
            x_label: "barrels08".to_string(),
            y_label: "fuel_type_summary".to_string(),
            width,
            rows,
        }
    }

    pub fn categories(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.category.clone()).collect()
    }

    /// Number of values plotted across all rows.
    pub fn total(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| &r.ticks)
            .map(|t| t.count)
            .sum()
    }
}
