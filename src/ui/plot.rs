use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

/// Half the height of a tick mark, in category units.
const TICK_HALF_HEIGHT: f64 = 0.35;

// ---------------------------------------------------------------------------
// Central panel – histogram above tick chart
// ---------------------------------------------------------------------------

/// Render both charts in the central panel.
pub fn charts(ui: &mut Ui, state: &AppState) {
    ui.heading("Simple Sidebar Example");
    let chart_height = (ui.available_height() / 2.0 - 40.0).max(120.0);

    fuel_cost_histogram(ui, state, chart_height);
    ui.separator();
    barrels_tick_chart(ui, state, chart_height);
}

/// Stacked histogram of annual fuel cost, one colour per vehicle class.
fn fuel_cost_histogram(ui: &mut Ui, state: &AppState, height: f32) {
    let hist = &state.update.histogram;
    ui.label(RichText::new(&hist.title).strong());

    let width = hist.bin_width();
    let mut charts: Vec<BarChart> = Vec::with_capacity(hist.series.len());
    for series in &hist.series {
        let bars: Vec<Bar> = series
            .counts
            .iter()
            .enumerate()
            .map(|(bin, &count)| Bar::new(hist.bin_center(bin), count as f64).width(width))
            .collect();
        let chart = BarChart::new(bars)
            .name(&series.group)
            .color(state.class_colors.color_for(&series.group))
            .stack_on(&charts.iter().collect::<Vec<_>>());
        charts.push(chart);
    }

    Plot::new("fuel_cost_histogram")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(hist.x_label.as_str())
        .y_axis_label("count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// One short vertical mark per distinct barrels value, one row per fuel type.
fn barrels_tick_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let ticks = &state.update.ticks;
    let categories = ticks.categories();

    Plot::new("barrels_tick_chart")
        .height(height)
        .width(ticks.width.min(ui.available_width()))
        .x_axis_label(ticks.x_label.as_str())
        .y_axis_label(ticks.y_label.as_str())
        .y_axis_formatter(move |mark, _range| {
            let row = mark.value.round();
            if (mark.value - row).abs() > 1e-6 || row < 0.0 {
                return String::new();
            }
            categories.get(row as usize).cloned().unwrap_or_default()
        })
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (row, tick_row) in ticks.rows.iter().enumerate() {
                let color = state.fuel_colors.color_for(&tick_row.category);
                let y = row as f64;
                for tick in &tick_row.ticks {
                    let points =
                        PlotPoints::from(vec![[tick.value, y - TICK_HALF_HEIGHT], [tick.value, y + TICK_HALF_HEIGHT]]);
                    plot_ui.line(Line::new(points).color(color).width(1.0));
                }
            }
        });
}
