use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::MakeChoice;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and metric
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    make_selector(ui, state);
    ui.separator();

    year_slider(ui, state);
    ui.separator();

    ui.label("Average");
    ui.label(
        RichText::new(state.update.metric.to_string())
            .size(28.0)
            .strong(),
    );
}

fn make_selector(ui: &mut Ui, state: &mut AppState) {
    let n_selected = state.selection.makes.len();
    let n_total = state.dashboard.domain().makes.len();
    ui.strong(format!("Select a make:  ({n_selected}/{n_total})"));

    ui.add(egui::TextEdit::singleline(&mut state.make_search).hint_text("Search…"));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    let choices = state.visible_make_choices();
    ScrollArea::vertical()
        .max_height(ui.available_height() * 0.6)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for choice in &choices {
                let mut checked = state.selection.makes.contains(choice);
                let text = match choice {
                    MakeChoice::All => RichText::new(choice.to_string()).strong(),
                    MakeChoice::Make(name) => RichText::new(name),
                };
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_make(choice);
                }
            }
        });
}

fn year_slider(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Year range");

    let (min, max) = state.dashboard.year_bounds();
    let mut lo = *state.selection.years.start();
    let mut hi = *state.selection.years.end();

    let lo_changed = ui
        .add(egui::Slider::new(&mut lo, min..=max).text("From"))
        .changed();
    let hi_changed = ui
        .add(egui::Slider::new(&mut hi, min..=max).text("To"))
        .changed();

    if lo_changed || hi_changed {
        state.set_year_range(lo, hi);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Charts", |ui: &mut Ui| {
            if ui.button("Copy chart data as JSON").clicked() {
                copy_charts_json(ui, state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records loaded, {} visible",
            state.dashboard.dataset().len(),
            state.visible_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn copy_charts_json(ui: &Ui, state: &mut AppState) {
    match state.update.charts_json() {
        Ok(json) => {
            ui.ctx().copy_text(json);
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to serialize charts: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

/// Shown instead of the dashboard when the dataset could not be loaded.
pub fn load_error(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("Could not load data:\n{message}"))
                .color(Color32::RED)
                .heading(),
        );
    });
}
