use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub enum FuelEconomyApp {
    Ready(Box<AppState>),
    /// The dataset failed to load; only the error is shown.
    Failed(String),
}

impl FuelEconomyApp {
    pub fn new(state: AppState) -> Self {
        FuelEconomyApp::Ready(Box::new(state))
    }

    pub fn failed(error: &anyhow::Error) -> Self {
        FuelEconomyApp::Failed(format!("{error:#}"))
    }
}

impl eframe::App for FuelEconomyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = match self {
            FuelEconomyApp::Ready(state) => state,
            FuelEconomyApp::Failed(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    panels::load_error(ui, message);
                });
                return;
            }
        };

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state);
        });

        // ---- Left side panel: filters + metric ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                plot::charts(ui, state);
            });
        });
    }
}
