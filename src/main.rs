use anyhow::Context;
use eframe::egui;

use fuel_economy_explorer::app::FuelEconomyApp;
use fuel_economy_explorer::config::DashboardConfig;
use fuel_economy_explorer::dashboard::Dashboard;
use fuel_economy_explorer::data::loader::DatasetLoader;
use fuel_economy_explorer::state::AppState;

fn build_app(config: &DashboardConfig) -> anyhow::Result<AppState> {
    let loader = DatasetLoader::new(&config.data_path);
    let dataset = loader
        .load()
        .with_context(|| format!("loading {}", loader.path().display()))?;
    Ok(AppState::new(Dashboard::new(dataset, config)))
}

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    let app = match build_app(&config) {
        Ok(state) => FuelEconomyApp::new(state),
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            FuelEconomyApp::failed(&e)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Fuel Economy Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
