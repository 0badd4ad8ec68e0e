use std::path::PathBuf;

/// Location of the source table, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/raw/EPA_fuel_economy_summary.csv";

/// Fixed settings of the dashboard. There are no flags or config files;
/// everything comes from [`Default`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// How many of the most frequent makes are preselected.
    pub default_make_count: usize,
    pub histogram_bins: usize,
    pub tick_chart_width: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_make_count: 5,
            histogram_bins: 40,
            tick_chart_width: 600.0,
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}
