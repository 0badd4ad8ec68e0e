use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::dashboard::{Dashboard, DashboardUpdate};
use crate::data::filter::FilterSelection;
use crate::data::model::MakeChoice;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub dashboard: Dashboard,

    /// Current widget values.
    pub selection: FilterSelection,

    /// Results for `selection` (cached until the selection changes).
    pub update: DashboardUpdate,

    /// Text typed into the make search box.
    pub make_search: String,

    /// Colours per vehicle class, stable across selections.
    pub class_colors: ColorMap,

    /// Colours per fuel type, stable across selections.
    pub fuel_colors: ColorMap,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        let records = &dashboard.dataset().records;
        let classes: BTreeSet<&str> = records.iter().map(|r| r.class_summary.as_str()).collect();
        let fuels: BTreeSet<&str> = records
            .iter()
            .map(|r| r.fuel_type_summary.as_str())
            .collect();
        let class_colors = ColorMap::new(classes);
        let fuel_colors = ColorMap::new(fuels);

        let selection = dashboard.initial_selection();
        let update = dashboard.on_selection(&selection);
        Self {
            dashboard,
            selection,
            update,
            make_search: String::new(),
            class_colors,
            fuel_colors,
            status_message: None,
        }
    }

    /// Recompute the results after a selection change.
    pub fn refresh(&mut self) {
        if self.update.selection != self.selection {
            self.update = self.dashboard.on_selection(&self.selection);
        }
    }

    /// Toggle a single entry of the make multi-select.
    pub fn toggle_make(&mut self, choice: &MakeChoice) {
        if !self.selection.makes.remove(choice) {
            self.selection.makes.insert(choice.clone());
        }
        self.refresh();
    }

    /// Select the `ALL` sentinel.
    pub fn select_all(&mut self) {
        self.selection.makes.insert(MakeChoice::All);
        self.refresh();
    }

    /// Clear the make selection.
    pub fn select_none(&mut self) {
        self.selection.makes.clear();
        self.refresh();
    }

    /// Set the year interval, clamped to the data's bounds. Moving one end
    /// past the other drags the other end along.
    pub fn set_year_range(&mut self, lo: i64, hi: i64) {
        let (min, max) = self.dashboard.year_bounds();
        let lo = lo.clamp(min, max);
        let hi = hi.clamp(min, max);
        let old_lo = *self.selection.years.start();
        let (lo, hi) = if lo <= hi {
            (lo, hi)
        } else if lo != old_lo {
            (lo, lo)
        } else {
            (hi, hi)
        };
        self.selection.years = lo..=hi;
        self.refresh();
    }

    /// Domain entries matching the search box, case-insensitively. `ALL`
    /// is always listed.
    pub fn visible_make_choices(&self) -> Vec<MakeChoice> {
        let needle = self.make_search.trim().to_lowercase();
        self.dashboard
            .domain()
            .makes
            .iter()
            .filter(|choice| match choice {
                MakeChoice::All => true,
                MakeChoice::Make(name) => needle.is_empty() || name.to_lowercase().contains(&needle),
            })
            .cloned()
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.update.visible_indices.len()
    }
}
