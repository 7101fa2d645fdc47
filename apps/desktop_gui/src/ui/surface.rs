//! Retained render instructions. egui redraws every frame, so the surface
//! keeps the latest instructions and the panels read them back.

use job_core::{FilterOptions, Panel, RenderSurface};
use shared::domain::{SortCriteria, ALL};

#[derive(Debug, Default)]
pub struct GuiSurface {
    pub filter_options: FilterOptions,
    pub sort_options: Vec<SortCriteria>,
    pub panel: Option<Panel>,
}

impl RenderSurface for GuiSurface {
    fn show_filter_options(&mut self, options: &FilterOptions) {
        self.filter_options = options.clone();
    }

    fn show_sort_options(&mut self, options: &[SortCriteria]) {
        self.sort_options = options.to_vec();
    }

    fn show_panel(&mut self, panel: Panel) {
        self.panel = Some(panel);
    }
}

/// Current values of the filter and sort controls. They only reach the
/// controller when the matching button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub level: String,
    pub job_type: String,
    pub skill: String,
    pub sort: SortCriteria,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            level: ALL.to_string(),
            job_type: ALL.to_string(),
            skill: ALL.to_string(),
            sort: SortCriteria::None,
        }
    }
}
