//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The dashboard itself is only mutated by the
//! event coroutine in the app crate; components read from it and send events.

use gapviz_data::Year;
use gapviz_views::palette::RegionPalette;
use gapviz_views::{Dashboard, Selection};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset, selection and chart layers (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the five tables are still being fetched
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Current selection. Subscribes the caller to dashboard changes.
    pub fn selection(&self) -> Option<Selection> {
        self.dashboard.read().as_ref().map(|d| d.selection().clone())
    }

    /// Year slider bounds.
    pub fn year_bounds(&self) -> Option<(Year, Year)> {
        self.dashboard.read().as_ref().map(|d| d.year_bounds())
    }

    pub fn palette(&self) -> Option<RegionPalette> {
        self.dashboard.read().as_ref().map(|d| d.palette().clone())
    }

    /// Name of the country shown in the line chart.
    pub fn selected_country_name(&self) -> Option<String> {
        self.dashboard
            .read()
            .as_ref()
            .and_then(|d| d.selected_country_name().map(str::to_string))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
