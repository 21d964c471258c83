//! Reusable Dioxus RSX components for the gapviz dashboard.

mod chart_panel;
mod error_display;
mod indicator_selector;
mod loading_spinner;
mod region_legend;
mod year_slider;

pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use indicator_selector::{Control, IndicatorSelector};
pub use loading_spinner::LoadingSpinner;
pub use region_legend::RegionLegend;
pub use year_slider::YearSlider;
