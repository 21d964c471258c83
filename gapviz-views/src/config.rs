//! Dashboard configuration: chart geometry, year range, initial selection and
//! data file names.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides.

use crate::selection::Selection;
use gapviz_data::{Indicator, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pixel geometry shared by the three charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    /// Width of the scatter and line charts.
    pub width: f64,
    /// Width of the bar chart.
    pub bar_width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            bar_width: 500.0,
            height: 500.0,
            margin: 30.0,
        }
    }
}

impl ChartLayout {
    /// Horizontal pixel range of the scatter and line charts.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin * 2.0, self.width - self.margin)
    }

    /// Horizontal pixel range of the bar chart.
    pub fn bar_x_range(&self) -> (f64, f64) {
        (self.margin * 2.0, self.bar_width - self.margin)
    }

    /// Vertical pixel range, bottom first so larger values sit higher.
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.margin, self.margin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub layout: ChartLayout,
    /// Smallest and largest scatter point radius.
    pub radius_range: (f64, f64),
    /// First year of the line chart.
    pub min_year: Year,
    /// End of the line chart's year range (exclusive).
    pub max_year: Year,
    /// Selection at startup.
    pub initial: Selection,
    /// File name per indicator, relative to the data directory.
    pub files: BTreeMap<Indicator, String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::default(),
            radius_range: (10.0, 30.0),
            min_year: 1800,
            max_year: 2020,
            initial: Selection::default(),
            files: Indicator::ALL
                .into_iter()
                .map(|i| (i, i.file_name().to_string()))
                .collect(),
        }
    }
}

impl DashboardConfig {
    /// File name for `indicator`, falling back to the built-in name.
    pub fn file_for(&self, indicator: Indicator) -> &str {
        self.files
            .get(&indicator)
            .map(String::as_str)
            .unwrap_or_else(|| indicator.file_name())
    }

    /// Years covered by the line chart.
    pub fn line_years(&self) -> std::ops::Range<Year> {
        self.min_year..self.max_year
    }

    /// Parse a JSON config, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_ranges() {
        let layout = ChartLayout::default();
        assert_eq!(layout.x_range(), (60.0, 970.0));
        assert_eq!(layout.bar_x_range(), (60.0, 470.0));
        assert_eq!(layout.y_range(), (470.0, 30.0));
    }

    #[test]
    fn default_files_cover_every_indicator() {
        let config = DashboardConfig::default();
        assert_eq!(config.file_for(Indicator::ChildMortality), "cmu5.csv");
        assert_eq!(config.files.len(), Indicator::ALL.len());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = DashboardConfig::from_json(
            r#"{
                "layout": { "height": 300 },
                "max_year": 2010,
                "files": { "gdp": "gdp_per_capita.csv" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.layout.height, 300.0);
        assert_eq!(config.layout.width, 1000.0);
        assert_eq!(config.line_years(), 1800..2010);
        assert_eq!(config.file_for(Indicator::Gdp), "gdp_per_capita.csv");
        assert_eq!(
            config.file_for(Indicator::Population),
            "population.csv",
            "Indicators missing from the map fall back to built-in names"
        );
    }
}
