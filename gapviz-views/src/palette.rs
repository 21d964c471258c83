//! Fixed region → colour mapping shared by the bar and scatter charts.

use serde::Serialize;

/// Region colours, assigned in order of first appearance and cycled.
pub const REGION_COLORS: [&str; 4] = ["#DD4949", "#39CDA1", "#FD710C", "#A14BE5"];

/// Colour used for regions the palette was not built with.
const UNKNOWN_COLOR: &str = "#999999";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPalette {
    regions: Vec<String>,
}

impl RegionPalette {
    pub fn new<S: AsRef<str>>(regions: impl IntoIterator<Item = S>) -> Self {
        let mut ordered: Vec<String> = Vec::new();
        for region in regions {
            let region = region.as_ref();
            if !ordered.iter().any(|r| r == region) {
                ordered.push(region.to_string());
            }
        }
        Self { regions: ordered }
    }

    pub fn color(&self, region: &str) -> &'static str {
        self.regions
            .iter()
            .position(|r| r == region)
            .map(|i| REGION_COLORS[i % REGION_COLORS.len()])
            .unwrap_or(UNKNOWN_COLOR)
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}
