//! Reads the config and the indicator CSVs from disk.

use anyhow::Context;
use gapviz_data::{Dataset, Indicator, IndicatorSources};
use gapviz_views::DashboardConfig;
use log::info;
use std::fs;
use std::path::Path;

/// Read `path` as a [`DashboardConfig`], or use the defaults when no file
/// was given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    DashboardConfig::from_json(&json)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Read all five tables from `data_dir` and join them.
pub fn load_dataset(data_dir: &Path, config: &DashboardConfig) -> anyhow::Result<Dataset> {
    let mut sources = IndicatorSources::new();
    for indicator in Indicator::ALL {
        let path = data_dir.join(config.file_for(indicator));
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {} table {}", indicator, path.display()))?;
        sources.insert(indicator, text);
    }
    let dataset = Dataset::load(&sources).context("Failed to parse indicator tables")?;
    info!(
        "[gapviz] Loaded {} countries from {}",
        dataset.len(),
        data_dir.display()
    );
    Ok(dataset)
}
