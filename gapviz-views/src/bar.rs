//! Bar view: one bar per region, height = mean of the bar indicator.
//!
//! Missing values are excluded from both the sum and the count of a region's
//! mean. A region without any value has no mean and is drawn as a zero-height
//! bar so it stays clickable.

use crate::config::ChartLayout;
use crate::layer::Keyed;
use crate::palette::RegionPalette;
use crate::scale::{BandScale, LinearScale};
use crate::selection::Selection;
use gapviz_data::{Dataset, Indicator, Year};
use serde::Serialize;

/// Opacity of bars outside the selected region.
pub const DIMMED_OPACITY: f64 = 0.6;

/// Mean of one indicator over the countries of a region for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionAggregate {
    pub region: String,
    /// `None` when no country in the region has a value.
    pub mean: Option<f64>,
    /// Number of countries that contributed a value.
    pub count: usize,
}

/// Per-region means in first-seen region order.
pub fn region_aggregates(dataset: &Dataset, indicator: Indicator, year: Year) -> Vec<RegionAggregate> {
    dataset
        .regions()
        .into_iter()
        .map(|region| {
            let (sum, count) = dataset
                .iter()
                .filter(|r| r.region == region)
                .filter_map(|r| r.value(indicator, year))
                .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
            RegionAggregate {
                region: region.to_string(),
                mean: (count > 0).then(|| sum / count as f64),
                count,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMark {
    pub region: String,
    pub mean: Option<f64>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub opacity: f64,
}

impl Keyed for BarMark {
    fn key(&self) -> &str {
        &self.region
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarScene {
    pub indicator: Indicator,
    pub year: Year,
    pub x_axis: BandScale,
    pub y_axis: LinearScale,
    pub bars: Vec<BarMark>,
}

/// Compute the bar chart for the current selection.
pub fn render(
    dataset: &Dataset,
    selection: &Selection,
    palette: &RegionPalette,
    layout: &ChartLayout,
) -> BarScene {
    let aggregates = region_aggregates(dataset, selection.bar, selection.year);

    let x_axis = BandScale::new(
        aggregates.iter().map(|a| a.region.clone()).collect(),
        layout.bar_x_range(),
        0.1,
    );
    let max_mean = aggregates
        .iter()
        .filter_map(|a| a.mean)
        .fold(None, |acc: Option<f64>, m| Some(acc.map_or(m, |a| a.max(m))));
    let y_top = match max_mean {
        Some(max) if max > 0.0 => max,
        _ => 1.0,
    };
    let y_axis = LinearScale::new((0.0, y_top), layout.y_range());
    let baseline = y_axis.map(0.0);

    let bars = aggregates
        .into_iter()
        .map(|agg| {
            let top = agg.mean.map(|m| y_axis.map(m)).unwrap_or(baseline);
            let opacity = match &selection.selected_region {
                Some(selected) if *selected != agg.region => DIMMED_OPACITY,
                _ => 1.0,
            };
            BarMark {
                x: x_axis.position(&agg.region).unwrap_or(0.0),
                y: top.min(baseline),
                width: x_axis.bandwidth(),
                height: (baseline - top).abs(),
                fill: palette.color(&agg.region),
                opacity,
                region: agg.region,
                mean: agg.mean,
            }
        })
        .collect();

    BarScene {
        indicator: selection.bar,
        year: selection.year,
        x_axis,
        y_axis,
        bars,
    }
}
