//! Line view: the selected country's series across the configured year range.
//!
//! Years without a value stay in the series as gaps; the path is broken at
//! every gap instead of bridging it.

use crate::config::DashboardConfig;
use crate::layer::Keyed;
use crate::scale::{padded_extent, LinearScale};
use crate::selection::Selection;
use gapviz_data::{Dataset, Indicator, Year};
use serde::Serialize;
use std::fmt::Write;

pub const LINE_COLOR: &str = "#1f77b4";
pub const LINE_WIDTH: f64 = 2.0;
/// Key of the single path element.
pub const LINE_KEY: &str = "series";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub year: Year,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineScene {
    pub geo: String,
    pub country: String,
    pub indicator: Indicator,
    pub x_axis: LinearScale,
    /// `None` when the series has no value at all.
    pub y_axis: Option<LinearScale>,
    pub points: Vec<LinePoint>,
    /// SVG path data, one `M` per contiguous run of values.
    pub path: String,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

impl Keyed for LineScene {
    fn key(&self) -> &str {
        LINE_KEY
    }
}

/// Values of `indicator` for `geo` over `years`, missing years as `None`.
pub fn series(
    dataset: &Dataset,
    geo: &str,
    indicator: Indicator,
    years: std::ops::Range<Year>,
) -> Option<Vec<LinePoint>> {
    let record = dataset.find(geo)?;
    Some(
        years
            .map(|year| LinePoint {
                year,
                value: record.value(indicator, year),
            })
            .collect(),
    )
}

/// Compute the line chart, or `None` when no country is selected or the
/// selected geo is not in the dataset.
pub fn render(dataset: &Dataset, selection: &Selection, config: &DashboardConfig) -> Option<LineScene> {
    let geo = selection.selected_country.as_deref()?;
    let record = dataset.find(geo)?;
    let points = series(dataset, geo, selection.line, config.line_years())?;

    let layout = &config.layout;
    let x_axis = LinearScale::new(
        (config.min_year as f64, config.max_year as f64),
        layout.x_range(),
    );
    let y_axis = padded_extent(points.iter().filter_map(|p| p.value))
        .map(|d| LinearScale::new(d, layout.y_range()));

    let path = match &y_axis {
        Some(y_axis) => path_data(&points, &x_axis, y_axis),
        None => String::new(),
    };

    Some(LineScene {
        geo: record.geo.clone(),
        country: record.country.clone(),
        indicator: selection.line,
        x_axis,
        y_axis,
        points,
        path,
        stroke: LINE_COLOR,
        stroke_width: LINE_WIDTH,
    })
}

fn path_data(points: &[LinePoint], x: &LinearScale, y: &LinearScale) -> String {
    let mut d = String::new();
    let mut pen_down = false;
    for point in points {
        match point.value {
            Some(value) => {
                let cmd = if pen_down { 'L' } else { 'M' };
                let _ = write!(d, "{}{:.2},{:.2}", cmd, x.map(point.year as f64), y.map(value));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    d
}
