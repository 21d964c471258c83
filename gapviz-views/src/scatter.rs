//! Scatter view: one point per country for the selected year.
//!
//! Countries missing the x, y or radius value for the year are skipped.

use crate::config::DashboardConfig;
use crate::layer::Keyed;
use crate::palette::RegionPalette;
use crate::scale::{extent, padded_extent, LinearScale, SqrtScale};
use crate::selection::Selection;
use gapviz_data::{Dataset, Indicator, Year};
use serde::Serialize;

/// Opacity of visible points.
pub const POINT_OPACITY: f64 = 0.75;
/// Outline width of the selected country.
pub const SELECTED_STROKE: f64 = 3.0;
pub const DEFAULT_STROKE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointMark {
    pub geo: String,
    pub country: String,
    pub region: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: &'static str,
    pub opacity: f64,
    pub stroke_width: f64,
}

impl Keyed for PointMark {
    fn key(&self) -> &str {
        &self.geo
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterScene {
    pub year: Year,
    pub x: Indicator,
    pub y: Indicator,
    pub radius: Indicator,
    /// `None` when no country has a value for the axis.
    pub x_axis: Option<LinearScale>,
    pub y_axis: Option<LinearScale>,
    pub points: Vec<PointMark>,
}

/// Compute the scatter plot for the current selection.
pub fn render(
    dataset: &Dataset,
    selection: &Selection,
    palette: &RegionPalette,
    config: &DashboardConfig,
) -> ScatterScene {
    let year = selection.year;
    let layout = &config.layout;
    let column = |indicator: Indicator| dataset.iter().filter_map(move |r| r.value(indicator, year));

    let x_axis = padded_extent(column(selection.x)).map(|d| LinearScale::new(d, layout.x_range()));
    let y_axis = padded_extent(column(selection.y)).map(|d| LinearScale::new(d, layout.y_range()));
    let r_scale = extent(column(selection.radius)).map(|d| SqrtScale::new(d, config.radius_range));

    let mut points = Vec::new();
    if let (Some(xs), Some(ys), Some(rs)) = (x_axis, y_axis, r_scale) {
        for record in dataset {
            let (Some(x), Some(y), Some(r)) = (
                record.value(selection.x, year),
                record.value(selection.y, year),
                record.value(selection.radius, year),
            ) else {
                continue;
            };
            let visible = selection
                .selected_region
                .as_deref()
                .map_or(true, |region| region == record.region);
            points.push(PointMark {
                geo: record.geo.clone(),
                country: record.country.clone(),
                region: record.region.clone(),
                cx: xs.map(x),
                cy: ys.map(y),
                r: rs.map(r),
                fill: palette.color(&record.region),
                opacity: if visible { POINT_OPACITY } else { 0.0 },
                stroke_width: if selection.is_country_selected(&record.geo) {
                    SELECTED_STROKE
                } else {
                    DEFAULT_STROKE
                },
            });
        }
    }

    log::debug!(
        "[gapviz] scatter: {} of {} countries plotted for {}",
        points.len(),
        dataset.len(),
        year
    );

    ScatterScene {
        year,
        x: selection.x,
        y: selection.y,
        radius: selection.radius,
        x_axis,
        y_axis,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapviz_data::IndicatorSources;

    fn dataset() -> Dataset {
        let sources = IndicatorSources::new()
            .with(
                Indicator::Population,
                "geo,country,region,2000\nusa,United States,Americas,282\nchn,China,Asia,1260\nfra,France,Europe,60\nnga,Nigeria,Africa,\n",
            )
            .with(Indicator::Gdp, "geo,2000\nusa,45000\nchn,3000\nfra,30000\nnga,1000\n")
            .with(Indicator::ChildMortality, "geo,2000\nusa,8\nchn,37\nfra,5\nnga,180\n")
            .with(Indicator::LifeExpectancy, "geo,2000\nusa,77\nchn,71\n")
            .with(Indicator::FertilityRate, "geo,2000\nusa,2.0\nchn,1.6\nfra,1.9\nnga,6.1\n");
        Dataset::load(&sources).unwrap()
    }

    fn scene(selection: &Selection) -> ScatterScene {
        let ds = dataset();
        render(&ds, selection, &RegionPalette::new(ds.regions()), &DashboardConfig::default())
    }

    #[test]
    fn domains_pad_the_max_only() {
        let s = scene(&Selection::default());
        let x = s.x_axis.unwrap();
        assert_eq!(x.domain[0], 1.6);
        assert!((x.domain[1] - 6.1 * 1.05).abs() < 1e-9);
        let y = s.y_axis.unwrap();
        assert_eq!(y.domain[0], 5.0);
        assert!((y.domain[1] - 180.0 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn one_point_per_complete_country() {
        let s = scene(&Selection::default());
        let geos: Vec<&str> = s.points.iter().map(|p| p.geo.as_str()).collect();
        assert_eq!(geos, vec!["usa", "chn", "fra", "nga"]);
    }

    #[test]
    fn countries_missing_a_value_are_skipped() {
        let selection = Selection {
            y: Indicator::LifeExpectancy,
            ..Selection::default()
        };
        let s = scene(&selection);
        let geos: Vec<&str> = s.points.iter().map(|p| p.geo.as_str()).collect();
        assert_eq!(geos, vec!["usa", "chn"]);
        assert!(s.points.iter().all(|p| p.cx.is_finite() && p.cy.is_finite() && p.r.is_finite()));
    }

    #[test]
    fn radius_uses_sqrt_range() {
        let s = scene(&Selection::default());
        let usa = s.points.iter().find(|p| p.geo == "usa").unwrap();
        let nga = s.points.iter().find(|p| p.geo == "nga").unwrap();
        assert!((usa.r - 30.0).abs() < 1e-9, "Largest gdp gets the max radius");
        assert!((nga.r - 10.0).abs() < 1e-9, "Smallest gdp gets the min radius");
    }

    #[test]
    fn year_without_data_has_no_axes_or_points() {
        let s = scene(&Selection {
            year: 1850,
            ..Selection::default()
        });
        assert!(s.x_axis.is_none());
        assert!(s.points.is_empty());
    }

    #[test]
    fn region_selection_hides_other_points() {
        let s = scene(&Selection {
            selected_region: Some("Asia".into()),
            ..Selection::default()
        });
        for p in &s.points {
            let expected = if p.region == "Asia" { POINT_OPACITY } else { 0.0 };
            assert_eq!(p.opacity, expected, "{}", p.geo);
        }
    }

    #[test]
    fn selected_country_gets_thick_outline() {
        let s = scene(&Selection {
            selected_country: Some("fra".into()),
            ..Selection::default()
        });
        for p in &s.points {
            let expected = if p.geo == "fra" { SELECTED_STROKE } else { DEFAULT_STROKE };
            assert_eq!(p.stroke_width, expected);
        }
    }
}
