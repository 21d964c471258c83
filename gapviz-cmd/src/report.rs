//! Reports printed by the CLI subcommands.

use crate::View;
use anyhow::Context;
use gapviz_data::{Dataset, Indicator, Year};
use gapviz_views::bar::region_aggregates;
use gapviz_views::line::series;
use gapviz_views::{Dashboard, DashboardConfig, Event, Redraw};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Coverage {
    pub indicator: Indicator,
    /// Countries with a row in this indicator's table
    pub countries: usize,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub countries: usize,
    pub regions: Vec<String>,
    pub years: Option<(Year, Year)>,
    pub coverage: Vec<Coverage>,
}

pub fn summarize(dataset: &Dataset) -> Summary {
    let coverage = Indicator::ALL
        .into_iter()
        .map(|indicator| Coverage {
            indicator,
            countries: dataset.iter().filter(|r| r.row(indicator).is_some()).count(),
        })
        .collect();
    Summary {
        countries: dataset.len(),
        regions: dataset.regions().into_iter().map(str::to_string).collect(),
        years: dataset.year_bounds(),
        coverage,
    }
}

pub fn summary_json(dataset: &Dataset) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&summarize(dataset))?)
}

pub fn regions_json(dataset: &Dataset, indicator: Indicator, year: Year) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&region_aggregates(dataset, indicator, year))?)
}

/// `year,value` rows over the configured line range; missing years have an
/// empty value.
pub fn series_csv(
    dataset: &Dataset,
    config: &DashboardConfig,
    geo: &str,
    indicator: Indicator,
) -> anyhow::Result<String> {
    let points = series(dataset, geo, indicator, config.line_years())
        .with_context(|| format!("No country with geo {:?}", geo))?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["year", indicator.id()])?;
    for point in points {
        let value = point.value.map(|v| v.to_string()).unwrap_or_default();
        writer.write_record([point.year.to_string(), value])?;
    }
    let bytes = writer.into_inner().context("Failed to flush CSV output")?;
    let mut text = String::from_utf8(bytes)?;
    // `run` prints with its own newline.
    text.truncate(text.trim_end().len());
    Ok(text)
}

/// Selection to replay before printing a scene.
#[derive(Debug, Clone)]
pub struct SceneRequest {
    pub view: View,
    pub year: Option<Year>,
    pub country: Option<String>,
    pub region: Option<String>,
}

impl SceneRequest {
    /// The events a user would trigger to reach this selection.
    fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(year) = self.year {
            events.push(Event::YearChanged(year));
        }
        if let Some(region) = &self.region {
            events.push(Event::RegionToggled(region.clone()));
        }
        if let Some(geo) = &self.country {
            events.push(Event::CountrySelected(geo.clone()));
        }
        events
    }
}

pub fn scene_json(dataset: Dataset, config: DashboardConfig, request: &SceneRequest) -> anyhow::Result<String> {
    let mut dashboard = Dashboard::new(dataset, config);
    for event in request.events() {
        dashboard.dispatch(event);
    }

    let redraw = match request.view {
        View::Bar => Redraw { bar: true, ..Redraw::NONE },
        View::Scatter => Redraw { scatter: true, ..Redraw::NONE },
        View::Line => Redraw { line: true, ..Redraw::NONE },
    };
    let frame = dashboard.render(redraw);
    let json = match request.view {
        View::Bar => frame.bar.map(|r| serde_json::to_string_pretty(&r.scene)),
        View::Scatter => frame.scatter.map(|r| serde_json::to_string_pretty(&r.scene)),
        View::Line => frame.line.map(|r| serde_json::to_string_pretty(&r.scene)),
    };
    match json {
        Some(json) => Ok(json?),
        None => anyhow::bail!("Nothing to draw: the line chart needs a known --country"),
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
                "geo,country,region,1999,2000\nusa,United States,Americas,280,282\nchn,China,Asia,1250,1260\n",
            )
            .with(Indicator::Gdp, "geo,1999,2000\nusa,44000,45000\nchn,,3000\n")
            .with(Indicator::ChildMortality, "geo,2000\nusa,8\nchn,37\n")
            .with(Indicator::LifeExpectancy, "geo,2000\nusa,77\n")
            .with(Indicator::FertilityRate, "geo,2000\nusa,2.0\nchn,1.6\n");
        Dataset::load(&sources).unwrap()
    }

    fn config() -> DashboardConfig {
        DashboardConfig {
            min_year: 1999,
            max_year: 2001,
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn summary_counts_coverage_per_indicator() {
        let summary = summarize(&dataset());
        assert_eq!(summary.countries, 2);
        assert_eq!(summary.regions, vec!["Americas", "Asia"]);
        assert_eq!(summary.years, Some((1999, 2000)));
        let life = summary
            .coverage
            .iter()
            .find(|c| c.indicator == Indicator::LifeExpectancy)
            .unwrap();
        assert_eq!(life.countries, 1);
    }

    #[test]
    fn series_leaves_missing_years_empty() {
        let csv = series_csv(&dataset(), &config(), "chn", Indicator::Gdp).unwrap();
        assert_eq!(csv, "year,gdp\n1999,\n2000,3000");
    }

    #[test]
    fn series_for_unknown_geo_is_an_error() {
        assert!(series_csv(&dataset(), &config(), "xxx", Indicator::Gdp).is_err());
    }

    #[test]
    fn bar_scene_lists_regions_in_order() {
        let request = SceneRequest {
            view: View::Bar,
            year: Some(2000),
            country: None,
            region: Some("Asia".into()),
        };
        let json = scene_json(dataset(), config(), &request).unwrap();
        let scene: serde_json::Value = serde_json::from_str(&json).unwrap();
        let bars = scene["bars"].as_array().unwrap();
        assert_eq!(bars[0]["region"], "Americas");
        assert_eq!(bars[1]["region"], "Asia");
        assert_eq!(bars[1]["opacity"], 1.0);
    }

    #[test]
    fn line_scene_requires_a_country() {
        let request = SceneRequest {
            view: View::Line,
            year: None,
            country: None,
            region: None,
        };
        assert!(scene_json(dataset(), config(), &request).is_err());

        let request = SceneRequest {
            country: Some("usa".into()),
            ..request
        };
        let json = scene_json(dataset(), config(), &request).unwrap();
        assert!(json.contains("United States"));
    }
}
