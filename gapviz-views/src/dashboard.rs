//! The coordinator: owns the dataset, the selection and one keyed layer per
//! chart, and turns events into redraw frames.

use crate::bar::{self, BarMark, BarScene};
use crate::config::DashboardConfig;
use crate::layer::{Layer, Patch};
use crate::line::{self, LineScene};
use crate::palette::RegionPalette;
use crate::scatter::{self, PointMark, ScatterScene};
use crate::selection::{Event, Redraw, Selection};
use gapviz_data::{Dataset, Year};
use serde::Serialize;

/// One recomputed chart with its reconciliation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered<S> {
    pub scene: S,
    #[serde(skip)]
    pub patch: Patch,
}

/// The views recomputed for one redraw. Views that were not asked for, or
/// have nothing to show, are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub bar: Option<Rendered<BarScene>>,
    pub scatter: Option<Rendered<ScatterScene>>,
    pub line: Option<Rendered<LineScene>>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.bar.is_none() && self.scatter.is_none() && self.line.is_none()
    }
}

pub struct Dashboard {
    dataset: Dataset,
    config: DashboardConfig,
    selection: Selection,
    palette: RegionPalette,
    bars: Layer<BarMark>,
    points: Layer<PointMark>,
    line: Layer<LineScene>,
}

impl Dashboard {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let palette = RegionPalette::new(dataset.regions());
        let mut selection = config.initial.clone();
        // Keep the start year inside the data when the default is out of range.
        if let Some((min, max)) = dataset.year_bounds() {
            selection.year = selection.year.clamp(min, max);
        }
        log::info!(
            "[gapviz] dashboard: {} countries in {} regions, starting at {}",
            dataset.len(),
            palette.regions().len(),
            selection.year
        );
        Self {
            dataset,
            config,
            selection,
            palette,
            bars: Layer::new(),
            points: Layer::new(),
            line: Layer::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn palette(&self) -> &RegionPalette {
        &self.palette
    }

    /// Year slider bounds: the population table's years, else the
    /// configured line range.
    pub fn year_bounds(&self) -> (Year, Year) {
        self.dataset
            .year_bounds()
            .unwrap_or((self.config.min_year, self.config.max_year - 1))
    }

    /// Name of the selected country, for the line chart header.
    pub fn selected_country_name(&self) -> Option<&str> {
        let geo = self.selection.selected_country.as_deref()?;
        self.dataset.find(geo).map(|r| r.country.as_str())
    }

    /// Apply an event to the selection and return the views to redraw.
    pub fn dispatch(&mut self, event: Event) -> Redraw {
        self.selection.apply(event)
    }

    /// Apply an event and recompute the affected views.
    pub fn handle(&mut self, event: Event) -> Frame {
        let redraw = self.dispatch(event);
        self.render(redraw)
    }

    /// Recompute the views named in `redraw`.
    pub fn render(&mut self, redraw: Redraw) -> Frame {
        let mut frame = Frame::default();
        if redraw.bar {
            frame.bar = Some(self.render_bar());
        }
        if redraw.scatter {
            frame.scatter = Some(self.render_scatter());
        }
        if redraw.line {
            frame.line = self.render_line();
        }
        frame
    }

    fn render_bar(&mut self) -> Rendered<BarScene> {
        let scene = bar::render(&self.dataset, &self.selection, &self.palette, &self.config.layout);
        let patch = self.bars.reconcile(scene.bars.clone());
        Rendered { scene, patch }
    }

    fn render_scatter(&mut self) -> Rendered<ScatterScene> {
        let scene = scatter::render(&self.dataset, &self.selection, &self.palette, &self.config);
        let patch = self.points.reconcile(scene.points.clone());
        Rendered { scene, patch }
    }

    /// The line keeps its last drawing when there is nothing new to show.
    fn render_line(&mut self) -> Option<Rendered<LineScene>> {
        let scene = line::render(&self.dataset, &self.selection, &self.config)?;
        let patch = self.line.reconcile(vec![scene.clone()]);
        Some(Rendered { scene, patch })
    }

    pub fn bar_marks(&self) -> &[BarMark] {
        self.bars.marks()
    }

    pub fn point_marks(&self) -> &[PointMark] {
        self.points.marks()
    }

    pub fn line_scene(&self) -> Option<&LineScene> {
        self.line.marks().first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::DIMMED_OPACITY;
    use crate::scatter::POINT_OPACITY;
    use gapviz_data::{Indicator, IndicatorSources};

    fn dataset() -> Dataset {
        let sources = IndicatorSources::new()
            .with(
                Indicator::Population,
                "geo,country,region,1999,2000\nusa,United States,Americas,280,282\nchn,China,Asia,1250,1260\nfra,France,Europe,59,60\n",
            )
            .with(Indicator::Gdp, "geo,1999,2000\nusa,44000,45000\nchn,2900,3000\nfra,29000,30000\n")
            .with(Indicator::ChildMortality, "geo,1999,2000\nusa,8,8\nchn,38,37\nfra,5,5\n")
            .with(Indicator::LifeExpectancy, "geo,1999,2000\nusa,76,77\nchn,70,71\nfra,78,79\n")
            .with(Indicator::FertilityRate, "geo,1999,2000\nusa,2.0,2.0\nchn,1.7,1.6\nfra,1.8,1.9\n");
        Dataset::load(&sources).unwrap()
    }

    fn config() -> DashboardConfig {
        DashboardConfig {
            min_year: 1999,
            max_year: 2001,
            ..DashboardConfig::default()
        }
    }

    fn started() -> Dashboard {
        let mut dashboard = Dashboard::new(dataset(), config());
        dashboard.render(Redraw::ALL);
        dashboard
    }

    #[test]
    fn initial_render_draws_bar_and_scatter_but_no_line() {
        let mut dashboard = Dashboard::new(dataset(), config());
        let frame = dashboard.render(Redraw::ALL);
        assert_eq!(frame.bar.unwrap().patch.entered.len(), 3);
        assert_eq!(frame.scatter.unwrap().patch.entered.len(), 3);
        assert!(frame.line.is_none());
    }

    #[test]
    fn repeated_render_does_not_accumulate() {
        let mut dashboard = started();
        let frame = dashboard.render(Redraw::ALL);
        assert!(frame.bar.unwrap().patch.is_empty());
        assert!(frame.scatter.unwrap().patch.is_empty());
        assert_eq!(dashboard.bar_marks().len(), 3);
        assert_eq!(dashboard.point_marks().len(), 3);
    }

    #[test]
    fn toggling_a_region_twice_restores_initial_visuals() {
        let mut dashboard = started();
        let initial_bars = dashboard.bar_marks().to_vec();
        let initial_points = dashboard.point_marks().to_vec();

        dashboard.handle(Event::RegionToggled("Asia".into()));
        for bar in dashboard.bar_marks() {
            let expected = if bar.region == "Asia" { 1.0 } else { DIMMED_OPACITY };
            assert_eq!(bar.opacity, expected);
        }
        for point in dashboard.point_marks() {
            let expected = if point.region == "Asia" { POINT_OPACITY } else { 0.0 };
            assert_eq!(point.opacity, expected);
        }

        dashboard.handle(Event::RegionToggled("Asia".into()));
        assert_eq!(dashboard.bar_marks(), initial_bars.as_slice());
        assert_eq!(dashboard.point_marks(), initial_points.as_slice());
        assert!(dashboard.bar_marks().iter().all(|b| b.opacity == 1.0));
        assert!(dashboard.point_marks().iter().all(|p| p.opacity == POINT_OPACITY));
    }

    #[test]
    fn region_filter_survives_year_change() {
        let mut dashboard = started();
        dashboard.handle(Event::RegionToggled("Europe".into()));
        let frame = dashboard.handle(Event::YearChanged(1999));
        let scatter = frame.scatter.unwrap().scene;
        for point in &scatter.points {
            let expected = if point.region == "Europe" { POINT_OPACITY } else { 0.0 };
            assert_eq!(point.opacity, expected, "Filter must be reapplied after redraw");
        }
    }

    #[test]
    fn switching_country_updates_line_and_keeps_region_filter() {
        let mut dashboard = started();
        dashboard.handle(Event::RegionToggled("Asia".into()));

        let frame = dashboard.handle(Event::CountrySelected("usa".into()));
        assert_eq!(frame.line.unwrap().scene.geo, "usa");

        let frame = dashboard.handle(Event::CountrySelected("chn".into()));
        let line = frame.line.unwrap();
        assert_eq!(line.scene.geo, "chn");
        assert_eq!(line.scene.points[0].value, Some(2900.0));
        assert!(line.patch.updated == vec!["series".to_string()]);
        assert_eq!(dashboard.line_scene().unwrap().geo, "chn");
        assert_eq!(dashboard.selected_country_name(), Some("China"));

        let scatter = frame.scatter.unwrap().scene;
        for point in &scatter.points {
            let expected = if point.region == "Asia" { POINT_OPACITY } else { 0.0 };
            assert_eq!(point.opacity, expected);
        }
        let chn = scatter.points.iter().find(|p| p.geo == "chn").unwrap();
        assert_eq!(chn.stroke_width, 3.0);
    }

    #[test]
    fn year_change_leaves_line_untouched() {
        let mut dashboard = started();
        dashboard.handle(Event::CountrySelected("fra".into()));
        let before = dashboard.line_scene().cloned();

        let frame = dashboard.handle(Event::YearChanged(1999));
        assert!(frame.line.is_none(), "Line is not part of a year redraw");
        assert!(frame.bar.is_some() && frame.scatter.is_some());
        assert_eq!(dashboard.line_scene().cloned(), before);
    }

    #[test]
    fn line_indicator_change_without_country_draws_nothing() {
        let mut dashboard = started();
        let frame = dashboard.handle(Event::LineChanged(Indicator::LifeExpectancy));
        assert!(frame.is_empty());
    }

    #[test]
    fn start_year_is_clamped_into_the_data() {
        let dashboard = Dashboard::new(
            dataset(),
            DashboardConfig {
                initial: Selection {
                    year: 2050,
                    ..Selection::default()
                },
                ..config()
            },
        );
        assert_eq!(dashboard.selection().year, 2000);
        assert_eq!(dashboard.year_bounds(), (1999, 2000));
    }

    #[test]
    fn empty_dataset_renders_empty_charts() {
        let mut dashboard = Dashboard::new(Dataset::empty(), config());
        let frame = dashboard.render(Redraw::ALL);
        assert!(frame.bar.unwrap().scene.bars.is_empty());
        assert!(frame.scatter.unwrap().scene.points.is_empty());
        assert_eq!(dashboard.year_bounds(), (1999, 2000));
    }
}
