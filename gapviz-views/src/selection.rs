//! Selection state and the reducer that applies UI events to it.
//!
//! Every control change and chart click becomes an [`Event`]. [`Selection::apply`]
//! is the only place the selection is mutated; it returns the set of views
//! that need to be recomputed.

use gapviz_data::{Indicator, Year};
use serde::{Deserialize, Serialize};

/// Current year, indicator choices and highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub year: Year,
    pub x: Indicator,
    pub y: Indicator,
    pub radius: Indicator,
    pub bar: Indicator,
    pub line: Indicator,
    /// Geo of the clicked scatter point.
    pub selected_country: Option<String>,
    pub selected_region: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            year: 2000,
            x: Indicator::FertilityRate,
            y: Indicator::ChildMortality,
            radius: Indicator::Gdp,
            bar: Indicator::ChildMortality,
            line: Indicator::Gdp,
            selected_country: None,
            selected_region: None,
        }
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    YearChanged(Year),
    XChanged(Indicator),
    YChanged(Indicator),
    RadiusChanged(Indicator),
    BarChanged(Indicator),
    LineChanged(Indicator),
    /// Scatter point clicked, carrying the country's geo.
    CountrySelected(String),
    /// Bar (or legend entry) clicked, carrying the region.
    RegionToggled(String),
}

/// Which views must be recomputed after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redraw {
    pub bar: bool,
    pub scatter: bool,
    pub line: bool,
}

impl Redraw {
    pub const NONE: Redraw = Redraw {
        bar: false,
        scatter: false,
        line: false,
    };
    pub const ALL: Redraw = Redraw {
        bar: true,
        scatter: true,
        line: true,
    };
    const BAR: Redraw = Redraw {
        bar: true,
        ..Redraw::NONE
    };
    const LINE: Redraw = Redraw {
        line: true,
        ..Redraw::NONE
    };
    const SCATTER_AND_BAR: Redraw = Redraw {
        bar: true,
        scatter: true,
        line: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.bar || self.scatter || self.line)
    }
}

impl Selection {
    /// Apply one event and report which views changed.
    pub fn apply(&mut self, event: Event) -> Redraw {
        log::debug!("[gapviz] selection: {:?}", event);
        match event {
            Event::YearChanged(year) => {
                self.year = year;
                Redraw::SCATTER_AND_BAR
            }
            Event::XChanged(indicator) => {
                self.x = indicator;
                Redraw::SCATTER_AND_BAR
            }
            Event::YChanged(indicator) => {
                self.y = indicator;
                Redraw::SCATTER_AND_BAR
            }
            Event::RadiusChanged(indicator) => {
                self.radius = indicator;
                Redraw::SCATTER_AND_BAR
            }
            Event::BarChanged(indicator) => {
                self.bar = indicator;
                Redraw::BAR
            }
            Event::LineChanged(indicator) => {
                self.line = indicator;
                if self.selected_country.is_some() {
                    Redraw::LINE
                } else {
                    Redraw::NONE
                }
            }
            Event::CountrySelected(geo) => {
                self.selected_country = Some(geo);
                // Stroke emphasis lives on the scatter points.
                Redraw {
                    scatter: true,
                    line: true,
                    bar: false,
                }
            }
            Event::RegionToggled(region) => {
                if self.selected_region.as_deref() == Some(region.as_str()) {
                    self.selected_region = None;
                } else {
                    self.selected_region = Some(region);
                }
                Redraw::SCATTER_AND_BAR
            }
        }
    }

    pub fn is_region_selected(&self, region: &str) -> bool {
        self.selected_region.as_deref() == Some(region)
    }

    pub fn is_country_selected(&self, geo: &str) -> bool {
        self.selected_country.as_deref() == Some(geo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_dashboard() {
        let s = Selection::default();
        assert_eq!(s.year, 2000);
        assert_eq!(s.x, Indicator::FertilityRate);
        assert_eq!(s.y, Indicator::ChildMortality);
        assert_eq!(s.radius, Indicator::Gdp);
        assert_eq!(s.bar, Indicator::ChildMortality);
        assert_eq!(s.line, Indicator::Gdp);
        assert!(s.selected_country.is_none());
        assert!(s.selected_region.is_none());
    }

    #[test]
    fn scatter_controls_redraw_scatter_and_bar_only() {
        let mut s = Selection::default();
        for event in [
            Event::YearChanged(1990),
            Event::XChanged(Indicator::Gdp),
            Event::YChanged(Indicator::LifeExpectancy),
            Event::RadiusChanged(Indicator::Population),
        ] {
            let redraw = s.apply(event);
            assert!(redraw.scatter && redraw.bar, "Scatter and bar should redraw");
            assert!(!redraw.line, "Line should not redraw");
        }
        assert_eq!(s.year, 1990);
        assert_eq!(s.x, Indicator::Gdp);
        assert_eq!(s.y, Indicator::LifeExpectancy);
        assert_eq!(s.radius, Indicator::Population);
    }

    #[test]
    fn bar_indicator_redraws_bar_only() {
        let mut s = Selection::default();
        let redraw = s.apply(Event::BarChanged(Indicator::Gdp));
        assert_eq!(redraw, Redraw { bar: true, scatter: false, line: false });
        assert_eq!(s.bar, Indicator::Gdp);
    }

    #[test]
    fn line_indicator_without_country_is_noop_redraw() {
        let mut s = Selection::default();
        let redraw = s.apply(Event::LineChanged(Indicator::Population));
        assert!(redraw.is_empty());
        assert_eq!(s.line, Indicator::Population, "Choice is still remembered");

        s.apply(Event::CountrySelected("usa".into()));
        let redraw = s.apply(Event::LineChanged(Indicator::Gdp));
        assert_eq!(redraw, Redraw { bar: false, scatter: false, line: true });
    }

    #[test]
    fn country_selection_keeps_region() {
        let mut s = Selection::default();
        s.apply(Event::RegionToggled("Asia".into()));
        s.apply(Event::CountrySelected("usa".into()));
        s.apply(Event::CountrySelected("chn".into()));
        assert_eq!(s.selected_country.as_deref(), Some("chn"));
        assert_eq!(s.selected_region.as_deref(), Some("Asia"));
    }

    #[test]
    fn region_toggle_sets_switches_and_clears() {
        let mut s = Selection::default();
        s.apply(Event::CountrySelected("usa".into()));

        s.apply(Event::RegionToggled("Asia".into()));
        assert!(s.is_region_selected("Asia"));

        s.apply(Event::RegionToggled("Europe".into()));
        assert!(s.is_region_selected("Europe"), "A different region replaces the first");

        let redraw = s.apply(Event::RegionToggled("Europe".into()));
        assert!(s.selected_region.is_none(), "Same region toggles off");
        assert!(redraw.bar && redraw.scatter && !redraw.line);
        assert!(s.is_country_selected("usa"), "Region toggling keeps the country");
    }

    #[test]
    fn selection_deserializes_with_defaults() {
        let s: Selection = serde_json::from_str(r#"{"year": 1950, "bar": "gdp"}"#).unwrap();
        assert_eq!(s.year, 1950);
        assert_eq!(s.bar, Indicator::Gdp);
        assert_eq!(s.x, Indicator::FertilityRate);
    }
}
