//! Selection state and chart computation for the gapviz dashboard.
//!
//! Each view is a pure function of the [`Dataset`](gapviz_data::Dataset) and
//! the current [`Selection`]. It returns a serializable scene of keyed marks
//! that the D3 bridge draws as-is. [`Dashboard`] ties it together: events go
//! through a single reducer, and only the views the reducer names are
//! recomputed.
//!
//! ```rust
//! use gapviz_data::{Dataset, Indicator, IndicatorSources};
//! use gapviz_views::{Dashboard, DashboardConfig, Event, Redraw};
//!
//! let sources = IndicatorSources::new()
//!     .with(Indicator::Population, "geo,country,region,2000\nusa,United States,Americas,282\n")
//!     .with(Indicator::Gdp, "geo,2000\nusa,45000\n")
//!     .with(Indicator::ChildMortality, "geo,2000\nusa,8\n")
//!     .with(Indicator::LifeExpectancy, "geo,2000\nusa,77\n")
//!     .with(Indicator::FertilityRate, "geo,2000\nusa,2.0\n");
//! let mut dashboard = Dashboard::new(Dataset::load(&sources).unwrap(), DashboardConfig::default());
//!
//! dashboard.render(Redraw::ALL);
//! let frame = dashboard.handle(Event::CountrySelected("usa".into()));
//! assert_eq!(frame.line.unwrap().scene.country, "United States");
//! ```

pub mod bar;
pub mod config;
pub mod dashboard;
pub mod layer;
pub mod line;
pub mod palette;
pub mod scale;
pub mod scatter;
pub mod selection;

pub use config::{ChartLayout, DashboardConfig};
pub use dashboard::{Dashboard, Frame, Rendered};
pub use selection::{Event, Redraw, Selection};
