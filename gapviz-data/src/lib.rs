//! Indicator tables and the per-country join behind the gapviz dashboard.
//!
//! Five CSV tables (population, GDP, child mortality, life expectancy,
//! fertility rate) share a `geo` key. The population table defines the set of
//! countries; every other table is left-joined onto it by geo, first match
//! wins. A country missing from an indicator table is not an error, the
//! indicator is simply absent for that country.
//!
//! # Usage
//!
//! ```rust
//! use gapviz_data::{Dataset, Indicator, IndicatorSources};
//!
//! let sources = IndicatorSources::new()
//!     .with(Indicator::Population, "geo,country,region,2000\nusa,United States,Americas,282\n")
//!     .with(Indicator::Gdp, "geo,2000\nusa,45000\n")
//!     .with(Indicator::ChildMortality, "geo,2000\n")
//!     .with(Indicator::LifeExpectancy, "geo,2000\n")
//!     .with(Indicator::FertilityRate, "geo,2000\n");
//!
//! let dataset = Dataset::load(&sources).unwrap();
//! assert_eq!(dataset.find("usa").unwrap().value(Indicator::Gdp, 2000), Some(45000.0));
//! assert_eq!(dataset.find("usa").unwrap().value(Indicator::FertilityRate, 2000), None);
//! ```

pub mod dataset;
pub mod error;
pub mod indicator;
pub mod table;

pub use dataset::{CountryRecord, Dataset, IndicatorSources};
pub use error::{DataError, Result};
pub use indicator::{Indicator, Year};
pub use table::{IndicatorRow, IndicatorTable};
