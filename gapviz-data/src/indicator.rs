//! The five measured quantities the dashboard can plot.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A year column label, e.g. `2000`.
pub type Year = i32;

/// One indicator recorded per country per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    Population,
    Gdp,
    ChildMortality,
    LifeExpectancy,
    FertilityRate,
}

impl Indicator {
    /// All indicators, population first (it is the join base).
    pub const ALL: [Indicator; 5] = [
        Indicator::Population,
        Indicator::Gdp,
        Indicator::ChildMortality,
        Indicator::LifeExpectancy,
        Indicator::FertilityRate,
    ];

    /// Stable id used in selectors, config files and JSON.
    pub fn id(self) -> &'static str {
        match self {
            Indicator::Population => "population",
            Indicator::Gdp => "gdp",
            Indicator::ChildMortality => "child-mortality",
            Indicator::LifeExpectancy => "life-expectancy",
            Indicator::FertilityRate => "fertility-rate",
        }
    }

    /// Human readable label for selectors and axis titles.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Population => "Population",
            Indicator::Gdp => "GDP per capita",
            Indicator::ChildMortality => "Child mortality (under 5, per 1000)",
            Indicator::LifeExpectancy => "Life expectancy (years)",
            Indicator::FertilityRate => "Fertility rate (births per woman)",
        }
    }

    /// Default CSV file name for the indicator's table.
    pub fn file_name(self) -> &'static str {
        match self {
            Indicator::Population => "population.csv",
            Indicator::Gdp => "gdp.csv",
            Indicator::ChildMortality => "cmu5.csv",
            Indicator::LifeExpectancy => "life_expectancy.csv",
            Indicator::FertilityRate => "fertility-rate.csv",
        }
    }

    /// Position in [`Indicator::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Indicator {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Indicator::ALL
            .into_iter()
            .find(|i| i.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| DataError::UnknownIndicator(s.to_string()))
    }
}
