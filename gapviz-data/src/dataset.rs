//! The per-country join of all indicator tables.

use crate::error::{DataError, Result};
use crate::indicator::{Indicator, Year};
use crate::table::{IndicatorRow, IndicatorTable};
use std::rc::Rc;

/// One country with its row from every indicator table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub geo: String,
    pub region: String,
    rows: [Option<IndicatorRow>; 5],
}

impl CountryRecord {
    /// The matched row for `indicator`, or `None` when that table had no row
    /// with this record's geo.
    pub fn row(&self, indicator: Indicator) -> Option<&IndicatorRow> {
        self.rows[indicator.index()].as_ref()
    }

    /// `record[indicator][year]`, missing when either the row or the cell is.
    pub fn value(&self, indicator: Indicator, year: Year) -> Option<f64> {
        self.row(indicator).and_then(|row| row.value(year))
    }
}

/// Raw CSV text for each indicator, collected before the join runs.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSources {
    texts: [Option<String>; 5],
}

impl IndicatorSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, indicator: Indicator, csv_data: impl Into<String>) {
        self.texts[indicator.index()] = Some(csv_data.into());
    }

    pub fn with(mut self, indicator: Indicator, csv_data: impl Into<String>) -> Self {
        self.insert(indicator, csv_data);
        self
    }

    pub fn get(&self, indicator: Indicator) -> Option<&str> {
        self.texts[indicator.index()].as_deref()
    }
}

/// Ordered, immutable sequence of country records.
///
/// Cheaply cloneable (via `Rc`) so it can be shared across Dioxus signals
/// and views in the single-threaded WASM runtime.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Rc<[CountryRecord]>,
    years: Rc<[Year]>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self {
            records: Rc::from(Vec::new()),
            years: Rc::from(Vec::new()),
        }
    }

    /// Parse all five sources and join them.
    ///
    /// Every source must be present; parse failures name the indicator.
    pub fn load(sources: &IndicatorSources) -> Result<Self> {
        let mut tables = Vec::with_capacity(Indicator::ALL.len());
        for indicator in Indicator::ALL {
            let text = sources
                .get(indicator)
                .ok_or(DataError::MissingSource(indicator))?;
            tables.push(IndicatorTable::parse(indicator, text)?);
        }
        let mut tables = tables.into_iter();
        let population = tables.next().ok_or(DataError::MissingSource(Indicator::Population))?;
        Ok(Self::join(population, tables))
    }

    /// Left join on geo with `population` as the base.
    ///
    /// One record per population row, in population order. For every other
    /// table the first row with the same geo is attached; without a match the
    /// indicator stays `None`. Tables passed for `Indicator::Population` in
    /// `others` are ignored.
    pub fn join(population: IndicatorTable, others: impl IntoIterator<Item = IndicatorTable>) -> Self {
        let others: Vec<IndicatorTable> = others
            .into_iter()
            .filter(|t| t.indicator != Indicator::Population)
            .collect();
        let years: Rc<[Year]> = Rc::from(population.years.clone());

        let mut unmatched = [0usize; 5];
        let records: Vec<CountryRecord> = population
            .into_rows()
            .into_iter()
            .map(|base| {
                let mut rows: [Option<IndicatorRow>; 5] = Default::default();
                for table in &others {
                    let matched = table.find(&base.geo).cloned();
                    if matched.is_none() {
                        unmatched[table.indicator.index()] += 1;
                    }
                    rows[table.indicator.index()] = matched;
                }
                let country = base.country.clone().unwrap_or_else(|| base.geo.clone());
                let region = base.region.clone().unwrap_or_default();
                let geo = base.geo.clone();
                rows[Indicator::Population.index()] = Some(base);
                CountryRecord {
                    country,
                    geo,
                    region,
                    rows,
                }
            })
            .collect();

        for table in &others {
            let missing = unmatched[table.indicator.index()];
            if missing > 0 {
                log::warn!(
                    "[gapviz] join: {} of {} countries have no {} row",
                    missing,
                    records.len(),
                    table.indicator
                );
            }
        }
        log::info!("[gapviz] join: Built dataset with {} countries", records.len());

        Self {
            records: Rc::from(records),
            years,
        }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for `geo`, if any.
    pub fn find(&self, geo: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.geo == geo)
    }

    /// Distinct regions in order of first appearance.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for record in self.records.iter() {
            if !regions.contains(&record.region.as_str()) {
                regions.push(&record.region);
            }
        }
        regions
    }

    /// Year columns of the population table.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Smallest and largest year column, if the population table had any.
    pub fn year_bounds(&self) -> Option<(Year, Year)> {
        let min = self.years.iter().copied().min()?;
        let max = self.years.iter().copied().max()?;
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
