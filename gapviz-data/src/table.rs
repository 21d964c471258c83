//! CSV parsing for per-indicator tables.
//!
//! Every indicator file shares one layout: a header row carrying a `geo`
//! column, optional `country` / `region` metadata columns, and one column per
//! year. Cells are numeric strings or empty.
//!
//! # Example CSV
//! ```text
//! geo,country,region,1999,2000
//! usa,United States,Americas,44000,45000
//! chn,China,Asia,,3000
//! ```

use crate::error::{DataError, Result};
use crate::indicator::{Indicator, Year};
use std::collections::{BTreeMap, HashMap};

/// One row of an indicator table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndicatorRow {
    /// Geographic code, the join key.
    pub geo: String,
    /// Country name, when the table carries a `country` column.
    pub country: Option<String>,
    /// Region label, when the table carries a `region` column.
    pub region: Option<String>,
    /// Numeric cells by year. Empty and non-numeric cells are absent.
    values: BTreeMap<Year, f64>,
}

impl IndicatorRow {
    pub fn new(geo: impl Into<String>) -> Self {
        Self {
            geo: geo.into(),
            ..Self::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the value for a year, coercing the raw cell the same way the CSV
    /// loader does.
    pub fn with_cell(mut self, year: Year, raw: &str) -> Self {
        self.set_cell(year, raw);
        self
    }

    fn set_cell(&mut self, year: Year, raw: &str) {
        if let Some(value) = parse_cell(raw) {
            self.values.insert(year, value);
        }
    }

    /// The numeric value for `year`, or `None` when the cell was missing,
    /// empty or non-numeric.
    pub fn value(&self, year: Year) -> Option<f64> {
        self.values.get(&year).copied()
    }

    /// Number of years holding a numeric value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Coerce a raw cell to a finite number.
pub fn parse_cell(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// All rows of one indicator in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    pub indicator: Indicator,
    /// Year columns in header order.
    pub years: Vec<Year>,
    rows: Vec<IndicatorRow>,
    /// geo -> index of the first row carrying it.
    first_by_geo: HashMap<String, usize>,
}

impl IndicatorTable {
    /// Build a table from rows that are already parsed.
    pub fn from_rows(indicator: Indicator, years: Vec<Year>, rows: Vec<IndicatorRow>) -> Self {
        let mut first_by_geo = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            first_by_geo.entry(row.geo.clone()).or_insert(i);
        }
        Self {
            indicator,
            years,
            rows,
            first_by_geo,
        }
    }

    /// Parse a table from CSV text.
    ///
    /// The header must contain a `geo` column (case-insensitive). Headers that
    /// parse as integers are year columns; `country` and `region` are read as
    /// metadata; any other column is ignored.
    pub fn parse(indicator: Indicator, csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|source| DataError::CsvParse { indicator, source })?
            .clone();

        let mut geo_idx = None;
        let mut country_idx = None;
        let mut region_idx = None;
        let mut year_cols: Vec<(usize, Year)> = Vec::new();
        for (idx, name) in headers.iter().enumerate() {
            let name = name.trim();
            if name.eq_ignore_ascii_case("geo") {
                geo_idx = Some(idx);
            } else if name.eq_ignore_ascii_case("country") {
                country_idx = Some(idx);
            } else if name.eq_ignore_ascii_case("region") {
                region_idx = Some(idx);
            } else if let Ok(year) = name.parse::<Year>() {
                year_cols.push((idx, year));
            }
        }
        let geo_idx = geo_idx.ok_or(DataError::MissingColumn {
            indicator,
            column: "geo",
        })?;

        let mut rows = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result.map_err(|source| DataError::CsvParse { indicator, source })?;
            let geo = r.get(geo_idx).unwrap_or("").trim();
            if geo.is_empty() {
                skipped += 1;
                continue;
            }

            let mut row = IndicatorRow::new(geo);
            row.country = non_empty(country_idx.and_then(|i| r.get(i)));
            row.region = non_empty(region_idx.and_then(|i| r.get(i)));
            for &(idx, year) in &year_cols {
                row.set_cell(year, r.get(idx).unwrap_or(""));
            }
            rows.push(row);
        }

        log::info!(
            "[gapviz] table: Loaded {} {} rows across {} years, skipped {} without geo",
            rows.len(),
            indicator,
            year_cols.len(),
            skipped
        );
        let years = year_cols.into_iter().map(|(_, year)| year).collect();
        Ok(Self::from_rows(indicator, years, rows))
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row whose geo equals `geo`. Later duplicates are never
    /// returned.
    pub fn find(&self, geo: &str) -> Option<&IndicatorRow> {
        self.first_by_geo.get(geo).map(|&i| &self.rows[i])
    }

    pub(crate) fn into_rows(self) -> Vec<IndicatorRow> {
        self.rows
    }
}

fn non_empty(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_metadata_and_years() {
        let csv = "\
geo,country,region,1999,2000
usa,United States,Americas,44000,45000
chn,China,Asia,,3000
";
        let table = IndicatorTable::parse(Indicator::Gdp, csv).unwrap();
        assert_eq!(table.years, vec![1999, 2000]);
        assert_eq!(table.len(), 2);

        let usa = table.find("usa").unwrap();
        assert_eq!(usa.country.as_deref(), Some("United States"));
        assert_eq!(usa.region.as_deref(), Some("Americas"));
        assert_eq!(usa.value(2000), Some(45000.0));

        let chn = table.find("chn").unwrap();
        assert_eq!(chn.value(1999), None, "Empty cell should be missing");
        assert_eq!(chn.value(2000), Some(3000.0));
        assert_eq!(chn.value(1800), None, "Unknown year should be missing");
    }

    #[test]
    fn parse_geo_header_is_case_insensitive() {
        let csv = "GEO,2000\nfra,12\n";
        let table = IndicatorTable::parse(Indicator::Gdp, csv).unwrap();
        assert_eq!(table.find("fra").unwrap().value(2000), Some(12.0));
    }

    #[test]
    fn parse_rejects_table_without_geo() {
        let csv = "country,2000\nFrance,12\n";
        let err = IndicatorTable::parse(Indicator::LifeExpectancy, csv).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn {
                indicator: Indicator::LifeExpectancy,
                column: "geo"
            }
        ));
    }

    #[test]
    fn parse_skips_non_numeric_cells() {
        let csv = "geo,2000,2001,2002\nind,12.5k,NaN,7\n";
        let table = IndicatorTable::parse(Indicator::Population, csv).unwrap();
        let row = table.find("ind").unwrap();
        assert_eq!(row.value(2000), None);
        assert_eq!(row.value(2001), None, "NaN literal is not a value");
        assert_eq!(row.value(2002), Some(7.0));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn parse_skips_rows_without_geo() {
        let csv = "geo,2000\n,5\nbra,6\n";
        let table = IndicatorTable::parse(Indicator::Gdp, csv).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn parse_tolerates_short_rows() {
        let csv = "geo,country,2000,2001\nnga,Nigeria,3\n";
        let table = IndicatorTable::parse(Indicator::Gdp, csv).unwrap();
        let row = table.find("nga").unwrap();
        assert_eq!(row.value(2000), Some(3.0));
        assert_eq!(row.value(2001), None);
    }

    #[test]
    fn find_returns_first_duplicate() {
        let csv = "geo,2000\nusa,1\nusa,2\n";
        let table = IndicatorTable::parse(Indicator::Gdp, csv).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.find("usa").unwrap().value(2000), Some(1.0));
    }

    #[test]
    fn parse_header_only_is_empty() {
        let table = IndicatorTable::parse(Indicator::Population, "geo,country,region,2000\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.years, vec![2000]);
    }
}
