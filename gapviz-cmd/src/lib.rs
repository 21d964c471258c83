//! Command implementations for the gapviz CLI.
//!
//! Every command loads the five indicator CSVs from a local directory, joins
//! them exactly like the browser dashboard does, and prints a report or a
//! chart scene to stdout.

use clap::{Args, Subcommand, ValueEnum};
use gapviz_data::{Indicator, Year};
use std::path::PathBuf;

pub mod load;
pub mod report;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Options {
    /// Directory holding the indicator CSVs
    #[arg(short = 'd', long, default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// JSON file overriding the dashboard defaults
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,
}

/// Which chart `scene` prints.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Bar,
    Scatter,
    Line,
}

#[derive(Subcommand)]
pub enum Command {
    /// Countries, regions, year range and per-indicator coverage
    Summary,

    /// Per-region mean of an indicator for one year
    Regions {
        /// Indicator id (population, gdp, child-mortality, life-expectancy, fertility-rate)
        #[arg(short, long, default_value = "child-mortality")]
        indicator: Indicator,

        /// Year to aggregate (defaults to the configured start year)
        #[arg(short, long)]
        year: Option<Year>,
    },

    /// One country's yearly values as CSV
    Series {
        /// Country geo code, e.g. `usa`
        geo: String,

        #[arg(short, long, default_value = "gdp")]
        indicator: Indicator,
    },

    /// The JSON scene the dashboard would draw for a selection
    Scene {
        #[arg(value_enum)]
        view: View,

        #[arg(short, long)]
        year: Option<Year>,

        /// Selected country geo code
        #[arg(long)]
        country: Option<String>,

        /// Highlighted region
        #[arg(long)]
        region: Option<String>,
    },
}

pub fn run(options: &Options, command: Command) -> anyhow::Result<()> {
    let config = load::load_config(options.config.as_deref())?;
    let dataset = load::load_dataset(&options.data_dir, &config)?;

    let output = match command {
        Command::Summary => report::summary_json(&dataset)?,
        Command::Regions { indicator, year } => {
            let year = year.unwrap_or(config.initial.year);
            report::regions_json(&dataset, indicator, year)?
        }
        Command::Series { geo, indicator } => report::series_csv(&dataset, &config, &geo, indicator)?,
        Command::Scene {
            view,
            year,
            country,
            region,
        } => {
            let request = report::SceneRequest {
                view,
                year,
                country,
                region,
            };
            report::scene_json(dataset, config, &request)?
        }
    };
    println!("{}", output);
    Ok(())
}
