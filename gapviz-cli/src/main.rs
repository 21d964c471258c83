//! gapviz CLI - inspect the indicator tables and the chart scenes computed
//! from them without a browser.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gapviz-cli",
    version,
    about = "Gapminder indicator dashboard toolkit"
)]
struct Cli {
    #[command(flatten)]
    options: gapviz_cmd::Options,

    #[command(subcommand)]
    command: gapviz_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[gapviz] data dir: {}", cli.options.data_dir.display());
    gapviz_cmd::run(&cli.options, cli.command)
}
