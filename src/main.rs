use clap::Parser;
use color_eyre::Result;
use epgstation_exporter::{
    init_errors,
    init_logging,
    App,
};
use epgstation_exporter_config::{
    Args,
    Config,
};
use eyre::Context as _;

#[tokio::main]
async fn main() -> Result<()> {
    init_errors()?;
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = Config::new(args).context("Failed to load configuration")?;
    App::new(config)?.run().await
}
