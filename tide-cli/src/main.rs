//! Tide CLI - build and inspect static tidal gauge data sets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tide-cli",
    version,
    about = "Tidal gauge station and water-level data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tide_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    tide_cmd::run(cli.command).await
}
