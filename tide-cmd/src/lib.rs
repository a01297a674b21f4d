//! Command implementations for the tide CLI.
//!
//! Provides subcommands for building a static tide data set from the
//! Environment Agency flood-monitoring API and for running the station and
//! reading pipeline against a data set on disk or behind a URL.

use chrono::NaiveDate;
use clap::Subcommand;

pub mod fetch;
pub mod query;
pub mod source;

#[cfg(test)]
mod test_server;

#[derive(Subcommand)]
pub enum Command {
    /// Download the station list and per-station readings into a data directory
    Fetch {
        /// Directory to write stations.json and <station>.json files into
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: String,

        /// First day of readings to request (YYYY-MM-DD)
        #[arg(long, default_value = fetch::DEFAULT_START_DATE)]
        start_date: NaiveDate,

        /// Last day of readings to request (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Flood-monitoring API root
        #[arg(long, default_value = fetch::DEFAULT_API_BASE)]
        api_base: String,
    },

    /// List the selectable stations in a data set
    Stations {
        /// Data directory, or http(s) URL the data set is published under
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: String,
    },

    /// Show one station's readings over a date range
    Query {
        /// Data directory, or http(s) URL the data set is published under
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: String,

        /// Station id
        #[arg(short = 's', long)]
        station: String,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day (YYYY-MM-DD); defaults to the start day
        #[arg(long, default_value = "")]
        end: String,

        /// Print the series and chart options as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch {
            data_dir,
            start_date,
            end_date,
            api_base,
        } => fetch::run_fetch(&data_dir, &api_base, start_date, end_date).await,
        Command::Stations { data_dir } => query::run_stations(&data_dir).await,
        Command::Query {
            data_dir,
            station,
            start,
            end,
            json,
        } => query::run_reading_query(&data_dir, &station, &start, &end, json).await,
    }
}
