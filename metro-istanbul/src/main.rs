use std::path::PathBuf;

use anyhow::Context;
use chrono::DateTime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_istanbul::api::{
    MetroClient, MetroConfig, MockTransport, TimetableQuery, Transport, fetch_faqs,
    fetch_line_directions, fetch_line_stations, fetch_lines, fetch_maps, fetch_stations,
    fetch_timetable,
};
use metro_istanbul::domain::{DirectionId, LineId, StationId};

#[derive(Debug, Parser)]
#[command(name = "metro-istanbul")]
#[command(about = "Query the Metro Istanbul mobile API")]
struct Args {
    /// API base URL (overrides METRO_BASE_URL)
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Request timeout in milliseconds (overrides METRO_TIMEOUT_MS)
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,

    /// Serve responses from a directory of JSON files instead of the API
    #[arg(long = "mock-dir")]
    mock_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all lines
    Lines,
    /// List stations, optionally for one line (e.g. M2)
    Stations {
        #[arg(long = "line")]
        line: Option<LineId>,
    },
    /// List the travel directions of a line
    Directions { line: LineId },
    /// Show departures from a station in one direction
    Timetable {
        station: u32,
        direction: u32,
        /// Only departures after this RFC 3339 instant (default: now)
        #[arg(long = "at")]
        at: Option<String>,
    },
    /// List network maps
    Maps,
    /// List frequently asked questions
    Faqs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    match &args.mock_dir {
        Some(dir) => {
            let mock = MockTransport::from_dir(dir)
                .with_context(|| format!("loading mock responses from {}", dir.display()))?;
            info!(paths = mock.available_paths().len(), "using mock transport");
            run(&mock, &args.command).await
        }
        None => {
            let mut config = MetroConfig::from_env()?;
            if let Some(url) = &args.base_url {
                config = config.with_base_url(url);
            }
            if let Some(ms) = args.timeout_ms {
                config = config.with_timeout_ms(ms);
            }
            info!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "using live API");
            let client = MetroClient::new(config)?;
            run(&client, &args.command).await
        }
    }
}

async fn run<T: Transport>(transport: &T, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Lines => print_json(&fetch_lines(transport).await?),
        Command::Stations { line: Some(line) } => {
            print_json(&fetch_line_stations(transport, *line).await?)
        }
        Command::Stations { line: None } => print_json(&fetch_stations(transport).await?),
        Command::Directions { line } => {
            print_json(&fetch_line_directions(transport, *line).await?)
        }
        Command::Timetable {
            station,
            direction,
            at,
        } => {
            let mut query = TimetableQuery::new(StationId(*station), DirectionId(*direction));
            if let Some(at) = at {
                let at = DateTime::parse_from_rfc3339(at)
                    .with_context(|| format!("invalid --at timestamp {at:?}"))?;
                query = query.at(at);
            }
            print_json(&fetch_timetable(transport, &query).await?)
        }
        Command::Maps => print_json(&fetch_maps(transport).await?),
        Command::Faqs => print_json(&fetch_faqs(transport).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
