use fl_player_stats::file_creation::file_creator::{create_json_file, write_json};
use fl_player_stats::{
    extract_players, ExtractOptions, NicknameTable, RangeFilter, RangeType, SortDirection,
    SortField,
};

use clap::Parser;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Builds a JSON player report from Freelancer multiplayer save files.
#[derive(Debug, Parser)]
#[command(name = "fl-player-stats", version)]
struct Args {
    /// Directory holding the account folders with save files
    save_dir: PathBuf,

    /// Freelancer DATA directory, used to resolve ship names
    #[arg(long)]
    install_dir: PathBuf,

    /// Only include players active in the last N days
    #[arg(long)]
    range: Option<u32>,

    /// Timestamp the range applies to
    #[arg(long, value_enum, default_value_t = RangeType::LastSeen)]
    range_type: RangeType,

    /// Field to sort the report by
    #[arg(long, value_enum)]
    sort: Option<SortField>,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortDirection::Asc)]
    direction: SortDirection,

    /// Number of worker threads (defaults to one per CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let ships = NicknameTable::from_install_dir(&args.install_dir)?;
    let options = ExtractOptions {
        range: args
            .range
            .map(|days| RangeFilter::new(days, args.range_type)),
        threads: args.threads,
    };

    let report =
        extract_players(&args.save_dir, &ships, &options)?.sort(args.sort, args.direction);

    match &args.output {
        Some(path) => {
            create_json_file(path, &report)?;
            log::info!("Wrote {} players to {}", report.len(), path.display());
        }
        None => write_json(io::stdout().lock(), &report)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
