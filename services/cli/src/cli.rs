use crate::commands::{run_allocate, run_inspect, AllocateArgs, InspectArgs};
use clap::{Parser, Subcommand};
use homematch::config::AppConfig;
use homematch::error::AppError;
use homematch::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "homematch",
    about = "Place home buyers into neighborhoods by preference and fit",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Allocate buyers and write the placement results (default command)
    Allocate(AllocateArgs),
    /// Show capacity and the order buyers would be processed in
    Inspect(InspectArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Allocate(AllocateArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Allocate(args) => run_allocate(args, &config),
        Command::Inspect(args) => run_inspect(args, &config),
    }
}
