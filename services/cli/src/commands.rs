use crate::prompt::{prompt_for_input, verify_input_file};
use clap::{Args, ValueEnum};
use homematch::config::{AppConfig, FileConfig};
use homematch::error::AppError;
use homematch::workflows::intake::load_records;
use homematch::workflows::placement::{
    allocate, capacity, rank_buyers, render_text, write_csv, AllocationReport, AllocationSummary,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct InputSource {
    /// Input records file, resolved against APP_BASE_DIR (prompts when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Use the configured default input file instead of prompting
    #[arg(long)]
    pub(crate) no_prompt: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AllocateArgs {
    #[command(flatten)]
    pub(crate) source: InputSource,
    /// Where to write the placement results (defaults to APP_OUTPUT_FILE)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Format of the results file
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Also export one CSV row per placement
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InspectArgs {
    #[command(flatten)]
    pub(crate) source: InputSource,
}

pub(crate) fn run_allocate(args: AllocateArgs, config: &AppConfig) -> Result<(), AppError> {
    let input = select_input(&args.source, &config.files)?;
    let output = match &args.output {
        Some(path) => config.files.resolve(path),
        None => config.files.default_output_path(),
    };
    let csv = args.csv.as_ref().map(|path| config.files.resolve(path));

    execute_allocation(&input, &output, args.format, csv.as_deref())?;
    println!("File {} saved.", output.display());
    Ok(())
}

pub(crate) fn run_inspect(args: InspectArgs, config: &AppConfig) -> Result<(), AppError> {
    let input = select_input(&args.source, &config.files)?;
    let parsed = load_records(&input)?;
    let capacity = capacity(parsed.buyers.len(), parsed.roster.len())?;
    let ranked = rank_buyers(&parsed.roster, &parsed.buyers)?;

    println!(
        "Neighborhoods: {}, buyers: {}, capacity: {}",
        parsed.roster.len(),
        parsed.buyers.len(),
        capacity
    );
    println!(
        "Structurally unplaceable: {}",
        parsed.buyers.len() - capacity * parsed.roster.len()
    );
    println!("\nProcessing order");
    for (position, entry) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {} (preferred fit {}) {}",
            position + 1,
            entry.buyer.name,
            entry.preferred_fit,
            entry.buyer.preferences.join(">")
        );
    }

    Ok(())
}

/// Parses, allocates, and writes results. Output files are only written once
/// allocation has succeeded.
pub(crate) fn execute_allocation(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    csv: Option<&Path>,
) -> Result<AllocationSummary, AppError> {
    let mut parsed = load_records(input)?;
    let summary = allocate(&mut parsed.roster, &parsed.buyers)?;

    let rendered = match format {
        OutputFormat::Text => render_text(&parsed.roster),
        OutputFormat::Json => {
            let mut json = AllocationReport::new(&parsed.roster, summary).to_json()?;
            json.push('\n');
            json
        }
    };
    std::fs::write(output, rendered)?;
    info!(path = %output.display(), ?format, "wrote placement results");

    if let Some(path) = csv {
        write_csv(&parsed.roster, File::create(path)?)?;
        info!(path = %path.display(), "exported placements");
    }

    Ok(summary)
}

fn select_input(source: &InputSource, files: &FileConfig) -> Result<PathBuf, AppError> {
    let path = match &source.input {
        Some(path) => files.resolve(path),
        None if source.no_prompt => files.default_input_path(),
        None => {
            let stdin = io::stdin();
            prompt_for_input(files, &mut stdin.lock(), &mut io::stdout())?
        }
    };

    verify_input_file(&path)?;
    println!("Successfully loaded file: {}", path.display());
    Ok(path)
}
