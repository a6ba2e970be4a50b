use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use ziggurat_tables::{constants::DEFAULT_OUTPUT, generate, is_up_to_date, write_module};

mod logger;

/// Generate the ziggurat lookup tables for the Normal and Exponential samplers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the generated Rust source file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Fail if the output file is missing or differs from a fresh render
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<bool> {
    let module = generate().context("failed to build ziggurat tables")?;
    debug!("rendered {} bytes", module.len());

    if args.check {
        return is_up_to_date(&args.output, &module)
            .with_context(|| format!("failed to check {}", args.output.display()));
    }

    write_module(&args.output, &module)?;
    info!("tables written to {}", args.output.display());
    Ok(true)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logger::init(args.verbose).context("failed to install logger")?;

    if run(&args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} is out of date; rerun ziggurat-gen to regenerate it",
            args.output.display()
        );
        Ok(ExitCode::FAILURE)
    }
}
