//! Command-line entry point for the direction-table generator.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use dir_lut_gen::{generate_into, init_logging};

/// Generates DirLut.cs, a pre-normalised 2D direction lookup table
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to write the generated file into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);

    let artifact = generate_into(&args.out_dir)?;
    println!(
        "Wrote {}  ({} KB)",
        artifact.path.display(),
        artifact.kilobytes()
    );
    Ok(())
}
