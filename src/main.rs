// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use gencad_pins::export::OutputPaths;
use gencad_pins::fixup::swap_diode_pins_in_csv;
use gencad_pins::{convert, logging, LogReporter, Result};

#[derive(Parser)]
#[command(name = "gencad-pins")]
#[command(about = "Extract pin placements and connections from GENCAD files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log file written alongside console output
    #[arg(long, global = true, value_name = "FILE", default_value = "gencad_pins.log")]
    log_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a GENCAD file and write pins, connections, netlist, outline and graph CSVs
    Export {
        /// Path to the .cad file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Directory for the CSV files (defaults to the input's directory)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Swap diode pin coordinates in an exported pin table
    SwapDiodes {
        /// CSV with component, pin_name, x and y columns
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to write the corrected CSV
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

fn handle_export(input: &Path, output_dir: Option<&Path>) -> Result<()> {
    let report = LogReporter;
    log::info!("Starting GENCAD parser for file: {}", input.display());

    let paths = OutputPaths::for_input(input, output_dir);
    convert(input, &paths, &report)?;

    log::info!("GENCAD parsing completed successfully");
    println!("GENCAD parsing completed successfully");
    println!("Output files:");
    for path in paths.all() {
        println!("- {}", path.display());
    }
    Ok(())
}

fn handle_swap_diodes(input: &Path, output: &Path) -> Result<()> {
    let swapped = swap_diode_pins_in_csv(input, output, &LogReporter)?;
    println!(
        "Swapped coordinates for {swapped} diode components, wrote {}",
        output.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = logging::init(&cli.log_file, level) {
        log::warn!(
            "Could not open log file {}: {e}; logging to console only",
            cli.log_file.display()
        );
    }

    let result = match &cli.command {
        Commands::Export { input, output_dir } => handle_export(input, output_dir.as_deref()),
        Commands::SwapDiodes { input, output } => handle_swap_diodes(input, output),
    };

    if let Err(e) = result {
        log::error!("{e}");
        println!("Error: {e}");
        process::exit(1);
    }
}
