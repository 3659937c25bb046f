// src/main.rs
//! Command line front end for listing, dumping and patching the watermark
//! segment of JFIF files.

use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jfif_rs::{dump_file, list_file, patch_file, JfifError};

/// Inspect and rewrite JPEG/JFIF marker segments.
#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct CliArgs {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all JFIF headers.
    List {
        /// The file to list the sections from.
        file: PathBuf,
    },
    /// Patch the watermark APP0 section in a file.
    Patch {
        /// File to read from.
        input: PathBuf,
        /// File to write to.
        output: PathBuf,
        /// Segment bytes to put in place of the watermark section.
        patch: PathBuf,
        /// Force overwrite of output if it already exists.
        #[arg(short, long)]
        force: bool,
    },
    /// Dump the watermark APP0 section to a file.
    Dump {
        /// JFIF input file.
        input: PathBuf,
        /// The output file to dump the section to.
        output: PathBuf,
        /// Force overwrite of output if it already exists.
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Commands::List { file } => {
            let entries = list_file(&file)
                .with_context(|| format!("Failed to list {}", file.display()))?;
            println!("Reading {}:", file.display());
            for entry in entries {
                println!("{}", entry);
            }
        }
        Commands::Patch {
            input,
            output,
            patch,
            force,
        } => {
            let summary = patch_file(&input, &output, &patch, force)
                .with_context(|| format!("Failed to patch {}", input.display()))?;
            match summary.replaced {
                Some(segment) => eprintln!(
                    "Replaced {} with {} bytes from {}",
                    segment,
                    summary.replacement_len,
                    patch.display()
                ),
                None => eprintln!("No watermark found, copied {} unchanged", input.display()),
            }
        }
        Commands::Dump {
            input,
            output,
            force,
        } => match dump_file(&input, &output, force) {
            Ok(summary) => eprintln!(
                "Wrote {} bytes from {} to {}",
                summary.bytes_written,
                summary.segment,
                output.display()
            ),
            Err(JfifError::WatermarkNotFound) => {
                eprintln!("No watermark found in {}", input.display());
                exit(1);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to dump {}", input.display()))
            }
        },
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    run(args)
}
