//! CLI entry point for stitch

use std::path::PathBuf;
use std::process;

use clap::Parser;
use stitch::{Config, RunOptions, list_files, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stitch")]
#[command(about = "Stitch a directory tree into one ordered Markdown document")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Write the document to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON config file (keys: ignore, ignoreExtensions, includeExtensions, metadataSuffix, jobs, preamble)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ignore a bare name or a root-relative path (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Ignore files with this extension (can be used multiple times)
    #[arg(long = "ignore-ext", value_name = "EXT")]
    ignore_ext: Vec<String>,

    /// Only include files with this extension (can be used multiple times)
    #[arg(long = "include-ext", value_name = "EXT")]
    include_ext: Vec<String>,

    /// Suffix of sidecar metadata files (default: .meta)
    #[arg(long = "metadata-suffix", value_name = "SUFFIX")]
    metadata_suffix: Option<String>,

    /// Number of parallel workers for reading files
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,

    /// Do not search for a SYSTEM.txt preamble
    #[arg(long = "no-preamble")]
    no_preamble: bool,

    /// Print the files that would be included, one per line, and exit
    #[arg(short, long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge defaults, the config file and command-line flags, in that order.
fn build_config(args: &Args) -> stitch::Result<Config> {
    let mut config = match args.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };

    config.ignore.extend(args.ignore.iter().cloned());
    config.ignore_extensions.extend(args.ignore_ext.iter().cloned());
    config.include_extensions.extend(args.include_ext.iter().cloned());
    if let Some(ref suffix) = args.metadata_suffix {
        config.metadata_suffix = suffix.clone();
    }
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }
    if args.no_preamble {
        config.preamble = false;
    }

    config.validate()?;
    Ok(config)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args).unwrap_or_else(|e| {
        eprintln!("stitch: {}", e);
        process::exit(1);
    });

    let mut options = RunOptions::new(&args.path, config);
    if let Some(ref output) = args.output {
        options = options.with_output(output);
    }

    if args.list {
        match list_files(&options) {
            Ok(files) => {
                for file in files {
                    println!("{}", file.relative_path);
                }
            }
            Err(e) => {
                eprintln!("stitch: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    match run(&options) {
        Ok(summary) => {
            tracing::info!(
                files = summary.files,
                placeholders = summary.degraded.len(),
                preamble = summary.preamble.as_deref().unwrap_or("none"),
                "done"
            );
        }
        Err(e) => {
            eprintln!("stitch: {}", e);
            process::exit(1);
        }
    }
}
