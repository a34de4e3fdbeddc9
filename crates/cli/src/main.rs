//! Reference-trace extractor CLI.
//!
//! This binary is the invocation boundary for the extraction pipeline. It performs:
//! 1. **Flag run:** Extract with explicit `--trace`/`--output` paths and options.
//! 2. **Config run:** Load a full `ExtractConfig` from a JSON file (build-orchestration mode).
//! 3. **Reporting:** Prints run counters; exits non-zero on any extraction failure.

use clap::{Parser, Subcommand};
use std::path::Path;
use std::process;

use rvtrace_core::common::addr::{AddrRange, MemAddr};
use rvtrace_core::config::{ExtractConfig, Xlen};
use rvtrace_core::extract;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rvtrace",
    author,
    version,
    about = "RISC-V reference-trace extractor",
    long_about = "Derive expected memory data from a reference simulator commit log.\n\nThe commit log is scanned for memory-write records; written values are normalized to the target word width and emitted one per line, in execution order, for comparison against RTL simulation output.\n\nExamples:\n  rvtrace extract --trace build/beq.commit.log --output build/beq.reference_output\n  rvtrace extract --trace t.log --output t.ref --xlen 32 --base 0x40001000 --size 4096\n  rvtrace extract --config build/extract.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging (per-record events) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract expected memory data from a commit log.
    Extract {
        /// Commit log produced by the reference simulator.
        #[arg(short, long)]
        trace: Option<String>,

        /// Reference data file to write (overwritten if present).
        #[arg(short, long)]
        output: Option<String>,

        /// Target word width in bits (32 or 64).
        #[arg(long, default_value_t = 64)]
        xlen: u32,

        /// Result-buffer base address (hex, e.g. 0x40001000); keeps only
        /// writes inside the buffer.
        #[arg(long)]
        base: Option<String>,

        /// Result-buffer size in bytes; required when --base is given.
        #[arg(long)]
        size: Option<u64>,

        /// JSON config file; replaces all other flags.
        #[arg(short, long, conflicts_with_all = ["trace", "output", "base", "size"])]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Some(Commands::Extract {
            trace,
            output,
            xlen,
            base,
            size,
            config,
        }) => cmd_extract(trace, output, xlen, base, size, config),
        None => {
            eprintln!("rvtrace — extract golden memory data from a commit log");
            eprintln!();
            eprintln!("  rvtrace extract --trace <log> --output <ref>   Flag-driven run");
            eprintln!("  rvtrace extract --config <json>                Config-file run");
            eprintln!();
            eprintln!("  rvtrace --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs one extraction: builds the config from flags or a JSON file, invokes
/// the pipeline, and reports the counters.
///
/// Exits with code 1 on bad flags or any extraction error; the "no writes
/// observed" case is reported and exits 0 with an empty reference file.
fn cmd_extract(
    trace: Option<String>,
    output: Option<String>,
    xlen: u32,
    base: Option<String>,
    size: Option<u64>,
    config_path: Option<String>,
) {
    let config = match config_path {
        Some(path) => load_config(&path),
        None => build_config(trace, output, xlen, base, size),
    };

    println!(
        "[*] Extracting: trace={} output={}",
        config.trace_path.display(),
        config.output_path.display()
    );

    match extract::run(&config) {
        Ok(summary) => {
            if summary.writes_matched == 0 {
                println!("[*] No memory writes observed; empty reference emitted");
            }
            println!(
                "[*] Done: {} line(s) scanned, {} write(s) matched, {} kept",
                summary.lines_scanned, summary.writes_matched, summary.writes_kept
            );
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Loads a complete `ExtractConfig` from a JSON file.
///
/// Exits the process with code 1 if the file is missing or not valid config JSON.
fn load_config(path: &str) -> ExtractConfig {
    ExtractConfig::from_json_file(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    })
}

/// Builds an `ExtractConfig` from individual flags.
///
/// Exits the process with code 1 on missing paths, an unsupported width, a
/// bad base address, or a base without a size.
fn build_config(
    trace: Option<String>,
    output: Option<String>,
    xlen: u32,
    base: Option<String>,
    size: Option<u64>,
) -> ExtractConfig {
    let (Some(trace), Some(output)) = (trace, output) else {
        eprintln!("Error: specify --trace <log> and --output <ref>, or --config <json>");
        eprintln!(
            "  rvtrace extract --trace build/beq.commit.log --output build/beq.reference_output"
        );
        process::exit(1);
    };

    let xlen = match xlen {
        32 => Xlen::Rv32,
        64 => Xlen::Rv64,
        other => {
            eprintln!("Error: unsupported --xlen {other} (expected 32 or 64)");
            process::exit(1);
        }
    };

    let region = match (base, size) {
        (None, _) => None,
        (Some(base), Some(size)) => {
            let digits = base.strip_prefix("0x").unwrap_or(&base);
            let base = u64::from_str_radix(digits, 16).unwrap_or_else(|e| {
                eprintln!("Error: invalid --base address: {e}");
                process::exit(1);
            });
            Some(AddrRange::new(MemAddr::new(base), size))
        }
        (Some(_), None) => {
            eprintln!("Error: --base requires --size <bytes>");
            process::exit(1);
        }
    };

    ExtractConfig {
        trace_path: trace.into(),
        output_path: output.into(),
        xlen,
        region,
    }
}
