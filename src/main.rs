//! vm-lru - demand paging simulator with two-tier LRU eviction
//!
//! Usage: vm-lru [OPTIONS] <INPUT> <OUTPUT>
//!
//! Arguments:
//!   INPUT   - Trace file of whitespace-separated process ids
//!   OUTPUT  - File receiving the final page table and frame table
//!
//! Every access of process `p` touches the next page of `p` in round-robin
//! order. On a fault with RAM full, the process's own least recently used
//! page is evicted; only a process with no resident pages takes the least
//! recently used page of another process.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, LevelFilter};

use vm_lru::constants::*;
use vm_lru::io::write_report;
use vm_lru::{Geometry, ReportLayout, Simulation, Trace};

/// Command-line configuration
#[derive(Parser, Debug)]
#[command(name = "vm-lru")]
#[command(about = "Simulate demand paging with per-process LRU eviction")]
struct Config {
    /// Trace file of process ids
    input_file: PathBuf,

    /// Report file for the final page table and frame table
    output_file: PathBuf,

    /// Number of processes
    #[arg(short = 'p', long = "processes", default_value_t = DEFAULT_PROCESSES)]
    processes: usize,

    /// Pages per process
    #[arg(short = 'k', long = "pages", default_value_t = DEFAULT_PAGES_PER_PROCESS)]
    pages: usize,

    /// Physical frames
    #[arg(short = 'f', long = "frames", default_value_t = DEFAULT_FRAMES)]
    frames: usize,

    /// Write each frame once per legacy RAM slot, as `p, k, t`
    #[arg(long)]
    legacy_layout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Config {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn layout(&self) -> ReportLayout {
        if self.legacy_layout {
            ReportLayout::Legacy
        } else {
            ReportLayout::Compact
        }
    }
}

fn main() {
    let config = Config::parse();

    // RUST_LOG, when set, overrides the -v level
    Builder::new()
        .filter_level(config.level())
        .parse_env(Env::default())
        .format_module_path(false)
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Main logic separated from main() for cleaner error handling
fn run(config: &Config) -> Result<()> {
    let geometry = Geometry::new(config.processes, config.pages, config.frames)
        .context("invalid simulation geometry")?;

    // Whole trace is validated before any simulation state exists
    let trace = Trace::from_file(&config.input_file, geometry.processes())
        .with_context(|| format!("failed to load trace {}", config.input_file.display()))?;

    info!("input:  {}", config.input_file.display());
    info!("output: {}", config.output_file.display());

    let mut sim = Simulation::new(geometry);
    let stats = *sim.run(&trace);
    info!("hit ratio {:.3}", stats.hit_ratio());

    write_report(&config.output_file, sim.page_table(), sim.frame_table(), config.layout())
        .with_context(|| format!("failed to write report {}", config.output_file.display()))?;

    info!("report written to {}", config.output_file.display());
    Ok(())
}
