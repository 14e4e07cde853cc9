//! Command-line driver for the 3-stage pipeline model.
//!
//! This binary owns the clock on behalf of the user. It performs:
//! 1. **Run:** Load a hex program image, step the core for a number of cycles
//!    (optionally asserting `stall` on chosen cycles) and report the final state.
//! 2. **Disasm:** List a program image with addresses and mnemonics.

mod image;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipe3_core::config::Config;
use pipe3_core::isa::disasm::disassemble;
use pipe3_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "pipe3",
    author,
    version,
    about = "Cycle-accurate 3-stage pipelined 16-bit ALU core",
    long_about = "Run or disassemble a program for the 3-stage pipeline model.\n\nPrograms are text files of hexadecimal 16-bit words; '#' starts a comment.\n\nExamples:\n  pipe3 run --program demo.hex --cycles 20\n  pipe3 run --program demo.hex --stall-at 3 --stall-at 4 --trace\n  pipe3 disasm --program demo.hex"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program for a fixed number of cycles.
    Run {
        /// Program image (hex words).
        #[arg(short, long)]
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of cycles to simulate.
        #[arg(short = 'n', long, default_value_t = 32)]
        cycles: u64,

        /// Assert the stall input during this cycle (0-based). May be repeated.
        #[arg(long = "stall-at", value_name = "CYCLE")]
        stall_at: Vec<u64>,

        /// Emit per-stage trace events on stderr.
        #[arg(short, long)]
        trace: bool,

        /// Print statistics as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Disassemble a program image.
    Disasm {
        /// Program image (hex words).
        #[arg(short, long)]
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            cycles,
            stall_at,
            trace,
            json,
        } => {
            init_tracing(trace);
            cmd_run(&program, config.as_deref(), cycles, &stall_at, trace, json)
        }
        Commands::Disasm { program } => cmd_disasm(&program),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--trace`.
fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the program, drives the clock and prints the final state.
///
/// A simulation error stops the run; the state reached so far is dumped
/// before the error is returned.
fn cmd_run(
    program: &Path,
    config: Option<&Path>,
    cycles: u64,
    stall_at: &[u64],
    trace: bool,
    json: bool,
) -> Result<(), String> {
    let mut config = load_config(config)?;
    config.general.trace_instructions |= trace;

    let words = image::load_image(program)?;
    let mut sim = Simulator::try_new(&config).map_err(|e| e.to_string())?;
    sim.load_program(&words).map_err(|e| e.to_string())?;

    info!(
        words = words.len(),
        cycles,
        start_pc = config.general.start_pc,
        "loaded {}",
        program.display()
    );

    let stalls: BTreeSet<u64> = stall_at.iter().copied().collect();
    let mut failure = None;
    for cycle in 0..cycles {
        sim.set_stall(stalls.contains(&cycle));
        if let Err(e) = sim.step() {
            failure = Some(format!("cycle {cycle}: {e}"));
            break;
        }
    }

    println!("pc = {:#06x}", sim.read_pc());
    print!("{}", sim.dump_registers());
    println!();
    if json {
        let stats = serde_json::to_string_pretty(sim.stats()).map_err(|e| e.to_string())?;
        println!("{stats}");
    } else {
        print!("{}", sim.stats().summary());
    }

    failure.map_or(Ok(()), Err)
}

fn cmd_disasm(program: &Path) -> Result<(), String> {
    let words = image::load_image(program)?;
    for (addr, word) in words.iter().enumerate() {
        println!("{addr:04x}:  {word:04x}    {}", disassemble(*word));
    }
    Ok(())
}
