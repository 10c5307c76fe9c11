//! Simple computer simulator CLI.
//!
//! This binary loads an instruction image and a data image, runs the CPU until
//! it halts, and prints a memory and register dump. It performs:
//! 1. **Argument checking:** Exactly two positional image paths; anything else
//!    prints usage and exits successfully.
//! 2. **Loading:** Both images (and an optional JSON config) are read before
//!    the first cycle; a load failure is reported and the run is abandoned.
//! 3. **Reporting:** Dump and optional statistics after the run ends.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{env, fs};

use clap::Parser;
use clap::builder::PossibleValuesParser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use simplecpu_core::Simulator;
use simplecpu_core::common::{Result, SimError};
use simplecpu_core::config::Config;
use simplecpu_core::sim::RunOutcome;
use simplecpu_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "simplecpu",
    author,
    version,
    about = "Cycle-level simulator for a 16-bit educational CPU",
    long_about = "Load an instruction image and a data image (one hex word per line) and run until the halt instruction.\n\nExamples:\n  simplecpu instr.txt data.txt\n  simplecpu instr.txt data.txt --trace --max-cycles 10000"
)]
struct Cli {
    /// Instruction memory image.
    instr: PathBuf,

    /// Data memory image.
    data: PathBuf,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit a trace event for every cycle.
    #[arg(long)]
    trace: bool,

    /// Stop after this many cycles even if the program has not halted.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Number of data-memory words to print after the run.
    #[arg(long)]
    dump_words: Option<u16>,

    /// Skip the memory and register dump.
    #[arg(long)]
    no_dump: bool,

    /// Print run statistics.
    #[arg(long)]
    stats: bool,

    /// Print only these statistics sections (comma-separated); implies --stats.
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats_sections: Vec<String>,
}

impl Cli {
    /// Builds the effective configuration: file first, then flag overrides.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json(&read_config(path)?)?,
            None => Config::default(),
        };
        if self.trace {
            config.general.trace_instructions = true;
        }
        if let Some(max) = self.max_cycles {
            config.general.max_cycles = Some(max);
        }
        if let Some(words) = self.dump_words {
            config.general.dump_words = words;
        }
        if self.no_dump {
            config.general.dump_on_halt = false;
        }
        Ok(config)
    }

    /// Statistics sections to print, or `None` when statistics are off.
    /// An empty list selects every section.
    fn stats_sections(&self) -> Option<Vec<&str>> {
        if !self.stats && self.stats_sections.is_empty() {
            return None;
        }
        Some(self.stats_sections.iter().map(String::as_str).collect())
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Usage text printed for a wrong argument count.
fn usage(prog: &str) -> String {
    format!("{prog}: Illegal arguments\nUsage: {prog} instr.txt data.txt")
}

fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let prog = env::args().next().unwrap_or_else(|| "simplecpu".to_string());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                println!("{}", usage(&prog));
                return ExitCode::SUCCESS;
            }
            _ => e.exit(),
        },
    };

    init_tracing(cli.trace);
    run(&cli)
}

fn run(cli: &Cli) -> ExitCode {
    print!("Simple computer initializing... ");

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            println!("\nThere was a problem reading the configuration: {e}");
            return ExitCode::SUCCESS;
        }
    };

    let mut sim = match Simulator::from_files(&cli.instr, &cli.data, config) {
        Ok(sim) => sim,
        Err(e) => {
            println!("\nThere was a problem reading the instruction or data memory files.");
            eprintln!("{e}");
            return ExitCode::SUCCESS;
        }
    };

    println!("Program memory read successfully. Computer is running.\n");

    match sim.run() {
        RunOutcome::Halted { cycles } => println!("[*] Halted after {cycles} cycles\n"),
        RunOutcome::CycleLimit { cycles } => {
            println!("[!] Stopped at cycle limit ({cycles} cycles), pc={:#x}\n", sim.cpu.regs.pc);
        }
    }

    if sim.config.general.dump_on_halt {
        sim.cpu.dump_state(sim.config.general.dump_words);
    }
    if let Some(sections) = cli.stats_sections() {
        print!("{}", sim.cpu.stats.report_sections(&sections));
    }

    ExitCode::SUCCESS
}
