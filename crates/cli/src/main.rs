//! HX8 simulator CLI.
//!
//! This binary provides the entry points for working with HX8 programs:
//! 1. **Run:** Assemble (`.asm`) or parse (`.hex`) a program and execute
//!    it, reporting registers, statistics, and faults.
//! 2. **Assemble:** Translate mnemonic source into the two-hex-digit image
//!    format without running it.

use clap::{Parser, Subcommand};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use hx8_core::asm;
use hx8_core::{Config, Cpu};

#[derive(Parser, Debug)]
#[command(
    name = "hx8",
    author,
    version,
    about = "HX8 8-bit machine simulator",
    long_about = "Assemble and run programs for the HX8 fictional 8-bit trainer processor.\n\nExamples:\n  hx8 run -f demos/add.asm\n  hx8 run -f program.hex --trace --dump\n  hx8 asm -f demos/add.asm -o program.hex"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble (or parse) a program and execute it.
    Run {
        /// Program file: mnemonic source (.asm) or hex image (.hex).
        #[arg(short, long)]
        file: String,

        /// Trace every executed instruction (also honors RUST_LOG).
        #[arg(long)]
        trace: bool,

        /// Abort after this many instructions (0 disables the ceiling).
        #[arg(long)]
        max_steps: Option<u64>,

        /// Dump the memory grid after the run.
        #[arg(long)]
        dump: bool,

        /// JSON configuration file; CLI flags override its fields.
        #[arg(long)]
        config: Option<String>,
    },

    /// Assemble a program to the hex image format.
    Asm {
        /// Mnemonic source file.
        #[arg(short, long)]
        file: String,

        /// Output file; prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hx8=trace")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            trace,
            max_steps,
            dump,
            config,
        } => cmd_run(&file, trace, max_steps, dump, config),
        Commands::Asm { file, output } => cmd_asm(&file, output),
    }
}

/// Reads a file or exits with a diagnostic.
fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read '{path}': {e}");
        process::exit(1);
    })
}

/// Builds the run configuration from an optional JSON file plus CLI flags.
fn build_config(trace: bool, max_steps: Option<u64>, dump: bool, config: Option<String>) -> Config {
    let mut cfg = match config {
        Some(path) => Config::from_json(&read_file(&path)).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: bad config file: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if trace {
        cfg.trace = true;
    }
    if let Some(n) = max_steps {
        cfg.max_steps = if n == 0 { None } else { Some(n) };
    }
    if dump {
        cfg.dump_memory = true;
    }
    cfg
}

/// Assembles or parses the program, runs it, and reports the outcome.
///
/// On a machine fault the pre-fault registers and memory are dumped and
/// the process exits with code 1.
fn cmd_run(file: &str, trace: bool, max_steps: Option<u64>, dump: bool, config: Option<String>) {
    let cfg = build_config(trace, max_steps, dump, config);
    let dump_memory = cfg.dump_memory;
    let mut cpu = Cpu::new(cfg);

    let source = read_file(file);
    let result = if file.ends_with(".hex") {
        asm::parse_image(&source).and_then(|image| cpu.load(&image).map_err(Into::into))
    } else {
        cpu.load_source(&source)
    };
    if let Err(e) = result {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }

    match cpu.run() {
        Ok(()) => {
            cpu.dump();
            cpu.stats().report();
            if dump_memory {
                println!();
                cpu.memory().dump();
            }
        }
        Err(fault) => {
            eprintln!("[!] FAULT: {fault}");
            cpu.dump();
            if dump_memory {
                println!();
                cpu.memory().dump();
            }
            process::exit(1);
        }
    }
}

/// Assembles a source file and writes the hex image.
fn cmd_asm(file: &str, output: Option<String>) {
    let source = read_file(file);
    let image = match asm::assemble(&source) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    };

    let text = image
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ");

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, format!("{text}\n")) {
                eprintln!("[!] FATAL: could not write '{path}': {e}");
                process::exit(1);
            }
            println!("wrote {} byte(s) to {path}", image.len());
        }
        None => println!("{text}"),
    }
}
