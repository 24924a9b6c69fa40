//! qsimplify Command-Line Interface
//!
//! The main entry point for the qsimplify CLI tool. Circuits are read and
//! written as JSON; optimizer settings can be given as YAML or JSON.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::Format;
use commands::{generate, optimize, passes, rewrite, version};

/// qsimplify - quantum circuit simplification by rewrite rules
#[derive(Parser)]
#[command(name = "qsimplify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random circuit from rewrite templates
    Generate {
        /// Number of qubits (the circuit gets one extra)
        #[arg(short, long, default_value = "4")]
        qubits: u32,

        /// Number of templates to append
        #[arg(short, long, default_value = "10")]
        templates: usize,

        /// Seed for a reproducible circuit
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Apply rewrite passes in the given order
    Rewrite {
        /// Input circuit (JSON)
        #[arg(short, long)]
        input: String,

        /// Pass to apply; repeat to chain passes
        #[arg(short, long = "pass", required = true)]
        passes: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Reduce circuit depth with randomized pass sequences
    Optimize {
        /// Input circuit (JSON); a random circuit is generated if omitted
        #[arg(short, long)]
        input: Option<String>,

        /// Qubits of the generated circuit when no input is given
        #[arg(short, long, default_value = "4", conflicts_with = "input")]
        qubits: u32,

        /// Templates of the generated circuit when no input is given
        #[arg(short, long, default_value = "10", conflicts_with = "input")]
        templates: usize,

        /// Optimizer settings (YAML or JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Markov steps per trajectory
        #[arg(long)]
        iterations: Option<usize>,

        /// Number of independent trajectories
        #[arg(long)]
        restarts: Option<usize>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Run trajectories one after another
        #[arg(long)]
        sequential: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSON report of all trajectories
        #[arg(long)]
        report: Option<String>,
    },

    /// List the rewrite passes
    Passes,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Generate {
            qubits,
            templates,
            seed,
            format,
            output,
        } => generate::execute(qubits, templates, seed, format, output.as_deref()),

        Commands::Rewrite {
            input,
            passes,
            format,
            output,
        } => rewrite::execute(&input, &passes, format, output.as_deref()),

        Commands::Optimize {
            input,
            qubits,
            templates,
            config,
            iterations,
            restarts,
            seed,
            sequential,
            format,
            output,
            report,
        } => {
            let source = match input {
                Some(path) => optimize::Source::File(path),
                None => optimize::Source::Random { qubits, templates },
            };
            let overrides = optimize::Overrides {
                iterations,
                restarts,
                seed,
                sequential,
            };
            optimize::execute(
                &source,
                config.as_deref(),
                &overrides,
                format,
                output.as_deref(),
                report.as_deref(),
            )
        }

        Commands::Passes => {
            passes::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
