//! Typecast command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use typecast::BehaviorMode;
use typecast::cli::{aliases, cast, output, resolve};

/// Runtime type coercion tool
#[derive(Parser)]
#[command(name = "typecast")]
#[command(author, version, about = "Cast loosely typed values to declared types", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json, pretty)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Class declaration file (JSON), overrides TYPECAST_CLASSES
    #[arg(long, global = true)]
    classes: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a value to a type or class
    Cast {
        /// Value to cast, as JSON
        value: String,

        /// Target type name or class
        target: String,

        /// Take the value as a plain string instead of JSON
        #[arg(short, long)]
        raw: bool,

        /// Behavior mode (noop, check-only, cast-only, check-and-cast)
        #[arg(short, long)]
        mode: Option<BehaviorMode>,
    },

    /// Show what type names resolve to
    Resolve {
        /// Type or class names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List the built-in type synonyms
    Aliases {
        /// Only show synonyms of this type
        filter: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let format = output::OutputFormat::parse(cli.format.as_deref().unwrap_or("text"));

    match cli.command {
        Commands::Cast {
            value,
            target,
            raw,
            mode,
        } => cast::cast(cast::CastConfig {
            value,
            target,
            raw,
            classes: cli.classes,
            mode,
            verbose: cli.verbose,
            format,
            output_file: cli.output,
        }),

        Commands::Resolve { names } => resolve::resolve(resolve::ResolveConfig {
            names,
            classes: cli.classes,
            format,
            output_file: cli.output,
        }),

        Commands::Aliases { filter } => aliases::aliases(aliases::AliasesConfig {
            filter,
            format,
            output_file: cli.output,
        }),
    }
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
