mod config;
mod demo;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use command_tree_core::{render_usage, unknown_command_message};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::output::{LookupReport, OutputFormat, format_report, format_tree};

#[derive(Debug, Parser)]
#[command(name = "cmdtree")]
#[command(about = "Resolve argument vectors against a command tree")]
struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format (overrides the config file).
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve arguments against the built-in tree and report the result.
    Resolve(ResolveArgs),
    /// Print usage for the command selected by a path.
    Usage(UsageArgs),
    /// Print the built-in command tree.
    Tree,
    /// Write a config file populated with the defaults.
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Do not print usage when resolution fails.
    #[arg(long)]
    no_usage: bool,
    /// Exit successfully even when resolution fails.
    #[arg(long)]
    lenient: bool,
    /// Tokens to resolve. Use `--` before tokens that start with `-`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Command path, e.g. `config get`.
    path: Vec<String>,
}

#[derive(Debug, Args)]
struct InitConfigArgs {
    /// Destination file.
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CliConfig::load_or_default(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    debug!(?config, "configuration resolved");

    match cli.command {
        Command::Resolve(args) => run_resolve(args, config),
        Command::Usage(args) => run_usage(args),
        Command::Tree => run_tree(config),
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn run_resolve(args: ResolveArgs, mut config: CliConfig) -> Result<()> {
    if args.no_usage {
        config.usage_on_miss = false;
    }
    if args.lenient {
        config.strict = false;
    }

    let tree = demo::demo_tree()?;
    let lookup = tree.lookup(args.args.as_slice());
    debug!(
        command = lookup.command.name(),
        found = lookup.found,
        remaining = lookup.remaining.len(),
        "lookup finished"
    );

    let report = LookupReport::from_lookup(&lookup);
    print!("{}", ensure_newline(format_report(&report, config.format)?));

    if let Some(message) = unknown_command_message(&lookup) {
        if config.usage_on_miss {
            eprint!("{}", render_usage(lookup.command));
        }
        if config.strict {
            return Err(CliError::UnknownCommand(message));
        }
        eprintln!("warning: {message}");
    }
    Ok(())
}

fn run_usage(args: UsageArgs) -> Result<()> {
    let tree = demo::demo_tree()?;
    let lookup = tree.lookup(args.path.as_slice());

    print!("{}", render_usage(lookup.command));
    match unknown_command_message(&lookup) {
        Some(message) => Err(CliError::UnknownCommand(message)),
        None => Ok(()),
    }
}

fn run_tree(config: CliConfig) -> Result<()> {
    let tree = demo::demo_tree()?;
    print!("{}", ensure_newline(format_tree(&tree, config.format)?));
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    CliConfig::default().save(&args.output)?;
    info!(path = %args.output.display(), "wrote default config");
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
