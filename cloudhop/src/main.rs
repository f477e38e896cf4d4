//! Minimum-jump solver for the "jumping on clouds" traversal.
//!
//! Reads a sequence of `0` (safe) / `1` (thundercloud) codes and reports how
//! few 1-or-2 cloud jumps reach the last cloud.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use cloudhop::exit_codes;
use cloudhop::io::batch::load_batch;
use cloudhop::io::config::{CloudhopConfig, DEFAULT_CONFIG_PATH, load_config, write_config};
use cloudhop::io::input::{InputFormat, read_source};
use cloudhop::logging;
use cloudhop::solve::{Mode, SolveOutcome, solve_batch, solve_text};

#[derive(Parser)]
#[command(
    name = "cloudhop",
    version,
    about = "Minimum jumps across safe clouds, avoiding thunderclouds"
)]
struct Cli {
    /// Config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log solver decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the minimum number of jumps.
    Count(InputArgs),
    /// Print the landing clouds of a minimum-jump route.
    Route(InputArgs),
    /// Validate the sequence and confirm the last cloud is reachable.
    Check(InputArgs),
    /// Count jumps for every sequence in a JSON batch file.
    Batch {
        file: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file; `-` or absent reads stdin.
    input: Option<PathBuf>,

    /// Sequence given inline, e.g. "0 0 1 0".
    #[arg(long, conflicts_with = "input")]
    clouds: Option<String>,

    /// Input format (overrides `input.format` from config).
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Count(args) => cmd_solve(&cli.config, &args, Mode::Count),
        Command::Route(args) => cmd_solve(&cli.config, &args, Mode::Route),
        Command::Check(args) => cmd_solve(&cli.config, &args, Mode::Check),
        Command::Batch { file, json } => cmd_batch(&cli.config, &file, json),
        Command::InitConfig { force } => cmd_init_config(&cli.config, force),
    }
}

fn cmd_solve(config_path: &Path, args: &InputArgs, mode: Mode) -> Result<i32> {
    let config = load_config(config_path).context("load config")?;
    let raw = match &args.clouds {
        Some(inline) => inline.clone(),
        None => read_source(args.input.as_deref())?,
    };
    debug!(?mode, bytes = raw.len(), "solving input");
    let outcome = solve_text(&raw, args.format, &config, mode)?;
    print_outcome(&outcome, args.json)?;
    Ok(outcome.exit_code())
}

fn print_outcome(outcome: &SolveOutcome, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string(&outcome.to_json()).context("serialize result")?
        );
        return Ok(());
    }
    match (outcome, outcome.render_text()) {
        (_, Some(text)) => println!("{}", text),
        (SolveOutcome::Rejected(err), None) => eprintln!("{}", err),
        (_, None) => {}
    }
    Ok(())
}

fn cmd_batch(config_path: &Path, file: &Path, json: bool) -> Result<i32> {
    let config = load_config(config_path).context("load config")?;
    let batch = load_batch(file, &config.limits)?;
    let report = solve_batch(&batch);
    if json {
        let payload = serde_json::to_string_pretty(&report).context("serialize batch report")?;
        println!("{}", payload);
    } else {
        print!("{}", report.render_text());
    }
    Ok(report.exit_code())
}

fn cmd_init_config(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &CloudhopConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("wrote {}", config_path.display());
    Ok(exit_codes::OK)
}
