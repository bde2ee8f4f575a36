mod check;
mod error_formatter;
mod formatter;
mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use proofer::{ResourceLimits, Rule, Session};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "proofer")]
#[command(about = "An interactive propositional logic proof assistant.")]
#[command(
    long_about = "Proofer checks arguments in propositional logic, one rule at a time.\nEnter premises, type 'therefore', enter the conclusion, then cite rules such as MP(1,2) until the conclusion is among the facts."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Longest formula accepted, in bytes
    #[arg(long, global = true, default_value_t = ResourceLimits::default().max_formula_bytes)]
    max_length: usize,

    /// Deepest formula nesting accepted
    #[arg(long, global = true, default_value_t = ResourceLimits::default().max_nesting_depth)]
    max_depth: usize,

    /// Log rule applications and mode changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    ///
    /// Reads premises, a conclusion and rule invocations from standard input.
    /// Type 'help' at any prompt for the commands available in the current mode.
    Repl,
    /// Replay a script of session lines and report whether it proves its conclusion
    ///
    /// Each non-blank line is handled as if typed at the prompt. Lines starting
    /// with '#' are comments. Exits with failure unless the conclusion is shown.
    Check {
        /// Script to replay
        file: PathBuf,
        /// Print a JSON report instead of a transcript
        #[arg(long)]
        json: bool,
        /// Stop at the first line that fails
        #[arg(long)]
        strict: bool,
    },
    /// Print the canonical form of a formula
    ///
    /// Examples:
    ///   ~p^q      - prints ~(p ^ q)
    ///   (~p^q)    - prints (~p ^ q)
    Parse {
        /// Formula to parse
        formula: String,
    },
    /// List the rule catalog
    Rules,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let limits = ResourceLimits {
        max_formula_bytes: cli.max_length,
        max_nesting_depth: cli.max_depth,
    };

    let result = match &cli.command {
        None | Some(Commands::Repl) => repl_command(limits),
        Some(Commands::Check { file, json, strict }) => {
            check_command(file, *json, *strict, limits)
        }
        Some(Commands::Parse { formula }) => parse_command(formula, &limits),
        Some(Commands::Rules) => rules_command(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "proofer=debug"
    } else {
        "proofer=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn repl_command(limits: ResourceLimits) -> Result<()> {
    let mut session = Session::with_limits(limits);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let color = stdout.is_terminal();
    interactive::run_repl(&mut session, stdin.lock(), &mut stdout, color)
}

fn check_command(path: &Path, json: bool, strict: bool, limits: ResourceLimits) -> Result<()> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;

    let mut session = Session::with_limits(limits);
    let steps = check::replay(&mut session, &script, strict);
    let proven = session.facts().is_proven();
    debug!("Replayed {} lines from {}", steps.len(), path.display());

    if json {
        let report = check::report(&session, &steps);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let source_id = path.display().to_string();
        let color = io::stdout().is_terminal();
        print!("{}", check::transcript(&steps, &source_id, proven, color));
    }

    if strict {
        if let Some(step) = check::first_failure(&steps) {
            anyhow::bail!("{}:{}: '{}' failed", path.display(), step.line, step.input);
        }
    }
    if !proven {
        anyhow::bail!("{} does not show its conclusion", path.display());
    }

    Ok(())
}

fn parse_command(formula: &str, limits: &ResourceLimits) -> Result<()> {
    match proofer::parse_with_limits(formula, limits) {
        Ok(parsed) => {
            println!("{}", parsed);
            Ok(())
        }
        Err(err) => {
            let color = io::stderr().is_terminal();
            eprintln!(
                "{}",
                error_formatter::format_parse_error(&err, "<formula>", formula, color)
            );
            std::process::exit(1);
        }
    }
}

fn rules_command() -> Result<()> {
    let formatter = Formatter::default();
    print!("{}", formatter.format_rules(&Rule::ALL));
    Ok(())
}
