//! # Eurocheck CLI
//!
//! Evaluates check results from the command line, either one at a time
//! (`compare`, `unity`, `fos`) or as a batch from a JSON document (`eval`).
//! Verdicts go to stdout as a text table or as JSON with `--json`; logs go
//! to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use check_core::{Check, CheckItem, CheckReport, CheckResult, CheckResultInput};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for check_cli
#[derive(Parser, Debug)]
#[command(name = "check_cli")]
#[command(about = "Reconcile structural check results (provided/required, unity check, factor of safety)")]
#[command(version)]
struct Cli {
    /// Print JSON instead of a text table
    #[arg(long, global = true, env = "CHECK_CLI_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every check in a JSON document ("-" reads stdin)
    Eval {
        file: PathBuf,
    },
    /// Compare a provided value against a required value
    Compare {
        #[arg(long)]
        provided: f64,
        #[arg(long)]
        required: f64,
        /// One of <, <=, ==, >=, >, !=
        #[arg(long, default_value = "<=")]
        operator: String,
    },
    /// Verdict from a unity check
    Unity {
        value: f64,
    },
    /// Verdict from a factor of safety
    Fos {
        value: f64,
    },
}

/// Batch input for `eval`
#[derive(Debug, Deserialize)]
struct EvalDocument {
    #[serde(default = "default_title")]
    title: String,
    checks: Vec<CheckItem>,
}

fn default_title() -> String {
    "Checks".to_string()
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "check_cli=info,check_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let report = build_report(&cli.command)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).context("Failed to serialize report")?);
    } else {
        for line in report.summary_lines() {
            println!("{line}");
        }
    }

    Ok(if report.passes() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn build_report(command: &Command) -> Result<CheckReport> {
    match command {
        Command::Eval { file } => {
            let text = read_input(file)?;
            let document: EvalDocument = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse check document '{}'", file.display()))?;
            info!("Evaluating {} checks from '{}'", document.checks.len(), file.display());

            let mut report = CheckReport::new(document.title);
            for item in &document.checks {
                debug!(name = item.name(), check_type = item.check_type(), "evaluating check");
                report
                    .push_check(item)
                    .with_context(|| format!("Check '{}' is invalid", item.name()))?;
            }
            Ok(report)
        }
        Command::Compare {
            provided,
            required,
            operator,
        } => {
            let result = CheckResultInput::default()
                .with_comparison(*provided, *required)
                .with_operator(operator.as_str())
                .build()
                .context("Invalid comparison")?;
            Ok(single("Comparison", result))
        }
        Command::Unity { value } => {
            let result = CheckResult::from_unity_check(*value).context("Invalid unity check")?;
            Ok(single("Unity check", result))
        }
        Command::Fos { value } => {
            let result = CheckResult::from_factor_of_safety(*value).context("Invalid factor of safety")?;
            Ok(single("Factor of safety", result))
        }
    }
}

fn single(name: &str, result: CheckResult) -> CheckReport {
    let mut report = CheckReport::new(name);
    report.push(name, result);
    report
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read checks from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read '{}'", file.display()))
    }
}
