//! addrcheck — classify Bitcoin addresses from the command line.

mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use addrcheck_classifier::{report_batch, Report};
use addrcheck_utils::LogFormat;
use anyhow::Context;
use clap::{CommandFactory, Parser};

use crate::config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(
    name = "addrcheck",
    version,
    about = "Classify a Bitcoin address and verify its checksum"
)]
struct Cli {
    /// Address to classify.
    address: Option<String>,

    /// Read addresses from standard input, one per line.
    #[arg(long, conflicts_with = "address")]
    stdin: bool,

    /// Output format (defaults to the config file value, then "human").
    #[arg(long, value_enum, env = "ADDRCHECK_OUTPUT")]
    output: Option<OutputFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ADDRCHECK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ADDRCHECK_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "ADDRCHECK_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CliConfig::default(),
    };

    let log_level = cli.log_level.unwrap_or(file_config.log_level);
    let log_format = cli.log_format.unwrap_or(file_config.log_format);
    let output = cli.output.unwrap_or(file_config.output);
    addrcheck_utils::init_tracing(&log_level, log_format);

    let addresses = match (cli.address, cli.stdin) {
        (Some(address), _) => vec![address],
        (None, true) => read_addresses(io::stdin().lock()).context("reading stdin")?,
        (None, false) => {
            eprintln!("{}", Cli::command().render_usage());
            return Ok(ExitCode::from(1));
        }
    };

    let reports = report_batch(addresses.as_slice());
    let valid = reports.iter().filter(|r| r.kind.is_valid()).count();
    tracing::info!(total = reports.len(), valid, "classified addresses");

    let mut out = io::stdout().lock();
    for report in &reports {
        write_report(&mut out, report, output)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Collect non-empty, trimmed lines.
fn read_addresses(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            addresses.push(trimmed.to_string());
        }
    }
    Ok(addresses)
}

fn write_report(out: &mut impl Write, report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Human => writeln!(out, "{report}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(report)?)?,
    }
    Ok(())
}
