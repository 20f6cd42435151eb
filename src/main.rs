use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use alloy_primitives::B256;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use teleporter_abi::config::HarnessConfig;
use teleporter_abi::message::{Envelope, EnvelopeKind, EventLog, MessengerCall, MessengerEvent};
use teleporter_abi::verify::{self, VerifyReport};

/// Exit status for any error other than a failed verification.
const EXIT_ERROR: u8 = 1;
/// Exit status when at least one kind fails verification. Distinct from
/// clap's usage-error status (2).
const EXIT_VERIFY_FAILED: u8 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "teleporter-abi",
    about = "Encode, decode and verify Teleporter message envelopes",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
struct Cli {
    /// Enable debug-level logging when RUST_LOG is unset.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List envelope kinds and their canonical ABI type.
    Kinds {
        /// Print machine-readable JSON.
        #[arg(long)]
        json: bool,
    },
    /// Encode a JSON envelope read from FILE (or stdin) and print it as hex.
    Encode {
        #[arg(long)]
        kind: EnvelopeKind,
        file: Option<PathBuf>,
    },
    /// Decode a hex envelope and print it as JSON.
    Decode {
        #[arg(long)]
        kind: EnvelopeKind,
        hex: String,
    },
    /// Decode a messenger event log from its topics and data.
    DecodeLog {
        /// Log topic, in order; repeat once per topic.
        #[arg(long = "topic", value_name = "HEX", required = true)]
        topics: Vec<String>,
        data: String,
    },
    /// Decode messenger call data.
    DecodeCall { hex: String },
    /// Round-trip random instances of every envelope kind.
    #[command(
        after_help = "Exit status: 0 when every kind round-trips, 3 when any kind fails verification, 1 on other errors."
    )]
    Verify {
        /// Harness config file (TOML).
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        iterations: Option<u32>,
        /// Print machine-readable JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Kinds { json } => {
            if json {
                let kinds: Vec<Value> = verify::coverage::discover()
                    .iter()
                    .map(|kind| {
                        json!({
                            "kind": kind,
                            "signature": kind.param_type().to_string(),
                            "dynamic": kind.is_dynamic(),
                        })
                    })
                    .collect();
                print_json(&Value::Array(kinds))?;
            } else {
                for kind in verify::coverage::discover() {
                    println!("{kind}\t{}", kind.param_type());
                }
            }
        }
        Commands::Encode { kind, file } => {
            let raw = read_input(file.as_ref())?;
            let value: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
            let envelope = Envelope::from_json(kind, value)
                .with_context(|| format!("input is not a valid {kind}"))?;
            println!("0x{}", hex::encode(envelope.pack()));
        }
        Commands::Decode { kind, hex } => {
            let data = decode_hex(&hex)?;
            let envelope =
                Envelope::decode(kind, &data).with_context(|| format!("failed to decode {kind}"))?;
            print_json(&envelope.to_json()?)?;
        }
        Commands::DecodeLog { topics, data } => {
            let log = EventLog {
                topics: topics
                    .iter()
                    .map(|topic| decode_topic(topic))
                    .collect::<Result<_>>()?,
                data: decode_hex(&data)?.into(),
            };
            let event = MessengerEvent::decode(&log).context("failed to decode event log")?;
            print_json(&serde_json::to_value(&event)?)?;
        }
        Commands::DecodeCall { hex } => {
            let call = MessengerCall::decode(&decode_hex(&hex)?)
                .context("failed to decode call data")?;
            print_json(&serde_json::to_value(&call)?)?;
        }
        Commands::Verify {
            config,
            seed,
            iterations,
            json,
        } => {
            let config = resolve_config(config, seed, iterations)?;
            debug!(?config, "harness config");
            let report = verify::check_all(&config);
            if json {
                print_json(&report_json(&report))?;
            } else {
                print_report(&report);
            }
            return Ok(ExitCode::from(verify_exit_status(&report)));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn verify_exit_status(report: &VerifyReport) -> u8 {
    if report.is_success() {
        0
    } else {
        EXIT_VERIFY_FAILED
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_config(
    path: Option<PathBuf>,
    seed: Option<u64>,
    iterations: Option<u32>,
) -> Result<HarnessConfig> {
    let mut config = match path {
        Some(path) => HarnessConfig::load(&path)?,
        None => HarnessConfig::default(),
    };
    config.apply_env()?;
    let config = config.with_overrides(seed, iterations);
    config.validate()?;
    Ok(config)
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input: {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("invalid hex input '{input}'"))
}

fn decode_topic(input: &str) -> Result<B256> {
    let bytes = decode_hex(input)?;
    if bytes.len() != 32 {
        anyhow::bail!("topic must be 32 bytes, got {}", bytes.len());
    }
    Ok(B256::from_slice(&bytes))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_json(report: &VerifyReport) -> Value {
    let failures: Vec<Value> = report
        .failures
        .iter()
        .map(|err| json!({ "kind": err.kind(), "error": err.to_string() }))
        .collect();
    json!({
        "ok": report.is_success(),
        "seed": report.seed,
        "passed": report.passed,
        "failures": failures,
    })
}

fn print_report(report: &VerifyReport) {
    for kind in &report.passed {
        println!("ok    {} ({} iterations)", kind.kind, kind.iterations);
    }
    for err in &report.failures {
        println!("FAIL  {}: {err}", err.kind());
    }
    println!(
        "seed {}: {} passed, {} failed",
        report.seed,
        report.passed.len(),
        report.failures.len()
    );
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
