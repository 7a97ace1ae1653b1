//! agent-card-cli: 智能体卡片校验、快照与比较的命令行工具
//!
//! Usage:
//!   agent-card-cli validate <endpoint> [--timeout <ms>]                 Quick check
//!   agent-card-cli inspect <endpoint> [--timeout <ms>] [--out <file>]   Full check
//!   agent-card-cli compare <before> <after>                             Diff two snapshot files

use agent_card_inspector::{CheckRequest, CompareRequest, Inspector, InspectorBuilder};
use anyhow::Context;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Bad command line; exits with status 2.
#[derive(Debug)]
struct UsageError(String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

fn usage(message: impl Into<String>) -> anyhow::Error {
    UsageError(message.into()).into()
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(2);
    }

    let outcome = match args[1].as_str() {
        "validate" => cmd_validate(&args[2..]).await,
        "inspect" => cmd_inspect(&args[2..]).await,
        "compare" => cmd_compare(&args[2..]),
        "version" | "--version" | "-V" => {
            cmd_version();
            return;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            process::exit(2);
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(exit_code(&err));
        }
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    let invalid_input = matches!(
        err.downcast_ref::<agent_card_inspector::Error>(),
        Some(agent_card_inspector::Error::InvalidInput { .. })
    );
    if invalid_input || err.downcast_ref::<UsageError>().is_some() {
        2
    } else {
        1
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"agent-card-cli: Agent Card 命令行工具

USAGE:
    agent-card-cli <COMMAND> [OPTIONS]

COMMANDS:
    validate <endpoint> [--timeout <ms>]                 Fetch and validate the agent card
    inspect <endpoint> [--timeout <ms>] [--out <file>]   Full check; optionally save the snapshot
    compare <before> <after>                             Diff two snapshot files (JSON or YAML)
    version                                              Show version information
    help                                                 Show this help message

EXIT STATUS:
    0  status is true
    1  status is false, or the check could not run
    2  usage error

ENVIRONMENT:
    AGENT_CARD_TIMEOUT_MS         Default fetch timeout (10000)
    AGENT_CARD_WELL_KNOWN_PATH    Card path (/.well-known/agent-card.json)
    AGENT_CARD_USER_AGENT         User-Agent header
    AGENT_CARD_PROXY_URL          Proxy for all requests
    RUST_LOG                      Log filter (logs go to stderr)"#
    );
}

fn cmd_version() {
    println!("agent-card-cli {}", env!("CARGO_PKG_VERSION"));
}

#[derive(Debug, PartialEq)]
struct CheckArgs {
    endpoint: String,
    timeout: Option<i64>,
    out: Option<PathBuf>,
}

impl CheckArgs {
    fn request(&self) -> CheckRequest {
        CheckRequest {
            endpoint: Some(Value::String(self.endpoint.clone())),
            timeout: self.timeout.map(Value::from),
        }
    }
}

fn parse_check_args(args: &[String], allow_out: bool) -> anyhow::Result<CheckArgs> {
    let mut endpoint = None;
    let mut timeout = None;
    let mut out = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--timeout" => {
                let value = iter.next().ok_or_else(|| usage("--timeout needs a value"))?;
                let millis = value
                    .parse::<i64>()
                    .map_err(|_| usage(format!("--timeout must be an integer, got {value:?}")))?;
                timeout = Some(millis);
            }
            "--out" if allow_out => {
                let value = iter.next().ok_or_else(|| usage("--out needs a file"))?;
                out = Some(PathBuf::from(value));
            }
            flag if flag.starts_with("--") => return Err(usage(format!("Unknown option: {flag}"))),
            value if endpoint.is_none() => endpoint = Some(value.to_string()),
            value => return Err(usage(format!("Unexpected argument: {value}"))),
        }
    }

    let endpoint = endpoint.ok_or_else(|| usage("Missing <endpoint>"))?;
    Ok(CheckArgs {
        endpoint,
        timeout,
        out,
    })
}

fn inspector() -> anyhow::Result<Inspector> {
    InspectorBuilder::from_env()
        .build()
        .context("failed to set up the inspector")
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

async fn cmd_validate(args: &[String]) -> anyhow::Result<bool> {
    let args = parse_check_args(args, false)?;
    let result = inspector()?.quick_check(&args.request()).await?;
    print_json(&result)?;
    Ok(result.status())
}

async fn cmd_inspect(args: &[String]) -> anyhow::Result<bool> {
    let args = parse_check_args(args, true)?;
    let report = inspector()?.full_check(&args.request()).await?;
    print_json(&report)?;

    if let Some(path) = &args.out {
        write_snapshot(path, &report.snapshot().to_value())?;
        eprintln!("Snapshot written to {}", path.display());
    }
    Ok(report.status)
}

fn cmd_compare(args: &[String]) -> anyhow::Result<bool> {
    let [before, after] = args else {
        return Err(usage("compare needs exactly two snapshot files: <before> <after>"));
    };
    let request = CompareRequest::new(
        load_snapshot(Path::new(before))?,
        load_snapshot(Path::new(after))?,
    );
    let comparison = inspector()?.compare(&request)?;
    print_json(&comparison)?;
    Ok(comparison.status)
}

fn load_snapshot(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read snapshot {}", path.display()))?;
    let value = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("{} is not valid YAML", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("{} is not valid JSON", path.display()))?
    };
    Ok(value)
}

fn write_snapshot(path: &Path, snapshot: &Value) -> anyhow::Result<()> {
    let content = if is_yaml(path) {
        serde_yaml::to_string(snapshot)?
    } else {
        serde_json::to_string_pretty(snapshot)?
    };
    std::fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))
}
