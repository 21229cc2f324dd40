use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use discovery_error::DiscoveryError;
use discovery_harness::{
    Suite, SuiteFormat, load_suite, parse_suite, render_suite_logs, run_source_tests,
};
use discovery_sources::{ColourNameSource, Source};
use tracing::info;
use tracing_subscriber::EnvFilter;

const EMBEDDED_COLOUR_SUITE: &str = include_str!("../suites/colour_name.json");
const DEFAULT_SOURCE: &str = "colour-name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

/// Outcome of a completed run; usage and load errors travel as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuiteOutcome {
    Passed,
    Failed,
}

#[derive(Debug)]
struct CliConfig {
    source: String,
    suite_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    log_format: LogFormat,
}

fn print_help() {
    let help = "\
source-conformance — run a declarative conformance suite against a discovery source

USAGE:
    cargo run -p discovery-cli --bin source-conformance -- [OPTIONS]

OPTIONS:
    --source <NAME>           Source under test (default: colour-name)
    --suite <PATH>            Suite file, .json or .toml (default: embedded colour-name suite)
    --output <PATH>           Write JSON report to path (stdout when omitted)
    --log-format <FORMAT>     text | json (default: text); filter with RUST_LOG
    -h, --help                Show this help
";
    println!("{help}");
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut source = DEFAULT_SOURCE.to_owned();
    let mut suite_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut log_format = LogFormat::Text;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--source" => {
                index += 1;
                source = args
                    .get(index)
                    .ok_or("--source requires a value")?
                    .clone();
            }
            "--suite" => {
                index += 1;
                let value = args.get(index).ok_or("--suite requires a value")?;
                suite_path = Some(PathBuf::from(value));
            }
            "--output" => {
                index += 1;
                let value = args.get(index).ok_or("--output requires a value")?;
                output_path = Some(PathBuf::from(value));
            }
            "--log-format" => {
                index += 1;
                log_format = match args.get(index).map(String::as_str) {
                    Some("text") => LogFormat::Text,
                    Some("json") => LogFormat::Json,
                    Some(other) => return Err(format!("unknown log format: {other}")),
                    None => return Err("--log-format requires a value".to_owned()),
                };
            }
            "-h" | "--help" => {
                print_help();
                return Err(String::new());
            }
            unknown => {
                return Err(format!("unknown option: {unknown}"));
            }
        }
        index += 1;
    }

    Ok(CliConfig {
        source,
        suite_path,
        output_path,
        log_format,
    })
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // A subscriber installed earlier in the process keeps receiving events.
    let _ = installed;
}

fn source_by_name(name: &str) -> Option<Box<dyn Source>> {
    match name {
        "colour-name" => Some(Box::new(ColourNameSource::new())),
        _ => None,
    }
}

fn load(config: &CliConfig) -> Result<Suite, DiscoveryError> {
    match &config.suite_path {
        Some(path) => load_suite(path),
        None => parse_suite(EMBEDDED_COLOUR_SUITE, SuiteFormat::Json),
    }
}

fn run(args: &[String]) -> Result<SuiteOutcome, String> {
    let config = parse_args(args)?;
    init_tracing(config.log_format);

    let source = source_by_name(&config.source)
        .ok_or_else(|| format!("unknown source: {} (known: {DEFAULT_SOURCE})", config.source))?;
    let suite = load(&config).map_err(|error| format!("suite_load_failed: {error}"))?;
    info!(
        source = source.name(),
        suite = %suite.name,
        cases = suite.cases.len(),
        "running conformance suite"
    );
    let report = run_source_tests(source.as_ref(), &suite.cases);

    let payload = serde_json::to_string_pretty(&report)
        .map_err(|error| format!("report_serialize_failed: {error}"))?;

    if let Some(output_path) = &config.output_path {
        std::fs::write(output_path, payload).map_err(|error| {
            format!(
                "report_write_failed path={} error={error}",
                output_path.display()
            )
        })?;
    } else {
        println!("{payload}");
    }

    if report.overall_pass {
        return Ok(SuiteOutcome::Passed);
    }

    for line in render_suite_logs(&report) {
        eprintln!("WARN {line}");
    }
    Ok(SuiteOutcome::Failed)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(SuiteOutcome::Passed) => ExitCode::SUCCESS,
        Ok(SuiteOutcome::Failed) => ExitCode::from(1),
        Err(error) if error.is_empty() => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("ERROR source-conformance failed: {error}");
            ExitCode::from(2)
        }
    }
}
