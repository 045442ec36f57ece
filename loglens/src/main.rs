use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use loglens_core::alert::WatchConfig;
use loglens_core::filter::FilterCriteria;
use loglens_core::logging::init_logging;
use loglens_core::render::{self, OutputFormat};
use loglens_core::run;
use loglens_core::source::{RecordSource, SourceError};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "loglens",
    version,
    about = "Loglens: JSONL log analysis and alerting"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a log file or stream
    Analyze {
        /// Path to a .jsonl log file; reads stdin when omitted
        log: Option<PathBuf>,

        /// Keep records at or after this ISO-8601 timestamp
        #[arg(long)]
        since: Option<String>,

        /// Keep records at or before this ISO-8601 timestamp
        #[arg(long)]
        until: Option<String>,

        /// Keep records with one of these severities (case-insensitive)
        #[arg(long = "severity", num_args = 1..)]
        severities: Vec<String>,

        /// Keep records from one of these services (case-insensitive)
        #[arg(long = "service", num_args = 1..)]
        services: Vec<String>,

        /// Output format for the summary
        #[arg(long, value_enum, default_value_t = OutputArg::Table)]
        output: OutputArg,

        /// Report each skipped line as it is encountered
        #[arg(long, short)]
        verbose: bool,
    },

    /// Evaluate alert rules over a trailing time window
    Watch {
        /// Path to a .jsonl log file; reads stdin when omitted
        log: Option<PathBuf>,

        /// Path to the watch config (YAML)
        #[arg(long)]
        config: PathBuf,

        /// Report each skipped line as it is encountered
        #[arg(long, short)]
        verbose: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputArg {
    Table,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            log,
            since,
            until,
            severities,
            services,
            output,
            verbose,
        } => {
            init_logging(verbose);

            let criteria = match build_criteria(since, until, severities, services) {
                Ok(criteria) => criteria,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    process::exit(2);
                }
            };

            let source = open_source(log.as_deref(), verbose);
            match run::analyze(source, &criteria) {
                Ok(report) => println!("{}", render::render(&report, output.into())),
                Err(e) => fatal_source_error(e),
            }
        }

        Command::Watch {
            log,
            config,
            verbose,
        } => {
            init_logging(verbose);

            let config = match WatchConfig::from_path(&config) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(2);
                }
            };

            let source = open_source(log.as_deref(), verbose);
            let now = Utc::now().fixed_offset();

            match run::watch(source, &config, now) {
                Ok(outcome) if outcome.is_ok() => eprintln!("OK"),
                Ok(outcome) => {
                    for alert in &outcome.alerts {
                        eprintln!("{alert}");
                    }
                    process::exit(1);
                }
                Err(e) => fatal_source_error(e),
            }
        }
    }
}

fn open_source(log: Option<&Path>, verbose: bool) -> RecordSource {
    let source = match log {
        Some(path) => RecordSource::from_path(path, verbose),
        None => Ok(RecordSource::stdin(verbose)),
    };

    match source {
        Ok(source) => source,
        Err(e) => fatal_source_error(e),
    }
}

fn fatal_source_error(e: SourceError) -> ! {
    eprintln!("Error: {e}");
    // Read failures mid-stream are unexpected; configuration-shaped
    // failures (bad extension, unopenable file) exit 2.
    match e {
        SourceError::Read { .. } => process::exit(1),
        _ => process::exit(2),
    }
}

fn build_criteria(
    since: Option<String>,
    until: Option<String>,
    severities: Vec<String>,
    services: Vec<String>,
) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new()
        .with_severities(severities)
        .with_services(services);

    if let Some(since) = since {
        criteria = criteria.with_since(parse_instant("since", &since)?);
    }
    if let Some(until) = until {
        criteria = criteria.with_until(parse_instant("until", &until)?);
    }

    if let (Some(since), Some(until)) = (criteria.since, criteria.until)
        && since > until
    {
        bail!("--since is after --until; no record can match");
    }

    Ok(criteria)
}

fn parse_instant(flag: &str, value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("invalid timestamp for --{flag}: '{value}'"))
}
