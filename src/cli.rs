use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::plan::{build_plan, plan_dream, DreamRequest};
use crate::render::{render_plan, OutputFormat};
use crate::schedule::today_in;
use crate::types::DurationUnit;
use crate::validate::{validate_dream, ValidationResult};

// Duration with optional unit suffix: "12", "6w", "3m"
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*([dwmy])?\s*$").expect("Invalid DURATION_RE regex")
});

/// CLI arguments for dream-schedule
#[derive(Parser)]
#[command(name = "dream-schedule")]
#[command(about = "Generate milestone task dates for recurring dreams")]
#[command(version)]
pub struct Cli {
    /// Timezone defining local midnight and "today" (IANA name, e.g. "Europe/Moscow")
    #[arg(long, global = true, default_value = "UTC")]
    pub tz: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate task dates from explicit arguments
    Generate(GenerateArgs),

    /// Validate a dream creation body (JSON)
    Validate(InputArgs),

    /// Validate a dream creation body and print its schedule
    Plan {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Start date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Duration, either a bare count or with a d/w/m/y suffix (e.g. "6w")
    #[arg(long, allow_hyphen_values = true, value_parser = parse_duration)]
    pub duration: DurationArg,

    /// Duration unit when --duration has no suffix
    #[arg(long, default_value = "days", value_parser = parse_unit)]
    pub unit: DurationUnit,

    /// Recurrence: daily, weekly, semi-weekly, monthly, semi-monthly
    #[arg(long, default_value = "daily")]
    pub recurrence: String,

    /// Dream title used in rendered output
    #[arg(long, default_value = "Dream")]
    pub title: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct InputArgs {
    /// JSON request body file (stdin if not specified)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output format: json, md, html
    #[arg(long, default_value = "json", value_parser = ["json", "md", "html"])]
    pub format: String,

    /// Output file path (stdout if not specified)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Parsed `--duration` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationArg {
    pub value: i64,
    pub unit: Option<DurationUnit>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let tz: Tz = self
            .tz
            .parse()
            .map_err(|_| Error::InvalidTimezone(self.tz.clone()))?;
        let today = today_in(&tz);
        tracing::debug!(tz = %tz, %today, "resolved local day");

        match self.command {
            Command::Generate(args) => {
                let start = args.start.unwrap_or(today);
                let request = DreamRequest {
                    title: args.title,
                    description: None,
                    start_date: None,
                    duration: Some(args.duration.value),
                    duration_unit: Some(args.duration.unit.unwrap_or(args.unit)),
                    recurrence: Some(args.recurrence),
                    task_titles: None,
                };
                let plan = build_plan(request, start);
                write_output(&args.output, &render_plan(&plan, output_format(&args.output))?)
            }
            Command::Validate(input) => {
                let body = read_body(&input)?;
                let result = validate_dream(&body, &tz, today);
                if !result.valid {
                    return Err(Error::Validation(result.errors));
                }
                write_stdout(&serde_json::to_string_pretty(&result)?)
            }
            Command::Plan { input, output } => {
                let body = read_body(&input)?;
                let plan = plan_dream(&body, &tz, today)?;
                write_output(&output, &render_plan(&plan, output_format(&output))?)
            }
        }
    }
}

/// Report a failed run: validation errors go to stdout in the response body
/// shape, everything else to stderr
pub fn emit_error(err: &Error) {
    if let Error::Validation(errors) = err {
        let body = ValidationResult {
            valid: false,
            errors: errors.clone(),
        };
        if let Ok(json) = serde_json::to_string_pretty(&body) {
            if write_stdout(&json).is_ok() {
                return;
            }
        }
    }
    eprintln!("error: {err}");
}

/// Parse `--duration` ("12", "6w", "-1")
pub fn parse_duration(s: &str) -> std::result::Result<DurationArg, String> {
    let caps = DURATION_RE
        .captures(s)
        .ok_or_else(|| Error::InvalidDuration(s.to_string()).to_string())?;
    let value: i64 = caps[1]
        .parse()
        .map_err(|_| Error::InvalidDuration(s.to_string()).to_string())?;
    let unit = caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(DurationUnit::from_suffix);
    Ok(DurationArg { value, unit })
}

/// Validate date format (YYYY-MM-DD)
fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{s}': {e}. Use YYYY-MM-DD format"))
}

fn parse_unit(s: &str) -> std::result::Result<DurationUnit, String> {
    s.parse().map_err(|e: crate::types::ParseEnumError| e.to_string())
}

fn output_format(args: &OutputArgs) -> OutputFormat {
    OutputFormat::from_name(&args.format).unwrap_or(OutputFormat::Json)
}

fn read_body(args: &InputArgs) -> Result<serde_json::Value> {
    let raw = match args.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn write_output(args: &OutputArgs, rendered: &str) -> Result<()> {
    match args.output {
        Some(ref path) => fs::write(path, rendered)?,
        None => write_stdout(rendered)?,
    }
    Ok(())
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_bare() {
        assert_eq!(parse_duration("12"), Ok(DurationArg { value: 12, unit: None }));
        assert_eq!(parse_duration("-1"), Ok(DurationArg { value: -1, unit: None }));
    }

    #[test]
    fn test_parse_duration_suffix() {
        assert_eq!(
            parse_duration("6w"),
            Ok(DurationArg { value: 6, unit: Some(DurationUnit::Weeks) })
        );
        assert_eq!(
            parse_duration(" 3 m "),
            Ok(DurationArg { value: 3, unit: Some(DurationUnit::Months) })
        );
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("3h").is_err());
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("99999999999999999999").is_err());
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "dream-schedule",
            "--tz",
            "Europe/Moscow",
            "generate",
            "--start",
            "2025-06-01",
            "--duration",
            "2w",
            "--recurrence",
            "semi-weekly",
        ])
        .unwrap();
        assert_eq!(cli.tz, "Europe/Moscow");
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.start, NaiveDate::from_ymd_opt(2025, 6, 1));
                assert_eq!(args.duration.unit, Some(DurationUnit::Weeks));
                assert_eq!(args.unit, DurationUnit::Days);
                assert_eq!(args.output.format, "json");
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_unit() {
        let result = Cli::try_parse_from([
            "dream-schedule",
            "generate",
            "--duration",
            "3",
            "--unit",
            "decades",
        ]);
        assert!(result.is_err());
    }
}
