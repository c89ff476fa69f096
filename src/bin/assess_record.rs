//! Batch assessment of one patient intake given as JSON.
//!
//! Reads a JSON object with the intake answers (from a file or stdin),
//! validates it, evaluates eligibility and prints the advisory report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin assess_record -- [--input <path>] [--format text|json]
//! ```
//!
//! Exits with status 2 when the intake fails validation; every field
//! error is printed, not just the first.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use i131_assist::adapters::guideline::GuidelineCatalog;
use i131_assist::adapters::render::{JsonRenderer, PlainTextRenderer};
use i131_assist::adapters::sanitize::SanitizingMakeWriter;
use i131_assist::application::AssessmentService;
use i131_assist::domain::ValidationErrors;
use i131_assist::ports::ReportRenderer;
use i131_assist::{AssistError, PatientIntake};

/// Exit status for an intake that failed validation.
const EXIT_INVALID_INTAKE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: Option<PathBuf>,
    format: OutputFormat,
}

/// What one invocation produced.
#[derive(Debug)]
enum Outcome {
    Report(String),
    Rejected(ValidationErrors),
}

fn usage() -> &'static str {
    "Usage: assess_record [--input <path>] [--format text|json]\n\
     Reads intake JSON from <path>, or from stdin when --input is omitted."
}

/// Parse command-line arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
fn parse_args<I>(args: I) -> Result<Option<Args>>
where
    I: IntoIterator<Item = String>,
{
    let mut input = None;
    let mut format = OutputFormat::Text;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let path = args.next().context("--input requires a path")?;
                input = Some(PathBuf::from(path));
            }
            "--format" | "-f" => {
                let value = args.next().context("--format requires a value")?;
                format = match value.as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => bail!("Unknown format '{other}' (expected text or json)"),
                };
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("Unexpected argument '{other}'\n{}", usage()),
        }
    }

    Ok(Some(Args { input, format }))
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Assess one intake given as JSON text.
fn assess(raw: &str, format: OutputFormat) -> Result<Outcome> {
    let intake: PatientIntake =
        serde_json::from_str(raw).context("Intake is not a valid JSON object")?;
    let service = AssessmentService::new(GuidelineCatalog::new());

    let report = match service.assess_intake(&intake) {
        Ok(report) => report,
        Err(AssistError::Validation(errors)) => return Ok(Outcome::Rejected(errors)),
        Err(other) => return Err(other.into()),
    };

    let rendered = match format {
        OutputFormat::Text => PlainTextRenderer::new().render(&report)?,
        OutputFormat::Json => JsonRenderer::new(true).render(&report)?,
    };
    Ok(Outcome::Report(rendered))
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the report.
    let (writer, _guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(SanitizingMakeWriter::new(writer))
        .init();

    let Some(args) = parse_args(env::args().skip(1))? else {
        println!("{}", usage());
        return Ok(ExitCode::SUCCESS);
    };

    let raw = read_input(args.input.as_ref())?;

    match assess(&raw, args.format)? {
        Outcome::Report(rendered) => {
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected(errors) => {
            eprintln!("Intake rejected ({} problem(s)):", errors.len());
            for error in errors.errors() {
                eprintln!("  - {error}");
            }
            Ok(ExitCode::from(EXIT_INVALID_INTAKE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    const VALID_INTAKE: &str = r#"{
        "age": 45, "sex": "F", "tsh": 35,
        "pregnant": false, "breastfeeding": false, "vomiting_or_diarrhea": false,
        "followed_low_iodine_diet": true, "renal_function_ok": true,
        "on_interfering_medications": false, "can_follow_safety_instructions": true,
        "risk_category": "low"
    }"#;

    #[test]
    fn test_defaults_to_stdin_and_text() {
        let parsed = parse_args(args(&[])).expect("Should parse").expect("Not help");
        assert_eq!(
            parsed,
            Args {
                input: None,
                format: OutputFormat::Text
            }
        );
    }

    #[test]
    fn test_input_and_format_flags() {
        let parsed = parse_args(args(&["--input", "intake.json", "-f", "json"]))
            .expect("Should parse")
            .expect("Not help");
        assert_eq!(parsed.input, Some(PathBuf::from("intake.json")));
        assert_eq!(parsed.format, OutputFormat::Json);
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_args(args(&["--help"])).expect("Should parse").is_none());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(parse_args(args(&["--format", "xml"])).is_err());
        assert!(parse_args(args(&["--input"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_valid_intake_renders_report() {
        match assess(VALID_INTAKE, OutputFormat::Text).expect("Should assess") {
            Outcome::Report(text) => assert!(text.contains("Status: ELIGIBLE")),
            Outcome::Rejected(errors) => panic!("Unexpected rejection: {errors}"),
        }
    }

    #[test]
    fn test_invalid_intake_is_rejected_with_every_error() {
        let raw = r#"{"age": -4, "sex": "X", "tsh": 35, "risk_category": "low"}"#;
        match assess(raw, OutputFormat::Json).expect("Should assess") {
            // age, sex and the seven yes/no answers
            Outcome::Rejected(errors) => assert_eq!(errors.len(), 9),
            Outcome::Report(_) => panic!("Expected a rejection"),
        }
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(assess("not json", OutputFormat::Text).is_err());
    }
}
