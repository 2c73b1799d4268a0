//! twinwire-id-check - validate namespaced thing identifiers
//!
//! Checks each input against the `namespace:name` grammar and prints the
//! canonical form, or why it was rejected. Inputs come from the command line,
//! or one per line from stdin when none are given.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use twinwire_id::{IdError, NamespacedId};

#[derive(Debug, Parser)]
#[command(name = "twinwire-id-check", version, about)]
struct Cli {
    /// Identifiers to check. Read from stdin, one per line, when omitted.
    ids: Vec<String>,

    /// Treat each input as a JSON string literal (e.g. "\"ns:name\"").
    #[arg(long)]
    json: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, env = "TWINWIRE_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Result of checking a single input.
#[derive(Debug, Serialize)]
struct Report {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<NamespacedId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Report {
    fn is_valid(&self) -> bool {
        self.id.is_some()
    }

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string(self).context("failed to encode report as JSON")
            }
            OutputFormat::Text => Ok(match (&self.id, &self.error) {
                (Some(id), _) => format!(
                    "ok\t{id}\tnamespace={:?} name={:?}",
                    id.namespace(),
                    id.name()
                ),
                (None, Some(error)) => format!("invalid\t{:?}\t{error}", self.input),
                (None, None) => format!("invalid\t{:?}", self.input),
            }),
        }
    }
}

fn check(input: &str, json: bool) -> Result<NamespacedId, IdError> {
    if json {
        let mut id = NamespacedId::default();
        id.unmarshal_json(input.as_bytes())?;
        Ok(id)
    } else {
        NamespacedId::parse(input)
    }
}

fn report(input: String, json: bool) -> Report {
    match check(&input, json) {
        Ok(id) => Report {
            input,
            id: Some(id),
            error: None,
        },
        Err(err) => Report {
            input,
            id: None,
            error: Some(err.to_string()),
        },
    }
}

fn read_stdin() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read identifiers from stdin")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let inputs = if cli.ids.is_empty() {
        debug!("no identifiers given, reading stdin");
        read_stdin()?
    } else {
        cli.ids
    };

    let mut rejected = 0usize;
    for input in inputs {
        let report = report(input, cli.json);
        if !report.is_valid() {
            rejected += 1;
        }
        println!("{}", report.render(cli.output)?);
    }

    info!(rejected, "identifier check finished");

    if rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_plain_input() {
        let id = check("org.example:sensor-1", false).unwrap();
        assert_eq!(id.namespace(), "org.example");
        assert_eq!(id.name(), "sensor-1");
    }

    #[test]
    fn test_check_json_input() {
        let id = check("\"org.example:sensor-1\"", true).unwrap();
        assert_eq!(id.to_string(), "org.example:sensor-1");

        let err = check("org.example:sensor-1", true).unwrap_err();
        assert!(err.is_malformed_encoding());
    }

    #[test]
    fn test_report_text() {
        let ok = report("test:a:b".to_string(), false);
        assert_eq!(
            ok.render(OutputFormat::Text).unwrap(),
            "ok\ttest:a:b\tnamespace=\"test\" name=\"a:b\""
        );

        let bad = report("no-separator".to_string(), false);
        assert!(!bad.is_valid());
        assert!(bad
            .render(OutputFormat::Text)
            .unwrap()
            .starts_with("invalid\t\"no-separator\"\t"));
    }

    #[test]
    fn test_report_json() {
        let ok = report(":testId".to_string(), false);
        let value: serde_json::Value =
            serde_json::from_str(&ok.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "input": ":testId", "id": ":testId" })
        );

        let bad = report("a/b".to_string(), false);
        let value: serde_json::Value =
            serde_json::from_str(&bad.render(OutputFormat::Json).unwrap()).unwrap();
        assert!(value.get("id").is_none());
        assert!(value["error"].as_str().unwrap().contains("invalid namespaced ID"));
    }
}
