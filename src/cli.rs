use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::path::PathBuf;

use crate::chart;
use crate::events::ReportWindow;
use crate::report;
use crate::sources::{EventSource, FileSource, SampleSource};

#[derive(Parser)]
#[command(name = "dora")]
#[command(author, version, about = "DORA Metrics Calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute deployment frequency, lead time, failure rate and time to restore
    Report {
        /// JSON file with deployment events (defaults to the built-in sample data)
        #[arg(short, long, env = "DORA_EVENTS_FILE")]
        events: Option<PathBuf>,

        /// First day of the report window (YYYY-MM-DD, midnight UTC)
        #[arg(short, long, default_value = "2025-08-01")]
        start: NaiveDate,

        /// Last day of the report window (YYYY-MM-DD, midnight UTC)
        #[arg(short = 'E', long, default_value = "2025-08-31")]
        end: NaiveDate,

        /// Append the per-day deployment chart to text output
        /// (JSON reports always carry `deployments_per_day`)
        #[arg(short, long, default_value_t = false)]
        chart: bool,
    },
    /// Render deployments per day as a bar chart
    Chart {
        /// JSON file with deployment events (defaults to the built-in sample data)
        #[arg(short, long, env = "DORA_EVENTS_FILE")]
        events: Option<PathBuf>,
    },
    /// Print the built-in sample events as JSON (always JSON, ignores --format)
    Sample,
}

fn event_source(events: Option<&PathBuf>) -> Box<dyn EventSource> {
    match events {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => Box::new(SampleSource),
    }
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let rendered = match &self.command {
            Commands::Report {
                events,
                start,
                end,
                chart: with_chart,
            } => {
                info!("Computing DORA metrics for {start} to {end}");

                let window = ReportWindow::from_dates(*start, *end)?;
                let source = event_source(events.as_ref());
                let dora_report = report::build_report(source.as_ref(), window)?;

                match self.format {
                    Format::Json => report::render_json(&dora_report, self.pretty)?,
                    Format::Text if *with_chart => format!(
                        "{}\n{}",
                        report::render_text(&dora_report),
                        chart::render_bar_chart(&dora_report.deployments_per_day)
                    ),
                    Format::Text => report::render_text(&dora_report),
                }
            }
            Commands::Chart { events } => {
                let source = event_source(events.as_ref());
                let counts = chart::deployments_per_day(&source.load()?);

                match self.format {
                    Format::Json if self.pretty => serde_json::to_string_pretty(&counts)?,
                    Format::Json => serde_json::to_string(&counts)?,
                    Format::Text => chart::render_bar_chart(&counts),
                }
            }
            Commands::Sample => {
                let events = SampleSource.load()?;
                if self.pretty {
                    serde_json::to_string_pretty(&events)?
                } else {
                    serde_json::to_string(&events)?
                }
            }
        };

        // Write to output
        if let Some(output_path) = &self.output {
            std::fs::write(output_path, rendered)?;
            info!("Output written to: {}", output_path.display());
        } else {
            println!("{}", rendered.trim_end());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DeploymentEvent;

    #[test]
    fn test_report_defaults_to_august_2025() {
        let cli = Cli::try_parse_from(["dora", "report"]).unwrap();

        let Commands::Report {
            start, end, chart, ..
        } = cli.command
        else {
            panic!("expected report command");
        };
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        assert!(!chart);
    }

    #[test]
    fn test_report_rejects_malformed_date() {
        let result = Cli::try_parse_from(["dora", "report", "--start", "08/01/2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["dora", "chart", "--format", "json", "--pretty"]).unwrap();

        assert!(matches!(cli.format, Format::Json));
        assert!(cli.pretty);
        assert!(matches!(cli.command, Commands::Chart { .. }));
    }

    #[test]
    fn test_inverted_window_fails_execution() {
        let cli = Cli::try_parse_from([
            "dora",
            "report",
            "--start",
            "2025-08-31",
            "--end",
            "2025-08-01",
        ])
        .unwrap();

        let err = cli.execute().unwrap_err();
        assert!(err.to_string().contains("Invalid report window"));
    }

    #[test]
    fn test_execute_writes_json_report_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.json");
        let cli = Cli::try_parse_from([
            "dora",
            "report",
            "--format",
            "json",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        cli.execute().unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["metrics"]["change_failure_rate"], 25.0);
    }

    #[test]
    fn test_json_report_with_chart_flag_keeps_daily_counts() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.json");
        let cli = Cli::try_parse_from([
            "dora",
            "report",
            "--chart",
            "--format",
            "json",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        cli.execute().unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["deployments_per_day"]["2025-08-03"], 2);
    }

    #[test]
    fn test_sample_is_json_even_with_text_format() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sample.json");
        let cli = Cli::try_parse_from([
            "dora",
            "sample",
            "--format",
            "text",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        cli.execute().unwrap();

        let written: Vec<DeploymentEvent> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written.len(), 8);
    }
}
