//! Output rendering for evaluation results and debt reports

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::engine::debt::DebtReport;
use crate::engine::types::{AdmissibilityResult, CheckStatus};
use crate::error::{AdmissionError, Result};

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format for configuration output
    Yaml,
}

/// Render an admissibility result in the requested format
pub fn render_result(result: &AdmissibilityResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(result),
        OutputFormat::Yaml => render_yaml(result),
        OutputFormat::Table => {
            render_result_table(result);
            Ok(())
        }
    }
}

/// Render a debt report in the requested format
pub fn render_debt_report(report: &DebtReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Yaml => render_yaml(report),
        OutputFormat::Table => {
            render_debt_table(report);
            Ok(())
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AdmissionError::SerializationError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn render_yaml<T: Serialize>(value: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(value)
        .map_err(|e| AdmissionError::SerializationError(e.to_string()))?;
    println!("{}", yaml);
    Ok(())
}

fn render_result_table(result: &AdmissibilityResult) {
    println!();
    println!(
        "{}",
        format!("Decision Contract: {}", result.decision_id).cyan().bold()
    );
    println!("{}", "=".repeat(60));
    println!();

    let verdict = if result.admitted {
        "ADMITTED".green().bold()
    } else {
        "REJECTED".red().bold()
    };
    println!("Verdict: {}", verdict);
    println!();

    println!("{}", "Checks:".cyan().bold());
    for check in &result.checks {
        let (icon, label) = status_markers(check.status);
        println!("  {} {} {}  {}", icon, label, check.name.bold(), check.detail.dimmed());
    }

    if !result.changed_paths.is_empty() {
        println!();
        println!(
            "{}",
            format!("Changed paths ({}):", result.changed_paths.len()).cyan().bold()
        );
        for path in &result.changed_paths {
            println!("  {} {}", "-".blue(), path);
        }
    }

    if !result.failures.is_empty() {
        println!();
        println!("{}", "Failures:".red().bold());
        for failure in &result.failures {
            println!("  {} {}", "x".red(), failure);
        }
    }

    if !result.warnings.is_empty() {
        println!();
        println!("{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }
}

fn render_debt_table(report: &DebtReport) {
    println!();
    println!("{}", "Decision Debt Report".cyan().bold());
    println!("{}", "=".repeat(60));
    println!();

    if report.contracts.is_empty() {
        println!("  {}", "<no contracts found>".dimmed());
    }
    for contract in &report.contracts {
        let rendered = format!("{:.3}", contract.debt_score);
        let score = if contract.debt_score >= 0.5 {
            rendered.red().bold()
        } else if contract.debt_score > 0.0 {
            rendered.yellow()
        } else {
            rendered.green()
        };
        println!("  {} {}", score, contract.decision_id.bold());
        if !contract.reasons.is_empty() {
            println!("        {}", contract.reasons.join(", ").dimmed());
        }
    }

    println!();
    println!("{}", "Portfolio:".cyan().bold());
    println!("  Contracts:    {}", report.portfolio.contract_count);
    println!("  Average debt: {:.3}", report.portfolio.avg_debt_score);
    println!("  Snapshots:    {}", report.portfolio.snapshot_count);
    println!("  Drift:        {}", report.portfolio.drift.status.dimmed());
}

fn status_markers(status: CheckStatus) -> (colored::ColoredString, colored::ColoredString) {
    match status {
        CheckStatus::Pass => ("+".green(), "PASS".green().bold()),
        CheckStatus::Warn => ("!".yellow(), "WARN".yellow().bold()),
        CheckStatus::Fail => ("x".red(), "FAIL".red().bold()),
    }
}
