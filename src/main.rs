/*!
# Inferred Name Analyzer CLI

Command-line interface: scan files or directories for redundant explicit
names and optionally rewrite them in place.
*/

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use rayon::prelude::*;
use tracing::info;
use walkdir::WalkDir;

use inferred_name_analyzer::{
    check_source, fix_source, Diagnostic, LineIndex, RuleSeverity, RulesConfig,
};

#[derive(Parser)]
#[command(
    name = "inferred-name-analyzer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detects and removes redundant explicit names in tuple literals and anonymous-object members"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML rules configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files and report diagnostics
    Check {
        /// File or directory to scan
        path: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Apply every available fix, one atomic rewrite per document
    Fix {
        /// File or directory to fix
        path: PathBuf,

        /// Rewrite files in place instead of printing the result
        #[arg(short, long)]
        write: bool,
    },

    /// Write a default rules configuration file
    GenerateConfig {
        /// Output file
        #[arg(short, long, default_value = "inferred-name-rules.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => RulesConfig::load_from_file(path)?,
        None => RulesConfig::default(),
    };

    match cli.command {
        Commands::Check { path, format } => run_check(&path, &config, &format),
        Commands::Fix { path, write } => run_fix(&path, &config, write),
        Commands::GenerateConfig { output } => run_generate_config(&output),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Source files the analyzer understands.
const SUPPORTED_EXTENSIONS: &[&str] = &["cs", "csx"];

fn collect_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

struct FileReport {
    file: PathBuf,
    text: String,
    diagnostics: Vec<Diagnostic>,
}

fn scan_files(files: &[PathBuf], config: &RulesConfig) -> Vec<FileReport> {
    // Documents are independent immutable snapshots, so scanning is
    // embarrassingly parallel.
    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|file| {
            let text = match std::fs::read_to_string(file) {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(file = %file.display(), %err, "skipping unreadable file");
                    return None;
                }
            };
            let diagnostics = check_source(&file.display().to_string(), &text, config);
            Some(FileReport { file: file.clone(), text, diagnostics })
        })
        .collect();
    reports.sort_by(|a, b| a.file.cmp(&b.file));
    reports
}

fn run_check(path: &Path, config: &RulesConfig, format: &str) -> Result<()> {
    let started = Instant::now();
    let files = collect_files(path)?;
    let reports = scan_files(&files, config);

    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    let mut has_errors = false;

    match format {
        "json" => {
            let entries: Vec<serde_json::Value> = reports
                .iter()
                .flat_map(|report| {
                    let index = LineIndex::new(&report.text);
                    report.diagnostics.iter().map(move |diag| {
                        let pos = index.to_position(diag.reported_span.start);
                        serde_json::json!({
                            "file": report.file.display().to_string(),
                            "rule": diag.rule_id,
                            "severity": diag.severity.to_string(),
                            "line": pos.line + 1,
                            "column": pos.column + 1,
                            "message": diag.message(),
                        })
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => {
            for report in &reports {
                let index = LineIndex::new(&report.text);
                for diag in &report.diagnostics {
                    let pos = index.to_position(diag.reported_span.start);
                    let severity = match diag.severity {
                        RuleSeverity::Error => style("error").red().bold(),
                        RuleSeverity::Warning => style("warning").yellow().bold(),
                        _ => style("info").cyan(),
                    };
                    println!(
                        "{}:{}: {} [{}] {}",
                        report.file.display(),
                        pos,
                        severity,
                        diag.rule_id,
                        diag.message()
                    );
                }
            }
            println!(
                "{} {} diagnostic(s) in {} file(s) ({:.1?})",
                style("Found").bold(),
                total,
                reports.len(),
                started.elapsed()
            );
        }
    }

    for report in &reports {
        if report
            .diagnostics
            .iter()
            .any(|d| d.severity == RuleSeverity::Error)
        {
            has_errors = true;
        }
    }
    if has_errors {
        std::process::exit(1);
    }
    Ok(())
}

fn run_fix(path: &Path, config: &RulesConfig, write: bool) -> Result<()> {
    let files = collect_files(path)?;
    let single_file = path.is_file();

    let results: Vec<(PathBuf, String, bool)> = files
        .par_iter()
        .filter_map(|file| {
            let text = match std::fs::read_to_string(file) {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(file = %file.display(), %err, "skipping unreadable file");
                    return None;
                }
            };
            let fixed = fix_source(&file.display().to_string(), &text, config);
            let changed = fixed != text;
            Some((file.clone(), fixed, changed))
        })
        .collect();

    let changed_count = results.iter().filter(|(_, _, changed)| *changed).count();

    if write {
        for (file, fixed, changed) in &results {
            if *changed {
                std::fs::write(file, fixed)
                    .with_context(|| format!("Failed to write {}", file.display()))?;
                info!(file = %file.display(), "rewrote file");
            }
        }
        println!(
            "{} {} of {} file(s)",
            style("Fixed").green().bold(),
            changed_count,
            results.len()
        );
    } else if single_file {
        // Dry run on one file prints the fixed text for inspection.
        if let Some((_, fixed, _)) = results.first() {
            print!("{}", fixed);
        }
    } else {
        println!(
            "{} {} of {} file(s) would change (use --write to apply)",
            style("Dry run:").bold(),
            changed_count,
            results.len()
        );
    }
    Ok(())
}

fn run_generate_config(output: &Path) -> Result<()> {
    let config = RulesConfig::default();
    std::fs::write(output, config.to_toml_string()?)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("{} {}", style("Wrote").green().bold(), output.display());
    Ok(())
}
