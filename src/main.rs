use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use risk_rater::output::ExportDocument;
use risk_rater::report::build_report;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_EXPORT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rate every application and print the portfolio report (default if no subcommand)
    Report,
    /// Show how one application's score was built up
    Explain {
        /// Application identifier, as keyed in the inventory
        app_id: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Tab-separated rows for scripting
    Tsv,
    /// Results and report as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "risk-rater")]
#[command(about = "Application security risk rating from inventory metadata", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/risk-rater/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Inventory JSON to rate (overrides config)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Number of riskiest applications to list (overrides config)
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Also write results and report as JSON to this path (overrides config)
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Report);
    let start_time = Instant::now();

    // Load config, then let flags override it
    let mut config = match risk_rater::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(top) = cli.top {
        config.report.top_n = top;
    }
    if cli.export.is_some() {
        config.export = cli.export;
    }

    if let Err(errors) = risk_rater::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let document = match risk_rater::inventory::load_inventory(&config.input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let results = match risk_rater::scoring::rate_applications(&document) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let use_colors = risk_rater::output::should_use_colors();

    match command {
        Commands::Report => {
            let report = build_report(&results, config.report.top_n);

            match cli.format {
                OutputFormat::Text => {
                    println!(
                        "{}",
                        risk_rater::output::format_report(&results, &report, use_colors)
                    );
                }
                OutputFormat::Tsv => {
                    let output = risk_rater::output::format_tsv(&results);
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                OutputFormat::Json => {
                    let document = ExportDocument {
                        results: &results,
                        report: &report,
                    };
                    match serde_json::to_string_pretty(&document) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            eprintln!("Failed to serialize results: {}", e);
                            std::process::exit(EXIT_EXPORT);
                        }
                    }
                }
            }

            if let Some(ref path) = config.export {
                if let Err(e) = risk_rater::output::save_results(path, &results, &report) {
                    eprintln!("Export error: {:#}", e);
                    std::process::exit(EXIT_EXPORT);
                }
                if cli.verbose {
                    eprintln!("Results exported to {}", path.display());
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {} applications in {:?}",
                    results.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Explain { app_id } => {
            let Some(app) = results.iter().find(|r| r.app_id == app_id) else {
                eprintln!(
                    "Unknown application {}. {} applications were rated from {}.",
                    app_id,
                    results.len(),
                    config.input.display()
                );
                std::process::exit(EXIT_INPUT);
            };

            println!(
                "{}",
                risk_rater::output::format_breakdown(app, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
