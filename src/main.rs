// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::Context;
use clap::{Parser, Subcommand};
use seo_checker::app::{create_router, AppState, VERSION};
use seo_checker::models::batch::BatchSummary;
use seo_checker::models::settings::ServerSettings;
use seo_checker::services::analyzer::SeoAnalyzer;
use seo_checker::services::batch::{
    export_csv, export_file_name, read_batch_input, run_batch, REQUEST_DELAY, SAMPLE_CSV,
    SAMPLE_FILE_NAME,
};
use seo_checker::services::logging::init_logging;
use seo_checker::services::terminal::{batch_table, progress_line, single_report, summary_text};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "seo-checker", version = VERSION, about = "Check canonical, robots and meta tags of web pages")]
struct Cli {
    /// Debug-level logging for this crate
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored badges even on a terminal
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a single URL
    Check {
        /// URL or bare domain (https:// is assumed)
        url: String,
    },
    /// Analyze every URL listed in a CSV file
    Batch {
        /// CSV with a url, urls, link or links column
        file: PathBuf,
        /// Directory the results CSV is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Write the sample batch CSV
    Sample {
        /// Destination file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the web UI and JSON API
    Serve {
        /// Listen address, overrides SEO_CHECKER_BIND
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{:#}", e);
    }

    let color = !cli.no_color && std::io::stdout().is_terminal();

    match run(cli.command, color).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, color: bool) -> anyhow::Result<ExitCode> {
    match command {
        Command::Check { url } => check(&url, color).await,
        Command::Batch { file, output_dir } => batch(&file, &output_dir, color).await,
        Command::Sample { output } => sample(output.as_deref()),
        Command::Serve { bind } => serve(bind.as_deref()).await,
    }
}

async fn check(url: &str, color: bool) -> anyhow::Result<ExitCode> {
    let url = url.trim();
    if url.is_empty() {
        eprintln!("Please enter a URL to analyze!");
        return Ok(ExitCode::from(2));
    }

    let analyzer = SeoAnalyzer::new()?;
    println!("Analyzing URL...");
    let result = analyzer.analyze_url(url).await;
    println!("{}", single_report(&result, color));

    if result.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

async fn batch(file: &Path, output_dir: &Path, color: bool) -> anyhow::Result<ExitCode> {
    let reader =
        fs::File::open(file).with_context(|| format!("Failed to open {}", file.display()))?;

    let input = match read_batch_input(reader) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(file = %file.display(), "Rejected batch input: {}", e);
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("Found {} URLs to analyze", input.urls.len());

    let analyzer = SeoAnalyzer::new()?;
    let results = run_batch(&analyzer, &input.urls, REQUEST_DELAY, |progress| {
        println!("{}", progress_line(progress));
    })
    .await;

    println!("Analysis complete! {} URLs analyzed.", results.len());
    println!();
    println!("{}", batch_table(&results, color));
    println!();
    println!("{}", summary_text(&BatchSummary::from_results(&results)));

    let csv = export_csv(&results)?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let path = output_dir.join(export_file_name(&chrono::Local::now()));
    fs::write(&path, csv).with_context(|| format!("Failed to write {}", path.display()))?;
    println!();
    println!("Results written to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

fn sample(output: Option<&Path>) -> anyhow::Result<ExitCode> {
    match output {
        Some(path) => {
            fs::write(path, SAMPLE_CSV)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Sample written to {}", path.display());
        }
        None => {
            tracing::debug!(file = SAMPLE_FILE_NAME, "printing sample to stdout");
            println!("{}", SAMPLE_CSV);
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn serve(bind: Option<&str>) -> anyhow::Result<ExitCode> {
    let settings = ServerSettings::resolve(bind)?;
    let state = AppState::new(SeoAnalyzer::new()?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.bind)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind))?;

    tracing::info!("seo-checker v{} listening on {}", VERSION, settings.bind);
    println!("seo-checker v{} listening on http://{}", VERSION, settings.bind);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(ExitCode::SUCCESS)
}
