//! # payslip CLI Entry Point
//!
//! Runs a payslip batch from a CSV file, or serves the HTTP API.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use payslip_engine::api::{AppState, create_router};
use payslip_engine::batch::BatchOrchestrator;
use payslip_engine::config::{ConfigLoader, OutputFormat};

const DEFAULT_CONFIG_PATH: &str = "./config/payslip.yaml";

/// Payroll computation and payslip rendering.
#[derive(Parser, Debug)]
#[command(name = "payslip", version, about)]
struct Cli {
    /// Configuration file; defaults to ./config/payslip.yaml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one payslip per row of a CSV batch.
    Generate {
        /// The CSV batch file.
        #[arg(long)]
        input: PathBuf,
        /// Output directory, overriding the configured one.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Output format, overriding the configured one.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Serve the HTTP API.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => ConfigLoader::load(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("loading configuration from {}", DEFAULT_CONFIG_PATH)),
        None => Ok(ConfigLoader::default()),
    }
}

fn generate(
    loader: ConfigLoader,
    input: &Path,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
) -> anyhow::Result<ExitCode> {
    let mut config = loader.into_config();
    if let Some(directory) = output {
        config.output.directory = directory;
    }
    if let Some(format) = format {
        config.output.format = format.into();
    }

    let report = BatchOrchestrator::new(&config)
        .run_file(input)
        .with_context(|| format!("generating payslips from {}", input.display()))?;

    println!(
        "Generated {} payslip(s) in {}",
        report.slips.len(),
        config.output.directory.display()
    );
    for target in &report.overwritten {
        println!("Overwritten: {}", target);
    }
    for failure in &report.failures {
        println!(
            "Row {} ({}) failed: {}",
            failure.row, failure.employee_name, failure.message
        );
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(failed = report.failures.len(), "Batch completed with failures");
        Ok(ExitCode::FAILURE)
    }
}

async fn serve(loader: ConfigLoader, addr: SocketAddr) -> anyhow::Result<ExitCode> {
    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(addr = %addr, "Payslip API listening");
    axum::serve(listener, router).await.context("serving HTTP API")?;
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let loader = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            format,
        } => generate(loader, &input, output, format),
        Commands::Serve { addr } => serve(loader, addr).await,
    }
}
