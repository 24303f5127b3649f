use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use crisp_dm::config::{OutputFormat, Settings};
use crisp_dm::http;
use crisp_dm::render::renderer_for;
use crisp_dm::understanding::{Dataset, Locale, correlation_matrix, generate_metadata};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "crisp-dm",
    about = "Data understanding metadata for tabular files"
)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print per-column metadata and the dtype distribution of a file
    Summarize {
        /// Dataset to read (CSV, JSON columns, JSON lines, Parquet)
        file: PathBuf,

        /// Output language for labels: en or pt
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Output format: markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Print the correlation matrix of the numeric columns of a file
    Correlate {
        /// Dataset to read (CSV, JSON columns, JSON lines, Parquet)
        file: PathBuf,

        /// Output format: markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Keep the diagonal and upper triangle instead of blanking them
        #[arg(long)]
        keep_upper: bool,
    },
    /// Print the fixed sample response and its status code
    Sample,
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Summarize {
            file,
            locale,
            format,
        } => handle_summarize(&settings, &file, locale, format),
        Commands::Correlate {
            file,
            format,
            keep_upper,
        } => handle_correlate(&settings, &file, format, keep_upper),
        Commands::Sample => {
            let (body, status) = http::index().into_parts();
            println!("{status}");
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
    }
}

fn handle_summarize(
    settings: &Settings,
    file: &Path,
    locale: Option<Locale>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let dataset = Dataset::load(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    info!(
        "Loaded {} ({} rows, {} columns)",
        file.display(),
        dataset.height(),
        dataset.width()
    );

    let metadata = generate_metadata(&dataset).context("Failed to generate metadata")?;
    info!(
        "{} missing values across {} columns",
        metadata.total_nulls(),
        metadata.column_count
    );
    let labels = locale.unwrap_or(settings.locale).labels();
    let renderer = renderer_for(format.unwrap_or(settings.format), settings.pretty_json);

    println!("{}", renderer.render_metadata(&metadata, &labels)?);
    Ok(())
}

fn handle_correlate(
    settings: &Settings,
    file: &Path,
    format: Option<OutputFormat>,
    keep_upper: bool,
) -> Result<()> {
    let dataset = Dataset::load(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let mut options = settings.correlation.clone();
    if keep_upper {
        options.mask_upper = false;
    }
    let matrix = correlation_matrix(&dataset, &options).context("Failed to correlate columns")?;
    info!("Correlated {} columns", matrix.columns.len());

    let labels = settings.locale.labels();
    let renderer = renderer_for(format.unwrap_or(settings.format), settings.pretty_json);

    println!("{}", renderer.render_correlation(&matrix, &labels)?);
    Ok(())
}
