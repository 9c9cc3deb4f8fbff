// File: crates/figure-cli/src/main.rs
// Summary: `figure` CLI: render TOML chart descriptions, the paper figures, and latency summaries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use figure_core::{OutputFormat, Summary};
use log::info;
use std::path::{Path, PathBuf};

pub mod config;
pub mod paper;
pub mod source;

use crate::config::ChartConfig;
use crate::source::Table;

#[derive(Parser)]
#[command(name = "figure", about = "Render comparison charts to page documents")]
struct Cli {
    #[command(subcommand)]
    task: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one chart described by a TOML file
    Render {
        #[arg(long)]
        config: PathBuf,
        /// Overrides `[chart] output`; the extension picks the format
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render the built-in paper figures
    Paper {
        #[arg(long, default_value = "plots")]
        out_dir: PathBuf,
        #[arg(long, default_value = "pdf")]
        format: String,
    },
    /// Print mean and tail percentiles of one CSV column
    Stats {
        #[arg(long)]
        input: PathBuf,
        /// Header name or zero-based index
        #[arg(long, default_value = "0")]
        column: String,
    },
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    let mut builder = Builder::from_env(env);
    builder.init();

    let cli = Cli::parse();
    match cli.task {
        Command::Render { config, output } => render_config(&config, output),
        Command::Paper { out_dir, format } => render_paper(&out_dir, &format),
        Command::Stats { input, column } => print_stats(&input, &column),
    }
}

fn render_config(path: &Path, output: Option<PathBuf>) -> Result<()> {
    let cfg = ChartConfig::load(path)?;
    let base_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let request = cfg
        .into_request(base_dir, output)
        .with_context(|| format!("building chart from {}", path.display()))?;
    let out = request.output().to_path_buf();
    figure_core::render(request).with_context(|| format!("rendering {}", out.display()))
}

fn render_paper(out_dir: &Path, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let figures = paper::figures(out_dir, format);
    let total = figures.len();
    for request in figures {
        let name = request.dataset().name.clone();
        figure_core::render(request).with_context(|| format!("rendering figure {name}"))?;
    }
    info!("rendered {} figures into {}", total, out_dir.display());
    Ok(())
}

fn print_stats(input: &Path, column: &str) -> Result<()> {
    let table = Table::load(input)?;
    let samples = table.samples(column)?;
    let Some(s) = Summary::from_samples(&samples) else {
        anyhow::bail!("no numeric samples in column '{}' of {}", column, input.display());
    };
    println!("{}", format_summary(input, &s));
    Ok(())
}

fn format_summary(input: &Path, s: &Summary) -> String {
    format!(
        "{}: n={} mean={:.3} min={:.3} p50={:.3} p99={:.3} p99.5={:.3} p99.9={:.3} max={:.3}",
        input.display(),
        s.count,
        s.mean,
        s.min,
        s.p50,
        s.p99,
        s.p99_5,
        s.p99_9,
        s.max
    )
}
