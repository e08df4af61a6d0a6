#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that renders one frame of the choropleth map.

mod config;
mod output;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use choropleth_atlas::{query, Atlas};
use choropleth_core::{ColorScale, DisplayMode, Horizon, ViewState};
use choropleth_rendering::{render, RenderingBackend};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::output::{JsonBackend, SvgBackend, TableBackend};

#[derive(Debug, Parser)]
#[command(name = "choropleth")]
#[command(about = "Render one year of the simulated US choropleth map")]
struct Cli {
    /// TOML file overriding the bundled dataset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset to display
    #[arg(long, value_enum, default_value_t = ModeArg::Count)]
    mode: ModeArg,

    /// Calendar year to display
    #[arg(long, conflicts_with = "index")]
    year: Option<i32>,

    /// Zero-based year offset to display
    #[arg(long)]
    index: Option<usize>,

    /// Color scale used for the fills
    #[arg(long, value_enum, default_value_t = ScaleArg::Binned)]
    scale: ScaleArg,

    /// Output format when no SVG template is given
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    format: FormatArg,

    /// SVG map whose `<path id=FIPS>` elements are painted
    #[arg(long)]
    svg: Option<PathBuf>,

    /// File receiving the output instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Count,
    Ratio,
    Reference,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Count => Self::Count,
            ModeArg::Ratio => Self::Ratio,
            ModeArg::Reference => Self::Reference,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScaleArg {
    Binned,
    Continuous,
}

impl From<ScaleArg> for ColorScale {
    fn from(scale: ScaleArg) -> Self {
        match scale {
            ScaleArg::Binned => Self::Binned,
            ScaleArg::Continuous => Self::Continuous,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Table,
    Json,
}

/// Entry point for the choropleth command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "choropleth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let atlas = Atlas::build(&config).context("invalid atlas configuration")?;

    let year_index = resolve_year_index(cli.year, cli.index, query::horizon(&atlas))?;
    let view = ViewState::new(cli.mode.into(), year_index, cli.scale.into());
    let frame = render(&atlas, &view).context("failed to render map frame")?;
    info!(
        year = frame.year,
        mode = %frame.mode,
        regions = frame.regions.len(),
        "frame rendered"
    );

    let template = cli
        .svg
        .as_deref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read SVG template {}", path.display()))
        })
        .transpose()?;

    // The output file is only truncated once every input has been read.
    let writer = open_output(cli.out.as_deref())?;
    match (template, cli.format) {
        (Some(template), _) => SvgBackend::new(template, writer).present(&frame),
        (None, FormatArg::Json) => JsonBackend::new(writer).present(&frame),
        (None, FormatArg::Table) => TableBackend::new(writer).present(&frame),
    }
}

fn resolve_year_index(year: Option<i32>, index: Option<usize>, horizon: Horizon) -> Result<usize> {
    match (year, index) {
        (Some(year), _) => horizon.index_of(year).with_context(|| {
            format!(
                "year {year} is outside the simulated range starting at {} ({} years)",
                horizon.start_year(),
                horizon.num_years()
            )
        }),
        (None, Some(index)) => Ok(index),
        (None, None) => Ok(0),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            info!(path = %path.display(), "writing output file");
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
