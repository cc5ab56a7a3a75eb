use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use knurlkit::{init_logging, PatternConfig};
use tracing::{error, info};

/// Generates a machinable relief pattern from a knife blade outline.
///
/// The input SVG must contain two named closed paths: the blade silhouette
/// and the cutting bounding box. The output SVG contains the per-cell
/// pattern borders as filled shapes and the milling contours as stroked
/// outlines.
#[derive(Parser)]
#[command(name = "knurlkit", version, about)]
struct Cli {
    /// Input SVG document with the named blade and bounding geometry
    input: PathBuf,

    /// Output SVG document for the generated pattern
    output: PathBuf,

    /// JSON configuration file (CLI flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cell side length in drawing units
    #[arg(long)]
    rect_size: Option<f64>,

    /// Erosion spacing per iteration
    #[arg(long)]
    space: Option<f64>,

    /// Initial inward safety offset of the working region
    #[arg(long)]
    margin: Option<f64>,

    /// Retain every erosion iteration instead of checkerboard alternation
    #[arg(long)]
    no_alternate: bool,

    /// id attribute of the blade outline
    #[arg(long)]
    blade_id: Option<String>,

    /// id attribute of the cutting bounding box
    #[arg(long)]
    bounding_id: Option<String>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<PatternConfig> {
        let mut config = match &self.config {
            Some(path) => PatternConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => PatternConfig::default(),
        };
        if let Some(rect_size) = self.rect_size {
            config.rect_size = rect_size;
        }
        if let Some(space) = self.space {
            config.space = space;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if self.no_alternate {
            config.alternate = false;
        }
        if let Some(blade_id) = &self.blade_id {
            config.blade_id = blade_id.clone();
        }
        if let Some(bounding_id) = &self.bounding_id {
            config.bounding_id = bounding_id.clone();
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let pattern = knurlkit::run(&cli.input, &cli.output, &config)
        .with_context(|| format!("generating pattern from {}", cli.input.display()))?;
    info!(
        cells = pattern.cells,
        millings = pattern.millings.len(),
        output = %cli.output.display(),
        "done"
    );
    Ok(())
}
