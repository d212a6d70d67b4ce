//! Load → lay out → render → save.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::PlotConfig;
use crate::data::loader::load_csv;
use crate::figure::ScatterFigure;
use crate::render::render_png;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub output_path: PathBuf,
    /// The PNG as written to `output_path`.
    pub png: Vec<u8>,
    pub plotted: usize,
    pub dropped: usize,
    pub colorbar: bool,
}

/// Run the whole plot job once.
///
/// Nothing is written unless loading and rendering both succeed.
pub fn run(config: &PlotConfig) -> Result<RenderReport> {
    let data_path = config.data_path();
    log::info!("Loading galaxy snapshot from {}", data_path.display());
    let table = load_csv(&data_path)?;
    log::info!("Loaded {} galaxies (SFR column: {})", table.len(), table.has_sfr());

    let figure = ScatterFigure::build(&table, config.color_by_sfr)?;
    if figure.dropped > 0 {
        log::warn!(
            "Dropped {} of {} galaxies that cannot be placed on a log-mass axis",
            figure.dropped,
            table.len()
        );
    }

    let png = render_png(&figure, config.dpi).context("rendering figure")?;

    let output_dir = config.output_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;
    let output_path = config.output_path();
    std::fs::write(&output_path, &png)
        .with_context(|| format!("writing {}", output_path.display()))?;
    log::info!("Wrote {} bytes to {}", png.len(), output_path.display());

    Ok(RenderReport {
        output_path,
        png,
        plotted: figure.markers.len(),
        dropped: figure.dropped,
        colorbar: figure.has_colorbar(),
    })
}
