//! Plot model: everything the renderer draws, decided before any drawing.

use std::ops::Range;

use anyhow::{bail, Result};
use plotters::style::RGBColor;

use crate::color::{ColorScale, Normalize, UNIFORM_MARKER_COLOR};
use crate::data::filter::{plottable_indices, plottable_indices_with_color};
use crate::data::model::GalaxyTable;

pub const FIGURE_SIZE_IN: (f64, f64) = (9.0, 6.0);

pub const TITLE: &str = "Galaxy Mass-Metallicity Relation";
pub const TITLE_SFR_SUFFIX: &str = " (colored by SFR)";
pub const X_LABEL: &str = "Stellar Mass [M☉]";
pub const Y_LABEL: &str = "Gas Metallicity [Z☉]";
pub const COLORBAR_LABEL: &str = "Star Formation Rate [M☉ yr⁻¹]";

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

/// Fixed cosmetic choices, sizes in points.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub title_size: f64,
    pub axis_label_size: f64,
    pub colorbar_label_size: f64,
    pub tick_label_size: f64,
    /// Marker area in pt², as in a scatter `s` argument.
    pub marker_area: f64,
    pub marker_alpha: f64,
    pub edge_color: RGBColor,
    pub edge_width: f64,
    pub grid_alpha: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            title_size: 16.0,
            axis_label_size: 14.0,
            colorbar_label_size: 12.0,
            tick_label_size: 10.0,
            marker_area: 36.0,
            marker_alpha: 0.8,
            edge_color: RGBColor(0, 0, 0),
            edge_width: 0.5,
            grid_alpha: 0.5,
        }
    }
}

impl FigureStyle {
    /// Marker radius in points.
    pub fn marker_radius(&self) -> f64 {
        self.marker_area.sqrt() / 2.0
    }
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub color: RGBColor,
}

/// Colour legend for SFR-coloured markers.
#[derive(Debug, Clone)]
pub struct Colorbar {
    pub label: String,
    pub norm: Normalize,
    pub scale: ColorScale,
}

/// A fully laid out mass-metallicity scatter plot.
#[derive(Debug, Clone)]
pub struct ScatterFigure {
    pub size_in: (f64, f64),
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Stellar mass range, drawn on a log axis.
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub markers: Vec<Marker>,
    pub colorbar: Option<Colorbar>,
    pub style: FigureStyle,
    /// Rows left out because they cannot be placed on the axes.
    pub dropped: usize,
}

impl ScatterFigure {
    /// Lay out the scatter for `table`.
    ///
    /// With `color_by_sfr` and an SFR column, markers take their colour from
    /// viridis and the figure gets a colorbar. Without the column it falls
    /// back to a single marker colour.
    pub fn build(table: &GalaxyTable, color_by_sfr: bool) -> Result<Self> {
        let sfr = match (&table.star_formation_rate, color_by_sfr) {
            (Some(sfr), true) => Some(sfr),
            (None, true) => {
                log::warn!(
                    "Colouring by SFR requested but the table has no star_formation_rate column; using a single colour"
                );
                None
            }
            (_, false) => None,
        };

        let indices = if sfr.is_some() {
            plottable_indices_with_color(table)
        } else {
            plottable_indices(table)
        };
        if indices.is_empty() {
            bail!(
                "No plottable galaxies: {} rows, none with a positive stellar mass and finite values",
                table.len()
            );
        }

        let masses: Vec<f64> = indices.iter().map(|&i| table.stellar_mass[i]).collect();
        let metals: Vec<f64> = indices.iter().map(|&i| table.gas_metallicity[i]).collect();

        let colorbar = match sfr {
            Some(sfr) => {
                // Scaled over every finite SFR, including rows the axes hide.
                Normalize::from_values(sfr).map(|norm| Colorbar {
                    label: COLORBAR_LABEL.to_string(),
                    norm,
                    scale: ColorScale::viridis(),
                })
            }
            None => None,
        };

        let markers = indices
            .iter()
            .zip(masses.iter().zip(&metals))
            .map(|(&i, (&x, &y))| {
                let color = match (&colorbar, sfr) {
                    (Some(cb), Some(sfr)) => cb.scale.color_at(cb.norm.apply(sfr[i])),
                    _ => UNIFORM_MARKER_COLOR,
                };
                Marker { x, y, color }
            })
            .collect();

        let title = if colorbar.is_some() {
            format!("{TITLE}{TITLE_SFR_SUFFIX}")
        } else {
            TITLE.to_string()
        };

        Ok(ScatterFigure {
            size_in: FIGURE_SIZE_IN,
            title,
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x_range: log_range(&masses)?,
            y_range: linear_range(&metals)?,
            markers,
            colorbar,
            style: FigureStyle::default(),
            dropped: table.len() - indices.len(),
        })
    }

    pub fn has_colorbar(&self) -> bool {
        self.colorbar.is_some()
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Padded range for positive values on a log axis.
fn log_range(values: &[f64]) -> Result<Range<f64>> {
    let (lo, hi) = min_max(values);
    let (lo, hi) = (lo.log10(), hi.log10());
    let pad = if hi > lo { (hi - lo) * AXIS_MARGIN } else { 0.5 };
    let range = 10f64.powf(lo - pad)..10f64.powf(hi + pad);
    // Padding can leave f64 at either end.
    if !(range.start > 0.0 && range.end.is_finite()) {
        bail!(
            "Stellar mass range {:e}..{:e} cannot be drawn on a log axis",
            10f64.powf(lo),
            10f64.powf(hi)
        );
    }
    Ok(range)
}

fn linear_range(values: &[f64]) -> Result<Range<f64>> {
    let (lo, hi) = min_max(values);
    let pad = if hi > lo { (hi - lo) * AXIS_MARGIN } else { 0.5 };
    let range = (lo - pad)..(hi + pad);
    if !(range.start.is_finite() && range.end.is_finite()) {
        bail!("Gas metallicity range {lo:e}..{hi:e} cannot be drawn");
    }
    Ok(range)
}
