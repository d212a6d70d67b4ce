//! Figure drawing.
//!
//! The scatter is drawn with plotters' SVG backend on a canvas of
//! `CANVAS_DPI` units per inch, then rasterised at the requested DPI.

pub mod raster;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::Normalize;
use crate::figure::{Colorbar, FigureStyle, ScatterFigure};
use raster::RasterOptions;

/// SVG canvas units per inch.
pub const CANVAS_DPI: f64 = 100.0;

/// Padding kept around the drawn content when cropping, in inches.
pub const TIGHT_PAD_IN: f64 = 0.1;

const FONT: &str = "sans-serif";
const COLORBAR_WIDTH: u32 = 130;
const COLORBAR_STEPS: usize = 256;

/// Convert a size in points to canvas units.
pub fn points_to_px(points: f64) -> f64 {
    points * CANVAS_DPI / 72.0
}

/// Canvas size in units for a figure.
pub fn canvas_size(figure: &ScatterFigure) -> (u32, u32) {
    let (w, h) = figure.size_in;
    (
        (w * CANVAS_DPI).round() as u32,
        (h * CANVAS_DPI).round() as u32,
    )
}

/// Draw the figure as an SVG document.
pub fn render_svg(figure: &ScatterFigure) -> Result<String> {
    let (width, height) = canvas_size(figure);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        match &figure.colorbar {
            Some(colorbar) => {
                let (plot_area, bar_area) =
                    root.split_horizontally(width.saturating_sub(COLORBAR_WIDTH));
                draw_scatter(&plot_area, figure)?;
                draw_colorbar(&bar_area, colorbar, &figure.style)?;
            }
            None => draw_scatter(&root, figure)?,
        }

        root.present()?;
    }
    log::debug!("Drew {}x{} SVG ({} bytes)", width, height, svg.len());
    Ok(svg)
}

/// Draw the figure and rasterise it to a tight-cropped PNG at `dpi`.
pub fn render_png(figure: &ScatterFigure, dpi: f64) -> Result<Vec<u8>> {
    let svg = render_svg(figure)?;
    let options = RasterOptions {
        scale: (dpi / CANVAS_DPI) as f32,
        pad_px: (TIGHT_PAD_IN * dpi).round() as u32,
    };
    Ok(raster::svg_to_png(&svg, &options)?)
}

/// Scatter on a log-mass x-axis.
fn draw_scatter(area: &DrawingArea<SVGBackend<'_>, Shift>, figure: &ScatterFigure) -> Result<()> {
    let style = &figure.style;

    let mut chart = ChartBuilder::on(area)
        .caption(&figure.title, (FONT, points_to_px(style.title_size)))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(65)
        .build_cartesian_2d(
            figure.x_range.clone().log_scale(),
            figure.y_range.clone(),
        )?;

    // Major and minor gridlines.
    chart
        .configure_mesh()
        .x_desc(&figure.x_label)
        .y_desc(&figure.y_label)
        .axis_desc_style((FONT, points_to_px(style.axis_label_size)))
        .label_style((FONT, points_to_px(style.tick_label_size)))
        .x_label_formatter(&|v| decade_label(*v))
        .y_label_formatter(&|v| format!("{v:.2}"))
        .max_light_lines(4)
        .bold_line_style(&BLACK.mix(style.grid_alpha * 0.4))
        .light_line_style(&BLACK.mix(style.grid_alpha * 0.15))
        .draw()?;

    let radius = points_to_px(style.marker_radius());
    let edge = edge_style(style);
    chart.draw_series(figure.markers.iter().map(|m| {
        EmptyElement::at((m.x, m.y))
            + Circle::new((0, 0), radius, m.color.mix(style.marker_alpha).filled())
            + Circle::new((0, 0), radius, edge)
    }))?;

    Ok(())
}

fn edge_style(style: &FigureStyle) -> ShapeStyle {
    let width = points_to_px(style.edge_width).round().max(1.0) as u32;
    style
        .edge_color
        .mix(style.marker_alpha)
        .stroke_width(width)
}

/// Vertical gradient with its own labelled axis on the right.
fn draw_colorbar(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    colorbar: &Colorbar,
    style: &FigureStyle,
) -> Result<()> {
    let Normalize { vmin, vmax } = colorbar.norm;
    let (lo, hi) = if vmax > vmin {
        (vmin, vmax)
    } else {
        (vmin - 0.5, vmax + 0.5)
    };

    // Margins line the bar up with the scatter's plotting area.
    let mut chart = ChartBuilder::on(area)
        .margin_top(10 + points_to_px(style.title_size).round() as u32 + 10)
        .margin_bottom(10 + 50)
        .margin_left(10)
        .margin_right(5)
        .set_label_area_size(LabelAreaPosition::Right, 80)
        .build_cartesian_2d(0f64..1f64, lo..hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(&colorbar.label)
        .axis_desc_style((FONT, points_to_px(style.colorbar_label_size)))
        .label_style((FONT, points_to_px(style.tick_label_size)))
        .y_label_formatter(&|v| format_tick(*v))
        .draw()?;

    let step = (hi - lo) / COLORBAR_STEPS as f64;
    chart.draw_series((0..COLORBAR_STEPS).map(|i| {
        let y0 = lo + step * i as f64;
        let t = colorbar.norm.apply(y0 + step / 2.0);
        Rectangle::new([(0.0, y0), (1.0, y0 + step)], colorbar.scale.color_at(t).filled())
    }))?;

    Ok(())
}

/// Tick label for a log axis: exact decades read `10ⁿ`.
pub fn decade_label(value: f64) -> String {
    if !(value.is_finite() && value > 0.0) {
        return format!("{value}");
    }
    let exp = value.log10();
    if (exp - exp.round()).abs() < 1e-9 {
        format!("10{}", superscript(exp.round() as i32))
    } else {
        format!("{value:.0e}")
    }
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(0.01..1000.0).contains(&magnitude) {
        format!("{value:.1e}")
    } else {
        format!("{value:.2}")
    }
}
