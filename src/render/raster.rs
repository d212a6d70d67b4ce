use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

/// Families tried, in order, for the generic `sans-serif` font.
const SANS_FAMILIES: [&str; 4] = ["DejaVu Sans", "Liberation Sans", "Arial", "Helvetica"];

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG")]
    SvgParse(#[source] usvg::Error),
    #[error("failed to allocate {0}x{1} pixmap for raster rendering")]
    PixmapAlloc(u32, u32),
    #[error("failed to encode PNG")]
    PngEncode(#[source] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Output pixels per SVG unit.
    pub scale: f32,
    /// Padding kept around the content when cropping.
    pub pad_px: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pad_px: 0,
        }
    }
}

/// Rasterise `svg` onto white, crop to the drawn content and encode as PNG.
pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale)?;
    let (width, height) = (pixmap.width(), pixmap.height());
    // The pixmap is opaque, so premultiplied RGBA equals straight RGBA.
    let image = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(RasterError::PixmapAlloc(width, height))?;

    let cropped = tight_crop(&image, options.pad_px);
    log::debug!(
        "Rasterised {}x{} px, cropped to {}x{} px",
        width,
        height,
        cropped.width(),
        cropped.height()
    );
    encode_png(cropped)
}

fn svg_to_pixmap(svg: &str, scale: f32) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    let fontdb = opt.fontdb_mut();
    fontdb.load_system_fonts();
    if let Some(family) = SANS_FAMILIES.iter().find(|family| {
        fontdb
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == *family))
    }) {
        fontdb.set_sans_serif_family(*family);
    }

    let tree = usvg::Tree::from_str(svg, &opt).map_err(RasterError::SvgParse)?;

    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px)
        .ok_or(RasterError::PixmapAlloc(width_px, height_px))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Bounding box `(left, top, right, bottom)` of pixels that differ from
/// `background`, inclusive. `None` for a blank image.
pub fn content_bounds(image: &RgbaImage, background: Rgba<u8>) -> Option<(u32, u32, u32, u32)> {
    image
        .enumerate_pixels()
        .filter(|(_, _, px)| **px != background)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x, y)),
            Some((l, t, r, b)) => Some((l.min(x), t.min(y), r.max(x), b.max(y))),
        })
}

/// Crop to the content bounds plus `pad` pixels, clamped to the image.
pub fn tight_crop(image: &RgbaImage, pad: u32) -> RgbaImage {
    let Some((left, top, right, bottom)) = content_bounds(image, BACKGROUND) else {
        return image.clone();
    };
    let x = left.saturating_sub(pad);
    let y = top.saturating_sub(pad);
    let x_end = right.saturating_add(pad + 1).min(image.width());
    let y_end = bottom.saturating_add(pad + 1).min(image.height());
    image::imageops::crop_imm(image, x, y, x_end - x, y_end - y).to_image()
}

fn encode_png(image: RgbaImage) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(image).into_rgb8();
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(RasterError::PngEncode)?;
    Ok(out)
}
