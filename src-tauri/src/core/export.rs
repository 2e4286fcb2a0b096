//! Preview and comparison image export.
//!
//! Jobs carry owned copies of the selection and text so rendering can run off
//! the command thread without touching the shared viewer state. Rendering is
//! compiled only with the `image-export` feature; without it every export
//! returns [`ViewerError::ExportUnavailable`] with instructions.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::compare::MAX_COMPARE;
use super::error::{ViewerError, ViewerResult};
use super::report::{sanitize_file_component, FILE_TIMESTAMP_FORMAT};
use super::selection::Selection;

pub const MIN_EXPORT_DIMENSION: u32 = 100;
pub const MAX_EXPORT_DIMENSION: u32 = 3000;

/// Distance from the image edge to the first glyph, in pixels.
pub const EXPORT_MARGIN: u32 = 20;

pub const COMPARISON_WIDTH: u32 = 1200;
pub const COMPARISON_HEIGHT: u32 = 800;

/// Lines of sample text rendered per family in a comparison image.
pub const COMPARISON_LINES: usize = 3;

pub const INSTALL_HINT: &str =
    "Rebuild with `cargo build --features image-export` to enable PNG, JPEG and BMP export.";

/// Canvas settings for a single-font preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageExportOptions {
    pub width: u32,
    pub height: u32,
    /// Background color as `#RRGGBB`.
    pub background: String,
    /// Text color as `#RRGGBB`.
    pub foreground: String,
}

impl Default for ImageExportOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "#FFFFFF".to_string(),
            foreground: "#000000".to_string(),
        }
    }
}

impl ImageExportOptions {
    /// Checks the dimensions and returns the parsed (background, foreground).
    pub fn validate(&self) -> ViewerResult<([u8; 3], [u8; 3])> {
        for (label, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_EXPORT_DIMENSION..=MAX_EXPORT_DIMENSION).contains(&value) {
                return Err(ViewerError::Export(format!(
                    "{} {} is outside {}-{}",
                    label, value, MIN_EXPORT_DIMENSION, MAX_EXPORT_DIMENSION
                )));
            }
        }
        Ok((
            parse_hex_color(&self.background)?,
            parse_hex_color(&self.foreground)?,
        ))
    }
}

/// Parses `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(value: &str) -> ViewerResult<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    let invalid = || ViewerError::Export(format!("invalid color '{}', expected #RRGGBB", value));
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Everything needed to render a preview image.
#[derive(Debug, Clone)]
pub struct PreviewJob {
    pub selection: Selection,
    pub text: String,
    pub options: ImageExportOptions,
}

/// Everything needed to render a comparison image.
#[derive(Debug, Clone)]
pub struct ComparisonJob {
    pub families: Vec<String>,
    pub selection: Selection,
    pub text: String,
}

pub fn default_image_file_name(family: &str, at: NaiveDateTime) -> String {
    format!(
        "font_{}_{}.png",
        sanitize_file_component(family),
        at.format(FILE_TIMESTAMP_FORMAT)
    )
}

pub fn default_comparison_file_name(at: NaiveDateTime) -> String {
    format!("font_comparison_{}.png", at.format(FILE_TIMESTAMP_FORMAT))
}

/// Renders the job's text onto a `width x height` canvas and writes it to
/// `path`; the format follows the file extension.
pub fn export_preview(job: &PreviewJob, path: &Path) -> ViewerResult<()> {
    let (background, foreground) = job.options.validate()?;
    render::preview(job, background, foreground, path)?;
    log::info!("Exported preview of '{}' to {:?}", job.selection.family, path);
    Ok(())
}

/// Renders up to four families stacked vertically, each labelled, using the
/// first lines of the sample text.
pub fn export_comparison(job: &ComparisonJob, path: &Path) -> ViewerResult<()> {
    if job.families.len() < 2 {
        return Err(ViewerError::Export(
            "select at least two fonts to compare".to_string(),
        ));
    }
    let families = &job.families[..job.families.len().min(MAX_COMPARE)];
    render::comparison(families, job, path)?;
    log::info!("Exported comparison of {} fonts to {:?}", families.len(), path);
    Ok(())
}

#[cfg(feature = "image-export")]
mod render {
    use std::path::Path;

    use font_kit::canvas::{Canvas, Format, RasterizationOptions};
    use font_kit::family_name::FamilyName;
    use font_kit::font::Font;
    use font_kit::hinting::HintingOptions;
    use font_kit::properties::{Properties, Style, Weight};
    use font_kit::source::SystemSource;
    use image::{Rgb, RgbImage};
    use pathfinder_geometry::transform2d::Transform2F;
    use pathfinder_geometry::vector::Vector2F;

    use super::{
        ComparisonJob, PreviewJob, COMPARISON_HEIGHT, COMPARISON_LINES, COMPARISON_WIDTH,
        EXPORT_MARGIN,
    };
    use crate::core::error::{ViewerError, ViewerResult};
    use crate::core::selection::StyleFlags;

    const WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];
    const BLACK: [u8; 3] = [0x00, 0x00, 0x00];

    /// A loaded font scaled to a pixel size.
    struct Face {
        font: Font,
        size: f32,
        scale: f32,
        ascent: f32,
        line_height: f32,
        underline_offset: f32,
        underline_thickness: f32,
        strikeout_offset: f32,
    }

    impl Face {
        /// Loads `family` (or the default sans-serif when `None` or missing).
        fn load(
            source: &SystemSource,
            family: Option<&str>,
            size: f32,
            style: StyleFlags,
        ) -> ViewerResult<Self> {
            let mut properties = Properties::new();
            if style.bold {
                properties.weight(Weight::BOLD);
            }
            if style.italic {
                properties.style(Style::Italic);
            }

            let requested = family.map(|name| vec![FamilyName::Title(name.to_string())]);
            let handle = match requested
                .map(|names| source.select_best_match(&names, &properties))
            {
                Some(Ok(handle)) => handle,
                other => {
                    if let Some(Err(e)) = other {
                        log::warn!(
                            "Font '{}' unavailable for export ({:?}), using default sans-serif",
                            family.unwrap_or_default(),
                            e
                        );
                    }
                    source
                        .select_best_match(&[FamilyName::SansSerif], &properties)
                        .map_err(|e| {
                            ViewerError::Export(format!("no default font available: {:?}", e))
                        })?
                }
            };
            let font = handle
                .load()
                .map_err(|e| ViewerError::Export(format!("failed to load font: {:?}", e)))?;

            let metrics = font.metrics();
            let scale = size / metrics.units_per_em as f32;
            let ascent = metrics.ascent * scale;
            let descent = metrics.descent.abs() * scale;
            let strikeout = if metrics.x_height > 0.0 {
                metrics.x_height * scale / 2.0
            } else {
                ascent * 0.3
            };

            Ok(Self {
                font,
                size,
                scale,
                ascent,
                line_height: ascent + descent + metrics.line_gap * scale,
                underline_offset: -metrics.underline_position * scale,
                underline_thickness: (metrics.underline_thickness * scale).max(1.0),
                strikeout_offset: strikeout,
            })
        }
    }

    /// Alpha-blends `color` over the pixel at (x, y) with `coverage` (0-255).
    fn blend(image: &mut RgbImage, x: i32, y: i32, color: [u8; 3], coverage: u8) {
        if x < 0 || y < 0 || x as u32 >= image.width() || y as u32 >= image.height() {
            return;
        }
        let alpha = coverage as u32;
        let pixel = image.get_pixel_mut(x as u32, y as u32);
        for (channel, target) in pixel.0.iter_mut().zip(color) {
            *channel = ((*channel as u32 * (255 - alpha) + target as u32 * alpha) / 255) as u8;
        }
    }

    fn fill_rect(image: &mut RgbImage, x: f32, y: f32, width: f32, height: f32, color: [u8; 3]) {
        let (x0, y0) = (x.round() as i32, y.round() as i32);
        let (w, h) = (width.round().max(0.0) as i32, height.round().max(1.0) as i32);
        for row in y0..y0 + h {
            for col in x0..x0 + w {
                blend(image, col, row, color, 255);
            }
        }
    }

    /// Draws one line of text with its top edge at `top`.
    fn draw_line(
        image: &mut RgbImage,
        face: &Face,
        line: &str,
        x: f32,
        top: f32,
        color: [u8; 3],
        style: StyleFlags,
    ) {
        let baseline = top + face.ascent;
        let mut pen_x = x;

        for ch in line.chars() {
            if pen_x >= image.width() as f32 {
                break;
            }
            let Some(glyph) = face.font.glyph_for_char(ch) else {
                continue;
            };

            let origin = Transform2F::from_translation(Vector2F::new(pen_x, baseline));
            match face.font.raster_bounds(
                glyph,
                face.size,
                origin,
                HintingOptions::None,
                RasterizationOptions::GrayscaleAa,
            ) {
                Ok(bounds) if bounds.width() > 0 && bounds.height() > 0 => {
                    let mut canvas = Canvas::new(bounds.size(), Format::A8);
                    let placed = Transform2F::from_translation(-bounds.origin().to_f32()) * origin;
                    if let Err(e) = face.font.rasterize_glyph(
                        &mut canvas,
                        glyph,
                        face.size,
                        placed,
                        HintingOptions::None,
                        RasterizationOptions::GrayscaleAa,
                    ) {
                        log::debug!("Skipping glyph for {:?}: {:?}", ch, e);
                    } else {
                        for row in 0..bounds.height() {
                            for col in 0..bounds.width() {
                                let coverage =
                                    canvas.pixels[row as usize * canvas.stride + col as usize];
                                if coverage > 0 {
                                    blend(
                                        image,
                                        bounds.origin_x() + col,
                                        bounds.origin_y() + row,
                                        color,
                                        coverage,
                                    );
                                }
                            }
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => log::debug!("No raster bounds for {:?}: {:?}", ch, e),
            }

            if let Ok(advance) = face.font.advance(glyph) {
                pen_x += advance.x() * face.scale;
            }
        }

        let width = pen_x - x;
        if style.underline {
            fill_rect(
                image,
                x,
                baseline + face.underline_offset,
                width,
                face.underline_thickness,
                color,
            );
        }
        if style.strikethrough {
            fill_rect(
                image,
                x,
                baseline - face.strikeout_offset,
                width,
                face.underline_thickness,
                color,
            );
        }
    }

    fn save(image: &RgbImage, path: &Path) -> ViewerResult<()> {
        image
            .save(path)
            .map_err(|e| ViewerError::Export(format!("failed to write {:?}: {}", path, e)))
    }

    pub(super) fn preview(
        job: &PreviewJob,
        background: [u8; 3],
        foreground: [u8; 3],
        path: &Path,
    ) -> ViewerResult<()> {
        let source = SystemSource::new();
        let face = Face::load(
            &source,
            Some(&job.selection.family),
            job.selection.size as f32,
            job.selection.style,
        )?;

        let mut image = RgbImage::from_pixel(job.options.width, job.options.height, Rgb(background));
        let margin = EXPORT_MARGIN as f32;
        let mut top = margin;
        for line in job.text.lines() {
            if top >= job.options.height as f32 {
                break;
            }
            draw_line(&mut image, &face, line, margin, top, foreground, job.selection.style);
            top += face.line_height;
        }

        save(&image, path)
    }

    pub(super) fn comparison(
        families: &[String],
        job: &ComparisonJob,
        path: &Path,
    ) -> ViewerResult<()> {
        let source = SystemSource::new();
        let title_face = Face::load(&source, None, 20.0, StyleFlags::default())?;
        let label_face = Face::load(&source, None, 14.0, StyleFlags::default())?;

        let mut image = RgbImage::from_pixel(COMPARISON_WIDTH, COMPARISON_HEIGHT, Rgb(WHITE));
        draw_line(
            &mut image,
            &title_face,
            "Font Comparison",
            50.0,
            20.0,
            BLACK,
            StyleFlags::default(),
        );

        let mut y_offset = 60.0;
        for family in families {
            let face = Face::load(
                &source,
                Some(family),
                job.selection.size as f32,
                job.selection.style,
            )?;
            draw_line(
                &mut image,
                &label_face,
                &format!("{}:", family),
                50.0,
                y_offset,
                BLACK,
                StyleFlags::default(),
            );

            let mut text_y = y_offset + 30.0;
            for line in job.text.lines().take(COMPARISON_LINES) {
                draw_line(&mut image, &face, line, 70.0, text_y, BLACK, job.selection.style);
                text_y += 30.0;
            }
            y_offset += 150.0;
        }

        save(&image, path)
    }
}

#[cfg(not(feature = "image-export"))]
mod render {
    use std::path::Path;

    use super::{ComparisonJob, PreviewJob, INSTALL_HINT};
    use crate::core::error::{ViewerError, ViewerResult};

    fn unavailable() -> ViewerError {
        ViewerError::ExportUnavailable {
            hint: INSTALL_HINT.to_string(),
        }
    }

    pub(super) fn preview(
        _job: &PreviewJob,
        _background: [u8; 3],
        _foreground: [u8; 3],
        _path: &Path,
    ) -> ViewerResult<()> {
        Err(unavailable())
    }

    pub(super) fn comparison(
        _families: &[String],
        _job: &ComparisonJob,
        _path: &Path,
    ) -> ViewerResult<()> {
        Err(unavailable())
    }
}
