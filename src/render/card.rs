//! Title card renderer.
//!
//! Draws white, center-aligned, word-wrapped text on a fixed black canvas and
//! encodes the result as PNG.
use std::io::Cursor;
use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::{AppError, AppResult};

pub const CARD_WIDTH: u32 = 750;
pub const CARD_HEIGHT: u32 = 500;
pub const WRAP_WIDTH: u32 = 470;
pub const FONT_POINTS: f32 = 30.0;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Clone)]
pub struct CardRenderer {
    font: FontArc,
    scale: PxScale,
}

impl CardRenderer {
    pub fn from_bytes(bytes: Vec<u8>) -> AppResult<Self> {
        let font = FontArc::try_from_vec(bytes).map_err(|e| AppError::Font(e.to_string()))?;
        let scale = point_scale(&font, FONT_POINTS);
        Ok(CardRenderer { font, scale })
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::Font(format!("failed to read {}: {}", path.display(), e)))?;
        tracing::info!("Loaded font from {}", path.display());
        Self::from_bytes(bytes)
    }

    /// Render `text` onto a new card and return the PNG bytes.
    pub fn render(&self, text: &str) -> AppResult<Vec<u8>> {
        let mut canvas = RgbaImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACKGROUND);

        let lines = self.wrap(text);
        let scaled = self.font.as_scaled(self.scale);
        let line_height = scaled.height() + scaled.line_gap();
        let block_height = line_height * lines.len() as f32 - scaled.line_gap();
        let mut y = (CARD_HEIGHT as f32 - block_height) / 2.0;

        for line in &lines {
            let (width, _) = self.measure(line);
            let x = (CARD_WIDTH as i32 - width as i32) / 2;
            let top = y.round() as i32;
            draw_text_mut(&mut canvas, FOREGROUND, x, top, self.scale, &self.font, line);
            y += line_height;
        }

        let mut png = Vec::new();
        canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        tracing::debug!(lines = lines.len(), bytes = png.len(), "Rendered title card");
        Ok(png)
    }

    /// Greedy word wrap to `WRAP_WIDTH`. Newlines in the input always break.
    /// A word wider than the limit is kept whole on its own line.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                if current.is_empty() {
                    current.push_str(word);
                    continue;
                }
                let candidate = format!("{} {}", current, word);
                if self.measure(&candidate).0 <= WRAP_WIDTH {
                    current = candidate;
                } else {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                }
            }
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    pub fn measure(&self, line: &str) -> (u32, u32) {
        if line.is_empty() {
            return (0, 0);
        }
        text_size(self.scale, &self.font, line)
    }
}

// Point size is taken at 72 dpi, so 1pt maps to 1px of em. ab_glyph scales by
// ascent-to-descent height instead of em, hence the ratio.
fn point_scale(font: &FontArc, points: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(points * font.height_unscaled() / upem),
        _ => PxScale::from(points),
    }
}
