use image::{Pixel, Rgba, RgbaImage};
use rusttype::{Font, GlyphId, PositionedGlyph, Scale, point};

use crate::foundation::params::Hinting;

/// Baseline origin of a text line in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Baseline {
    /// Left edge of the pen.
    pub x: i32,
    /// Baseline y coordinate.
    pub y: i32,
}

/// Draw `text` as one line starting at `origin`, returning the pen x after the last glyph.
///
/// Control characters (including line breaks) are skipped. Glyph pixels outside the canvas are
/// dropped.
pub(crate) fn draw_line(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    px_per_em: f32,
    hinting: Hinting,
    origin: Baseline,
    color: Rgba<u8>,
    text: &str,
) -> f32 {
    let scale = Scale::uniform(px_per_em);
    let baseline_y = origin.y as f32;
    let mut caret = origin.x as f32;
    let mut prev: Option<GlyphId> = None;

    for ch in text.chars().filter(|c| !c.is_control()) {
        let glyph = font.glyph(ch).scaled(scale);
        let id = glyph.id();
        if let Some(prev) = prev {
            caret += font.pair_kerning(scale, prev, id);
        }
        let advance = glyph.h_metrics().advance_width;

        let (pen_x, advance) = match hinting {
            Hinting::None => (caret, advance),
            Hinting::Full => (caret.round(), advance.round()),
        };
        let glyph = glyph.positioned(point(pen_x, baseline_y));
        fill_glyph(canvas, &glyph, color);

        caret = pen_x + advance;
        prev = Some(id);
    }
    caret
}

fn fill_glyph(canvas: &mut RgbaImage, glyph: &PositionedGlyph<'_>, color: Rgba<u8>) {
    let Some(bb) = glyph.pixel_bounding_box() else {
        return;
    };
    let (w, h) = canvas.dimensions();
    glyph.draw(|gx, gy, v| {
        let x = bb.min.x + gx as i32;
        let y = bb.min.y + gy as i32;
        if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
            return;
        }
        // Straight alpha: coverage scales only the source alpha.
        let a = (f32::from(color[3]) * v.clamp(0.0, 1.0)).round() as u8;
        if a == 0 {
            return;
        }
        let mut src = color;
        src[3] = a;
        canvas.get_pixel_mut(x as u32, y as u32).blend(&src);
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
