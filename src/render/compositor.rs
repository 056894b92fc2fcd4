use image::{DynamicImage, Rgba, RgbaImage};
use rusttype::Font;

use crate::{
    foundation::error::TextcardResult,
    foundation::params::RenderParams,
    render::text::{Baseline, draw_line},
};

/// Top-left corner shared by both guideline strokes and the text pen.
pub const GUIDE_ORIGIN: u32 = 10;
/// Length of each guideline stroke in pixels.
pub const GUIDE_LEN: u32 = 200;
/// Guideline color (`#dddddd`, opaque).
pub const GUIDE_RGBA: Rgba<u8> = Rgba([0xdd, 0xdd, 0xdd, 0xff]);
/// Text fill color.
pub const TEXT_RGBA: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

/// Compose `text` over a copy of `background`.
///
/// The returned canvas always has the background's dimensions and carries the full guideline
/// mark whatever the text. `background` itself is never modified, and identical inputs produce
/// identical pixels.
///
/// # Errors
///
/// Returns [`crate::TextcardError::Render`] when `params` cannot drive the rasterizer. No canvas
/// is produced in that case.
#[tracing::instrument(level = "debug", skip(font, background), fields(width = background.width(), height = background.height()))]
pub fn render(
    font: &Font<'_>,
    background: &DynamicImage,
    text: &str,
    params: &RenderParams,
) -> TextcardResult<RgbaImage> {
    params.validate()?;

    let mut canvas = background.to_rgba8();

    let origin = Baseline {
        x: GUIDE_ORIGIN as i32,
        y: GUIDE_ORIGIN as i32 + params.baseline_offset(),
    };
    let line_end_x = draw_line(
        &mut canvas,
        font,
        params.pixels_per_em(),
        params.hinting,
        origin,
        TEXT_RGBA,
        text,
    );
    // Guides go on last so glyph ink never covers them.
    draw_guides(&mut canvas);

    // Only one line is drawn; the next baseline is where a second line would start.
    let next_line_y = (i64::from(origin.y) << 6) + i64::from(params.line_advance());
    tracing::trace!(
        line_end_x,
        next_line_y = next_line_y >> 6,
        "text line drawn"
    );

    Ok(canvas)
}

/// Paint the vertical and horizontal guideline strokes, clipped to the canvas.
pub fn draw_guides(canvas: &mut RgbaImage) {
    let (w, h) = canvas.dimensions();
    for i in 0..GUIDE_LEN {
        let (vx, vy) = (GUIDE_ORIGIN, GUIDE_ORIGIN + i);
        if vx < w && vy < h {
            canvas.put_pixel(vx, vy, GUIDE_RGBA);
        }
        let (hx, hy) = (GUIDE_ORIGIN + i, GUIDE_ORIGIN);
        if hx < w && hy < h {
            canvas.put_pixel(hx, hy, GUIDE_RGBA);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
