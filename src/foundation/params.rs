use crate::foundation::error::{TextcardError, TextcardResult};

/// Glyph hinting mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hinting {
    /// Glyph positions stay at fractional pixel offsets.
    #[default]
    None,
    /// Glyph origins and advances snap to whole pixels.
    Full,
}

impl Hinting {
    /// Parse a hinting flag value. Anything other than `full` means [`Hinting::None`].
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("full") {
            Self::Full
        } else {
            Self::None
        }
    }
}

/// Largest em size, in pixels, the rasterizer is asked to fill.
pub const MAX_PIXELS_PER_EM: f64 = 4096.0;

/// Text rasterization parameters shared read-only by every render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    /// Screen resolution in dots per inch.
    pub dpi: f64,
    /// Font size in points.
    pub size: f64,
    /// Line spacing multiplier (2.0 means double spaced).
    pub spacing: f64,
    /// Glyph hinting mode.
    pub hinting: Hinting,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            dpi: 144.0,
            size: 16.0,
            spacing: 1.5,
            hinting: Hinting::None,
        }
    }
}

impl RenderParams {
    /// Reject values the rasterizer cannot work with.
    pub fn validate(&self) -> TextcardResult<()> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(TextcardError::render(format!(
                "dpi must be finite and > 0, got {}",
                self.dpi
            )));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(TextcardError::render(format!(
                "font size must be finite and > 0, got {}",
                self.size
            )));
        }
        let em = self.size * self.dpi / 72.0;
        if em > MAX_PIXELS_PER_EM {
            return Err(TextcardError::render(format!(
                "em size of {em}px exceeds {MAX_PIXELS_PER_EM}px"
            )));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(TextcardError::render(format!(
                "line spacing must be finite and >= 0, got {}",
                self.spacing
            )));
        }
        Ok(())
    }

    /// Em size in pixels at the configured resolution.
    pub fn pixels_per_em(&self) -> f32 {
        (self.size * self.dpi / 72.0) as f32
    }

    /// Convert a length in points to 26.6 fixed-point pixels (truncating).
    pub fn point_to_fixed(&self, points: f64) -> i32 {
        (points * self.dpi * (64.0 / 72.0)) as i32
    }

    /// Distance in whole pixels from the guideline origin down to the first baseline.
    pub fn baseline_offset(&self) -> i32 {
        self.point_to_fixed(self.size) >> 6
    }

    /// Vertical advance between lines, in 26.6 fixed-point.
    pub fn line_advance(&self) -> i32 {
        self.point_to_fixed(self.size * self.spacing)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/params.rs"]
mod tests;
