use image::RgbaImage;
use rand::rngs::ThreadRng;

use crate::{
    assets::catalog::{IndexSource, pick_background},
    assets::font::load_font,
    foundation::config::ServiceConfig,
    foundation::error::TextcardResult,
    render::compositor::render,
};

/// Something that can turn a line of text into a finished canvas.
///
/// Implementations must be safe to call from several request workers at once.
pub trait ImageService: Send + Sync {
    /// Render `text` into a new canvas.
    fn create_image(&self, text: &str) -> TextcardResult<RgbaImage>;
}

/// Default [`ImageService`]: fresh font and background from disk on every call.
///
/// `F` builds the random source used to pick a background; one source is created per call.
pub struct CardService<F = fn() -> ThreadRng> {
    config: ServiceConfig,
    rng: F,
}

impl CardService {
    /// Service backed by the thread-local `rand` generator.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            rng: rand::rng,
        }
    }
}

impl<F> CardService<F> {
    /// Service with an injected random source factory.
    pub fn with_rng(config: ServiceConfig, rng: F) -> Self {
        Self { config, rng }
    }

    /// Configuration this service renders with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl<F> std::fmt::Debug for CardService<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<F, R> ImageService for CardService<F>
where
    F: Fn() -> R + Send + Sync,
    R: IndexSource,
{
    fn create_image(&self, text: &str) -> TextcardResult<RgbaImage> {
        let font = load_font(&self.config.font_path).inspect_err(|e| {
            tracing::error!(error = %e, kind = e.kind(), "could not load font");
        })?;

        let mut rng = (self.rng)();
        let background = pick_background(&self.config.catalog, &mut rng).inspect_err(|e| {
            tracing::error!(error = %e, kind = e.kind(), "could not load background");
        })?;

        render(&font, &background, text, &self.config.params).inspect_err(|e| {
            tracing::error!(error = %e, kind = e.kind(), "could not draw string");
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/service.rs"]
mod tests;
