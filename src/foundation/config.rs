use std::path::PathBuf;

use crate::{
    assets::catalog::BackgroundCatalog,
    foundation::error::{TextcardError, TextcardResult},
    foundation::params::RenderParams,
};

/// Default location of the font file, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "./fonts/ComicSansMS3.ttf";

/// Static configuration for one [`crate::CardService`], fixed at process start.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Path of the TrueType font used for every render.
    pub font_path: PathBuf,
    /// Backgrounds to choose from.
    pub catalog: BackgroundCatalog,
    /// Rasterization parameters.
    pub params: RenderParams,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            catalog: BackgroundCatalog::stock(),
            params: RenderParams::default(),
        }
    }
}

impl ServiceConfig {
    /// Startup check: the catalog must be selectable and the params usable.
    ///
    /// Files are not touched here; they are opened on every request.
    pub fn validate(&self) -> TextcardResult<()> {
        self.params.validate()?;
        if self.catalog.is_empty() {
            return Err(TextcardError::EmptyCatalog);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
