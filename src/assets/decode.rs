use std::path::Path;

use image::DynamicImage;

use crate::foundation::error::{TextcardError, TextcardResult};

/// Read and decode a background image file. The format is sniffed from the bytes.
pub fn load_background(path: &Path) -> TextcardResult<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| TextcardError::asset_read(path, e))?;
    image::load_from_memory(&bytes).map_err(|e| TextcardError::asset_decode(path, e))
}

/// Decode encoded image bytes held in memory.
pub fn decode_background(bytes: &[u8]) -> TextcardResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| TextcardError::asset_decode("<memory>", e))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
