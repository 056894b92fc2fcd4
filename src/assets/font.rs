use std::path::Path;

use rusttype::Font;

use crate::foundation::error::{TextcardError, TextcardResult};

/// Read and parse the font at `path`.
///
/// The font is not cached; callers reload it for every render.
#[tracing::instrument(level = "debug")]
pub fn load_font(path: &Path) -> TextcardResult<Font<'static>> {
    let bytes = std::fs::read(path).map_err(|e| TextcardError::asset_read(path, e))?;
    parse_font(bytes).map_err(|e| match e {
        TextcardError::AssetParse(msg) => {
            TextcardError::asset_parse(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Parse in-memory TrueType/OpenType bytes.
pub fn parse_font(bytes: Vec<u8>) -> TextcardResult<Font<'static>> {
    let len = bytes.len();
    let font = Font::try_from_vec(bytes).ok_or_else(|| {
        TextcardError::asset_parse(format!("{len} bytes are not a valid font"))
    })?;
    if font.glyph_count() == 0 {
        return Err(TextcardError::asset_parse("font has no glyphs"));
    }
    Ok(font)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
