use image::{RgbImage, RgbaImage, buffer::ConvertBuffer, codecs::jpeg::JpegEncoder};

use crate::foundation::error::TextcardResult;

/// Encode a canvas as JPEG with the encoder's default quality. Alpha is discarded.
pub fn encode_jpeg(canvas: &RgbaImage) -> TextcardResult<Vec<u8>> {
    let rgb: RgbImage = canvas.convert();
    let mut out = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new(&mut out))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
