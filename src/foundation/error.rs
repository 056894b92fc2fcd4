use std::path::PathBuf;

/// Convenience result type used across Textcard.
pub type TextcardResult<T> = Result<T, TextcardError>;

/// Top-level error taxonomy used by the asset loader, compositor and encoder.
///
/// Every variant is terminal for the request that produced it; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum TextcardError {
    /// A font or background file is missing or unreadable.
    #[error("asset read error: '{}': {source}", .path.display())]
    AssetRead {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Font bytes could not be parsed.
    #[error("asset parse error: {0}")]
    AssetParse(String),

    /// Background bytes could not be decoded as an image.
    #[error("asset decode error: '{}': {source}", .path.display())]
    AssetDecode {
        /// Path (or pseudo-path for in-memory data) of the image.
        path: PathBuf,
        /// Underlying decoder failure.
        #[source]
        source: image::ImageError,
    },

    /// The background catalog has no entries to choose from.
    #[error("asset read error: background catalog is empty")]
    EmptyCatalog,

    /// Text rasterization failed or the render setup is invalid.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding the finished canvas failed.
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextcardError {
    /// Build a [`TextcardError::AssetRead`] value.
    pub fn asset_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::AssetRead {
            path: path.into(),
            source,
        }
    }

    /// Build a [`TextcardError::AssetParse`] value.
    pub fn asset_parse(msg: impl Into<String>) -> Self {
        Self::AssetParse(msg.into())
    }

    /// Build a [`TextcardError::AssetDecode`] value.
    pub fn asset_decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::AssetDecode {
            path: path.into(),
            source,
        }
    }

    /// Build a [`TextcardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Short stable tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AssetRead { .. } | Self::EmptyCatalog => "asset_read",
            Self::AssetParse(_) => "asset_parse",
            Self::AssetDecode { .. } => "asset_decode",
            Self::Render(_) => "render",
            Self::Encode(_) => "encode",
            Self::Other(_) => "other",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
