//! Textcard renders a line of text over a randomly chosen background photo.
//!
//! A render call goes through three stages:
//!
//! 1. **Load**: read the font and pick one background from a fixed [`BackgroundCatalog`]
//! 2. **Compose**: copy the background, draw the guideline mark, draw the text ([`render`])
//! 3. **Encode**: turn the canvas into JPEG bytes ([`encode_jpeg`])
//!
//! [`CardService`] bundles the first two stages behind the [`ImageService`] trait, and
//! [`server`] exposes the whole thing as `POST /create`.
//!
//! Nothing is cached and nothing is shared mutably between calls: every call reads its own
//! assets and owns its own canvas.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod render;
pub mod server;
mod service;

pub use assets::catalog::{
    BackgroundCatalog, IndexSource, STOCK_BACKGROUNDS, STOCK_DIR, pick_background,
};
pub use assets::decode::{decode_background, load_background};
pub use assets::font::{load_font, parse_font};
pub use foundation::config::{DEFAULT_FONT_PATH, ServiceConfig};
pub use foundation::error::{TextcardError, TextcardResult};
pub use foundation::params::{Hinting, MAX_PIXELS_PER_EM, RenderParams};
pub use render::compositor::{
    GUIDE_LEN, GUIDE_ORIGIN, GUIDE_RGBA, TEXT_RGBA, draw_guides, render,
};
pub use render::encode::encode_jpeg;
pub use service::{CardService, ImageService};

pub use image::{DynamicImage, RgbaImage};
pub use rusttype::Font;
