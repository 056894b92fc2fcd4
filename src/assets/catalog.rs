use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::{
    assets::decode::load_background,
    foundation::error::{TextcardError, TextcardResult},
};

/// Default directory holding the stock backgrounds.
pub const STOCK_DIR: &str = "./images/stock";

/// File names of the stock backgrounds shipped with the service.
pub const STOCK_BACKGROUNDS: &[&str] = &[
    "aaron-burden-c333d6YEhi0-unsplash.jpg",
    "adam-bixby-Ix78f0AuCBI-unsplash.jpg",
    "bekir-donmez-eofm5R5f9Kw-unsplash.jpg",
    "ben-white-7BiMECHFgFY-unsplash.jpg",
    "ben-white-TlBF3ZUVTvE-unsplash.jpg",
    "ben-white-vtCBruWoNqo-unsplash.jpg",
    "clemens-posch-we1tBosANpU-unsplash.jpg",
    "david-kovalenko-YVBXuL6Al2w-unsplash.jpg",
    "dex-ezekiel-GBJ7uFCqsh4-unsplash.jpg",
    "ellen-auer-BaM_1KlFZkc-unsplash.jpg",
    "iulia-mihailov-Jn3_uxVmyuA-unsplash.jpg",
    "james-pond-HUiSySuofY0-unsplash.jpg",
    "jasper-van-der-meij-sRQ0MJsWXvE-unsplash.jpg",
    "joshua-earle-Dn3ATeXQEQ4-unsplash.jpg",
    "joshua-sortino-f3uWi9G-lus-unsplash.jpg",
    "joshua-sortino-GPtnV_XdQQU-unsplash.jpg",
    "joshua-sortino-IlvY3z4KVCI-unsplash.jpg",
    "joshua-sortino-LqKhnDzSF-8-unsplash.jpg",
    "joshua-sortino-lRA_WTczjgw-unsplash.jpg",
    "joshua-sortino-m5P0c6ABWDs-unsplash.jpg",
    "joshua-sortino-m-XLNFYdiVw-unsplash.jpg",
    "joshua-sortino-xZqr8WtYEJ0-unsplash.jpg",
    "jr-korpa-XEJDsC5Tzec-unsplash.jpg",
    "kash-goudarzi-uGFGAwTN_3o-unsplash.jpg",
    "kevin-kristhian-hX0AqODUU20-unsplash.jpg",
    "kid-circus-7vSlK_9gHWA-unsplash.jpg",
    "kristopher-roller-o2LlAeqJzVo-unsplash.jpg",
    "kyle-glenn-kvIAk3J_A1c-unsplash.jpg",
    "li-yang-_vPCiuXL2HE-unsplash.jpg",
    "mark-ivan-_y35BqcsauI-unsplash.jpg",
    "megan-johnston-t1NiXOf5fTI-unsplash.jpg",
    "natalie-grainger-Mw1efRU1qcU-unsplash.jpg",
    "paul-green-fhOGkxwQz0s-unsplash.jpg",
    "paula-brustur-ngzjG6ZhoDw-unsplash.jpg",
    "rik-buiting-Zb-nqiQsLe4-unsplash.jpg",
    "samuel-zeller-rk_Zz3b7G2Y-unsplash.jpg",
    "taylor-leopold-Rr9zn33OMbk-unsplash.jpg",
    "tommy-lisbin-gDzhss2CznA-unsplash.jpg",
    "tommy-lisbin-opt65nQcMZc-unsplash.jpg",
    "tommy-lisbin-wnq68O-6UNs-unsplash.jpg",
    "weroad-3QgXtnXakBw-unsplash.jpg",
    "weroad-WVtPZxbKZYs-unsplash.jpg",
    "wolf-schram-3RJG1Ecx7os-unsplash.jpg",
];

/// Source of uniform indices used to pick a background.
///
/// Implemented for every [`rand::Rng`]; tests can supply a fixed source.
pub trait IndexSource {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> IndexSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Ordered, fixed list of background file names and the directory they live in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundCatalog {
    dir: PathBuf,
    names: Vec<String>,
}

impl BackgroundCatalog {
    /// Build a catalog from a directory and file names relative to it.
    pub fn new<I, S>(dir: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dir: dir.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The stock catalog rooted at [`STOCK_DIR`].
    pub fn stock() -> Self {
        Self::new(STOCK_DIR, STOCK_BACKGROUNDS.iter().copied())
    }

    /// Same names, different directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Directory the names are resolved against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Entries in catalog order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pick one entry uniformly. Fails without consulting `rng` when empty.
    pub fn choose<R: IndexSource + ?Sized>(&self, rng: &mut R) -> TextcardResult<&str> {
        if self.names.is_empty() {
            return Err(TextcardError::EmptyCatalog);
        }
        let idx = rng.next_index(self.names.len());
        self.names
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| {
                TextcardError::Other(anyhow::anyhow!(
                    "index source returned {idx} for a catalog of {}",
                    self.names.len()
                ))
            })
    }

    /// Full path of a catalog entry.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

/// Choose a background from `catalog` and decode it.
#[tracing::instrument(level = "debug", skip_all, fields(entries = catalog.len()))]
pub fn pick_background<R: IndexSource + ?Sized>(
    catalog: &BackgroundCatalog,
    rng: &mut R,
) -> TextcardResult<DynamicImage> {
    let name = catalog.choose(rng)?;
    let path = catalog.path_of(name);
    tracing::debug!(background = %path.display(), "picked background");
    load_background(&path)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
