//! Application configuration constants and catalog file layout.

use std::path::{Path, PathBuf};

/// SQLite file holding the `Cards` table, relative to the catalog root.
pub const DATABASE_FILE: &str = "data.db";

/// Directory holding card images as `<set>/<name>.jpg`.
pub const IMAGES_DIR: &str = "Images";

/// Shown whenever a card image is missing.
pub const PLACEHOLDER_IMAGE: &str = "Placeholder.jpg";

pub const CARD_IMAGE_EXTENSION: &str = "jpg";

pub const WINDOW_ICON: &str = "pball.ico";

/// Lower and upper factors of the price band around the selected card.
pub const PRICE_BAND_LOWER: f64 = 0.90;
pub const PRICE_BAND_UPPER: f64 = 1.10;

/// Sets whose name contains this keyword never show up as similar cards.
pub const EXCLUDED_SET_KEYWORD: &str = "Promo";

/// Dropdown entry meaning "no filter".
pub const ALL_FILTER_LABEL: &str = "All";

pub const MAX_SUGGESTIONS: usize = 50;

pub const IMAGE_CACHE_CAPACITY: usize = 16;

/// Locations of the database and image assets under one catalog root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    root: PathBuf,
}

impl CatalogPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses the first positional argument as the catalog root, falling back
    /// to the working directory.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let root = args
            .into_iter()
            .map(Into::into)
            .find(|arg: &PathBuf| !arg.to_string_lossy().starts_with('-'))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn placeholder(&self) -> PathBuf {
        self.images_dir().join(PLACEHOLDER_IMAGE)
    }

    pub fn window_icon(&self) -> PathBuf {
        self.images_dir().join(WINDOW_ICON)
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_built_under_root() {
        let paths = CatalogPaths::new("/catalog");
        assert_eq!(paths.database(), PathBuf::from("/catalog/data.db"));
        assert_eq!(paths.images_dir(), PathBuf::from("/catalog/Images"));
        assert_eq!(
            paths.placeholder(),
            PathBuf::from("/catalog/Images/Placeholder.jpg")
        );
        assert_eq!(paths.window_icon(), PathBuf::from("/catalog/Images/pball.ico"));
    }

    #[test]
    fn from_args_skips_flags() {
        let paths = CatalogPaths::from_args(["--verbose", "/srv/cards"]);
        assert_eq!(paths.root(), Path::new("/srv/cards"));
    }

    #[test]
    fn from_args_defaults_to_working_directory() {
        let paths = CatalogPaths::from_args(Vec::<String>::new());
        assert_eq!(paths, CatalogPaths::default());
    }
}
