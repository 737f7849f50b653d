use crate::config::{CARD_IMAGE_EXTENSION, CatalogPaths};
use log::debug;
use std::path::{Path, PathBuf};

/// `<images_dir>/<set>/<name>.jpg`
pub fn card_image_path(images_dir: &Path, card_set: &str, name: &str) -> PathBuf {
    images_dir
        .join(card_set)
        .join(format!("{}.{}", name, CARD_IMAGE_EXTENSION))
}

/// Path to the card's image, or to the placeholder when the file is absent.
pub fn resolve_card_image(paths: &CatalogPaths, card_set: &str, name: &str) -> PathBuf {
    let path = card_image_path(&paths.images_dir(), card_set, name);
    if path.is_file() {
        path
    } else {
        debug!("No image at {}, using placeholder", path.display());
        paths.placeholder()
    }
}
