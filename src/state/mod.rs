//! State management for the card browser.

use crate::catalog::CardCatalog;
use crate::config::{CatalogPaths, IMAGE_CACHE_CAPACITY};
use crate::image_cache::ImageCache;
use crate::ui::image_request::ImageRequestTracker;
use std::sync::{Arc, Mutex};

pub mod browse;

pub use browse::BrowseState;

/// Application-wide state container.
#[derive(Clone)]
pub struct AppState {
    pub paths: CatalogPaths,
    pub catalog: Arc<Mutex<CardCatalog>>,
    pub browse: Arc<Mutex<BrowseState>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
    /// Latest request for the main card preview.
    pub preview_requests: ImageRequestTracker,
    /// Autocomplete entries, one per catalog row, built once at startup.
    pub completions: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(paths: CatalogPaths, catalog: CardCatalog, completions: Vec<String>) -> Self {
        Self {
            paths,
            catalog: Arc::new(Mutex::new(catalog)),
            browse: Arc::new(Mutex::new(BrowseState::new())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
            preview_requests: ImageRequestTracker::new(),
            completions: Arc::new(completions),
        }
    }
}
