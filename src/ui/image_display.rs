//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for image decoding, then `slint::invoke_from_event_loop`
//! to hand the pixels back to whichever window asked for them.

use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::ui::image_request::ImageRequestTracker;
use log::debug;
use slint::ComponentHandle;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Loads `path` and passes the result to `show` on the UI thread.
///
/// This function:
/// 1. Checks the cache first for instant display
/// 2. If cache miss, spawns a rayon task to decode the image
/// 3. Uses invoke_from_event_loop to return to the UI thread
/// 4. Calls `show` with the image, or reports the error in the main window,
///    unless a newer request for the same target was made in the meantime
pub fn load_and_display_image<F>(
    ui: slint::Weak<crate::AppWindow>,
    path: PathBuf,
    error_prefix: String,
    cache: Arc<Mutex<ImageCache>>,
    requests: &ImageRequestTracker,
    show: F,
) where
    F: FnOnce(slint::Image) + Send + 'static,
{
    let ticket = requests.begin();
    let requests = requests.clone();
    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));

    if let Some(cached_image) = cached {
        show(image_loader::create_slint_image(
            cached_image.data,
            cached_image.width,
            cached_image.height,
        ));
        return;
    }

    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);

        if let Ok((data, width, height)) = &result {
            if let Ok(mut cache) = cache.lock() {
                cache.put(path.clone(), CachedImage::new(data.clone(), *width, *height));
            }
        }

        let _ = slint::invoke_from_event_loop(move || {
            if !requests.is_current(ticket) {
                debug!("Dropping superseded image: {}", path.display());
                return;
            }
            match result {
                Ok((data, width, height)) => {
                    show(image_loader::create_slint_image(data, width, height));
                }
                Err(error) => {
                    if let Some(ui) = ui.upgrade() {
                        crate::ui::set_error_with_prefix(
                            &ui,
                            &error_prefix,
                            format!("{} ({})", error, path.display()),
                        );
                    }
                }
            }
        });
    });
}

/// Shows `path` as the main card preview.
pub fn display_card_image(
    ui: slint::Weak<crate::AppWindow>,
    path: PathBuf,
    cache: Arc<Mutex<ImageCache>>,
    requests: &ImageRequestTracker,
) {
    let target = ui.clone();
    load_and_display_image(
        ui,
        path,
        "Failed to load card image".to_string(),
        cache,
        requests,
        move |image| {
            if let Some(ui) = target.upgrade() {
                ui.global::<crate::BrowserState>().set_card_image(image);
            }
        },
    );
}
