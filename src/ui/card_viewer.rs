//! Enlarged card image window opened from the similar-cards list.

use crate::image_cache::ImageCache;
use crate::ui::image_display::load_and_display_image;
use crate::ui::image_request::ImageRequestTracker;
use log::info;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// Holds the single viewer window; reopening reuses it.
#[derive(Clone, Default)]
pub struct CardViewerSlot {
    viewer: Rc<RefCell<Option<crate::CardViewer>>>,
    requests: ImageRequestTracker,
}

impl CardViewerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the viewer for `path`, creating the window on first use.
    pub fn open(
        &self,
        ui: &crate::AppWindow,
        path: PathBuf,
        cache: Arc<Mutex<ImageCache>>,
    ) -> Result<(), slint::PlatformError> {
        info!("Opening card viewer: {}", path.display());

        let viewer_handle = {
            let mut slot = self.viewer.borrow_mut();
            let viewer = match slot.take() {
                Some(viewer) => viewer,
                None => crate::CardViewer::new()?,
            };
            viewer.set_window_icon(ui.global::<crate::BrowserState>().get_window_icon());
            // Blank until the new card decodes.
            viewer.set_card_image(slint::Image::default());
            viewer.show()?;
            let handle = viewer.as_weak();
            *slot = Some(viewer);
            handle
        };

        load_and_display_image(
            ui.as_weak(),
            path,
            "Failed to open card viewer".to_string(),
            cache,
            &self.requests,
            move |image| {
                if let Some(viewer) = viewer_handle.upgrade() {
                    viewer.set_card_image(image);
                }
            },
        );

        Ok(())
    }
}
