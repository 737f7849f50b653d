use crate::catalog::CardCatalog;
use crate::completion::completion_label;
use crate::config::CatalogPaths;
use crate::error::Result;
use crate::state::AppState;
use crate::ui::image_display::{display_card_image, load_and_display_image};
use crate::ui::image_request::ImageRequestTracker;
use log::info;
use slint::ComponentHandle;

/// Opens the catalog under the root given on the command line and builds the
/// autocomplete entries.
pub fn load_app_state() -> Result<AppState> {
    let paths = CatalogPaths::from_args(std::env::args_os().skip(1));
    info!("Catalog root: {}", paths.root().display());

    let catalog = CardCatalog::open(&paths.database())?;
    let completions: Vec<String> = catalog.all_cards()?.iter().map(completion_label).collect();
    info!("Loaded {} cards", completions.len());

    Ok(AppState::new(paths, catalog, completions))
}

/// Shows the placeholder preview and the window icon, when present.
pub fn configure_startup_images(app: &crate::AppWindow, app_state: &AppState) {
    display_card_image(
        app.as_weak(),
        app_state.paths.placeholder(),
        app_state.image_cache.clone(),
        &app_state.preview_requests,
    );

    let icon_path = app_state.paths.window_icon();
    if icon_path.is_file() {
        let target = app.as_weak();
        load_and_display_image(
            app.as_weak(),
            icon_path,
            "Failed to load window icon".to_string(),
            app_state.image_cache.clone(),
            &ImageRequestTracker::new(),
            move |icon| {
                if let Some(app) = target.upgrade() {
                    app.global::<crate::BrowserState>().set_window_icon(icon);
                }
            },
        );
    }
}
