//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (query_edited, completion_activated, the two
//! filter dropdowns and result_clicked).

use crate::completion::matching_completions;
use crate::config::MAX_SUGGESTIONS;
use crate::error::AppError;
use crate::services::SearchService;
use crate::state::AppState;
use crate::ui::card_viewer::CardViewerSlot;
use crate::ui::image_display::display_card_image;
use log::{info, warn};
use slint::ComponentHandle;

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and the shared application state, then registers
/// callbacks for autocomplete, selection, filtering and the card viewer.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    let service = SearchService::new(state);

    // Autocomplete: refresh suggestions on every keystroke
    ui.global::<crate::Logic>().on_query_edited({
        let ui_handle = ui.as_weak();
        let completions = state.completions.clone();
        move |text| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let matches = matching_completions(&completions, &text, MAX_SUGGESTIONS);
            crate::ui::set_suggestions(&ui, &matches);
        }
    });

    // A completion was clicked or the input was submitted
    ui.global::<crate::Logic>().on_completion_activated({
        let ui_handle = ui.as_weak();
        let service = service.clone();
        let cache = state.image_cache.clone();
        let preview_requests = state.preview_requests.clone();
        move |text| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            match service.select(&text) {
                Ok(outcome) => {
                    crate::ui::clear_suggestions(&ui);
                    crate::ui::set_filter_options(
                        &ui,
                        &outcome.set_options,
                        &outcome.type_options,
                    );
                    crate::ui::set_results(&ui, &outcome.entries);
                    display_card_image(
                        ui_handle.clone(),
                        outcome.card_image,
                        cache.clone(),
                        &preview_requests,
                    );
                }
                Err(AppError::InvalidSelection(reason)) => {
                    warn!("Ignoring activated text: {}", reason);
                }
                Err(e) => {
                    crate::ui::clear_results(&ui);
                    crate::ui::set_error_with_prefix(
                        &ui,
                        "Failed to find similar cards",
                        e.to_string(),
                    );
                }
            }
        }
    });

    ui.global::<crate::Logic>().on_set_filter_selected({
        let ui_handle = ui.as_weak();
        let service = service.clone();
        move |value| {
            if let Some(ui) = ui_handle.upgrade() {
                show_filtered(&ui, service.filter_by_set(&value));
            }
        }
    });

    ui.global::<crate::Logic>().on_type_filter_selected({
        let ui_handle = ui.as_weak();
        let service = service.clone();
        move |value| {
            if let Some(ui) = ui_handle.upgrade() {
                show_filtered(&ui, service.filter_by_type(&value));
            }
        }
    });

    // Result row clicked: open the enlarged viewer
    ui.global::<crate::Logic>().on_result_clicked({
        let ui_handle = ui.as_weak();
        let service = service.clone();
        let cache = state.image_cache.clone();
        let viewer = CardViewerSlot::new();
        move |index| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let Some(path) = usize::try_from(index)
                .ok()
                .and_then(|index| service.result_image(index))
            else {
                warn!("No result at index {}", index);
                return;
            };

            info!("Result clicked: {}", path.display());
            if let Err(e) = viewer.open(&ui, path, cache.clone()) {
                crate::ui::set_error_with_prefix(
                    &ui,
                    "Failed to open card viewer",
                    e.to_string(),
                );
            }
        }
    });
}

fn show_filtered(ui: &crate::AppWindow, result: crate::error::Result<Vec<String>>) {
    match result {
        Ok(entries) => crate::ui::set_results(ui, &entries),
        Err(e) => {
            crate::ui::clear_results(ui);
            crate::ui::set_error_with_prefix(ui, "Failed to filter cards", e.to_string());
        }
    }
}
