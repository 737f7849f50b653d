//! Helper functions to set groups of BrowserState properties together.

use log::error;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

/// Replaces the autocomplete list.
pub fn set_suggestions(ui: &crate::AppWindow, suggestions: &[&str]) {
    let model: Vec<SharedString> = suggestions.iter().map(|s| (*s).into()).collect();
    ui.global::<crate::BrowserState>()
        .set_suggestions(ModelRc::new(VecModel::from(model)));
}

pub fn clear_suggestions(ui: &crate::AppWindow) {
    set_suggestions(ui, &[]);
}

/// Sets the similar-cards list and the status line counting it.
///
/// Groups: results, status-message, error-message
pub fn set_results(ui: &crate::AppWindow, entries: &[String]) {
    let rows: Vec<SharedString> = entries.iter().map(|entry| entry.as_str().into()).collect();

    let browser_state = ui.global::<crate::BrowserState>();
    browser_state.set_results(ModelRc::new(VecModel::from(rows)));
    browser_state.set_status_message(status_for(entries.len()).into());
    browser_state.set_error_message("".into());
}

pub fn clear_results(ui: &crate::AppWindow) {
    let browser_state = ui.global::<crate::BrowserState>();
    browser_state.set_results(ModelRc::new(VecModel::from(Vec::<SharedString>::new())));
    browser_state.set_status_message("".into());
}

/// Repopulates both dropdowns and moves them back to "All".
///
/// Groups: set-options, type-options, set-filter-index, type-filter-index
pub fn set_filter_options(ui: &crate::AppWindow, set_options: &[String], type_options: &[String]) {
    let to_model = |options: &[String]| {
        let items: Vec<SharedString> = options.iter().map(|o| o.as_str().into()).collect();
        ModelRc::new(VecModel::from(items))
    };

    let browser_state = ui.global::<crate::BrowserState>();
    browser_state.set_set_options(to_model(set_options));
    browser_state.set_type_options(to_model(type_options));
    browser_state.set_set_filter_index(0);
    browser_state.set_type_filter_index(0);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the BrowserState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::BrowserState>()
        .set_error_message(error_message.into());
}

fn status_for(count: usize) -> String {
    match count {
        0 => "No similar cards".to_string(),
        1 => "1 similar card".to_string(),
        n => format!("{} similar cards", n),
    }
}

#[cfg(test)]
mod tests {
    use super::status_for;

    #[test]
    fn status_counts_results() {
        assert_eq!(status_for(0), "No similar cards");
        assert_eq!(status_for(1), "1 similar card");
        assert_eq!(status_for(7), "7 similar cards");
    }
}
