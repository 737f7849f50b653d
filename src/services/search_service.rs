//! Service for finding similarly priced cards.
//!
//! Coordinates the catalog, the browse state and image path resolution, and
//! turns query rows into list entries and dropdown options.

use crate::card_images::resolve_card_image;
use crate::catalog::{Card, CardCatalog, CardFilter};
use crate::completion::{Selection, result_label};
use crate::config::{ALL_FILTER_LABEL, CatalogPaths};
use crate::error::Result;
use crate::state::{AppState, BrowseState};
use log::{debug, info};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Everything the window needs after a completion is activated.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome {
    /// Image of the activated card, or the placeholder.
    pub card_image: PathBuf,
    /// Labels of the similar-cards list, in display order.
    pub entries: Vec<String>,
    pub set_options: Vec<String>,
    pub type_options: Vec<String>,
}

/// Service for price band lookups.
#[derive(Clone)]
pub struct SearchService {
    paths: CatalogPaths,
    catalog: Arc<Mutex<CardCatalog>>,
    browse: Arc<Mutex<BrowseState>>,
}

impl SearchService {
    pub fn new(state: &AppState) -> Self {
        Self {
            paths: state.paths.clone(),
            catalog: state.catalog.clone(),
            browse: state.browse.clone(),
        }
    }

    /// Handles an activated completion: shows the card's neighbours in the
    /// price band and rebuilds both dropdowns.
    pub fn select(&self, text: &str) -> Result<SelectOutcome> {
        let selection = Selection::parse(text)?;
        info!(
            "Selected {} ({}) at {}",
            selection.name, selection.card_set, selection.price
        );

        let card_image = resolve_card_image(&self.paths, &selection.card_set, &selection.name);
        let cards = match lock(&self.catalog).similar_cards(selection.price, &CardFilter::default())
        {
            Ok(cards) => cards,
            Err(e) => {
                lock(&self.browse).clear_results();
                return Err(e);
            }
        };

        let set_options = dropdown_options(cards.iter().map(|c| c.card_set.as_str()));
        let type_options = dropdown_options(cards.iter().map(|c| c.card_type.as_str()));
        let entries = entry_labels(&cards);

        lock(&self.browse).select(selection, cards);

        Ok(SelectOutcome {
            card_image,
            entries,
            set_options,
            type_options,
        })
    }

    /// Re-runs the price band query for the current selection with the given
    /// dropdown labels. Returns no entries when nothing is selected yet.
    pub fn apply_filter(&self, set_label: &str, type_label: &str) -> Result<Vec<String>> {
        let filter = CardFilter::from_labels(set_label, type_label);
        let price = match lock(&self.browse).selection() {
            Some(selection) => selection.price,
            None => {
                debug!("Filter changed before any card was selected");
                return Ok(Vec::new());
            }
        };

        let cards = match lock(&self.catalog).similar_cards(price, &filter) {
            Ok(cards) => cards,
            Err(e) => {
                lock(&self.browse).clear_results();
                return Err(e);
            }
        };
        let entries = entry_labels(&cards);
        lock(&self.browse).apply_filter(filter, cards);

        Ok(entries)
    }

    /// Changes the set dropdown, keeping the current type restriction.
    pub fn filter_by_set(&self, set_label: &str) -> Result<Vec<String>> {
        let type_label = current_label(&lock(&self.browse).filter().card_type);
        self.apply_filter(set_label, &type_label)
    }

    /// Changes the type dropdown, keeping the current set restriction.
    pub fn filter_by_type(&self, type_label: &str) -> Result<Vec<String>> {
        let set_label = current_label(&lock(&self.browse).filter().card_set);
        self.apply_filter(&set_label, type_label)
    }

    /// Image of the result row at `index`, with placeholder fallback.
    pub fn result_image(&self, index: usize) -> Option<PathBuf> {
        let browse = lock(&self.browse);
        let card = browse.result(index)?;
        Some(resolve_card_image(&self.paths, &card.card_set, &card.name))
    }
}

fn entry_labels(cards: &[Card]) -> Vec<String> {
    cards.iter().map(result_label).collect()
}

/// Keeps the first occurrence of every value, in order.
pub fn collect_distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// `"All"` followed by the distinct non-empty values.
fn dropdown_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut options = vec![ALL_FILTER_LABEL.to_string()];
    options.extend(
        collect_distinct(values)
            .into_iter()
            .filter(|value| !value.is_empty() && value != ALL_FILTER_LABEL),
    );
    options
}

fn current_label(restriction: &Option<String>) -> String {
    restriction
        .clone()
        .unwrap_or_else(|| ALL_FILTER_LABEL.to_string())
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::completion::completion_label;
    use std::fs;

    fn service_with_root(root: &std::path::Path) -> SearchService {
        let catalog = sample_catalog();
        let completions = catalog
            .all_cards()
            .unwrap()
            .iter()
            .map(completion_label)
            .collect();
        let state = AppState::new(CatalogPaths::new(root), catalog, completions);
        SearchService::new(&state)
    }

    fn labels(entries: &[String]) -> Vec<&str> {
        entries.iter().map(String::as_str).collect()
    }

    #[test]
    fn collect_distinct_keeps_first_occurrence_order() {
        assert_eq!(
            collect_distinct(["Fossil", "Base Set", "Fossil", "Jungle", "Base Set"]),
            vec!["Fossil", "Base Set", "Jungle"]
        );
        assert!(collect_distinct(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn select_lists_price_band_and_builds_dropdowns() {
        let root = tempfile::tempdir().unwrap();
        let service = service_with_root(root.path());

        let outcome = service.select("Pikachu | Base Set | $10.0").unwrap();

        assert_eq!(
            labels(&outcome.entries),
            vec![
                "Onix - Base Set - $9.5",
                "Pikachu - Base Set - $10.0",
                "Ditto - Fossil - $10.2",
                "Raichu - Fossil - $10.5",
                "Machop - Jungle - $9.75",
            ]
        );
        assert_eq!(outcome.set_options, vec!["All", "Base Set", "Fossil", "Jungle"]);
        assert_eq!(outcome.type_options, vec!["All", "Fighting", "Lightning"]);
    }

    #[test]
    fn select_resolves_existing_card_image() {
        let root = tempfile::tempdir().unwrap();
        let set_dir = root.path().join("Images").join("Base Set");
        fs::create_dir_all(&set_dir).unwrap();
        fs::write(set_dir.join("Pikachu.jpg"), b"jpeg").unwrap();
        let service = service_with_root(root.path());

        let outcome = service.select("Pikachu | Base Set | $10.0").unwrap();

        assert_eq!(outcome.card_image, set_dir.join("Pikachu.jpg"));
        assert_eq!(outcome.entries[3], "Raichu - Fossil - $10.5");
        assert_eq!(
            service.result_image(3),
            Some(root.path().join("Images").join("Placeholder.jpg"))
        );
    }

    #[test]
    fn select_rejects_malformed_text_without_touching_state() {
        let root = tempfile::tempdir().unwrap();
        let service = service_with_root(root.path());
        service.select("Pikachu | Base Set | $10.0").unwrap();

        assert!(service.select("Pikachu").is_err());
        assert!(service.result_image(0).is_some());
    }

    #[test]
    fn filter_by_set_then_back_to_all() {
        let root = tempfile::tempdir().unwrap();
        let service = service_with_root(root.path());
        service.select("Pikachu | Base Set | $10.0").unwrap();

        let fossil = service.apply_filter("Fossil", "All").unwrap();
        assert_eq!(
            labels(&fossil),
            vec!["Ditto - Fossil - $10.2", "Raichu - Fossil - $10.5"]
        );

        let all = service.apply_filter("All", "All").unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn filter_by_type() {
        let root = tempfile::tempdir().unwrap();
        let service = service_with_root(root.path());
        service.select("Onix | Base Set | $9.5").unwrap();

        let lightning = service.apply_filter("All", "Lightning").unwrap();
        assert_eq!(labels(&lightning), vec!["Pikachu - Base Set - $10.0"]);
    }

    #[test]
    fn dropdowns_combine_set_and_type() {
        let root = tempfile::tempdir().unwrap();
        let service = service_with_root(root.path());
        service.select("Pikachu | Base Set | $10.0").unwrap();

        let base_set = service.filter_by_set("Base Set").unwrap();
        assert_eq!(base_set.len(), 2);

        let fighting = service.filter_by_type("Fighting").unwrap();
        assert_eq!(labels(&fighting), vec!["Onix - Base Set - $9.5"]);

        let any_set = service.filter_by_set("All").unwrap();
        assert_eq!(
            labels(&any_set),
            vec!["Onix - Base Set - $9.5", "Machop - Jungle - $9.75"]
        );
    }

    #[test]
    fn filter_without_selection_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let service = service_with_root(root.path());
        assert!(service.apply_filter("Fossil", "All").unwrap().is_empty());
    }

    #[test]
    fn result_image_follows_filtered_rows() {
        let root = tempfile::tempdir().unwrap();
        let service = service_with_root(root.path());
        service.select("Pikachu | Base Set | $10.0").unwrap();
        service.apply_filter("Jungle", "All").unwrap();

        assert_eq!(
            service.result_image(0),
            Some(root.path().join("Images").join("Placeholder.jpg"))
        );
        assert_eq!(service.result_image(1), None);
    }
}
