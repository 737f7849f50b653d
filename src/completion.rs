//! Autocomplete labels and parsing of an activated completion.

use crate::catalog::Card;
use crate::error::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// `Name | Set | ... $Price`: name and set are the first two `|` fields, the
/// price is whatever follows the last `$`.
static SELECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[^|]*)\|(?P<set>[^|]*)(?:\|.*)?\$(?P<price>[^$]*)$")
        .expect("selection pattern is valid")
});

/// Card identity recovered from a completion label.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub card_set: String,
    pub price: f64,
}

impl Selection {
    pub fn parse(text: &str) -> Result<Self> {
        let captures = SELECTION_PATTERN
            .captures(text)
            .ok_or_else(|| AppError::InvalidSelection(format!("unrecognised entry '{}'", text)))?;

        let name = captures["name"].trim().to_string();
        let card_set = captures["set"].trim().to_string();
        let price_text = captures["price"].trim();
        let price = price_text.parse::<f64>().map_err(|e| {
            AppError::InvalidSelection(format!("bad price '{}': {}", price_text, e))
        })?;

        if name.is_empty() {
            return Err(AppError::InvalidSelection(format!(
                "missing card name in '{}'",
                text
            )));
        }

        Ok(Self {
            name,
            card_set,
            price,
        })
    }
}

/// Formats a price the way the catalog has always displayed it: shortest
/// form, whole numbers keep one decimal.
pub fn format_price(price: f64) -> String {
    let text = price.to_string();
    if price.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Entry offered by the autocomplete list.
pub fn completion_label(card: &Card) -> String {
    format!(
        "{} | {} | ${}",
        card.name,
        card.card_set,
        format_price(card.price)
    )
}

/// Entry shown in the similar-cards list.
pub fn result_label(card: &Card) -> String {
    format!(
        "{} - {} - ${}",
        card.name,
        card.card_set,
        format_price(card.price)
    )
}

/// Case-insensitive prefix match over the known labels.
pub fn matching_completions<'a>(labels: &'a [String], query: &str, limit: usize) -> Vec<&'a str> {
    let query = query.trim_start().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    labels
        .iter()
        .filter(|label| label.to_lowercase().starts_with(&query))
        .map(String::as_str)
        .take(limit)
        .collect()
}
