//! Read-only access to the `Cards` table.

use crate::config::{ALL_FILTER_LABEL, EXCLUDED_SET_KEYWORD, PRICE_BAND_LOWER, PRICE_BAND_UPPER};
use crate::error::Result;
use log::{debug, warn};
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row, params_from_iter};
use std::path::Path;

const SELECT_COLUMNS: &str = "SELECT Name, Card_Set, Price, Type FROM Cards";

/// One catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub name: String,
    pub card_set: String,
    pub price: f64,
    pub card_type: String,
}

/// Optional restrictions applied on top of the price band.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub card_set: Option<String>,
    pub card_type: Option<String>,
}

impl CardFilter {
    /// Builds a filter from dropdown labels, where `"All"` means unrestricted.
    pub fn from_labels(set_label: &str, type_label: &str) -> Self {
        fn restrict(label: &str) -> Option<String> {
            if label.is_empty() || label == ALL_FILTER_LABEL {
                None
            } else {
                Some(label.to_string())
            }
        }

        Self {
            card_set: restrict(set_label),
            card_type: restrict(type_label),
        }
    }
}

/// Handle to the card database.
pub struct CardCatalog {
    conn: Connection,
}

impl CardCatalog {
    /// Opens an existing database file read-only.
    pub fn open(path: &Path) -> Result<Self> {
        debug!("Opening card database: {}", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Every card in table order.
    pub fn all_cards(&self) -> Result<Vec<Card>> {
        let mut stmt = self.conn.prepare(SELECT_COLUMNS)?;
        let rows = stmt
            .query_map([], card_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows.into_iter().flatten().collect())
    }

    /// Cards priced within the band around `price`, excluding promo sets,
    /// ordered by set then price.
    pub fn similar_cards(&self, price: f64, filter: &CardFilter) -> Result<Vec<Card>> {
        let mut sql = format!(
            "{} WHERE Price BETWEEN ? AND ? AND Card_Set NOT LIKE ?",
            SELECT_COLUMNS
        );
        let mut values = vec![
            Value::Real(price * PRICE_BAND_LOWER),
            Value::Real(price * PRICE_BAND_UPPER),
            Value::Text(format!("%{}%", EXCLUDED_SET_KEYWORD)),
        ];

        if let Some(card_set) = &filter.card_set {
            sql.push_str(" AND Card_Set = ?");
            values.push(Value::Text(card_set.clone()));
        }
        if let Some(card_type) = &filter.card_type {
            sql.push_str(" AND Type = ?");
            values.push(Value::Text(card_type.clone()));
        }
        sql.push_str(" ORDER BY Card_Set, Price");

        let mut stmt = self.conn.prepare(&sql)?;
        let cards: Vec<Card> = stmt
            .query_map(params_from_iter(values.iter()), card_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();

        debug!(
            "Price band query around {} with {:?}: {} rows",
            price,
            filter,
            cards.len()
        );
        Ok(cards)
    }
}

/// Rows without a name, set or price cannot be shown or looked up; they are
/// skipped instead of failing the whole query.
fn card_from_row(row: &Row<'_>) -> rusqlite::Result<Option<Card>> {
    let name: Option<String> = row.get(0)?;
    let card_set: Option<String> = row.get(1)?;
    let price: Option<f64> = row.get(2)?;
    let card_type: Option<String> = row.get(3)?;

    match (name, card_set, price) {
        (Some(name), Some(card_set), Some(price)) => Ok(Some(Card {
            name,
            card_set,
            price,
            card_type: card_type.unwrap_or_default(),
        })),
        (name, card_set, price) => {
            warn!(
                "Skipping incomplete card row: name={:?} set={:?} price={:?}",
                name, card_set, price
            );
            Ok(None)
        }
    }
}
