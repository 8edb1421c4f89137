// src/store/row.rs

use crate::domain::listing::{format_kroner, Listing};
use serde::Deserialize;
use serde_json::Value;

const UNKNOWN: &str = "Unknown";

// finn_id ─┐
// id ──────┴─> Listing.id      (finn_id wins when both are present)
// image_url ─┐
// image_urls ┴─> Listing.image_url   (first entry of image_urls as fallback)

/// One row of the listings table, as the store returns it.
///
/// Every column is optional here. [`ListingRow::into_listing`] decides what counts as usable.
#[derive(Debug, Default, Deserialize)]
pub struct ListingRow {
    #[serde(default)]
    pub finn_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,

    // Text or number, depending on how the table was loaded
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,

    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Vec<Option<String>>>,
}

impl ListingRow {
    /// `None` when the row has no usable identifier.
    pub fn into_listing(self) -> Option<Listing> {
        let id = identifier(self.finn_id).or_else(|| identifier(self.id))?;

        let image_url = non_empty(self.image_url).or_else(|| {
            self.image_urls
                .into_iter()
                .flatten()
                .flatten()
                .find(|u| !u.trim().is_empty())
        });

        Some(Listing {
            id,
            title: text(self.title),
            brand: text(self.brand),
            model: text(self.model),
            year: display_year(self.year),
            price: display_price(self.price),
            location: text(self.location),
            url: self.url.unwrap_or_default(),
            image_url,
        })
    }
}

/// Decode a page of raw rows, skipping (and logging) the ones that can't become listings.
pub fn decode_rows(rows: Vec<Value>) -> Vec<Listing> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let row: ListingRow = match serde_json::from_value(raw) {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable listing row");
                    return None;
                }
            };

            let listing = row.into_listing();
            if listing.is_none() {
                tracing::warn!(index, "skipping listing row without an id");
            }
            listing
        })
        .collect()
}

fn identifier(v: Option<Value>) -> Option<String> {
    match v? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

fn text(v: Option<String>) -> String {
    v.unwrap_or_else(|| UNKNOWN.to_string())
}

fn display_year(v: Option<Value>) -> String {
    match v {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Raw amounts (number or all-digit text) become "289,000 kr"; 0 is unknown.
/// Text that is already formatted passes through.
fn display_price(v: Option<Value>) -> String {
    match v {
        Some(Value::String(s)) => {
            let raw = s.trim();
            if raw.is_empty() {
                UNKNOWN.to_string()
            } else if raw.chars().all(|c| c.is_ascii_digit()) {
                raw.parse::<i64>().map(kroner_or_unknown).unwrap_or(s)
            } else {
                s
            }
        }
        Some(Value::Number(n)) => match n.as_i64() {
            Some(kr) => kroner_or_unknown(kr),
            // Fractional amounts are rounded down to whole kroner
            None => n
                .as_f64()
                .map(|f| kroner_or_unknown(f as i64))
                .unwrap_or_else(|| n.to_string()),
        },
        _ => UNKNOWN.to_string(),
    }
}

fn kroner_or_unknown(amount: i64) -> String {
    if amount == 0 {
        UNKNOWN.to_string()
    } else {
        format_kroner(amount)
    }
}
