// src/domain/listing.rs

use serde::Serialize;

/// A single car advertisement, as handed to whatever renders the results.
///
/// Store rows are decoded through [`ListingRow`](crate::store::ListingRow), never directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub location: String,
    pub url: String,
    pub image_url: Option<String>,
}

impl Listing {
    /// Case-insensitive substring test against brand, model and title.
    ///
    /// `needle` must already be lowercased (see [`SearchQuery::needle`]).
    /// This is a plain `contains`: "a3" matches "A3 Sportback", "a 3" does not.
    ///
    /// [`SearchQuery::needle`]: crate::domain::query::SearchQuery::needle
    pub fn matches(&self, needle: &str) -> bool {
        [&self.brand, &self.model, &self.title]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Keep the listings matching `needle`, in their original order.
pub fn filter_matching<'a, I>(listings: I, needle: &str) -> Vec<Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .filter(|l| l.matches(needle))
        .cloned()
        .collect()
}

/// Drop later duplicates of an id. First occurrence wins.
pub fn dedupe_by_id(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = std::collections::HashSet::new();
    listings
        .into_iter()
        .filter(|l| seen.insert(l.id.clone()))
        .collect()
}

/// 289000 -> "289,000 kr"
pub fn format_kroner(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} kr")
}
