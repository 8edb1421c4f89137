// src/domain/summary.rs

use crate::domain::listing::Listing;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate figures over one result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    pub total_listings: usize,
    pub brands: BTreeMap<String, usize>,
    /// [min, max] in whole kroner, [0, 0] when no price parses.
    pub price_range: [i64; 2],
    /// [min, max] model year, [0, 0] when no year parses.
    pub years_range: [i64; 2],
}

impl ListingSummary {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let mut brands = BTreeMap::new();
        for l in listings {
            *brands.entry(l.brand.clone()).or_insert(0) += 1;
        }

        let prices = listings.iter().filter_map(|l| price_amount(&l.price));
        let years = listings.iter().filter_map(|l| year_number(&l.year));

        Self {
            total_listings: listings.len(),
            brands,
            price_range: min_max(prices),
            years_range: min_max(years),
        }
    }
}

/// "289,000 kr" -> 289000. Only `digits[,ddd]*` with an optional "kr" counts;
/// "Unknown", "1.5 mill" or "-5 kr" are skipped.
fn price_amount(price: &str) -> Option<i64> {
    let lower = price.trim().to_ascii_lowercase();
    let number = lower.strip_suffix("kr").unwrap_or(lower.as_str()).trim_end();

    let groups: Vec<&str> = number.split(',').collect();
    let all_digits = |g: &str| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit());
    let well_formed = match groups.split_first() {
        Some((first, [])) => all_digits(*first),
        Some((first, rest)) => {
            all_digits(*first)
                && first.len() <= 3
                && rest.iter().all(|g| g.len() == 3 && all_digits(*g))
        }
        None => false,
    };
    if !well_formed {
        return None;
    }

    groups.concat().parse().ok()
}

fn year_number(year: &str) -> Option<i64> {
    let year = year.trim();
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

fn min_max(values: impl Iterator<Item = i64>) -> [i64; 2] {
    values
        .fold(None, |acc: Option<[i64; 2]>, v| match acc {
            None => Some([v, v]),
            Some([lo, hi]) => Some([lo.min(v), hi.max(v)]),
        })
        .unwrap_or([0, 0])
}
