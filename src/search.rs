// src/search.rs

use crate::domain::listing::{dedupe_by_id, Listing};
use crate::domain::query::SearchQuery;
use crate::errors::SearchError;
use crate::store::{ListingStore, SampleStore, StoreError};
use serde::Serialize;

/// Where a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    pub source: ResultSource,
    pub listings: Vec<Listing>,
}

/// Runs searches against a live store, falling back to sample data when it can't answer.
///
/// Both stores are passed in, so tests can swap either one out.
pub struct SearchService {
    store: Box<dyn ListingStore>,
    fallback: SampleStore,
}

impl SearchService {
    pub fn new(store: Box<dyn ListingStore>) -> Self {
        Self::with_fallback(store, SampleStore::new())
    }

    pub fn with_fallback(store: Box<dyn ListingStore>, fallback: SampleStore) -> Self {
        Self { store, fallback }
    }

    pub fn store_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// Listings matching `raw`. Only an empty query is an error.
    pub fn search(&self, raw: &str) -> Result<Vec<Listing>, SearchError> {
        self.search_with_source(raw).map(|r| r.listings)
    }

    pub fn search_with_source(&self, raw: &str) -> Result<SearchResults, SearchError> {
        // Rejected before any store access
        let query = SearchQuery::parse(raw)?;

        let (source, listings) = match self.query_live(&query) {
            Ok(listings) => {
                tracing::debug!(query = query.text(), count = listings.len(), "live results");
                (ResultSource::Live, listings)
            }
            Err(err) => {
                match &err {
                    StoreError::Unconfigured => {
                        tracing::info!(query = query.text(), "listing store unconfigured, serving sample listings")
                    }
                    StoreError::QueryFailed(_) => {
                        tracing::warn!(query = query.text(), error = %err, "listing store failed, serving sample listings")
                    }
                }
                (ResultSource::Fallback, self.query_fallback(&query))
            }
        };

        Ok(SearchResults {
            query: query.text().to_string(),
            source,
            listings: normalize(listings),
        })
    }

    fn query_live(&self, query: &SearchQuery) -> Result<Vec<Listing>, StoreError> {
        if !self.store.is_configured() {
            return Err(StoreError::Unconfigured);
        }
        self.store.find_matching(query.text())
    }

    fn query_fallback(&self, query: &SearchQuery) -> Vec<Listing> {
        // SampleStore filters in memory and cannot fail
        self.fallback.find_matching(query.needle()).unwrap_or_default()
    }
}

/// Unique ids, ordered by id, so repeated searches compare equal.
fn normalize(listings: Vec<Listing>) -> Vec<Listing> {
    let mut listings = dedupe_by_id(listings);
    listings.sort_by(|a, b| a.id.cmp(&b.id));
    listings
}
