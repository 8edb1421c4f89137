// src/domain/query.rs

use crate::errors::SearchError;

/// A validated free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    needle: String,
}

impl SearchQuery {
    /// Trim, reject empty, remember the lowercased form for matching.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    /// The trimmed query, original casing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The trimmed query, lowercased.
    pub fn needle(&self) -> &str {
        &self.needle
    }
}
