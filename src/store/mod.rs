mod row;
mod sample;
mod store_error;
mod supabase;

pub use row::{decode_rows, ListingRow};
pub use sample::SampleStore;
pub use store_error::{BoxError, StoreError};
pub use supabase::SupabaseStore;

use crate::domain::listing::Listing;

/// Upper bound on listings returned for one query.
pub const MAX_RESULTS: usize = 20;

/// A source of car listings that can be searched by free text.
pub trait ListingStore: Send + Sync {
    /// True when an endpoint and key are present. Never fails.
    fn is_configured(&self) -> bool;

    /// Listings whose brand, model or title contains `query`, case-insensitively.
    ///
    /// At most [`MAX_RESULTS`] come back, in no particular order. No retries.
    fn find_matching(&self, query: &str) -> Result<Vec<Listing>, StoreError>;
}
